//! Doctor actions view state: appointment, history, prescription and completion.
//!
//! DESIGN
//! ======
//! The page keeps one `RwSignal<ActionsState>`; async loaders write into it
//! independently, so a later failure may overwrite an earlier error.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use crate::net::types::{Appointment, Medicine};

pub const NO_HISTORY: &str = "No history available.";

/// Visual tone of the completion button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonTone {
    Success,
    Error,
}

impl ButtonTone {
    pub fn class(self) -> &'static str {
        match self {
            ButtonTone::Success => "btn btn--success",
            ButtonTone::Error => "btn btn--error",
        }
    }
}

/// Completion flag plus the in-flight guard for its toggle request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CompletionState {
    pub completed: bool,
    pub pending: bool,
}

impl CompletionState {
    pub fn label(self) -> &'static str {
        if self.completed { "Completed" } else { "Mark as Completed" }
    }

    pub fn tone(self) -> ButtonTone {
        if self.completed { ButtonTone::Success } else { ButtonTone::Error }
    }

    /// Start a toggle for one click. Returns the flag to send, or `None`
    /// when a previous toggle is still in flight.
    pub fn begin_toggle(&mut self) -> Option<bool> {
        if self.pending {
            return None;
        }
        self.pending = true;
        Some(!self.completed)
    }

    /// Settle a toggle started by [`Self::begin_toggle`].
    pub fn finish_toggle(&mut self, target: bool, succeeded: bool) {
        self.pending = false;
        if succeeded {
            self.completed = target;
        }
    }
}

/// Everything the doctor actions page renders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActionsState {
    pub appointment: Option<Appointment>,
    pub history: Option<String>,
    pub medicines: Vec<Medicine>,
    pub medicine_query: String,
    pub selected: Option<Medicine>,
    pub completion: CompletionState,
    pub submitting: bool,
    pub error: Option<String>,
    pub notice: Option<String>,
}

impl ActionsState {
    /// Store a fetched appointment and adopt its completion flag.
    pub fn set_appointment(&mut self, appointment: Appointment) {
        if !self.completion.pending {
            self.completion.completed = appointment.is_completed;
        }
        self.appointment = Some(appointment);
    }

    pub fn history_text(&self) -> &str {
        self.history
            .as_deref()
            .filter(|text| !text.trim().is_empty())
            .unwrap_or(NO_HISTORY)
    }

    /// Medicines whose name contains the current query.
    pub fn visible_medicines(&self) -> Vec<Medicine> {
        filter_medicines(&self.medicines, &self.medicine_query)
    }

    /// Select the medicine with `id` from the loaded list.
    pub fn select_medicine(&mut self, id: &str) {
        self.selected = self.medicines.iter().find(|m| m.id == id).cloned();
    }
}

/// Case-insensitive substring match on medicine names; a blank query keeps all.
pub fn filter_medicines(medicines: &[Medicine], query: &str) -> Vec<Medicine> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return medicines.to_vec();
    }
    medicines
        .iter()
        .filter(|m| m.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// One result delivered by a doctor-actions loader.
#[derive(Clone, Debug, PartialEq)]
pub enum ActionsUpdate {
    Appointment(Appointment),
    History(Option<String>),
    Medicines(Vec<Medicine>),
    Error(String),
}

impl ActionsState {
    /// Fold a loader result into the view state. Errors replace any earlier error.
    pub fn apply(&mut self, update: ActionsUpdate) {
        match update {
            ActionsUpdate::Appointment(appointment) => self.set_appointment(appointment),
            ActionsUpdate::History(history) => self.history = history,
            ActionsUpdate::Medicines(medicines) => self.medicines = medicines,
            ActionsUpdate::Error(message) => self.error = Some(message),
        }
    }
}
