use super::*;

#[test]
fn join_url_inserts_single_slash() {
    assert_eq!(join_url("http://localhost:5000", "/api/users"), "http://localhost:5000/api/users");
}

#[test]
fn join_url_strips_trailing_base_slash() {
    assert_eq!(join_url("http://h:1/", "/api/pharmacies"), "http://h:1/api/pharmacies");
    assert_eq!(join_url("http://h:1//", "api/pharmacies"), "http://h:1/api/pharmacies");
}

#[test]
fn api_base_is_never_empty() {
    assert!(!api_base().is_empty());
}
