use super::*;

#[test]
fn floors_endpoint_uses_api_base() {
    assert_eq!(floors_endpoint(&ClientConfig::default()), "/api/floors");
}

#[test]
fn tables_endpoint_filters_by_floor_id() {
    assert_eq!(tables_endpoint(&ClientConfig::default(), 1), "/api/tables?floor=1");
}

#[test]
fn tables_endpoint_respects_custom_base() {
    let cfg = ClientConfig { api_base: "https://pos.example.com".to_owned(), ..ClientConfig::default() };
    assert_eq!(tables_endpoint(&cfg, 42), "https://pos.example.com/tables?floor=42");
}

#[test]
fn api_error_messages_carry_detail() {
    assert_eq!(ApiError::Status(503).to_string(), "unexpected status: 503");
    assert_eq!(ApiError::Request("offline".to_owned()).to_string(), "request failed: offline");
    assert_eq!(ApiError::Decode("missing field `results`".to_owned()).to_string(), "malformed response: missing field `results`");
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}
