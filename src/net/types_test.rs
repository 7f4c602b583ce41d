use super::*;

// =============================================================
// Floor
// =============================================================

#[test]
fn floor_list_decodes_in_order() {
    let floors: Vec<Floor> =
        serde_json::from_str(r#"[{"id":1,"name":"Main"},{"id":2,"name":"Patio"}]"#).unwrap();
    assert_eq!(floors.len(), 2);
    assert_eq!(floors[0].id, 1);
    assert_eq!(floors[0].name, FloorName::from("Main"));
    assert_eq!(floors[1].name.0, "Patio");
}

#[test]
fn floor_name_serializes_as_plain_string() {
    let json = serde_json::to_value(FloorName::from("Rooftop")).unwrap();
    assert_eq!(json, serde_json::json!("Rooftop"));
}

#[test]
fn floor_name_displays_raw_label() {
    assert_eq!(FloorName::from("Main").to_string(), "Main");
}

#[test]
fn floor_missing_id_is_rejected() {
    let result = serde_json::from_str::<Floor>(r#"{"name":"Main"}"#);
    assert!(result.is_err());
}

// =============================================================
// TablesResponse
// =============================================================

#[test]
fn tables_response_decodes_all_fields() {
    let body = r#"{"results":[{"id":5,"table_name":"T5","start_time":"18:00","end_time":"19:00","seats_count":2,"capacity":4,"is_ready":true}]}"#;
    let resp: TablesResponse = serde_json::from_str(body).unwrap();
    assert_eq!(
        resp.results,
        vec![Table {
            id: 5,
            table_name: "T5".to_owned(),
            start_time: "18:00".to_owned(),
            end_time: "19:00".to_owned(),
            seats_count: 2,
            capacity: 4,
            is_ready: true,
        }]
    );
}

#[test]
fn tables_response_ignores_extra_backend_fields() {
    let body = r#"{"count":1,"next":null,"results":[{"id":1,"table_name":"A1","start_time":"","end_time":"","seats_count":0,"capacity":2,"is_ready":false,"floor":3}]}"#;
    let resp: TablesResponse = serde_json::from_str(body).unwrap();
    assert_eq!(resp.results.len(), 1);
    assert!(!resp.results[0].is_ready);
}

#[test]
fn tables_response_without_results_is_rejected() {
    assert!(serde_json::from_str::<TablesResponse>("[]").is_err());
}
