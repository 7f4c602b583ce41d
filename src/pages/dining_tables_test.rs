use super::*;
use crate::state::dining::{FLOORS_ERROR, TABLES_ERROR};

#[test]
fn loading_shows_loading_message() {
    assert_eq!(content_message(&PageContent::Loading).as_deref(), Some("Loading..."));
}

#[test]
fn errors_render_their_message_verbatim() {
    assert_eq!(
        content_message(&PageContent::Error(FLOORS_ERROR.to_owned())).as_deref(),
        Some("Error fetching floors.")
    );
    assert_eq!(
        content_message(&PageContent::Error(TABLES_ERROR.to_owned())).as_deref(),
        Some("Error fetching tables.")
    );
}

#[test]
fn empty_state_message() {
    assert_eq!(
        content_message(&PageContent::Empty).as_deref(),
        Some("No tables available for the selected floor.")
    );
}

#[test]
fn grid_has_no_message() {
    assert!(content_message(&PageContent::Grid).is_none());
}

#[test]
fn empty_results_render_empty_state_not_error() {
    let mut s = DiningState::default();
    let floors = serde_json::from_str(r#"[{"id":1,"name":"Main"},{"id":2,"name":"Patio"}]"#).unwrap();
    let request = s.floors_succeeded(floors).unwrap();
    assert_eq!(request.floor_id, 1);
    assert!(s.tables_succeeded(request, Vec::new()));
    assert_eq!(content_message(&s.content()).as_deref(), Some(EMPTY_MESSAGE));
}
