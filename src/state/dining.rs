//! Dining floor page state and its fetch-lifecycle transitions.
//!
//! DESIGN
//! ======
//! The page never mutates fields ad hoc. Each network event (requested,
//! succeeded, failed) and each user action maps to one method here, so the
//! idle -> loading -> {ready, failed} machine of the table fetch is testable
//! without a browser.
//!
//! ORDERING
//! ========
//! Every table fetch is tagged with a `TableRequest` carrying the floor id and
//! a monotonically increasing sequence number. Only the most recently issued
//! tag is accepted on completion; anything older is stale and dropped, so the
//! last selected floor always wins regardless of response order.

#[cfg(test)]
#[path = "dining_test.rs"]
mod dining_test;

use crate::net::types::{Floor, FloorName, Table};

pub const FLOORS_ERROR: &str = "Error fetching floors.";
pub const TABLES_ERROR: &str = "Error fetching tables.";

/// Lifecycle of one kind of fetch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Tag attached to an outgoing table fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableRequest {
    pub floor_id: i64,
    pub seq: u64,
}

/// What the grid area should show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageContent {
    Loading,
    Error(String),
    Grid,
    Empty,
}

/// State owned by the dining table page for the lifetime of one mount.
///
/// `tables_status` is the only record of an in-flight table fetch; `loading()`
/// reads it rather than keeping a second flag.
#[derive(Clone, Debug, Default)]
pub struct DiningState {
    pub selected_floor: Option<FloorName>,
    pub floors: Vec<Floor>,
    pub tables: Vec<Table>,
    pub error: Option<String>,
    pub modal_open: bool,
    pub tables_status: FetchStatus,
    pending: Option<TableRequest>,
    next_seq: u64,
}

impl DiningState {
    // =========================================================
    // Floors
    // =========================================================

    /// Store the floor list and select the first floor, if any.
    ///
    /// Returns the table request to issue for the initial selection.
    pub fn floors_succeeded(&mut self, floors: Vec<Floor>) -> Option<TableRequest> {
        self.floors = floors;
        let first = self.floors.first().map(|f| f.name.clone())?;
        self.select_floor(first)
    }

    pub fn floors_failed(&mut self) {
        self.error = Some(FLOORS_ERROR.to_owned());
    }

    // =========================================================
    // Selection
    // =========================================================

    /// Look up the id of a loaded floor by name.
    pub fn floor_id(&self, name: &FloorName) -> Option<i64> {
        self.floors.iter().find(|f| &f.name == name).map(|f| f.id)
    }

    pub fn is_selected(&self, name: &FloorName) -> bool {
        self.selected_floor.as_ref() == Some(name)
    }

    /// Change the selected floor.
    ///
    /// Returns the tagged request to issue, or `None` when the floor is
    /// already selected or is not one of the loaded floors. Unknown names are
    /// rejected outright, so `selected_floor` always names a loaded floor and
    /// any in-flight fetch stays current.
    pub fn select_floor(&mut self, name: FloorName) -> Option<TableRequest> {
        if self.is_selected(&name) {
            return None;
        }
        let floor_id = self.floor_id(&name)?;
        self.selected_floor = Some(name);

        self.next_seq += 1;
        let request = TableRequest { floor_id, seq: self.next_seq };
        self.pending = Some(request);
        self.tables_status = FetchStatus::Loading;
        Some(request)
    }

    /// Whether a table fetch for the current selection is in flight.
    pub fn loading(&self) -> bool {
        self.tables_status == FetchStatus::Loading
    }

    fn is_current(&self, request: TableRequest) -> bool {
        self.pending == Some(request)
    }

    // =========================================================
    // Tables
    // =========================================================

    /// Apply a successful table fetch. Returns `false` if the response was
    /// stale and ignored.
    pub fn tables_succeeded(&mut self, request: TableRequest, tables: Vec<Table>) -> bool {
        if !self.is_current(request) {
            return false;
        }
        self.tables = tables;
        self.error = None;
        self.finish_tables(FetchStatus::Ready);
        true
    }

    /// Apply a failed table fetch. Returns `false` if the failure was stale
    /// and ignored. Previously loaded tables are kept.
    pub fn tables_failed(&mut self, request: TableRequest) -> bool {
        if !self.is_current(request) {
            return false;
        }
        self.error = Some(TABLES_ERROR.to_owned());
        self.finish_tables(FetchStatus::Failed);
        true
    }

    fn finish_tables(&mut self, status: FetchStatus) {
        self.pending = None;
        self.tables_status = status;
    }

    // =========================================================
    // Modal
    // =========================================================

    pub fn open_modal(&mut self) {
        self.modal_open = true;
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    // =========================================================
    // Rendering
    // =========================================================

    /// Decide what the grid area shows: loading beats error beats tables.
    pub fn content(&self) -> PageContent {
        if self.loading() {
            PageContent::Loading
        } else if let Some(error) = &self.error {
            PageContent::Error(error.clone())
        } else if !self.tables.is_empty() {
            PageContent::Grid
        } else {
            PageContent::Empty
        }
    }
}
