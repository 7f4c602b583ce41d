//! Presentational components for the dining floor page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components receive data and callbacks as props; page state stays in
//! `pages::dining_tables`.

pub mod clock;
pub mod floor_selector;
pub mod table_card;
