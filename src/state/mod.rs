//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State lives in plain structs with pure transition methods; pages wrap them
//! in `RwSignal` and drive them from network callbacks.

pub mod dining;
