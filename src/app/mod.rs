// ShowBill - app/mod.rs
//
// Application layer: orchestration, state management, show loading,
// poster fetch lifecycle.
// Dependencies: core layer.
// Must NOT depend on: ui, platform specifics.

pub mod poster;
pub mod showfile;
pub mod state;
