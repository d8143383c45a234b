// Server-rendered list and detail views

pub mod handlers;
pub mod state;

pub use state::{ViewEvent, ViewState};
