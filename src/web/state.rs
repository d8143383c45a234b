//! View state for one fetch-and-render cycle.
//!
//! A view moves `Idle -> Loading -> (Loaded | Failed)` and only through
//! [`ViewState::apply`]. Values are replaced, never mutated in place.

use tracing::debug;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent<T> {
    Start,
    Succeeded(T),
    Failed(String),
    Reset,
}

impl<T> ViewState<T> {
    pub fn apply(self, event: ViewEvent<T>) -> ViewState<T> {
        match (self, event) {
            (_, ViewEvent::Reset) => ViewState::Idle,
            (ViewState::Idle | ViewState::Loaded(_) | ViewState::Failed(_), ViewEvent::Start) => {
                ViewState::Loading
            }
            (ViewState::Loading, ViewEvent::Succeeded(value)) => ViewState::Loaded(value),
            (ViewState::Loading, ViewEvent::Failed(message)) => ViewState::Failed(message),
            (state, event) => {
                debug!(
                    "Ignoring {} while {}",
                    event_name(&event),
                    state.name()
                );
                state
            }
        }
    }

    /// Finish a load with the outcome of a fallible operation
    pub fn settle<E>(self, outcome: std::result::Result<T, E>, message: &str) -> ViewState<T> {
        match outcome {
            Ok(value) => self.apply(ViewEvent::Succeeded(value)),
            Err(_) => self.apply(ViewEvent::Failed(message.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ViewState::Idle => "idle",
            ViewState::Loading => "loading",
            ViewState::Loaded(_) => "loaded",
            ViewState::Failed(_) => "failed",
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            ViewState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

fn event_name<T>(event: &ViewEvent<T>) -> &'static str {
    match event {
        ViewEvent::Start => "start",
        ViewEvent::Succeeded(_) => "success",
        ViewEvent::Failed(_) => "failure",
        ViewEvent::Reset => "reset",
    }
}
