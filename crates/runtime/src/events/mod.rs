//! Topic-based event delivery to presentation layers.

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{DialogueEvent, SessionEvent};
