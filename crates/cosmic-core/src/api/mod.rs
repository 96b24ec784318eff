pub mod events;

pub use events::{CombatEvent, WireEvent};
