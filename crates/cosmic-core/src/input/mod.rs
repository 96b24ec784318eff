pub mod queue;

pub use queue::{Control, InputEvent, InputSnapshot, InputState};
