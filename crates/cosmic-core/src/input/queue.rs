//! Input plumbing. The browser pushes press/release edges; the engine folds
//! them into held-control state and hands the simulation an immutable
//! snapshot each tick. No shared mutable key map crosses the boundary.

/// The five semantic controls. Keyboard and touch buttons both map onto
/// these in the bridge; the engine never sees raw key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Left,
    Right,
    Up,
    Down,
    Fire,
}

/// A press or release edge for one control.
/// JS writes events into the queue; the engine folds them each frame.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    Press(Control),
    Release(Control),
}

/// Held-control state accumulated from edges.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    left: bool,
    right: bool,
    up: bool,
    down: bool,
    fire: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one edge into the held state.
    pub fn apply(&mut self, event: InputEvent) {
        let (control, held) = match event {
            InputEvent::Press(c) => (c, true),
            InputEvent::Release(c) => (c, false),
        };
        match control {
            Control::Left => self.left = held,
            Control::Right => self.right = held,
            Control::Up => self.up = held,
            Control::Down => self.down = held,
            Control::Fire => self.fire = held,
        }
    }

    /// Release everything (round reset; also guards against lost key-up
    /// events when the tab loses focus).
    pub fn release_all(&mut self) {
        *self = Self::default();
    }

    /// The immutable view a single tick consumes.
    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            left: self.left,
            right: self.right,
            up: self.up,
            down: self.down,
            fire: self.fire,
        }
    }
}

/// What the simulation reads: the controls held during this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire: bool,
}

impl InputSnapshot {
    /// Horizontal intent in {-1, 0, 1}. When both directions are held,
    /// right wins.
    pub fn horizontal(&self) -> f32 {
        let mut intent = 0.0;
        if self.left {
            intent = -1.0;
        }
        if self.right {
            intent = 1.0;
        }
        intent
    }

    /// Vertical intent in {-1, 0, 1}; up is negative.
    pub fn vertical(&self) -> f32 {
        let mut intent = 0.0;
        if self.up {
            intent = -1.0;
        }
        if self.down {
            intent = 1.0;
        }
        intent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release_toggle_held_state() {
        let mut state = InputState::new();
        state.apply(InputEvent::Press(Control::Left));
        assert!(state.snapshot().left);
        state.apply(InputEvent::Release(Control::Left));
        assert!(!state.snapshot().left);
    }

    #[test]
    fn horizontal_intent_prefers_right_when_both_held() {
        let snap = InputSnapshot {
            left: true,
            right: true,
            ..Default::default()
        };
        assert_eq!(snap.horizontal(), 1.0);
    }

    #[test]
    fn neutral_when_nothing_held() {
        let snap = InputSnapshot::default();
        assert_eq!(snap.horizontal(), 0.0);
        assert_eq!(snap.vertical(), 0.0);
    }

    #[test]
    fn release_all_clears_everything() {
        let mut state = InputState::new();
        state.apply(InputEvent::Press(Control::Fire));
        state.apply(InputEvent::Press(Control::Down));
        state.release_all();
        assert_eq!(state.snapshot(), InputSnapshot::default());
    }
}
