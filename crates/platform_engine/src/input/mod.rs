//! Input management system
//!
//! Key events arrive asynchronously from the host. The simulation reads a
//! snapshot once per tick: which keys are held, and which were freshly
//! pressed since the previous snapshot. Key-repeat presses never count as
//! fresh presses.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Input manager
#[derive(Debug, Clone, Default)]
pub struct InputManager {
    held: HashSet<KeyCode>,
    pressed: HashSet<KeyCode>,
}

impl InputManager {
    /// Create a new input manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle key input
    ///
    /// `repeat` marks auto-repeat events generated while a key stays down.
    pub fn handle_key_input(&mut self, key: KeyCode, pressed: bool, repeat: bool) {
        if pressed {
            let newly_down = self.held.insert(key);
            if newly_down && !repeat {
                self.pressed.insert(key);
            }
        } else {
            self.held.remove(&key);
        }
    }

    /// Take the state for one tick and reset the fresh-press latch
    pub fn snapshot(&mut self) -> InputSnapshot {
        InputSnapshot {
            held: self.held.clone(),
            pressed: std::mem::take(&mut self.pressed),
        }
    }
}

/// Input state as seen by a single tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    /// Keys held down at snapshot time
    pub held: HashSet<KeyCode>,
    /// Keys that went down since the previous snapshot
    pub pressed: HashSet<KeyCode>,
}

impl InputSnapshot {
    /// Snapshot with nothing held or pressed
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builder: mark a key as held
    #[must_use]
    pub fn with_held(mut self, key: KeyCode) -> Self {
        self.held.insert(key);
        self
    }

    /// Builder: mark a key as freshly pressed (and therefore held)
    #[must_use]
    pub fn with_pressed(mut self, key: KeyCode) -> Self {
        self.held.insert(key);
        self.pressed.insert(key);
        self
    }

    /// Any of `keys` is held
    pub fn any_held(&self, keys: &[KeyCode]) -> bool {
        keys.iter().any(|key| self.held.contains(key))
    }

    /// Any of `keys` was freshly pressed
    pub fn any_pressed(&self, keys: &[KeyCode]) -> bool {
        keys.iter().any(|key| self.pressed.contains(key))
    }
}

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    /// A key
    A,
    /// D key
    D,
    /// S key
    S,
    /// W key
    W,
    /// Space key
    Space,
    /// Enter key
    Enter,
    /// Escape key
    Escape,
    /// Left arrow
    ArrowLeft,
    /// Right arrow
    ArrowRight,
    /// Up arrow
    ArrowUp,
    /// Down arrow
    ArrowDown,
}
