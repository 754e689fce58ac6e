//! Presentation-layer actions.

use crate::calculator::Key;
use crate::error::{EngineError, EngineResult};

/// One user action forwarded by the button grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A shift button was pressed; carries the shift code.
    AddShift(String),
    /// The clear button was pressed.
    Clear,
    /// The undo button was pressed.
    Undo,
    /// A calculator keypad button was pressed.
    Key(Key),
}

impl From<Key> for Action {
    fn from(key: Key) -> Self {
        Action::Key(key)
    }
}

impl TryFrom<&str> for Action {
    type Error = EngineError;

    /// Parses a keypad label into a key action.
    fn try_from(label: &str) -> EngineResult<Self> {
        Key::from_label(label).map(Action::Key)
    }
}
