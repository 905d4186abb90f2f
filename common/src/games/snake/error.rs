use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SnakeError {
    /// Every cell of the board is excluded.
    NoFreeCell { excluded: usize },
    InvalidSettings(String),
}

impl fmt::Display for SnakeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnakeError::NoFreeCell { excluded } => {
                write!(f, "No free cell left on the board ({} cells excluded)", excluded)
            }
            SnakeError::InvalidSettings(reason) => write!(f, "Invalid snake settings: {}", reason),
        }
    }
}

impl std::error::Error for SnakeError {}
