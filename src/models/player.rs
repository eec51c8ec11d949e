use std::fmt;

/// A seated player. The seat is the identity; names may repeat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    seat: usize,
    name: String,
}

impl Player {
    pub fn new(seat: usize, name: impl Into<String>) -> Self {
        Player {
            seat,
            name: name.into(),
        }
    }

    /// 0-based position in the roster.
    pub fn seat(&self) -> usize {
        self.seat
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
