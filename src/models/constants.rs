/// Chambers in the cylinder; also the most shots a round can last.
pub const CHAMBER_CAPACITY: u32 = 6;

pub const MIN_PLAYERS: usize = 1;
pub const MAX_PLAYERS: usize = 10;
pub const DEFAULT_PLAYERS: usize = 2;

/// Name given to a seat left blank during setup. Seats are 1-based here.
pub fn default_player_name(seat: usize) -> String {
    format!("Player {}", seat)
}

/// Cosmetic effect shown alongside a shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    Red,
    Green,
}

impl Flash {
    pub fn label(&self) -> &'static str {
        match self {
            Flash::Red => "BANG",
            Flash::Green => "CLICK",
        }
    }
}
