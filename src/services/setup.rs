use crate::io::{InputReader, OutputWriter};
use crate::models::constants::{default_player_name, DEFAULT_PLAYERS, MAX_PLAYERS, MIN_PLAYERS};
use crate::models::errors::{GameError, GameResult};

/// Asks how many players are at the table, then one name per seat
///
/// A bad count is reported and asked again. A blank name becomes
/// `Player N`.
///
/// # Returns
///
/// * `Ok(names)` with between `MIN_PLAYERS` and `MAX_PLAYERS` entries
/// * `Err` if input can no longer be read
pub fn collect_names(
    io: &mut dyn InputReader,
    output: &mut dyn OutputWriter,
) -> GameResult<Vec<String>> {
    let prompt = format!("NUMBER OF PLAYERS ({}-{})", MIN_PLAYERS, MAX_PLAYERS);
    let count = loop {
        let input = io.read_line(&prompt)?;
        match parse_player_count(input.trim()) {
            Ok(count) => break count,
            Err(e) => output.writeln(&format!("Error: {}", e)),
        }
    };

    (1..=count)
        .map(|seat| {
            let input = io.read_line(&format!("PLAYER {} NAME", seat))?;
            Ok(player_name_or_default(input.trim(), seat))
        })
        .collect()
}

/// Blank means the default count.
pub fn parse_player_count(input: &str) -> GameResult<usize> {
    if input.is_empty() {
        return Ok(DEFAULT_PLAYERS);
    }
    let count: usize = input.parse()?;
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
        return Err(GameError::InvalidInput(format!(
            "player count must be between {} and {}",
            MIN_PLAYERS, MAX_PLAYERS
        )));
    }
    Ok(count)
}

fn player_name_or_default(input: &str, seat: usize) -> String {
    if input.is_empty() {
        default_player_name(seat)
    } else {
        input.to_string()
    }
}
