use std::io::ErrorKind;

use log::debug;

use crate::game_engine::events::GameEvent;
use crate::game_engine::GameController;
use crate::io::{InputReader, OutputWriter, TerminalIO};
use crate::models::errors::{GameError, GameResult};
use crate::services::setup;
use crate::ui::presenters::{EventPresenter, TablePresenter};

/// A terminal session around one controller
pub struct Game {
    controller: GameController,
    io: TerminalIO,
    output: TerminalIO,
}

impl Game {
    pub fn new(controller: GameController) -> Self {
        Game {
            controller,
            io: TerminalIO,
            output: TerminalIO,
        }
    }

    /// Runs setup (unless `names` is non-empty) and then the play loop.
    pub fn run(&mut self, names: Vec<String>) -> GameResult<()> {
        play(&mut self.controller, names, &mut self.io, &mut self.output)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Fire,
    Reset,
    /// 1-based position in the alive list
    Select(usize),
    Show,
    Quit,
    Help,
}

impl Command {
    pub fn parse(input: &str) -> GameResult<Command> {
        let mut words = input.split_whitespace();
        let command = match words.next().map(str::to_ascii_lowercase).as_deref() {
            None | Some("f") => Command::Fire,
            Some("r") => Command::Reset,
            Some("l") => Command::Show,
            Some("q") => Command::Quit,
            Some("s") => {
                let position = words
                    .next()
                    .ok_or_else(|| GameError::InvalidInput("S needs a player number".to_string()))?;
                Command::Select(position.parse()?)
            }
            Some(_) => Command::Help,
        };
        Ok(command)
    }
}

/// Seats the players and reads commands until quit or end of input
pub fn play(
    game: &mut GameController,
    names: Vec<String>,
    io: &mut dyn InputReader,
    output: &mut dyn OutputWriter,
) -> GameResult<()> {
    let names = if names.is_empty() {
        setup::collect_names(io, output)?
    } else {
        names
    };
    game.configure(names)?;
    game.start();
    TablePresenter::show_table(game, output);

    loop {
        let input = match io.read_line("COMMAND") {
            Ok(input) => input,
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => break,
            Err(e) => return Err(e.into()),
        };

        let result = match Command::parse(input.trim()) {
            Ok(Command::Quit) => {
                output.writeln("GOODBYE.");
                break;
            }
            Ok(command) => execute(game, command, output),
            Err(e) => Err(e),
        };

        // Bad commands are reported and the loop carries on
        if let Err(e) = result {
            output.writeln(&format!("Error: {}", e));
        }
    }
    Ok(())
}

fn execute(
    game: &mut GameController,
    command: Command,
    output: &mut dyn OutputWriter,
) -> GameResult<()> {
    debug!("command {:?}", command);
    match command {
        Command::Fire => {
            if !game.is_armed() {
                output.writeln("THE ROUND IS OVER. PRESS R TO PLAY AGAIN.");
                return Ok(());
            }
            let mut events: Vec<GameEvent> = Vec::new();
            game.fire(&mut events);
            for flash in events.iter().filter_map(GameEvent::flash) {
                EventPresenter::show_flash(flash, output);
            }
            EventPresenter::show_latest(game, output);
            TablePresenter::show_table(game, output);
        }
        Command::Reset => {
            game.reset();
            output.writeln("THE CYLINDER IS RELOADED.");
            TablePresenter::show_table(game, output);
        }
        Command::Select(position) => {
            let seat = position
                .checked_sub(1)
                .and_then(|index| game.alive_players().get(index))
                .map(|player| player.seat())
                .ok_or_else(|| {
                    GameError::InvalidInput(format!("no alive player at position {}", position))
                })?;
            game.select_turn(seat)?;
            TablePresenter::show_table(game, output);
        }
        Command::Show => {
            EventPresenter::show_latest(game, output);
            TablePresenter::show_table(game, output);
        }
        Command::Help => TablePresenter::show_command_menu(output),
        Command::Quit => {}
    }
    Ok(())
}
