use colored::Colorize;

use crate::game_engine::GameController;
use crate::io::OutputWriter;
use crate::models::constants::Flash;

pub struct TablePresenter;

impl TablePresenter {
    /// Lists alive players in turn order, marking whose turn it is
    pub fn show_table(game: &GameController, output: &mut dyn OutputWriter) {
        output.writeln("");
        output.writeln(&format!("CHAMBERS LEFT: {}", game.chambers()));
        let current = game.current_player().map(|p| p.seat());
        for (index, player) in game.alive_players().iter().enumerate() {
            let marker = if Some(player.seat()) == current { ">" } else { " " };
            output.writeln(&format!(" {} {}. {}", marker, index + 1, player));
        }
        if game.alive_players().is_empty() {
            output.writeln("   (nobody left standing)");
        }
    }

    pub fn show_command_menu(output: &mut dyn OutputWriter) {
        output.writeln("   F = PULL THE TRIGGER (or just press enter)");
        output.writeln("   S <N> = HAND THE REVOLVER TO PLAYER N");
        output.writeln("   R = RESET THE GAME");
        output.writeln("   L = SHOW THE TABLE");
        output.writeln("   Q = QUIT");
    }
}

pub struct EventPresenter;

impl EventPresenter {
    /// Only the newest message is shown
    pub fn show_latest(game: &GameController, output: &mut dyn OutputWriter) {
        if let Some(event) = game.last_event() {
            output.writeln(&format!(">> {}", event));
        }
    }

    /// One banner line; nothing waits on it.
    pub fn show_flash(flash: Flash, output: &mut dyn OutputWriter) {
        let banner = format!("   *** {} ***   ", flash.label());
        let banner = match flash {
            Flash::Red => banner.white().on_red().bold(),
            Flash::Green => banner.black().on_green().bold(),
        };
        output.writeln(&banner.to_string());
    }
}
