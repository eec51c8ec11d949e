//! Game state machine
//!
//! Owns the roster and the per-round state, and runs the fire/eliminate
//! cycle until one player is left or the chambers run out.

pub mod draw;
pub mod events;

use log::{debug, info, trace};

use crate::models::constants::CHAMBER_CAPACITY;
use crate::models::errors::{GameError, GameResult};
use crate::models::player::Player;
use draw::{DrawSource, SeededDraws};
use events::{EventSink, GameEvent};

/// Core controller for one table of players
pub struct GameController {
    pending: Vec<String>,
    roster: Vec<Player>,
    alive: Vec<Player>,
    turn: Option<usize>,
    chambers: u32,
    state: GameState,
    last_event: Option<GameEvent>,
    draws: Box<dyn DrawSource>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GameState {
    /// Nothing started yet
    Idle,
    Armed,
    /// The round has ended and `fire` is disarmed until a reset
    Over(RoundOutcome),
}

#[derive(Debug, Clone, PartialEq)]
pub enum RoundOutcome {
    Winner(Player),
    EveryoneDied,
    ChambersExhausted,
    NoChambersLeft,
}

impl GameController {
    /// Creates a controller whose draws come from a seeded generator
    ///
    /// # Arguments
    ///
    /// * `seed` - Random number generator seed for the trigger pulls
    pub fn new(seed: u64) -> Self {
        Self::with_draws(SeededDraws::new(seed))
    }

    /// Creates a controller drawing from the given source
    pub fn with_draws(draws: impl DrawSource + 'static) -> Self {
        Self {
            pending: Vec::new(),
            roster: Vec::new(),
            alive: Vec::new(),
            turn: None,
            chambers: CHAMBER_CAPACITY,
            state: GameState::Idle,
            last_event: None,
            draws: Box::new(draws),
        }
    }

    /// Stores the names used by the next `start`
    ///
    /// # Returns
    ///
    /// * `Ok(())` when at least one name is given
    /// * `Err(GameError::EmptyRoster)` otherwise; the previous names are kept
    pub fn configure<I, S>(&mut self, names: I) -> GameResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(GameError::EmptyRoster);
        }
        debug!("configured {} players", names.len());
        self.pending = names;
        Ok(())
    }

    /// Seats the configured players and arms the revolver.
    /// Does nothing if nobody has been configured.
    pub fn start(&mut self) {
        if self.pending.is_empty() {
            trace!("start ignored: no players configured");
            return;
        }
        self.roster = self
            .pending
            .iter()
            .enumerate()
            .map(|(seat, name)| Player::new(seat, name.as_str()))
            .collect();
        info!("game started with {} players", self.roster.len());
        self.rearm();
    }

    /// Restores the full roster and all chambers, clears the latest message
    /// and re-arms `fire`. Does nothing before the first `start`.
    pub fn reset(&mut self) {
        if self.roster.is_empty() {
            trace!("reset ignored: game never started");
            return;
        }
        info!("game reset");
        self.rearm();
    }

    fn rearm(&mut self) {
        self.alive = self.roster.clone();
        self.turn = self.alive.first().map(Player::seat);
        self.chambers = CHAMBER_CAPACITY;
        self.last_event = None;
        self.state = GameState::Armed;
    }

    /// Pulls the trigger for the player whose turn it is
    ///
    /// The elimination chance is one over the chambers remaining, so the
    /// odds climb with every empty click. Calls made while not armed are
    /// ignored.
    ///
    /// # Returns
    ///
    /// The state after the shot
    pub fn fire(&mut self, sink: &mut dyn EventSink) -> GameState {
        if self.state != GameState::Armed {
            trace!("fire ignored in state {:?}", self.state);
            return self.state.clone();
        }

        if self.chambers == 0 {
            self.emit(GameEvent::NoChambersLeft, sink);
            self.finish(RoundOutcome::NoChambersLeft);
            return self.state.clone();
        }

        let shooter = match self.current_player() {
            Some(player) => player.clone(),
            None => {
                trace!("fire ignored: nobody holds the revolver");
                return self.state.clone();
            }
        };

        let chance = 1.0 / f64::from(self.chambers);
        let roll = self.draws.draw();
        debug!(
            "{} pulls the trigger: roll {:.3} against {:.3} with {} chambers left",
            shooter, roll, chance, self.chambers
        );

        if roll < chance {
            self.alive.retain(|p| p.seat() != shooter.seat());
            self.emit(GameEvent::Died { player: shooter.clone() }, sink);
        } else {
            self.emit(GameEvent::Survived { player: shooter.clone() }, sink);
        }

        self.chambers -= 1;

        // A lone player has nobody to outlast, so a solo round cannot be won
        match self.alive.len() {
            1 if self.roster.len() > 1 => {
                let winner = self.alive[0].clone();
                self.emit(GameEvent::Winner { player: winner.clone() }, sink);
                self.finish(RoundOutcome::Winner(winner));
            }
            0 => {
                self.emit(GameEvent::EveryoneDied, sink);
                self.finish(RoundOutcome::EveryoneDied);
            }
            _ if self.chambers == 0 => {
                self.emit(GameEvent::ChambersExhausted, sink);
                self.finish(RoundOutcome::ChambersExhausted);
            }
            _ => self.rotate_turn(shooter.seat()),
        }

        self.state.clone()
    }

    /// Hands the revolver to a specific alive player
    ///
    /// # Returns
    ///
    /// * `Ok(())` when `seat` is alive and the round is armed
    /// * `Err(GameError::NotStarted)` before the first `start`
    /// * `Err(GameError::Disarmed)` once the round is over
    /// * `Err(GameError::UnknownPlayer)` when `seat` is not alive
    pub fn select_turn(&mut self, seat: usize) -> GameResult<()> {
        match self.state {
            GameState::Idle => return Err(GameError::NotStarted),
            GameState::Over(_) => return Err(GameError::Disarmed),
            GameState::Armed => {}
        }
        if !self.alive.iter().any(|p| p.seat() == seat) {
            return Err(GameError::UnknownPlayer(seat));
        }
        debug!("turn set to seat {}", seat);
        self.turn = Some(seat);
        Ok(())
    }

    /// Next alive player after `seat`, wrapping. A seat that is no longer
    /// alive counts as position 0, so when the shooter has just died the
    /// player who sat right after them is skipped: with A, B, C and A
    /// eliminated, C shoots next.
    fn rotate_turn(&mut self, seat: usize) {
        let current = self
            .alive
            .iter()
            .position(|p| p.seat() == seat)
            .unwrap_or(0);
        let next = (current + 1) % self.alive.len();
        self.turn = Some(self.alive[next].seat());
    }

    fn finish(&mut self, outcome: RoundOutcome) {
        info!("round over: {:?}", outcome);
        self.turn = self.alive.first().map(Player::seat);
        self.state = GameState::Over(outcome);
    }

    fn emit(&mut self, event: GameEvent, sink: &mut dyn EventSink) {
        sink.notify(&event);
        self.last_event = Some(event);
    }

    pub fn roster(&self) -> &[Player] {
        &self.roster
    }

    pub fn alive_players(&self) -> &[Player] {
        &self.alive
    }

    /// The alive player whose turn it is, if any
    pub fn current_player(&self) -> Option<&Player> {
        let seat = self.turn?;
        self.alive.iter().find(|p| p.seat() == seat)
    }

    pub fn chambers(&self) -> u32 {
        self.chambers
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_armed(&self) -> bool {
        self.state == GameState::Armed
    }

    /// Most recent event; older messages are not kept
    pub fn last_event(&self) -> Option<&GameEvent> {
        self.last_event.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use draw::ScriptedDraws;
    use events::NullSink;

    const LIVE: f64 = ScriptedDraws::SURVIVE;
    const DIE: f64 = ScriptedDraws::DIE;

    fn started(names: &[&str], draws: &[f64]) -> GameController {
        let mut game = GameController::with_draws(ScriptedDraws::new(draws.iter().copied()));
        game.configure(names.iter().copied()).unwrap();
        game.start();
        game
    }

    fn names(players: &[Player]) -> Vec<&str> {
        players.iter().map(Player::name).collect()
    }

    #[test]
    fn new_controller_is_idle() {
        let game = GameController::new(1);
        assert_eq!(game.state(), &GameState::Idle);
        assert_eq!(game.chambers(), CHAMBER_CAPACITY);
        assert!(game.current_player().is_none());
    }

    #[test]
    fn configure_rejects_empty_and_keeps_previous() {
        let mut game = GameController::new(1);
        game.configure(["A", "B"]).unwrap();
        let empty: Vec<String> = Vec::new();
        assert!(matches!(game.configure(empty), Err(GameError::EmptyRoster)));
        game.start();
        assert_eq!(names(game.roster()), ["A", "B"]);
    }

    #[test]
    fn start_without_configuration_is_a_no_op() {
        let mut game = GameController::new(1);
        game.start();
        assert_eq!(game.state(), &GameState::Idle);
        assert!(game.roster().is_empty());
    }

    #[test]
    fn start_seats_everyone_and_points_at_first() {
        let game = started(&["Alice", "Bob", "Carol"], &[]);
        assert_eq!(names(game.alive_players()), ["Alice", "Bob", "Carol"]);
        assert_eq!(game.alive_players(), game.roster());
        assert_eq!(game.current_player().map(Player::name), Some("Alice"));
        assert!(game.is_armed());
    }

    #[test]
    fn fire_before_start_does_nothing() {
        let mut game = GameController::with_draws(ScriptedDraws::new([DIE]));
        let mut events: Vec<GameEvent> = Vec::new();
        assert_eq!(game.fire(&mut events), GameState::Idle);
        assert!(events.is_empty());
        assert_eq!(game.chambers(), CHAMBER_CAPACITY);
    }

    #[test]
    fn survival_passes_turn_and_spends_a_chamber() {
        let mut game = started(&["Alice", "Bob", "Carol"], &[LIVE]);
        let mut events: Vec<GameEvent> = Vec::new();
        assert_eq!(game.fire(&mut events), GameState::Armed);
        assert_eq!(game.chambers(), 5);
        assert_eq!(game.current_player().map(Player::name), Some("Bob"));
        assert_eq!(events.len(), 1);
        assert!(matches!(&events[0], GameEvent::Survived { player } if player.name() == "Alice"));
    }

    #[test]
    fn turn_wraps_to_first_player() {
        let mut game = started(&["Alice", "Bob"], &[LIVE, LIVE]);
        game.fire(&mut NullSink);
        game.fire(&mut NullSink);
        assert_eq!(game.current_player().map(Player::name), Some("Alice"));
    }

    #[test]
    fn death_removes_only_the_shooter_seat() {
        let mut game = started(&["Ann", "Ann", "Ben"], &[DIE]);
        game.fire(&mut NullSink);
        assert_eq!(names(game.alive_players()), ["Ann", "Ben"]);
        assert_eq!(game.alive_players()[0].seat(), 1);
        assert!(game.is_armed());
    }

    #[test]
    fn death_of_first_player_skips_to_index_one() {
        // The eliminated seat is no longer in the alive list, so rotation
        // starts from position 0.
        let mut game = started(&["Alice", "Bob", "Carol"], &[DIE]);
        game.fire(&mut NullSink);
        assert_eq!(game.current_player().map(Player::name), Some("Carol"));
    }

    #[test]
    fn last_survivor_wins() {
        let mut game = started(&["Alice", "Bob"], &[DIE]);
        let mut events: Vec<GameEvent> = Vec::new();
        let state = game.fire(&mut events);
        let bob = game.roster()[1].clone();
        assert_eq!(state, GameState::Over(RoundOutcome::Winner(bob.clone())));
        assert_eq!(events.len(), 2);
        assert_eq!(game.last_event(), Some(&GameEvent::Winner { player: bob }));
        assert_eq!(game.current_player().map(Player::name), Some("Bob"));
    }

    #[test]
    fn solo_death_is_everyone_died() {
        let mut game = started(&["Solo"], &[DIE]);
        let state = game.fire(&mut NullSink);
        assert_eq!(state, GameState::Over(RoundOutcome::EveryoneDied));
        assert!(game.alive_players().is_empty());
        assert!(game.current_player().is_none());
    }

    #[test]
    fn solo_survivor_is_not_a_winner() {
        let mut game = started(&["Solo"], &[LIVE]);
        let mut events: Vec<GameEvent> = Vec::new();
        assert_eq!(game.fire(&mut events), GameState::Armed);
        assert_eq!(events.len(), 1);
        assert_eq!(game.current_player().map(Player::name), Some("Solo"));
    }

    #[test]
    fn last_chamber_always_kills() {
        let mut game = started(&["Solo"], &[LIVE; 6]);
        for _ in 0..5 {
            assert_eq!(game.fire(&mut NullSink), GameState::Armed);
        }
        assert_eq!(game.chambers(), 1);
        assert_eq!(game.fire(&mut NullSink), GameState::Over(RoundOutcome::EveryoneDied));
        assert_eq!(game.chambers(), 0);
    }

    #[test]
    fn disarmed_fire_changes_nothing() {
        let mut game = started(&["Alice", "Bob"], &[DIE, DIE]);
        game.fire(&mut NullSink);
        let alive = game.alive_players().to_vec();
        let turn = game.current_player().cloned();
        let mut events: Vec<GameEvent> = Vec::new();
        game.fire(&mut events);
        assert!(events.is_empty());
        assert_eq!(game.alive_players(), alive.as_slice());
        assert_eq!(game.current_player().cloned(), turn);
        assert_eq!(game.chambers(), 5);
    }

    #[test]
    fn armed_with_no_chambers_reports_and_disarms() {
        let mut game = started(&["Alice", "Bob"], &[]);
        game.chambers = 0;
        let mut events: Vec<GameEvent> = Vec::new();
        let state = game.fire(&mut events);
        assert_eq!(state, GameState::Over(RoundOutcome::NoChambersLeft));
        assert_eq!(events, vec![GameEvent::NoChambersLeft]);
        assert_eq!(game.alive_players().len(), 2);
    }

    #[test]
    fn reset_rearms_and_clears_message() {
        let mut game = started(&["Alice", "Bob"], &[DIE]);
        game.fire(&mut NullSink);
        assert!(game.last_event().is_some());
        game.reset();
        assert!(game.is_armed());
        assert!(game.last_event().is_none());
        assert_eq!(game.chambers(), CHAMBER_CAPACITY);
        assert_eq!(game.alive_players(), game.roster());
        assert_eq!(game.current_player().map(Player::name), Some("Alice"));
    }

    #[test]
    fn reset_before_start_stays_idle() {
        let mut game = GameController::new(3);
        game.reset();
        assert_eq!(game.state(), &GameState::Idle);
    }

    #[test]
    fn select_turn_validates_seat() {
        let mut game = started(&["Alice", "Bob", "Carol"], &[LIVE]);
        assert!(matches!(game.select_turn(7), Err(GameError::UnknownPlayer(7))));
        game.select_turn(2).unwrap();
        let mut events: Vec<GameEvent> = Vec::new();
        game.fire(&mut events);
        assert!(matches!(&events[0], GameEvent::Survived { player } if player.name() == "Carol"));
        assert_eq!(game.current_player().map(Player::name), Some("Alice"));
    }

    #[test]
    fn select_turn_rejected_when_disarmed() {
        let mut game = started(&["Alice", "Bob"], &[DIE]);
        game.fire(&mut NullSink);
        assert!(matches!(game.select_turn(1), Err(GameError::Disarmed)));
    }

    #[test]
    fn select_turn_before_start_is_not_started() {
        let mut game = GameController::new(2);
        game.configure(["Alice", "Bob"]).unwrap();
        let err = game.select_turn(0).unwrap_err();
        assert!(matches!(err, GameError::NotStarted));
        assert_eq!(err.to_string(), "no game has been started");
    }
}
