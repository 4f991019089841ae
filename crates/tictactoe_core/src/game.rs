//! Turn controller: setup, move prompts, outcome announcement and replay.
//!
//! The controller is an explicit state machine over [`Phase`]. Each call to
//! [`Game::step`] handles one phase and returns the next; [`Game::run`] steps
//! until [`Phase::Finished`]. Invalid input is retried in a loop inside the
//! move phase, so the call stack never grows with bad input.

use crate::{Console, GameError, GameOptions, Marker, Outcome, Player, Round, Seat, Turn};
use derive_getters::Getters;
use std::collections::BTreeMap;
use tracing::{debug, info, instrument, warn};

/// Where the controller is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Collect names and build a fresh board.
    Setup,
    /// Waiting for the player in this seat to pick a cell.
    AwaitingMove(Seat),
    /// Round over; outcome not yet announced.
    RoundComplete(Outcome),
    /// Asking whether to play again.
    AskReplay,
    /// Session over.
    Finished,
}

/// Tally of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct Summary {
    /// Rounds played to an outcome.
    rounds: usize,
    /// Rounds that ended in a tie.
    ties: usize,
    /// Wins per player. Keyed by name and marker, so two players who typed
    /// the same name are still counted apart.
    wins: BTreeMap<Player, usize>,
}

impl Summary {
    fn record(&mut self, outcome: &Outcome) {
        self.rounds += 1;
        match outcome {
            Outcome::Win(player) => *self.wins.entry(player.clone()).or_default() += 1,
            Outcome::Tie => self.ties += 1,
        }
    }

    /// Wins recorded for `player`.
    pub fn wins_for(&self, player: &Player) -> usize {
        self.wins.get(player).copied().unwrap_or(0)
    }
}

/// Two-player console game.
#[derive(Debug, Clone)]
pub struct Game {
    options: GameOptions,
    phase: Phase,
    round: Option<Round>,
    names: Option<[String; 2]>,
    summary: Summary,
}

impl Game {
    /// Creates a game in the setup phase.
    #[instrument]
    pub fn new(options: GameOptions) -> Self {
        Self {
            options,
            phase: Phase::Setup,
            round: None,
            names: None,
            summary: Summary::default(),
        }
    }

    /// Returns the current phase.
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Returns the current or last round.
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Returns the session tally.
    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    /// Returns the options in effect.
    pub fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Drives the game until the session ends.
    ///
    /// Ends when a replay is declined or input runs out.
    #[instrument(skip_all)]
    pub fn run<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<Summary, GameError> {
        while self.phase != Phase::Finished {
            self.step(console)?;
        }
        info!(
            rounds = self.summary.rounds,
            ties = self.summary.ties,
            wins = ?self.summary.wins,
            "Session finished"
        );
        Ok(self.summary.clone())
    }

    /// Handles the current phase and moves to the next one.
    #[instrument(skip_all, fields(phase = ?self.phase))]
    pub fn step<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<&Phase, GameError> {
        let next = match std::mem::replace(&mut self.phase, Phase::Finished) {
            Phase::Setup => self.setup(console)?,
            Phase::AwaitingMove(seat) => self.await_move(console, seat)?,
            Phase::RoundComplete(outcome) => self.announce(console, outcome)?,
            Phase::AskReplay => self.ask_replay(console)?,
            Phase::Finished => Phase::Finished,
        };
        debug!(next = ?next, "Phase transition");
        self.phase = next;
        Ok(&self.phase)
    }

    fn setup<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<Phase, GameError> {
        console.write_line("Welcome to Tic-Tac-Toe!")?;

        let first_marker = *self.options.first_marker();
        let second_marker = first_marker.opponent();

        let names = match self.names.take() {
            Some(names) if *self.options.reuse_players() => {
                debug!(?names, "Reusing players");
                names
            }
            _ => {
                let Some(first) = ask_name(console, 1, first_marker)? else {
                    return Ok(Phase::Finished);
                };
                let Some(second) = ask_name(console, 2, second_marker)? else {
                    return Ok(Phase::Finished);
                };
                [first, second]
            }
        };

        let round = Round::new(
            Player::new(names[0].clone(), first_marker),
            Player::new(names[1].clone(), second_marker),
        )?;
        self.names = Some(names);
        self.round = Some(round);
        Ok(Phase::AwaitingMove(Seat::First))
    }

    fn await_move<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
        seat: Seat,
    ) -> Result<Phase, GameError> {
        let show_board = *self.options.show_board_after_move();
        let Some(round) = self.round.as_mut() else {
            warn!("No round in progress, returning to setup");
            return Ok(Phase::Setup);
        };
        debug_assert_eq!(round.active_seat(), seat);

        loop {
            let name = round.active().name().clone();
            console.write_line(&format!("It's {}'s turn!", name))?;
            console.write_line(&round.board().render())?;
            console.write_line(&format!("{}, where would you like to mark the board?", name))?;

            let Some(input) = console.read_line()? else {
                info!("Input closed mid-round");
                return Ok(Phase::Finished);
            };

            match round.submit(&input) {
                Ok(turn) => {
                    if show_board {
                        console.write_line(&round.board().render())?;
                    }
                    return Ok(match turn {
                        Turn::Continue { next } => Phase::AwaitingMove(next),
                        Turn::Won(player) => Phase::RoundComplete(Outcome::Win(player)),
                        Turn::Tie => Phase::RoundComplete(Outcome::Tie),
                    });
                }
                Err(err) => {
                    debug!(%input, error = %err, "Move rejected");
                    console.write_line(&err.to_string())?;
                }
            }
        }
    }

    fn announce<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
        outcome: Outcome,
    ) -> Result<Phase, GameError> {
        console.write_line(&outcome.to_string())?;
        self.summary.record(&outcome);
        Ok(Phase::AskReplay)
    }

    fn ask_replay<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<Phase, GameError> {
        console.write_line(&format!("Play again? {} / n", self.options.replay_token()))?;
        match console.read_line()? {
            Some(answer) if answer == *self.options.replay_token() => {
                info!("Replay accepted");
                Ok(Phase::Setup)
            }
            answer => {
                info!(?answer, "Replay declined");
                Ok(Phase::Finished)
            }
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameOptions::default())
    }
}

fn ask_name<C: Console + ?Sized>(
    console: &mut C,
    number: usize,
    marker: Marker,
) -> Result<Option<String>, GameError> {
    console.write_line(&format!(
        "What is Player {}'s name? They will be {}",
        number, marker
    ))?;
    Ok(console.read_line()?)
}
