//! Tic-tac-toe game engine.
//!
//! Pure decision logic for a two-player game on a 3×3 grid: the [`Board`]
//! owns the cells and decides legality, wins and ties; a [`Player`] binds a
//! name to a [`Marker`]; a [`Round`] sequences turns; the [`Game`] state
//! machine drives rounds through a line-oriented [`Console`].
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Game, GameOptions, Marker, Player, ScriptedConsole};
//!
//! let mut console = ScriptedConsole::new(["Ada", "Grace", "A1", "B1", "A2", "B2", "A3", "n"]);
//! let summary = Game::new(GameOptions::default()).run(&mut console)?;
//! assert_eq!(summary.wins_for(&Player::new("Ada", Marker::X)), 1);
//! # Ok::<(), tictactoe_core::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod console;
mod coordinate;
mod error;
mod game;
mod options;
mod player;
mod round;
pub mod rules;
mod types;

pub use board::Board;
pub use console::{Console, ScriptedConsole};
pub use coordinate::Coordinate;
pub use error::{ConsoleError, GameError, MoveError, SetupError};
pub use game::{Game, Phase, Summary};
pub use options::GameOptions;
pub use player::Player;
pub use round::{Outcome, Round, Seat, Turn};
pub use types::{Cell, Marker, Row};
