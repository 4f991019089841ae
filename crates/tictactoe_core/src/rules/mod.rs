//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). They look only at marker
//! values, never at players, so the board never needs to know who placed a mark.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{has_line, LINES};
