//! Terminal host for the tic-tac-toe engine.
//!
//! The engine in [`tictactoe_engine`] owns every rule and every cell. This
//! crate is the presentation layer around it: it reads moves as text,
//! renders the board, and asks whether to play again.
//!
//! # Architecture
//!
//! - **Config**: display names and replay preference from a TOML file
//! - **Input**: parses typed lines into [`Command`]s
//! - **Render**: draws a board snapshot as text
//! - **Session**: the play / replay loop over any reader and writer
//!
//! # Example
//!
//! ```
//! use tictactoe::{HostConfig, Session};
//!
//! # fn main() -> std::io::Result<()> {
//! let input = "0 0\n1 0\n0 1\n1 1\n0 2\nn\n".as_bytes();
//! let mut output = Vec::new();
//! let summary = Session::new(HostConfig::default(), input, &mut output).run()?;
//! assert_eq!(*summary.x_wins(), 1);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod input;
mod render;
mod session;

pub use config::{ConfigError, HostConfig};
pub use input::{Command, ReplayChoice, parse_command, parse_replay};
pub use render::{render_board, render_move, render_status};
pub use session::{Session, SessionSummary};

pub use tictactoe_engine::{
    Board, Cell, GameEngine, GameSnapshot, GameStatus, InvalidPosition, MoveResult, Player,
    Position, RejectReason,
};
