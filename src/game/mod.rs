pub mod board;
pub mod state;

pub use board::{Board, BoardError, CellView, RevealOutcome};
pub use state::{Game, GameStatus};
