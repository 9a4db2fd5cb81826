use crate::game::{Board, BoardError, RevealOutcome};
use crate::{BOARD_SIZE, MINE_COUNT};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// One game: a board plus the win/loss state machine around it. Terminal
/// states are final; starting over means constructing a new `Game`.
pub struct Game {
    pub board: Board,
    pub status: GameStatus,
    pub reveals: u64,
}

impl Game {
    pub fn new() -> Result<Self, BoardError> {
        Self::with_config(BOARD_SIZE, MINE_COUNT)
    }

    pub fn with_config(size: usize, mines: usize) -> Result<Self, BoardError> {
        Ok(Self {
            board: Board::new(size, mines)?,
            status: GameStatus::InProgress,
            reveals: 0,
        })
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Executes one reveal and advances the state machine. A mine loses
    /// before the win check runs, so the counter quirk (mine reveals also
    /// drain it) can never turn a loss into a win. Once the game is over
    /// every further call is a no-op; the board is never touched again.
    pub fn reveal_cell(&mut self, row: usize, col: usize) -> Result<RevealOutcome, BoardError> {
        if self.is_over() {
            return Ok(RevealOutcome::AlreadyRevealed);
        }
        let outcome = self.board.reveal(row, col)?;
        match outcome {
            RevealOutcome::AlreadyRevealed => {}
            RevealOutcome::Mine => {
                self.reveals += 1;
                self.status = GameStatus::Lost;
            }
            RevealOutcome::Safe(_) => {
                self.reveals += 1;
                if self.board.remaining_safe_cells() == 0 {
                    self.status = GameStatus::Won;
                }
            }
        }
        Ok(outcome)
    }
}
