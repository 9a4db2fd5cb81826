use std::collections::VecDeque;
use std::error::Error;
use std::fmt;

use rand::seq::index::sample;
use rand::thread_rng;

#[derive(Clone, Copy, Default)]
struct Cell {
    mine: bool,
    adjacent: u8,
    revealed: bool,
}

/// Per-cell projection handed to the renderer. Hidden cells expose nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellView {
    Hidden,
    Mine,
    Open(u8),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The cell was already open; nothing changed.
    AlreadyRevealed,
    /// Opened a safe cell; carries its adjacent-mine count.
    Safe(u8),
    /// Opened a mine. Terminal: the caller must stop issuing reveals.
    Mine,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardError {
    InvalidConfiguration { size: usize, mines: usize },
    OutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidConfiguration { size, mines } => {
                write!(f, "invalid board: {size}x{size} with {mines} mines")
            }
            BoardError::OutOfBounds { row, col } => {
                write!(f, "cell ({row}, {col}) is off the board")
            }
        }
    }
}

impl Error for BoardError {}

/// A square minefield. Mines are placed once at construction; the only
/// mutation afterwards is `reveal`, and a revealed cell never reverts.
pub struct Board {
    size: usize,
    mine_count: usize,
    cells: Vec<Cell>,
    remaining_safe: usize,
}

impl Board {
    pub fn new(size: usize, mine_count: usize) -> Result<Self, BoardError> {
        let mut board = Self::blank(size, mine_count)?;
        let mut rng = thread_rng();
        // Partial shuffle: mine_count distinct positions, uniform over subsets.
        for pos in sample(&mut rng, size * size, mine_count) {
            board.place_mine(pos / size, pos % size);
        }
        Ok(board)
    }

    /// Deterministic layout for tests.
    #[cfg(test)]
    pub(crate) fn with_mines(size: usize, mines: &[(usize, usize)]) -> Result<Self, BoardError> {
        let mut board = Self::blank(size, mines.len())?;
        for &(row, col) in mines {
            board.place_mine(row, col);
        }
        Ok(board)
    }

    fn blank(size: usize, mine_count: usize) -> Result<Self, BoardError> {
        if size == 0 || mine_count >= size * size {
            return Err(BoardError::InvalidConfiguration {
                size,
                mines: mine_count,
            });
        }
        Ok(Self {
            size,
            mine_count,
            cells: vec![Cell::default(); size * size],
            remaining_safe: size * size - mine_count,
        })
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Moore neighborhood clipped at the edges, excluding the cell itself.
    fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        let last = self.size - 1;
        (row.saturating_sub(1)..=(row + 1).min(last)).flat_map(move |r| {
            (col.saturating_sub(1)..=(col + 1).min(last))
                .map(move |c| (r, c))
                .filter(move |&pos| pos != (row, col))
        })
    }

    fn place_mine(&mut self, row: usize, col: usize) {
        let idx = self.idx(row, col);
        self.cells[idx].mine = true;
        let around: Vec<_> = self.neighbors(row, col).collect();
        for (r, c) in around {
            let idx = self.idx(r, c);
            self.cells[idx].adjacent += 1;
        }
    }

    /// Marks the cell revealed and decrements the safe counter. The counter
    /// drops on mine reveals too; the caller decides loss before reading it.
    fn open(&mut self, row: usize, col: usize) -> Cell {
        let idx = self.idx(row, col);
        self.cells[idx].revealed = true;
        self.remaining_safe -= 1;
        self.cells[idx]
    }

    pub fn reveal(&mut self, row: usize, col: usize) -> Result<RevealOutcome, BoardError> {
        if row >= self.size || col >= self.size {
            return Err(BoardError::OutOfBounds { row, col });
        }
        if self.cells[self.idx(row, col)].revealed {
            return Ok(RevealOutcome::AlreadyRevealed);
        }
        let cell = self.open(row, col);
        if cell.mine {
            return Ok(RevealOutcome::Mine);
        }
        if cell.adjacent == 0 {
            self.cascade(row, col);
        }
        Ok(RevealOutcome::Safe(cell.adjacent))
    }

    /// Flood-fills the connected zero-adjacency region around the origin,
    /// plus its bordering counted cells. Worklist instead of recursion so
    /// large boards cannot exhaust the stack; the revealed flag doubles as
    /// the visited set, so every pop either opens a hidden cell or skips.
    fn cascade(&mut self, row: usize, col: usize) {
        let mut pending: VecDeque<(usize, usize)> = self.neighbors(row, col).collect();
        while let Some((r, c)) = pending.pop_front() {
            if self.cells[self.idx(r, c)].revealed {
                continue;
            }
            let cell = self.open(r, c);
            if cell.adjacent == 0 {
                pending.extend(self.neighbors(r, c));
            }
        }
    }

    /// Read-only projection of the whole grid, row-major.
    pub fn snapshot(&self) -> Vec<Vec<CellView>> {
        (0..self.size)
            .map(|row| {
                (0..self.size)
                    .map(|col| {
                        let cell = self.cells[self.idx(row, col)];
                        if !cell.revealed {
                            CellView::Hidden
                        } else if cell.mine {
                            CellView::Mine
                        } else {
                            CellView::Open(cell.adjacent)
                        }
                    })
                    .collect()
            })
            .collect()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn mine_count(&self) -> usize {
        self.mine_count
    }

    pub fn remaining_safe_cells(&self) -> usize {
        self.remaining_safe
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn revealed_count(board: &Board) -> usize {
        board.cells.iter().filter(|c| c.revealed).count()
    }

    #[test]
    fn rejects_invalid_configurations() {
        assert!(matches!(
            Board::new(0, 0),
            Err(BoardError::InvalidConfiguration { .. })
        ));
        assert!(matches!(
            Board::new(3, 9),
            Err(BoardError::InvalidConfiguration { .. })
        ));
        assert!(matches!(
            Board::new(3, 10),
            Err(BoardError::InvalidConfiguration { .. })
        ));
        assert!(Board::new(1, 0).is_ok());
        assert!(Board::new(3, 8).is_ok());
    }

    #[test]
    fn places_exactly_the_requested_mines() {
        for &(size, mines) in &[(1, 0), (2, 3), (5, 0), (10, 12), (10, 99)] {
            let board = Board::new(size, mines).unwrap();
            let placed = board.cells.iter().filter(|c| c.mine).count();
            assert_eq!(placed, mines, "size={size} mines={mines}");
            assert_eq!(board.remaining_safe_cells(), size * size - mines);
        }
    }

    #[test]
    fn adjacency_matches_independent_recount() {
        for &(size, mines) in &[(3, 4), (10, 12), (10, 60)] {
            let board = Board::new(size, mines).unwrap();
            for row in 0..size {
                for col in 0..size {
                    let expected = board
                        .neighbors(row, col)
                        .filter(|&(r, c)| board.cells[board.idx(r, c)].mine)
                        .count() as u8;
                    assert_eq!(
                        board.cells[board.idx(row, col)].adjacent,
                        expected,
                        "size={size} mines={mines} cell=({row},{col})"
                    );
                }
            }
        }
    }

    #[test]
    fn reveal_rejects_out_of_range_without_mutating() {
        let mut board = Board::with_mines(3, &[(1, 1)]).unwrap();
        assert_eq!(
            board.reveal(3, 0),
            Err(BoardError::OutOfBounds { row: 3, col: 0 })
        );
        assert_eq!(
            board.reveal(0, 17),
            Err(BoardError::OutOfBounds { row: 0, col: 17 })
        );
        assert_eq!(revealed_count(&board), 0);
        assert_eq!(board.remaining_safe_cells(), 8);
    }

    #[test]
    fn second_reveal_is_an_idempotent_no_op() {
        let mut board = Board::with_mines(3, &[(0, 0)]).unwrap();
        assert_eq!(board.reveal(2, 2), Ok(RevealOutcome::Safe(0)));
        let opened = revealed_count(&board);
        let safe_left = board.remaining_safe_cells();
        assert_eq!(board.reveal(2, 2), Ok(RevealOutcome::AlreadyRevealed));
        assert_eq!(revealed_count(&board), opened);
        assert_eq!(board.remaining_safe_cells(), safe_left);
    }

    #[test]
    fn revealing_a_mine_loses_and_still_decrements_the_safe_counter() {
        // The counter drops on any first reveal, mines included.
        let mut board = Board::with_mines(2, &[(0, 0)]).unwrap();
        assert_eq!(board.remaining_safe_cells(), 3);
        assert_eq!(board.reveal(0, 0), Ok(RevealOutcome::Mine));
        assert_eq!(board.remaining_safe_cells(), 2);
        assert_eq!(revealed_count(&board), 1);
    }

    #[test]
    fn counted_cell_reveals_alone() {
        // Mine at (0,0): its three neighbors all count 1, so no cascade.
        let mut board = Board::with_mines(2, &[(0, 0)]).unwrap();
        assert_eq!(board.reveal(1, 1), Ok(RevealOutcome::Safe(1)));
        assert_eq!(revealed_count(&board), 1);
        assert_eq!(board.remaining_safe_cells(), 2);
    }

    #[test]
    fn empty_board_cascades_everywhere_in_one_reveal() {
        let mut board = Board::with_mines(3, &[]).unwrap();
        assert_eq!(board.reveal(0, 0), Ok(RevealOutcome::Safe(0)));
        assert_eq!(revealed_count(&board), 9);
        assert_eq!(board.remaining_safe_cells(), 0);
    }

    #[test]
    fn cascade_stops_at_the_counted_border() {
        // Single mine in the far corner of a 5x5 board. The zero region is
        // everything outside the mine's neighborhood; the cascade must open
        // that region plus the three bordering 1-cells and leave the mine
        // hidden.
        let mut board = Board::with_mines(5, &[(4, 4)]).unwrap();
        assert_eq!(board.reveal(0, 0), Ok(RevealOutcome::Safe(0)));
        for row in 0..5 {
            for col in 0..5 {
                let cell = board.cells[board.idx(row, col)];
                assert_eq!(cell.revealed, (row, col) != (4, 4), "({row},{col})");
            }
        }
        assert_eq!(board.remaining_safe_cells(), 0);
    }

    #[test]
    fn cascade_does_not_cross_a_mine_wall() {
        // A full column of mines splits the board; revealing on the left
        // must not open anything strictly right of the wall.
        let mines: Vec<(usize, usize)> = (0..5).map(|row| (row, 2)).collect();
        let mut board = Board::with_mines(5, &mines).unwrap();
        assert_eq!(board.reveal(0, 0), Ok(RevealOutcome::Safe(0)));
        for row in 0..5 {
            for col in 3..5 {
                assert!(!board.cells[board.idx(row, col)].revealed, "({row},{col})");
            }
        }
        // Left of the wall: the zero column and the counted column.
        for row in 0..5 {
            for col in 0..2 {
                assert!(board.cells[board.idx(row, col)].revealed, "({row},{col})");
            }
        }
    }

    #[test]
    fn cascade_terminates_on_a_large_board() {
        let mut board = Board::with_mines(100, &[]).unwrap();
        assert_eq!(board.reveal(50, 50), Ok(RevealOutcome::Safe(0)));
        assert_eq!(board.remaining_safe_cells(), 0);
        assert_eq!(revealed_count(&board), 100 * 100);
    }

    #[test]
    fn safe_counter_reaches_zero_exactly_at_the_last_safe_reveal() {
        let mut board = Board::with_mines(2, &[(0, 0)]).unwrap();
        assert_eq!(board.reveal(0, 1), Ok(RevealOutcome::Safe(1)));
        assert_eq!(board.remaining_safe_cells(), 2);
        assert_eq!(board.reveal(1, 0), Ok(RevealOutcome::Safe(1)));
        assert_eq!(board.remaining_safe_cells(), 1);
        assert_eq!(board.reveal(1, 1), Ok(RevealOutcome::Safe(1)));
        assert_eq!(board.remaining_safe_cells(), 0);
    }

    #[test]
    fn snapshot_hides_everything_unrevealed() {
        let mut board = Board::with_mines(2, &[(0, 0)]).unwrap();
        let before = board.snapshot();
        assert!(
            before
                .iter()
                .flatten()
                .all(|&view| view == CellView::Hidden)
        );

        board.reveal(1, 1).unwrap();
        board.reveal(0, 0).unwrap();
        let after = board.snapshot();
        assert_eq!(after[0][0], CellView::Mine);
        assert_eq!(after[0][1], CellView::Hidden);
        assert_eq!(after[1][0], CellView::Hidden);
        assert_eq!(after[1][1], CellView::Open(1));
    }
}
