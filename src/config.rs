// Shared game/UI constants.
pub const BOARD_SIZE: usize = 10;
pub const MINE_COUNT: usize = 12;
pub const CELL_W: usize = 2; // render each cell as two characters wide (glyph + filler)
pub const PLAY_W: usize = BOARD_SIZE * CELL_W + 2; // inner width plus side walls
pub const PLAY_H: usize = BOARD_SIZE + 2; // inner height plus ceiling/floor
// Minimal pane width to fit the playfield plus the sidebar border.
pub const MIN_PANE_WIDTH: u16 = (PLAY_W as u16) + 2;
