use std::error::Error;

mod app;
mod config;
mod game;
mod input;
mod ui;

pub use config::{BOARD_SIZE, CELL_W, MINE_COUNT, MIN_PANE_WIDTH, PLAY_H, PLAY_W};
pub use game::{Board, Game, GameStatus, RevealOutcome};

fn main() -> Result<(), Box<dyn Error>> {
    app::run()
}
