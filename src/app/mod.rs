use std::error::Error;
use std::io::{stdout, Stdout};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::game::RevealOutcome;
use crate::input::parse_move;
use crate::ui::draw_game;
use crate::Game;

type Term = Terminal<CrosstermBackend<Stdout>>;

pub fn run() -> Result<(), Box<dyn Error>> {
    let mut tui = TuiGuard::new()?;
    run_loop(tui.terminal_mut())
}

fn run_loop(terminal: &mut Term) -> Result<(), Box<dyn Error>> {
    let mut game = Game::new()?;
    let mut buffer = String::new();
    let mut notice = String::new();

    loop {
        terminal.draw(|frame| draw_game(frame, &game, &buffer, &notice))?;

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Char('n') => {
                    game = Game::new()?;
                    buffer.clear();
                    notice.clear();
                }
                KeyCode::Enter => {
                    let line = std::mem::take(&mut buffer);
                    notice = submit(&mut game, &line);
                }
                KeyCode::Backspace => {
                    buffer.pop();
                }
                KeyCode::Char(ch) if ch.is_ascii_digit() || ch == ' ' => {
                    buffer.push(ch);
                }
                _ => {}
            }
        }
    }
    Ok(())
}

/// Parses one typed move and plays it, turning the result into the notice
/// line. Once the game is over no further reveals are issued; bad input of
/// any kind just re-prompts.
fn submit(game: &mut Game, line: &str) -> String {
    if game.is_over() {
        return "game over - n for a new one".to_string();
    }
    let (row, col) = match parse_move(line) {
        Ok(pair) => pair,
        Err(err) => return err.to_string(),
    };
    match game.reveal_cell(row, col) {
        Ok(RevealOutcome::Mine) => "BOOM!".to_string(),
        Ok(RevealOutcome::AlreadyRevealed) => "already open".to_string(),
        Ok(RevealOutcome::Safe(_)) => {
            if game.board.remaining_safe_cells() == 0 {
                "field cleared!".to_string()
            } else {
                "onward!".to_string()
            }
        }
        // OutOfBounds is recoverable: show it and keep prompting.
        Err(err) => err.to_string(),
    }
}

struct TuiGuard {
    terminal: Term,
}

impl TuiGuard {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        Ok(Self { terminal })
    }

    fn terminal_mut(&mut self) -> &mut Term {
        &mut self.terminal
    }
}

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
