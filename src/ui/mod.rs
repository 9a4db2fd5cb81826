use ratatui::prelude::*;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use crate::game::{CellView, GameStatus};
use crate::{Game, CELL_W, MIN_PANE_WIDTH, PLAY_H, PLAY_W};

pub fn draw_game(frame: &mut Frame, game: &Game, prompt: &str, notice: &str) {
    let area = frame.size();

    if area.width < MIN_PANE_WIDTH {
        let msg = Paragraph::new(format!("RESIZE PANE (min width: {})", MIN_PANE_WIDTH))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("SWEEP"));
        frame.render_widget(msg, area);
        return;
    }

    // Outer "cabinet" frame.
    let cabinet = Block::default()
        .title("SWEEP")
        .border_type(BorderType::Thick)
        .borders(Borders::ALL)
        .title_alignment(Alignment::Left);
    let cabinet_inner = cabinet.inner(area);
    frame.render_widget(cabinet, area);

    // Split into minefield (left) and sidebar (right).
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min((PLAY_W as u16 + 6).max(30)), // padding left of the field
            Constraint::Length(26),
        ])
        .split(cabinet_inner);

    // Center the fixed-size field within the left column.
    let v_center = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(PLAY_H as u16),
            Constraint::Min(1),
        ])
        .split(cols[0]);
    let h_center = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(PLAY_W as u16),
            Constraint::Min(1),
        ])
        .split(v_center[1]);
    let play_rect = h_center[1];

    draw_minefield(frame, game, play_rect);
    draw_sidebar(frame, game, prompt, notice, cols[1]);
}

fn cell_glyph(view: CellView) -> char {
    match view {
        CellView::Hidden => '#',
        CellView::Mine => '*',
        CellView::Open(0) => '·',
        CellView::Open(n) => char::from_digit(n as u32, 10).unwrap_or('?'),
    }
}

fn draw_minefield(frame: &mut Frame, game: &Game, play_rect: Rect) {
    let mut grid = vec![vec![' '; PLAY_W]; PLAY_H];

    // Border: ceiling, sides, heavy floor.
    grid[0][0] = '┌';
    grid[0][PLAY_W - 1] = '┐';
    for x in 1..PLAY_W - 1 {
        grid[0][x] = '─';
    }
    for y in 1..PLAY_H - 1 {
        grid[y][0] = '│';
        grid[y][PLAY_W - 1] = '│';
    }
    grid[PLAY_H - 1][0] = '└';
    grid[PLAY_H - 1][PLAY_W - 1] = '┘';
    for x in 1..PLAY_W - 1 {
        grid[PLAY_H - 1][x] = '═';
    }

    for (row, views) in game.board.snapshot().iter().enumerate() {
        for (col, &view) in views.iter().enumerate() {
            let gx = 1 + col * CELL_W;
            let gy = 1 + row;
            if gy < PLAY_H - 1 && gx + 1 < PLAY_W {
                grid[gy][gx] = cell_glyph(view);
            }
        }
    }

    let lines: Vec<Line> = grid
        .iter()
        .map(|row| Line::raw(row.iter().collect::<String>()))
        .collect();

    let paragraph = Paragraph::new(lines).alignment(Alignment::Left);
    frame.render_widget(paragraph, play_rect);

    if game.is_over() {
        let text = match game.status {
            GameStatus::Won => "CLEARED!\nn new game / q quit",
            _ => "BOOM!\nn new game / q quit",
        };
        let overlay_w = (PLAY_W as u16).saturating_sub(2).max(10);
        let overlay_h = 4u16;
        let popup = Rect {
            x: play_rect.x + (play_rect.width.saturating_sub(overlay_w)) / 2,
            y: play_rect.y + (play_rect.height.saturating_sub(overlay_h)) / 2,
            width: overlay_w,
            height: overlay_h,
        };
        let overlay = Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(overlay, popup);
    }
}

fn draw_sidebar(frame: &mut Frame, game: &Game, prompt: &str, notice: &str, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(10),
                Constraint::Length(6),
                Constraint::Length(8),
            ]
            .as_ref(),
        )
        .split(area);

    let status = match game.status {
        GameStatus::InProgress => "LIVE",
        GameStatus::Won => "WON",
        GameStatus::Lost => "LOST",
    };

    let info = Paragraph::new(format!(
        "MINES\n{}\n\nSAFE LEFT\n{}\n\nSTATUS\n{}  moves {}",
        game.board.mine_count(),
        game.board.remaining_safe_cells(),
        status,
        game.reveals,
    ))
    .block(Block::default().title("INFO").borders(Borders::ALL))
    .wrap(Wrap { trim: true });
    frame.render_widget(info, chunks[0]);

    let entry = Paragraph::new(format!(
        "row col (1-{})\n> {}\n{}",
        game.board.size(),
        prompt,
        notice
    ))
    .block(Block::default().title("MOVE").borders(Borders::ALL))
    .wrap(Wrap { trim: true });
    frame.render_widget(entry, chunks[1]);

    let controls =
        Paragraph::new("digits+space type\nenter reveal\nbackspace erase\nn new game\nq quit")
            .block(Block::default().title("CONTROLS").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
    frame.render_widget(controls, chunks[2]);
}
