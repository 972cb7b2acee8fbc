use crate::app::{format_seconds, App};
use memoria_core::{Card, CardState};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Alignment, Color, Line, Style, Stylize};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame, app: &App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(12),
            Constraint::Length(8),
        ])
        .split(frame.area());

    draw_header(frame, root[0], app);
    draw_board(frame, root[1], app);
    draw_events(frame, root[2], app);

    if app.session.is_won() {
        draw_win_popup(frame, app);
    } else if !app.session.clock.is_running() {
        draw_idle_popup(frame, app);
    }
    if app.show_help {
        draw_help_popup(frame);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let title = format!(
        "Memoria | seed {} | {} pairs ({} cards)",
        app.session.rng.seed(),
        app.session.pairs.pairs(),
        app.session.pairs.deck_len()
    );
    let hud = format!(
        "Moves {}  Time {}  Best {}  {}",
        app.hud_moves(),
        app.hud_time(),
        app.hud_best(),
        if app.session.is_locked() {
            "[locked]"
        } else if app.session.clock.is_running() {
            "[running]"
        } else {
            "[stopped]"
        }
    );
    let lines = vec![
        Line::from(title.bold()),
        Line::from(hud),
        Line::from(format!("Status: {}", app.status_line)),
    ];
    let block = Block::default().borders(Borders::ALL).title("Overview");
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
    frame.render_widget(paragraph, area);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let len = app.session.deck.len();
    let cols = app.grid_cols();
    if len == 0 || cols == 0 {
        return;
    }
    let rows = len.div_ceil(cols);
    let row_constraints: Vec<Constraint> = (0..rows)
        .map(|_| Constraint::Ratio(1, rows as u32))
        .collect();
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(area);
    for (row_idx, row_area) in row_areas.iter().enumerate() {
        let col_constraints: Vec<Constraint> = (0..cols)
            .map(|_| Constraint::Ratio(1, cols as u32))
            .collect();
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(col_constraints)
            .split(*row_area);
        for (col_idx, cell) in cells.iter().enumerate() {
            let idx = row_idx * cols + col_idx;
            let Some(card) = app.session.deck.cards.get(idx) else {
                continue;
            };
            draw_card(frame, *cell, card, idx == app.cursor);
        }
    }
}

fn draw_card(frame: &mut Frame, area: Rect, card: &Card, focused: bool) {
    let (face, style) = match card.state {
        CardState::Hidden => ("▒▒".to_string(), Style::default().fg(Color::DarkGray)),
        CardState::Open => (card.token.glyph().to_string(), Style::default().fg(Color::Cyan)),
        CardState::Matched => (
            format!("{} ✓", card.token.glyph()),
            Style::default().fg(Color::Green),
        ),
    };
    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(format!("{:>2}", card.id));
    if focused {
        block = block.border_style(Style::default().fg(Color::Yellow));
    } else if card.state == CardState::Matched {
        block = block.border_style(Style::default().fg(Color::Green));
    }
    let paragraph = Paragraph::new(face)
        .style(style)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

fn draw_events(frame: &mut Frame, area: Rect, app: &App) {
    let capacity = area.height.saturating_sub(2) as usize;
    let start = app.event_log.len().saturating_sub(capacity);
    let lines: Vec<Line<'_>> = app
        .event_log
        .iter()
        .skip(start)
        .map(|line| Line::from(line.clone()))
        .collect();
    let block = Block::default().borders(Borders::ALL).title("Events");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_idle_popup(frame: &mut Frame, app: &App) {
    let area = centered_rect(50, 30, frame.area());
    frame.render_widget(Clear, area);
    let fresh = app.session.moves() == 0 && app.session.elapsed().is_zero();
    let title = if fresh { "Ready" } else { "Paused" };
    let lines = vec![
        Line::from(if fresh {
            "Open two cards to find a pair. A wrong pair closes again."
        } else {
            "Clock is stopped."
        }),
        Line::from(""),
        Line::from("Space start  |  Enter/f flip  |  r reset  |  1/2/3 pairs"),
    ];
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}

fn draw_win_popup(frame: &mut Frame, app: &App) {
    let area = centered_rect(50, 30, frame.area());
    frame.render_widget(Clear, area);
    let lines = vec![
        Line::from(format!(
            "Time {}  •  Moves {}",
            format_seconds(app.session.elapsed()),
            app.session.moves()
        )),
        Line::from(format!("Best {}", app.hud_best())),
        Line::from(""),
        Line::from("r play again  |  3 hard mode  |  q quit"),
    ];
    let block = Block::default()
        .title("You won 🎉")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}

fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(60, 50, frame.area());
    frame.render_widget(Clear, area);
    let lines = vec![
        Line::from("arrows/hjkl move the cursor"),
        Line::from("Enter or f flip the card under the cursor"),
        Line::from("Space start or pause | p pause"),
        Line::from("r reset with the same pair count"),
        Line::from("1/2/3 restart with 6/8/10 pairs"),
        Line::from("? toggle help | Esc close | q quit"),
    ];
    let block = Block::default()
        .title("Help")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
