//! TUI rendering with ratatui
//!
//! Board grid, traced word and found-word panels.

use super::app::{App, MessageStyle};
use crate::core::Coord;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};
use std::collections::BTreeSet;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔠 WORD GRID - Trace five-letter words")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(7), Constraint::Length(3)])
        .split(area);

    render_board(f, app, chunks[0]);
    render_current_word(f, app, chunks[1]);
}

fn cell_style(app: &App, coord: Coord, answer_cells: &BTreeSet<(isize, isize)>) -> Style {
    let mut style = if app.rejected == Some(coord) {
        Style::default().fg(Color::White).bg(Color::Red)
    } else if app.session.path().contains(coord) {
        let bg = if app.session.is_completed() {
            Color::Green
        } else {
            Color::Blue
        };
        Style::default()
            .fg(Color::Black)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else if answer_cells.contains(&(coord.row, coord.col)) {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    };

    if app.cursor == coord {
        style = style.add_modifier(Modifier::REVERSED);
    }
    style
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let answer_cells = app.answer_cells();

    let lines: Vec<Line> = app
        .board
        .rows()
        .enumerate()
        .map(|(row, letters)| {
            let spans: Vec<Span> = letters
                .iter()
                .enumerate()
                .map(|(col, letter)| {
                    let coord = Coord::new(row as isize, col as isize);
                    Span::styled(
                        format!(" {} ", letter.to_char().to_ascii_uppercase()),
                        cell_style(app, coord, &answer_cells),
                    )
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" Board {}x{} ", app.board.size(), app.board.size()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn render_current_word(f: &mut Frame, app: &App, area: Rect) {
    let color = if app.session.is_completed() {
        Color::Green
    } else {
        Color::Yellow
    };
    let word = Paragraph::new(app.session.word().to_uppercase())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Current Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(word, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_words(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_words(f: &mut Frame, app: &App, area: Rect) {
    let (title, lines) = if app.show_answers {
        let lines: Vec<Line> = app
            .answers
            .iter()
            .map(|found| {
                let (prefix, style) = if app.found.contains(&found.word) {
                    ("✓ ", Style::default().fg(Color::Green))
                } else {
                    ("  ", Style::default().fg(Color::Yellow))
                };
                Line::from(vec![
                    Span::raw(prefix),
                    Span::styled(found.word.to_uppercase(), style),
                ])
            })
            .collect();
        (format!(" All Answers ({}) ", app.answers.len()), lines)
    } else {
        let lines: Vec<Line> = app
            .found
            .iter()
            .map(|word| Line::styled(word.to_uppercase(), Style::default().fg(Color::Green)))
            .collect();
        (
            format!(" Found {}/{} ", app.found.len(), app.answers.len()),
            lines,
        )
    };

    let words = Paragraph::new(lines)
        .block(Block::default().title(title).borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    f.render_widget(words, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(60),
        ])
        .split(area);

    let boards = Paragraph::new(format!("Boards: {}", app.stats.boards_played))
        .alignment(Alignment::Center);
    f.render_widget(boards, chunks[0]);

    let words = Paragraph::new(format!("Words: {}", app.stats.words_found))
        .alignment(Alignment::Center);
    f.render_widget(words, chunks[1]);

    let help_text = "←↓↑→/hjkl: Move | Space: Select | r: Reset | n: New | a: Answers | q: Quit";
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
