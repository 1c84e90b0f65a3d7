//! TUI rendering with ratatui
//!
//! Board, statistics and message panels for the game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::Mark;
use crate::output::formatters::{format_average, format_duration, format_optional_duration};
use crate::stats::StatsStore;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<S: StatsStore + ?Sized>(f: &mut Frame, app: &App<'_, S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔐 MASTERMIND")
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

fn mark_style(mark: Mark) -> Style {
    match mark {
        Mark::Exact => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Mark::Partial => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Mark::Absent => Style::default().fg(Color::DarkGray),
    }
}

fn render_board<S: StatsStore + ?Sized>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let width = app.config.preset().column_width() + 1;
    let history = app.session.history();

    // Newest turns at the bottom; drop the oldest when the panel is full
    let visible = usize::from(area.height.saturating_sub(2)) / 2;
    let skip = history.len().saturating_sub(visible);

    let mut lines = Vec::with_capacity(history.len() * 2);
    for (i, turn) in history.iter().enumerate().skip(skip) {
        let mut marks = vec![Span::styled(
            format!("{:>3}. ", i + 1),
            Style::default().fg(Color::DarkGray),
        )];
        marks.extend(turn.feedback.marks().iter().map(|&m| {
            Span::styled(format!("{:>width$}", m.symbol()), mark_style(m))
        }));
        lines.push(Line::from(marks));

        let values: String = turn
            .guess
            .values()
            .iter()
            .map(|v| format!("{v:>width$}"))
            .collect();
        lines.push(Line::from(vec![
            Span::raw("     "),
            Span::styled(values, Style::default().fg(Color::White)),
        ]));
    }

    if lines.is_empty() {
        lines.push(Line::from("No guesses yet"));
    }

    let title = format!(" Board ({}) ", app.config);
    let board = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_side_panel<S: StatsStore + ?Sized>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(12), Constraint::Min(4)])
        .split(area);

    render_statistics(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_statistics<S: StatsStore + ?Sized>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let stats = &app.stats;
    let label = Style::default().fg(Color::Cyan);
    let row = |name: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{name:<18}"), label),
            Span::raw(value),
        ])
    };

    let content = vec![
        row("Games played", stats.played.to_string()),
        row("Times quit", stats.quit.to_string()),
        row("Current streak", stats.streak.to_string()),
        row("Longest streak", stats.best_streak.to_string()),
        row("Average guesses", format_average(stats.average_guesses())),
        row("First guess wins", stats.first_guess_wins.to_string()),
        row("Total guesses", stats.total_guesses.to_string()),
        row("Fastest game", format_optional_duration(stats.fastest)),
        row("Longest game", format_optional_duration(stats.longest)),
        row("Total time", format_duration(stats.total_time)),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_messages<S: StatsStore + ?Sized>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
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

fn render_input<S: StatsStore + ?Sized>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::WinCelebration => (
            " 🎉 CODE CRACKED! 🎉 | Press 'n' for new game or 'q' to quit ".to_string(),
            String::new(),
            Color::Green,
        ),
        InputMode::Guessing => (
            format!(
                " Guess #{} ({} numbers, 'q' to give up) ",
                app.session.guess_count() + 1,
                app.config.length()
            ),
            app.input_buffer.clone(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<S: StatsStore + ?Sized>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let elapsed = if app.input_mode == InputMode::Guessing {
        format_duration(app.session.elapsed())
    } else {
        app.last_outcome
            .map_or_else(String::new, |o| format_duration(o.elapsed))
    };

    let help = format!(
        "Guesses: {} | Time: {elapsed} | ! right place  ^ wrong place  x not in code | Esc: Quit",
        app.session.guess_count()
    );
    let status = Paragraph::new(help)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}
