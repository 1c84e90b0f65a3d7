//! TUI application state and logic

use crate::core::{GameConfig, Mark};
use crate::game::{GuessInput, Session};
use crate::stats::{AggregateStatistics, GameOutcome, StatsStore};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a, S: StatsStore + ?Sized> {
    pub config: GameConfig,
    pub session: Session,
    pub stats: AggregateStatistics,
    pub last_outcome: Option<GameOutcome>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub input_mode: InputMode,
    pub should_quit: bool,
    store: &'a S,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    WinCelebration,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a, S: StatsStore + ?Sized> App<'a, S> {
    /// Load the saved statistics and start the first game
    pub fn new(config: GameConfig, store: &'a S, mut rng: StdRng) -> Self {
        let session = Session::start(config, &mut rng);

        Self {
            config,
            session,
            stats: store.load(),
            last_outcome: None,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: format!("Crack the hidden code: {config}."),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type your guess separated by spaces, 'q' to give up".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            input_mode: InputMode::Guessing,
            should_quit: false,
            store,
            rng,
        }
    }

    /// Handle one submitted line from the input box
    pub fn handle_input(&mut self, line: &str) {
        match GuessInput::parse(line, &self.config) {
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
            Ok(GuessInput::Quit) => self.quit(),
            Ok(GuessInput::Guess(guess)) => match self.session.submit(guess) {
                Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
                Ok(turn) => {
                    let text = format!(
                        "{} → {} ({} exact, {} partial)",
                        turn.guess,
                        turn.feedback,
                        turn.feedback.count(Mark::Exact),
                        turn.feedback.count(Mark::Partial)
                    );
                    self.add_message(&text, MessageStyle::Info);
                    if self.session.is_won() {
                        self.finish_game(false);
                    }
                }
            },
        }
        self.input_buffer.clear();
    }

    /// Leave the application, recording an abandoned game if one is running
    pub fn quit(&mut self) {
        if self.input_mode == InputMode::Guessing {
            self.finish_game(true);
        }
        self.should_quit = true;
    }

    pub fn new_game(&mut self) {
        self.session = Session::start(self.config, &mut self.rng);
        self.input_mode = InputMode::Guessing;
        self.input_buffer.clear();
        self.messages.clear();
        self.add_message("New game started! Good luck.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    fn finish_game(&mut self, quit: bool) {
        let outcome = self.session.outcome(quit);
        self.stats.record(&outcome);
        self.last_outcome = Some(outcome);
        log::info!(
            "game over: quit={} guesses={} elapsed={:?}",
            outcome.quit,
            outcome.guess_count,
            outcome.elapsed
        );

        if let Err(e) = self.store.save(&self.stats) {
            log::warn!("could not save statistics: {e:#}");
            self.add_message(
                &format!("Warning: statistics were not saved ({e:#})"),
                MessageStyle::Error,
            );
        }

        if !quit {
            self.input_mode = InputMode::WinCelebration;
            let celebration = match outcome.guess_count {
                1 => "🎯 FIRST TRY! Extraordinary! 🌟",
                2..=4 => "✨ SPLENDID! Code cracked! ✨",
                _ => "🎉 You did it! 🎉",
            };
            self.add_message(celebration, MessageStyle::Success);
            self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
        }
    }
}

/// Run the TUI application
///
/// Returns the statistics as they stood when the player left.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: StatsStore + ?Sized>(mut app: App<'_, S>) -> Result<AggregateStatistics> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    settle(app, res)
}

/// Final statistics once the event loop has ended
///
/// A game still in progress when the loop fails is recorded as quit before the
/// error is returned.
fn settle<S: StatsStore + ?Sized>(
    mut app: App<'_, S>,
    res: Result<()>,
) -> Result<AggregateStatistics> {
    if let Err(e) = res {
        log::warn!("terminal UI stopped: {e:#}");
        app.quit();
        return Err(e);
    }
    Ok(app.stats)
}

fn run_app<B, S>(terminal: &mut Terminal<B>, app: &mut App<'_, S>) -> Result<()>
where
    B: ratatui::backend::Backend,
    S: StatsStore + ?Sized,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let ctrl_c =
                key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);

            match app.input_mode {
                InputMode::WinCelebration => match key.code {
                    _ if ctrl_c => app.quit(),
                    KeyCode::Char('q') | KeyCode::Esc => app.quit(),
                    KeyCode::Char('n') => app.new_game(),
                    _ => {
                        // In celebration mode, ignore other keys
                    }
                },
                InputMode::Guessing => match key.code {
                    _ if ctrl_c => app.quit(),
                    KeyCode::Esc => app.quit(),
                    KeyCode::Char(c) => app.input_buffer.push(c),
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => {
                        let input = app.input_buffer.clone();
                        app.handle_input(&input);
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
