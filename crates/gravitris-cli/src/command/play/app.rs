use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode};
use gravitris_engine::{Command, Game, GamePhase};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::Text,
};

use crate::ui::widgets::GameDisplay;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// The interactive play loop: draw, drain input, advance the clock.
///
/// All pending key presses of a frame are applied before the elapsed time is
/// fed to the game, so the command order within a frame is stable.
#[derive(Debug)]
pub struct App {
    game: Game,
    last_frame: Instant,
    is_exiting: bool,
}

impl App {
    pub fn new(game: Game) -> Self {
        Self {
            game,
            last_frame: Instant::now(),
            is_exiting: false,
        }
    }

    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> anyhow::Result<()> {
        self.last_frame = Instant::now();
        while !self.is_exiting {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_pending_events()?;
            self.advance_clock();
        }
        Ok(())
    }

    fn draw(&self, frame: &mut Frame<'_>) {
        let game_display = GameDisplay::new(&self.game);
        let help_text = match self.game.phase() {
            GamePhase::Playing => {
                "Controls: ← → (Move) | ↑ (Rotate) | ↓ (Soft Drop) | Space (Hard Drop) | R (Restart) | Q (Quit)"
            }
            GamePhase::GameOver => "Controls: R (Restart) | Q (Quit)",
        };
        let help_text = Text::from(help_text)
            .style(Style::default().fg(Color::DarkGray))
            .centered();

        let [main_area, help_area] =
            Layout::vertical([Constraint::Length(22), Constraint::Length(1)])
                .areas::<2>(frame.area());
        frame.render_widget(&game_display, main_area);
        frame.render_widget(help_text, help_area);
    }

    /// Waits out the rest of the frame budget, then drains every key press
    /// that arrived during it.
    fn handle_pending_events(&mut self) -> anyhow::Result<()> {
        let mut timeout = FRAME_INTERVAL.saturating_sub(self.last_frame.elapsed());
        while event::poll(timeout)? {
            let event = event::read()?;
            self.handle_event(&event);
            timeout = Duration::ZERO;
        }
        Ok(())
    }

    fn handle_event(&mut self, event: &Event) {
        if let Some(event) = event.as_key_event() {
            match event.code {
                KeyCode::Left => self.game.handle(Command::MoveLeft),
                KeyCode::Right => self.game.handle(Command::MoveRight),
                KeyCode::Up => self.game.handle(Command::Rotate),
                KeyCode::Down => self.game.handle(Command::SoftDrop),
                KeyCode::Char(' ') => self.game.handle(Command::HardDrop),
                KeyCode::Char('r') => self.game.handle(Command::Restart),
                KeyCode::Char('q') | KeyCode::Esc => self.is_exiting = true,
                _ => {}
            }
        }
    }

    fn advance_clock(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.game
            .tick(u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX));
    }
}
