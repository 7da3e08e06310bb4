use crate::command::Command;
use crate::config::Config;
use crate::game::Game;
use crate::util::get_display_area;
use crate::warning::{Warning, WarningOutcome};
use crossterm::event::Event;
use log::warn;
use rand::{rngs::ThreadRng, Rng};
use ratatui::{backend::Backend, Frame, Terminal};
use std::collections::VecDeque;
use std::io;

#[derive(Clone, Debug)]
pub(crate) struct App<R = ThreadRng> {
    game: Game<R>,
    /// Warnings waiting to be shown; the front one is on screen and receives
    /// all key presses until dismissed
    warnings: VecDeque<Warning>,
    quitting: bool,
}

impl App<ThreadRng> {
    pub(crate) fn new(config: &Config, warnings: Vec<Warning>) -> App<ThreadRng> {
        App::with_game(Game::new(), config, warnings)
    }
}

impl<R: Rng> App<R> {
    fn with_game(mut game: Game<R>, config: &Config, warnings: Vec<Warning>) -> App<R> {
        let mut warnings = VecDeque::from(warnings);
        if let Some(name) = config.theme.as_deref() {
            if let Err(e) = game.apply_theme(name) {
                warn!("Could not apply configured theme: {e}");
                warnings.push_back(Warning::from(e));
            }
        }
        App {
            game,
            warnings,
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting {
            terminal.draw(|frame| self.draw(frame))?;
            self.process_input()?;
        }
        Ok(())
    }

    fn draw(&self, frame: &mut Frame<'_>) {
        self.game.draw(frame);
        if let Some(warning) = self.warnings.front() {
            frame.render_widget(warning, get_display_area(frame.area()));
        }
    }

    fn process_input(&mut self) -> io::Result<()> {
        if let Some(event) = self.game.wait_for_event()? {
            self.handle_event(event);
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Some(warning) = self.warnings.front() {
            let outcome = event
                .as_key_press_event()
                .and_then(Command::from_key_event)
                .and_then(|cmd| warning.handle_command(cmd));
            match outcome {
                Some(WarningOutcome::Dismissed) => {
                    self.warnings.pop_front();
                }
                Some(WarningOutcome::Quit) => self.quitting = true,
                None => (),
            }
        } else if self.game.handle_event(event).is_break() {
            self.quitting = true;
        }
    }
}
