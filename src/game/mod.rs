mod direction;
mod food;
mod geometry;
mod snake;
mod title;
use self::direction::Direction;
use self::food::Food;
use self::geometry::{Coordinate, Playfield};
use self::snake::Snake;
use self::title::TitleAnimation;
use crate::command::Command;
use crate::consts;
use crate::theme::{InvalidThemeError, Theme, ThemeName};
use crate::util::{center_rect, get_display_area};
use crossterm::event::{poll, read, Event};
use log::{debug, error, info};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
    Frame,
};
use std::ops::ControlFlow;
use std::time::Instant;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    playfield: Playfield,
    theme_name: ThemeName,
    theme: Theme,
    snake: Snake,
    food: Food,
    /// The direction the snake moved in on the most recent tick
    heading: Option<Direction>,
    /// The direction the snake will move in on the next tick
    direction: Option<Direction>,
    score: u32,
    high_score: u32,
    state: GameState,
    title: TitleAnimation,
    next_tick: Option<Instant>,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new() -> Self {
        Game::new_with_rng(rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(mut rng: R) -> Game<R> {
        let playfield = Playfield::default();
        let theme_name = ThemeName::default();
        let food = Food::spawn(playfield, &mut rng);
        Game {
            rng,
            playfield,
            theme_name,
            theme: theme_name.theme(),
            snake: Snake::new(Coordinate::ORIGIN, consts::BODY_PARTS),
            food,
            heading: None,
            direction: None,
            score: 0,
            high_score: 0,
            state: GameState::Idle,
            title: TitleAnimation::start(Instant::now()),
            next_tick: None,
        }
    }

    /// Wait for either the next timer to come due or an input event.  If a
    /// timer fires first, it is handled here and `None` is returned;
    /// otherwise, the event is returned for the caller to dispatch.
    pub(crate) fn wait_for_event(&mut self) -> std::io::Result<Option<Event>> {
        if let Some(deadline) = self.next_deadline() {
            let wait = deadline.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                self.fire_timers(Instant::now());
                return Ok(None);
            }
        }
        read().map(Some)
    }

    fn fire_timers(&mut self, now: Instant) {
        if self.next_tick.is_some_and(|when| when <= now) {
            self.next_tick = None;
            self.step();
        }
        self.title.advance(now);
    }

    /// Advance the game by one tick.  Does nothing unless the game is
    /// running.
    pub(crate) fn step(&mut self) {
        if !self.running() {
            return;
        }
        let Some(direction) = self.direction else {
            error!("Game is running without a direction; ending it");
            self.game_over();
            return;
        };
        self.heading = Some(direction);
        let Some(head) = self.snake.push_head(direction, self.playfield.cell_size) else {
            error!("Snake has no segments; ending game");
            self.game_over();
            return;
        };
        if head == self.food.position() {
            self.score = self.score.saturating_add(1);
            if self.score > self.high_score {
                self.high_score = self.score;
            }
            debug!(
                "Food eaten at ({}, {}); score = {}",
                head.x, head.y, self.score
            );
            self.food = Food::spawn(self.playfield, &mut self.rng);
        } else {
            self.snake.shed_tail();
        }
        if self.snake.check_collision(self.playfield) {
            info!(
                "Snake collided at ({}, {}); final score {}, length {}",
                head.x,
                head.y,
                self.score,
                self.snake.len()
            );
            self.game_over();
        } else {
            self.next_tick = Some(Instant::now() + consts::TICK_PERIOD);
        }
    }

    /// Start moving.  Only has an effect while waiting for the game to
    /// start.
    pub(crate) fn start_game(&mut self) {
        if self.state != GameState::Idle {
            return;
        }
        let direction = *self.direction.get_or_insert(Direction::Down);
        info!(
            "Starting game with theme {}, heading {direction:?}",
            self.theme_name
        );
        self.state = GameState::Running;
        self.step();
    }

    /// Look up the theme named `name` and start a new game with it.  On
    /// error, nothing is changed.
    pub(crate) fn apply_theme(&mut self, name: &str) -> Result<(), InvalidThemeError> {
        let theme_name = name.parse::<ThemeName>()?;
        self.set_theme(theme_name);
        Ok(())
    }

    /// Switch to the given theme and reset everything except the high score
    pub(crate) fn set_theme(&mut self, theme_name: ThemeName) {
        info!("Applying theme {theme_name}");
        self.theme_name = theme_name;
        self.theme = theme_name.theme();
        self.score = 0;
        self.heading = None;
        self.direction = None;
        self.state = GameState::Idle;
        self.snake = Snake::new(Coordinate::ORIGIN, consts::BODY_PARTS);
        self.food = Food::spawn(self.playfield, &mut self.rng);
        self.next_tick = None;
        self.title = TitleAnimation::start(Instant::now());
    }

    fn reset(&mut self) {
        self.set_theme(self.theme_name);
    }

    /// Act on an input event.  Returns `Break` if the user asked to quit.
    pub(crate) fn handle_event(&mut self, event: Event) -> ControlFlow<()> {
        let Some(cmd) = event
            .as_key_press_event()
            .and_then(Command::from_key_event)
        else {
            return ControlFlow::Continue(());
        };
        match (self.state, cmd) {
            (_, Command::Quit | Command::Q) => return ControlFlow::Break(()),
            (_, Command::Next) => self.set_theme(self.theme_name.cycle_next()),
            (_, Command::Prev) => self.set_theme(self.theme_name.cycle_prev()),
            (_, Command::Start) => self.start_game(),
            (_, Command::Up) => self.on_key(Direction::Up),
            (_, Command::Down) => self.on_key(Direction::Down),
            (_, Command::Left) => self.on_key(Direction::Left),
            (_, Command::Right) => self.on_key(Direction::Right),
            (GameState::GameOver, Command::Enter | Command::R) => self.reset(),
            _ => (),
        }
        ControlFlow::Continue(())
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    /// Request that the snake turn to face `direction` on the next tick.
    /// Before the game starts, this picks the first move.  Ignored once the
    /// game is over, and ignored if `direction` is the opposite of the way
    /// the snake last moved.
    pub(crate) fn on_key(&mut self, direction: Direction) {
        if self.state == GameState::GameOver {
            return;
        }
        if self.heading.map(Direction::reverse) == Some(direction) {
            debug!("Ignoring reversal to {direction:?}");
            return;
        }
        self.direction = Some(direction);
    }

    #[cfg(test)]
    pub(crate) fn theme_name(&self) -> ThemeName {
        self.theme_name
    }

    pub(crate) fn score_label(&self) -> String {
        format!("Score: {}", self.score)
    }

    pub(crate) fn high_score_label(&self) -> String {
        format!("High Score: {}", self.high_score)
    }

    /// The earliest time at which something on screen needs to change
    /// without any input from the user
    fn next_deadline(&self) -> Option<Instant> {
        self.next_tick.into_iter().chain(self.title.next_reveal()).min()
    }

    fn running(&self) -> bool {
        self.state == GameState::Running
    }

    fn game_over(&mut self) {
        self.state = GameState::GameOver;
        self.next_tick = None;
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [labels_area, selector_area, _, title_area, field_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(display);

        Line::styled(format!(" {}", self.score_label()), consts::LABEL_STYLE)
            .render(labels_area, buf);
        Line::styled(format!("{} ", self.high_score_label()), consts::LABEL_STYLE)
            .right_aligned()
            .render(labels_area, buf);

        Line::from_iter([
            Span::raw("Theme: ◀ "),
            Span::styled(
                format!(
                    "{:^width$}",
                    self.theme_name,
                    width = usize::from(ThemeName::DISPLAY_WIDTH)
                ),
                consts::MENU_SELECTION_STYLE,
            ),
            Span::raw(" ▶ ("),
            Span::styled("Tab", consts::KEY_STYLE),
            Span::raw(")"),
        ])
        .centered()
        .render(selector_area, buf);

        if self.state != GameState::GameOver {
            self.title.banner(self.theme.snake).render(title_area, buf);
        }

        let (width, height) = self.playfield.terminal_size();
        let block_area = center_rect(
            field_area,
            Size {
                width: width.saturating_add(2),
                height: height.saturating_add(2),
            },
        );
        let block = Block::bordered().style(Style::new().bg(self.theme.background));
        let inner = block.inner(block_area);
        block.render(block_area, buf);
        let middle = Rect {
            y: inner.y.saturating_add(inner.height / 2),
            height: 1,
            ..inner
        };

        match self.state {
            GameState::Idle | GameState::Running => {
                let mut canvas = Canvas {
                    playfield: self.playfield,
                    area: inner,
                    buf,
                };
                canvas.draw_cell(
                    self.food.position(),
                    consts::FOOD_SYMBOL,
                    Style::new().fg(self.theme.food),
                );
                let snake_style = Style::new().fg(self.theme.snake);
                for pos in self.snake.segments() {
                    canvas.draw_cell(pos, consts::SNAKE_SYMBOL, snake_style);
                }
                if self.state == GameState::Idle {
                    Line::styled("Press SPACE to start", consts::PROMPT_STYLE)
                        .centered()
                        .render(middle, buf);
                }
            }
            GameState::GameOver => {
                let above = Rect {
                    y: middle.y.saturating_sub(1),
                    ..middle
                };
                let below = Rect {
                    y: middle.y.saturating_add(1),
                    ..middle
                };
                Line::styled("GAME OVER", consts::GAME_OVER_STYLE)
                    .centered()
                    .render(above, buf);
                Line::from_iter([
                    Span::raw("[Reset Game ("),
                    Span::styled("Enter", consts::KEY_STYLE),
                    Span::raw(")]"),
                ])
                .centered()
                .render(below, buf);
            }
        }

        Line::from_iter([
            Span::raw("Move: "),
            Span::styled("← ↓ ↑ →", consts::KEY_STYLE),
            Span::raw(" — Start: "),
            Span::styled("Space", consts::KEY_STYLE),
            Span::raw(" — Quit: "),
            Span::styled("q", consts::KEY_STYLE),
        ])
        .centered()
        .render(help_area, buf);
    }
}

/// Draws grid cells of the playfield into the terminal area reserved for it
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    playfield: Playfield,
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(
        &mut self,
        pos: Coordinate,
        glyphs: [&str; consts::CELL_WIDTH as usize],
        style: Style,
    ) {
        let Some(cell_area) = self.playfield.cell_area(pos, self.area) else {
            return;
        };
        for (x, glyph) in (cell_area.left()..cell_area.right()).zip(glyphs) {
            if let Some(cell) = self.buf.cell_mut((x, cell_area.y)) {
                cell.set_symbol(glyph);
                cell.set_style(style);
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum GameState {
    /// Waiting for the player to press the start key
    Idle,
    Running,
    GameOver,
}
