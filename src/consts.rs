//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Width of the playfield in game units
pub(crate) const GAME_WIDTH: i32 = 1000;

/// Height of the playfield in game units
pub(crate) const GAME_HEIGHT: i32 = 700;

/// Side length of one grid cell in game units.  Every coordinate on the
/// playfield is a multiple of this.
pub(crate) const SPACE_SIZE: i32 = 50;

/// Number of segments in a freshly-created snake
pub(crate) const BODY_PARTS: usize = 3;

/// Time between movements of the snake
pub(crate) const TICK_PERIOD: Duration = Duration::from_millis(200);

/// Text revealed above the playfield whenever a theme is applied
pub(crate) const TITLE: &str = "SNAKE";

/// Delay between revealing successive characters of [`TITLE`]
pub(crate) const TITLE_REVEAL_DELAY: Duration = Duration::from_millis(150);

/// Horizontal distance, in terminal columns, between title characters
pub(crate) const TITLE_SPACING: u16 = 2;

/// Number of terminal columns used to draw one grid cell, so that cells come
/// out roughly square
pub(crate) const CELL_WIDTH: u16 = 2;

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Glyphs for one cell of the snake's body
pub(crate) const SNAKE_SYMBOL: [&str; CELL_WIDTH as usize] = ["█", "█"];

/// Glyphs for the food
pub(crate) const FOOD_SYMBOL: [&str; CELL_WIDTH as usize] = ["◖", "◗"];

/// Style for the score labels
pub(crate) const LABEL_STYLE: Style = Style::new().fg(Color::White);

/// Style for the "press space" prompt shown while waiting to start
pub(crate) const PROMPT_STYLE: Style = Style::new().fg(Color::White);

/// Style for the "GAME OVER" banner
pub(crate) const GAME_OVER_STYLE: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);

/// Style for the title characters on top of the theme's snake color
pub(crate) const TITLE_STYLE: Style = Style::new().add_modifier(Modifier::BOLD);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the currently-selected theme in the theme selector
pub(crate) const MENU_SELECTION_STYLE: Style = Style::new().add_modifier(Modifier::UNDERLINED);
