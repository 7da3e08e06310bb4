//! The staggered reveal of the game title
use crate::consts;
use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};
use std::time::{Duration, Instant};

/// One character of the title and when to show it
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct RevealStep {
    pub(crate) ch: char,

    /// Column offset of the character from the left edge of the title
    pub(crate) column: u16,

    /// Time after the start of the animation at which the character appears
    pub(crate) delay: Duration,
}

/// Return the steps for revealing `text` one character at a time, `spacing`
/// columns apart, with `interval` between characters.  The first character
/// appears immediately.
pub(crate) fn reveal_steps(
    text: &str,
    spacing: u16,
    interval: Duration,
) -> impl Iterator<Item = RevealStep> + '_ {
    (0u16..).zip(text.chars()).map(move |(i, ch)| RevealStep {
        ch,
        column: i.saturating_mul(spacing),
        delay: interval.saturating_mul(u32::from(i)),
    })
}

/// Progress of the title animation
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct TitleAnimation {
    steps: Vec<RevealStep>,
    started: Instant,
    revealed: usize,
}

impl TitleAnimation {
    /// Start revealing [`consts::TITLE`] as of `now`
    pub(crate) fn start(now: Instant) -> TitleAnimation {
        let steps = reveal_steps(
            consts::TITLE,
            consts::TITLE_SPACING,
            consts::TITLE_REVEAL_DELAY,
        )
        .collect();
        let mut anim = TitleAnimation {
            steps,
            started: now,
            revealed: 0,
        };
        anim.advance(now);
        anim
    }

    /// Reveal every character that is due as of `now`
    pub(crate) fn advance(&mut self, now: Instant) {
        let elapsed = now.saturating_duration_since(self.started);
        self.revealed = self.steps.iter().take_while(|st| st.delay <= elapsed).count();
    }

    /// When the next character is due, or `None` if the whole title is
    /// showing
    pub(crate) fn next_reveal(&self) -> Option<Instant> {
        self.steps
            .get(self.revealed)
            .map(|st| self.started + st.delay)
    }

    pub(crate) fn revealed(&self) -> usize {
        self.revealed
    }

    /// Total width of the fully-revealed title in columns
    pub(crate) fn width(&self) -> u16 {
        self.steps.last().map_or(0, |st| st.column.saturating_add(1))
    }

    /// Return a widget that draws the characters revealed so far in `color`
    pub(crate) fn banner(&self, color: Color) -> TitleBanner<'_> {
        TitleBanner { anim: self, color }
    }
}

/// Widget for drawing a [`TitleAnimation`] centered in a one-line area
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct TitleBanner<'a> {
    anim: &'a TitleAnimation,
    color: Color,
}

impl Widget for TitleBanner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let left = area
            .x
            .saturating_add(area.width.saturating_sub(self.anim.width()) / 2);
        let style = consts::TITLE_STYLE.fg(self.color);
        for st in self.anim.steps.iter().take(self.anim.revealed()) {
            let x = left.saturating_add(st.column);
            if x >= area.right() {
                break;
            }
            if let Some(cell) = buf.cell_mut((x, area.y)) {
                cell.set_char(st.ch);
                cell.set_style(style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps() {
        let steps = reveal_steps("ABC", 3, Duration::from_millis(100)).collect::<Vec<_>>();
        assert_eq!(
            steps,
            [
                RevealStep {
                    ch: 'A',
                    column: 0,
                    delay: Duration::ZERO
                },
                RevealStep {
                    ch: 'B',
                    column: 3,
                    delay: Duration::from_millis(100)
                },
                RevealStep {
                    ch: 'C',
                    column: 6,
                    delay: Duration::from_millis(200)
                },
            ]
        );
    }

    #[test]
    fn reveal_schedule() {
        let t0 = Instant::now();
        let mut anim = TitleAnimation::start(t0);
        assert_eq!(anim.revealed(), 1);
        assert_eq!(anim.next_reveal(), Some(t0 + Duration::from_millis(150)));
        anim.advance(t0 + Duration::from_millis(149));
        assert_eq!(anim.revealed(), 1);
        anim.advance(t0 + Duration::from_millis(150));
        assert_eq!(anim.revealed(), 2);
        anim.advance(t0 + Duration::from_millis(450));
        assert_eq!(anim.revealed(), 4);
        assert_eq!(anim.next_reveal(), Some(t0 + Duration::from_millis(600)));
        anim.advance(t0 + Duration::from_secs(5));
        assert_eq!(anim.revealed(), 5);
        assert_eq!(anim.next_reveal(), None);
    }

    #[test]
    fn render_partial() {
        let t0 = Instant::now();
        let mut anim = TitleAnimation::start(t0);
        anim.advance(t0 + Duration::from_millis(300));
        let area = Rect::new(0, 0, 15, 1);
        let mut buffer = Buffer::empty(area);
        anim.banner(Color::Green).render(area, &mut buffer);
        let mut expected = Buffer::with_lines(["   S N A       "]);
        let style = consts::TITLE_STYLE.fg(Color::Green);
        expected.set_style(Rect::new(3, 0, 1, 1), style);
        expected.set_style(Rect::new(5, 0, 1, 1), style);
        expected.set_style(Rect::new(7, 0, 1, 1), style);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn render_complete() {
        let t0 = Instant::now();
        let mut anim = TitleAnimation::start(t0);
        anim.advance(t0 + Duration::from_secs(1));
        let area = Rect::new(0, 0, 11, 1);
        let mut buffer = Buffer::empty(area);
        anim.banner(Color::Blue).render(area, &mut buffer);
        let mut expected = Buffer::with_lines([" S N A K E "]);
        let style = consts::TITLE_STYLE.fg(Color::Blue);
        for x in [1, 3, 5, 7, 9] {
            expected.set_style(Rect::new(x, 0, 1, 1), style);
        }
        pretty_assertions::assert_eq!(buffer, expected);
    }
}
