use super::direction::Direction;
use super::geometry::{Coordinate, Playfield};
use std::collections::VecDeque;

/// Snake state.  Snate.
///
/// The body is stored head first.  Every segment is a grid-aligned
/// [`Coordinate`]; segments may overlap (the snake starts out with all of
/// them stacked on one cell).
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    pub(super) body: VecDeque<Coordinate>,
}

impl Snake {
    /// Create a new snake of `len` segments, all at `start`
    pub(crate) fn new(start: Coordinate, len: usize) -> Snake {
        Snake {
            body: std::iter::repeat_n(start, len).collect(),
        }
    }

    /// Return the position of the snake's head, or `None` if the snake has no
    /// segments at all
    pub(crate) fn head(&self) -> Option<Coordinate> {
        self.body.front().copied()
    }

    /// Return the segments of the snake, head first
    pub(crate) fn segments(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.body.iter().copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.body.len()
    }

    /// Prepend a new head `step` units away from the current one in
    /// `direction` and return it.  The tail is left in place; call
    /// [`Snake::shed_tail()`] afterwards unless the snake is growing.
    ///
    /// Returns `None` if the snake has no head to move from.
    pub(crate) fn push_head(&mut self, direction: Direction, step: i32) -> Option<Coordinate> {
        let head = direction.offset(self.head()?, step);
        self.body.push_front(head);
        Some(head)
    }

    /// Remove the last segment
    pub(crate) fn shed_tail(&mut self) {
        let _ = self.body.pop_back();
    }

    /// Return `true` if the head is outside of `playfield` or on top of any
    /// other segment.  An empty snake never collides.
    pub(crate) fn check_collision(&self, playfield: Playfield) -> bool {
        let Some(head) = self.head() else {
            return false;
        };
        !playfield.contains(head) || self.body.iter().skip(1).any(|&p| p == head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn snake<const N: usize>(cells: [(i32, i32); N]) -> Snake {
        Snake {
            body: cells.into_iter().map(Coordinate::from).collect(),
        }
    }

    #[test]
    fn new_snake_is_stacked() {
        let s = Snake::new(Coordinate::ORIGIN, 3);
        assert_eq!(s.len(), 3);
        assert_eq!(s.head(), Some(Coordinate::ORIGIN));
        assert!(s.segments().all(|p| p == Coordinate::ORIGIN));
    }

    #[test]
    fn push_head_then_shed_tail() {
        let mut s = snake([(100, 100), (50, 100), (0, 100)]);
        assert_eq!(
            s.push_head(Direction::Down, 50),
            Some(Coordinate::new(100, 150))
        );
        assert_eq!(s.len(), 4);
        s.shed_tail();
        assert_eq!(s, snake([(100, 150), (100, 100), (50, 100)]));
    }

    #[test]
    fn push_head_on_empty_snake() {
        let mut s = snake([]);
        assert_eq!(s.push_head(Direction::Up, 50), None);
        assert_eq!(s.len(), 0);
    }

    #[rstest]
    #[case::fresh_snake(snake([(0, 0), (0, 0), (0, 0)]), true)]
    #[case::moved_once(snake([(0, 50), (0, 0), (0, 0)]), false)]
    #[case::straight_line(snake([(150, 100), (100, 100), (50, 100)]), false)]
    #[case::off_right(snake([(1000, 0), (950, 0), (900, 0)]), true)]
    #[case::off_left(snake([(-50, 0), (0, 0), (50, 0)]), true)]
    #[case::off_top(snake([(0, -50), (0, 0), (0, 50)]), true)]
    #[case::off_bottom(snake([(0, 700), (0, 650), (0, 600)]), true)]
    #[case::last_cell(snake([(950, 650), (900, 650)]), false)]
    #[case::bit_tail(
        snake([(100, 100), (150, 100), (150, 150), (100, 150), (100, 100)]),
        true
    )]
    #[case::bit_middle(
        snake([(100, 100), (100, 50), (150, 50), (150, 100), (100, 100), (50, 100)]),
        true
    )]
    #[case::single_segment(snake([(500, 500)]), false)]
    #[case::empty(snake([]), false)]
    fn test_check_collision(#[case] s: Snake, #[case] collided: bool) {
        let before = s.clone();
        assert_eq!(s.check_collision(Playfield::default()), collided);
        assert_eq!(s.check_collision(Playfield::default()), collided);
        assert_eq!(s, before);
    }
}
