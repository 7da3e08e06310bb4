use super::geometry::Coordinate;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Return the coordinate `step` units away from `pos` in this direction.
    /// No bounds checking is performed; moving off the playfield is a
    /// collision, not something to prevent here.
    pub(crate) fn offset(self, pos: Coordinate, step: i32) -> Coordinate {
        let Coordinate { mut x, mut y } = pos;
        match self {
            Direction::Up => y -= step,
            Direction::Down => y += step,
            Direction::Left => x -= step,
            Direction::Right => x += step,
        }
        Coordinate::new(x, y)
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Direction::Up, Coordinate::new(100, 200), Coordinate::new(100, 150))]
    #[case(Direction::Down, Coordinate::new(100, 200), Coordinate::new(100, 250))]
    #[case(Direction::Left, Coordinate::new(100, 200), Coordinate::new(50, 200))]
    #[case(Direction::Right, Coordinate::new(100, 200), Coordinate::new(150, 200))]
    #[case(Direction::Up, Coordinate::new(0, 0), Coordinate::new(0, -50))]
    #[case(Direction::Right, Coordinate::new(950, 0), Coordinate::new(1000, 0))]
    fn test_offset(#[case] d: Direction, #[case] pos: Coordinate, #[case] r: Coordinate) {
        assert_eq!(d.offset(pos, 50), r);
    }

    #[rstest]
    #[case(Direction::Up, Direction::Down)]
    #[case(Direction::Down, Direction::Up)]
    #[case(Direction::Left, Direction::Right)]
    #[case(Direction::Right, Direction::Left)]
    fn test_reverse(#[case] d: Direction, #[case] r: Direction) {
        assert_eq!(d.reverse(), r);
        assert_eq!(d.reverse().reverse(), d);
    }
}
