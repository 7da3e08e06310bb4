use crate::consts;
use rand::Rng;
use ratatui::layout::Rect;

/// A point on the playfield, measured in game units from the top-left corner.
/// Points occupied by the snake or the food are always multiples of the cell
/// size.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub(crate) struct Coordinate {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Coordinate {
    pub(crate) const ORIGIN: Coordinate = Coordinate::new(0, 0);

    pub(crate) const fn new(x: i32, y: i32) -> Coordinate {
        Coordinate { x, y }
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Coordinate {
        Coordinate { x, y }
    }
}

/// The dimensions of the playfield
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Playfield {
    pub(crate) width: i32,
    pub(crate) height: i32,
    pub(crate) cell_size: i32,
}

impl Playfield {
    pub(crate) const fn new(width: i32, height: i32, cell_size: i32) -> Playfield {
        Playfield {
            width,
            height,
            cell_size,
        }
    }

    /// Number of grid cells across
    pub(crate) fn columns(self) -> i32 {
        self.width / self.cell_size
    }

    /// Number of grid cells down
    pub(crate) fn rows(self) -> i32 {
        self.height / self.cell_size
    }

    /// Does `pos` lie within `[0, width) × [0, height)`?
    pub(crate) fn contains(self, pos: Coordinate) -> bool {
        (0..self.width).contains(&pos.x) && (0..self.height).contains(&pos.y)
    }

    /// Pick a grid-aligned coordinate uniformly at random from the whole
    /// playfield
    pub(crate) fn random_cell<R: Rng>(self, rng: &mut R) -> Coordinate {
        let x = rng.random_range(0..self.columns()) * self.cell_size;
        let y = rng.random_range(0..self.rows()) * self.cell_size;
        Coordinate::new(x, y)
    }

    /// Size, in terminal cells, of the area needed to draw the playfield
    /// (borders excluded)
    pub(crate) fn terminal_size(self) -> (u16, u16) {
        let columns = u16::try_from(self.columns()).unwrap_or(0);
        let rows = u16::try_from(self.rows()).unwrap_or(0);
        (columns.saturating_mul(consts::CELL_WIDTH), rows)
    }

    /// Return the terminal area occupied by the grid cell containing `pos`
    /// when the playfield is drawn in `area`, or `None` if `pos` is off the
    /// playfield.
    pub(crate) fn cell_area(self, pos: Coordinate, area: Rect) -> Option<Rect> {
        if !self.contains(pos) {
            return None;
        }
        let column = u16::try_from(pos.x / self.cell_size).ok()?;
        let row = u16::try_from(pos.y / self.cell_size).ok()?;
        let x = area.x.checked_add(column.checked_mul(consts::CELL_WIDTH)?)?;
        let y = area.y.checked_add(row)?;
        Some(Rect::new(x, y, consts::CELL_WIDTH, 1).intersection(area))
    }
}

impl Default for Playfield {
    fn default() -> Playfield {
        Playfield::new(consts::GAME_WIDTH, consts::GAME_HEIGHT, consts::SPACE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use rstest::rstest;

    #[test]
    fn default_grid() {
        let field = Playfield::default();
        assert_eq!(field.columns(), 20);
        assert_eq!(field.rows(), 14);
        assert_eq!(field.terminal_size(), (40, 14));
    }

    #[rstest]
    #[case(Coordinate::new(0, 0), true)]
    #[case(Coordinate::new(950, 650), true)]
    #[case(Coordinate::new(1000, 0), false)]
    #[case(Coordinate::new(0, 700), false)]
    #[case(Coordinate::new(-50, 0), false)]
    #[case(Coordinate::new(0, -50), false)]
    fn test_contains(#[case] pos: Coordinate, #[case] inside: bool) {
        assert_eq!(Playfield::default().contains(pos), inside);
    }

    #[test]
    fn random_cells_are_aligned_and_inside() {
        let field = Playfield::default();
        let mut rng = ChaCha12Rng::seed_from_u64(0x0123456789ABCDEF);
        for _ in 0..1000 {
            let pos = field.random_cell(&mut rng);
            assert!(field.contains(pos), "{pos:?} is off the playfield");
            assert_eq!(pos.x % field.cell_size, 0);
            assert_eq!(pos.y % field.cell_size, 0);
        }
    }

    #[rstest]
    #[case(Coordinate::new(0, 0), Some(Rect::new(10, 5, 2, 1)))]
    #[case(Coordinate::new(50, 100), Some(Rect::new(12, 7, 2, 1)))]
    #[case(Coordinate::new(950, 650), Some(Rect::new(48, 18, 2, 1)))]
    #[case(Coordinate::new(1000, 0), None)]
    #[case(Coordinate::new(0, -50), None)]
    fn test_cell_area(#[case] pos: Coordinate, #[case] cell: Option<Rect>) {
        let area = Rect::new(10, 5, 40, 14);
        assert_eq!(Playfield::default().cell_area(pos, area), cell);
    }
}
