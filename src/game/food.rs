use super::geometry::{Coordinate, Playfield};
use rand::Rng;

/// The single piece of food on the playfield
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Food {
    pub(super) position: Coordinate,
}

impl Food {
    /// Place food on a uniformly random cell of `playfield`.
    ///
    /// The snake's body is not consulted, so the food can land underneath
    /// it.
    pub(crate) fn spawn<R: Rng>(playfield: Playfield, rng: &mut R) -> Food {
        Food {
            position: playfield.random_cell(rng),
        }
    }

    pub(crate) fn position(&self) -> Coordinate {
        self.position
    }
}
