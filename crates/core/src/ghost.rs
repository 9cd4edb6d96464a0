//! Ghost module - where the current piece would come to rest

use crate::collision::is_colliding;
use crate::field::Field;
use crate::piece::Piece;

/// Drop `current` straight down until the next row would collide
///
/// Returns the last non-colliding placement. Terminates because every matrix
/// has an occupied cell and the floor collides.
pub fn project(field: &Field, current: &Piece) -> Piece {
    let mut ghost = current.clone();
    loop {
        let candidate = ghost.shifted(1, 0);
        if is_colliding(field, &candidate) {
            return ghost;
        }
        ghost = candidate;
    }
}
