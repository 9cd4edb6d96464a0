//! Collision module - the single legality check for a piece placement
//!
//! Ticking, moving, rotating and ghost projection all ask the same question
//! here, so they can never disagree about where a piece fits.

use crate::field::Field;
use crate::piece::Piece;

/// Whether `piece` cannot be placed on `field`
///
/// For each occupied matrix cell at field position (row, col):
///
/// - `row < 0` never collides, so pieces may spawn and turn above the ceiling;
/// - outside the column range or below the floor collides;
/// - a locked cell (a figure without current/ghost marker) collides.
pub fn is_colliding(field: &Field, piece: &Piece) -> bool {
    piece.cells().any(|(row, col)| {
        if row < 0 {
            return false;
        }
        match field.get(row, col) {
            Some(cell) => cell.is_locked(),
            None => true,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Matrix;
    use crate::field::Markers;
    use crate::piece::Offset;
    use crate::types::FigureId;

    fn bar(y: i32, x: i32) -> Piece {
        Piece::new(
            FigureId::I,
            Matrix::parse(&["....", "####", "....", "...."]).unwrap(),
            Offset::new(y, x),
        )
    }

    #[test]
    fn fits_inside_empty_field() {
        let field = Field::blank(4, 4);
        assert!(!is_colliding(&field, &bar(0, 0)));
        assert!(!is_colliding(&field, &bar(2, 0)));
    }

    #[test]
    fn walls_and_floor_collide() {
        let field = Field::blank(4, 4);
        assert!(is_colliding(&field, &bar(0, -1)));
        assert!(is_colliding(&field, &bar(0, 1)));
        // occupied row lands on row 4, one below the floor
        assert!(is_colliding(&field, &bar(3, 0)));
    }

    #[test]
    fn ceiling_is_exempt() {
        let field = Field::blank(4, 4);
        // occupied row sits at -1
        assert!(!is_colliding(&field, &bar(-2, 0)));
        // entirely above the ceiling even when off to the side
        assert!(!is_colliding(&field, &bar(-2, 5)));
    }

    #[test]
    fn only_locked_cells_block() {
        let field = Field::from_rows(&["....", "...T", "....", "...."]).unwrap();
        assert!(is_colliding(&field, &bar(0, 0)));

        let painted = Field::blank(4, 4)
            .imprint(&bar(0, 0), Markers::CURRENT)
            .imprint(&bar(1, 0), Markers::GHOST);
        assert!(!is_colliding(&painted, &bar(0, 0)));
        assert!(!is_colliding(&painted, &bar(1, 0)));
    }
}
