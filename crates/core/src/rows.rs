//! Rows module - removing completed rows and compacting the field

use crate::field::Field;

/// Remove every full row and let the rows above fall
///
/// Single bottom-to-top pass: a surviving row moves down by the number of full
/// rows found below it, and whatever is left at the top stays blank. Returns the
/// compacted field and the number of rows removed.
pub fn clear_full_rows(field: &Field) -> (Field, usize) {
    let mut result = Field::blank(field.width(), field.height());
    let mut cleared = 0;

    for row in (0..field.height()).rev() {
        if field.is_row_full(row) {
            cleared += 1;
        } else {
            result.copy_row_from(row + cleared, field, row);
        }
    }

    (result, cleared)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_to_clear() {
        let field = Field::from_rows(&["....", "I...", "II.."]).unwrap();
        let (out, cleared) = clear_full_rows(&field);
        assert_eq!(cleared, 0);
        assert_eq!(out, field);
    }

    #[test]
    fn top_rows_full() {
        let field = Field::from_rows(&["IIII", "OOOO", "TTTT", "S..."]).unwrap();
        let (out, cleared) = clear_full_rows(&field);
        assert_eq!(cleared, 3);
        assert_eq!(
            out,
            Field::from_rows(&["....", "....", "....", "S..."]).unwrap()
        );
    }

    #[test]
    fn interleaved_rows_compact_in_order() {
        let field = Field::from_rows(&[
            "Z...", //
            "JJJJ",
            ".L..",
            "IIII",
            "..T.",
        ])
        .unwrap();
        let (out, cleared) = clear_full_rows(&field);
        assert_eq!(cleared, 2);
        assert_eq!(
            out,
            Field::from_rows(&["....", "....", "Z...", ".L..", "..T."]).unwrap()
        );
    }

    #[test]
    fn whole_field_full() {
        let field = Field::from_rows(&["OO", "OO"]).unwrap();
        let (out, cleared) = clear_full_rows(&field);
        assert_eq!(cleared, 2);
        assert_eq!(out, Field::blank(2, 2));
    }
}
