//! Scoring module - row clears to points
//!
//! One point per cleared row, except a tetris (four rows at once) which is
//! worth a flat bonus instead. There is no progressive curve for two or three
//! rows.

use crate::types::{TETRIS_BONUS, TETRIS_ROWS};

/// Score delta for a lock that cleared `cleared` rows
pub fn score_for(cleared: usize) -> u32 {
    if cleared == TETRIS_ROWS {
        TETRIS_BONUS
    } else {
        cleared as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_below_tetris() {
        assert_eq!(score_for(0), 0);
        assert_eq!(score_for(1), 1);
        assert_eq!(score_for(2), 2);
        assert_eq!(score_for(3), 3);
    }

    #[test]
    fn tetris_is_flat_bonus() {
        assert_eq!(score_for(4), 5);
    }

    #[test]
    fn beyond_four_is_linear_again() {
        // only reachable with taller custom figures
        assert_eq!(score_for(5), 5);
        assert_eq!(score_for(6), 6);
    }
}
