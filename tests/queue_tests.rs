//! Piece queue tests

use rand::rngs::StdRng;
use rand::SeedableRng;

use stackfall::core::{FigureCatalog, GameConfig, PieceQueue};
use stackfall::types::FigureId;

#[test]
fn test_queue_length_is_stable_across_configs() {
    for next in 1..=6 {
        let config = GameConfig::new(10, 20, next, FigureCatalog::standard()).unwrap();
        let mut rng = StdRng::seed_from_u64(next as u64);

        let mut queue = PieceQueue::new();
        for _ in 0..30 {
            let (_, drawn) = queue.draw_next(&config, &mut rng).unwrap();
            assert_eq!(drawn.len(), next);
            queue = drawn;
        }
    }
}

#[test]
fn test_spawned_piece_uses_catalog_matrix() {
    let config = GameConfig::default();
    let mut rng = StdRng::seed_from_u64(5);
    let (piece, _) = PieceQueue::new().draw_next(&config, &mut rng).unwrap();

    let figure = config.catalog().get(piece.figure).unwrap();
    assert_eq!(&piece.matrix, figure.matrix());
    let (row, col) = figure.center_offset();
    assert_eq!(piece.offset.y, row);
    assert_eq!(piece.offset.x, 5 + col);
}

#[test]
fn test_every_figure_eventually_drawn() {
    let config = GameConfig::default();
    let mut rng = StdRng::seed_from_u64(2024);
    let mut seen = Vec::new();

    let mut queue = PieceQueue::new();
    for _ in 0..200 {
        let (piece, next) = queue.draw_next(&config, &mut rng).unwrap();
        if !seen.contains(&piece.figure) {
            seen.push(piece.figure);
        }
        queue = next;
    }
    for id in FigureId::ALL {
        assert!(seen.contains(&id), "{id:?} never drawn");
    }
}
