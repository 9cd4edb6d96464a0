//! Queue module - lookahead of upcoming figures
//!
//! Figures are drawn independently and uniformly from the catalog through an
//! injected [`rand::Rng`], so a seeded generator reproduces a game exactly.

use std::collections::VecDeque;

use rand::Rng;

use crate::catalog::FigureCatalog;
use crate::config::GameConfig;
use crate::piece::Piece;
use crate::types::FigureId;

/// Upcoming figure ids, front first
///
/// Empty only before the first draw of a game; afterwards every draw leaves
/// exactly `next_count` ids behind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PieceQueue {
    ids: VecDeque<FigureId>,
}

impl PieceQueue {
    /// An empty (uninitialized) queue
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Next figure to spawn
    pub fn peek(&self) -> Option<FigureId> {
        self.ids.front().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = FigureId> + '_ {
        self.ids.iter().copied()
    }

    /// Take the front figure as a freshly spawned piece
    ///
    /// An empty queue is first filled with `next_count` random ids. One random
    /// id is then appended and the front one removed, so the returned queue
    /// always holds `next_count` entries. `None` only if the queue names a
    /// figure missing from `config`'s catalog.
    pub fn draw_next<R: Rng + ?Sized>(
        &self,
        config: &GameConfig,
        rng: &mut R,
    ) -> Option<(Piece, PieceQueue)> {
        let catalog = config.catalog();
        let mut ids = self.ids.clone();
        if ids.is_empty() {
            for _ in 0..config.next_count() {
                ids.push_back(random_id(catalog, rng)?);
            }
        }
        ids.push_back(random_id(catalog, rng)?);

        let front = ids.pop_front()?;
        let figure = catalog.get(front)?;
        let piece = Piece::spawn(figure, config.field_width());

        Some((piece, PieceQueue { ids }))
    }
}

fn random_id<R: Rng + ?Sized>(catalog: &FigureCatalog, rng: &mut R) -> Option<FigureId> {
    if catalog.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..catalog.len());
    catalog.nth(index).map(|figure| figure.id())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Figure, FigureCatalog};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn first_draw_fills_queue() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(7);

        let (piece, queue) = PieceQueue::new().draw_next(&config, &mut rng).unwrap();
        assert_eq!(queue.len(), config.next_count());
        assert!(config.catalog().get(piece.figure).is_some());
    }

    #[test]
    fn draws_keep_length_and_shift_front() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(11);

        let (_, mut queue) = PieceQueue::new().draw_next(&config, &mut rng).unwrap();
        for _ in 0..50 {
            let expected_front = queue.peek().unwrap();
            let tail: Vec<_> = queue.iter().skip(1).collect();

            let (piece, next) = queue.draw_next(&config, &mut rng).unwrap();
            assert_eq!(piece.figure, expected_front);
            assert_eq!(next.len(), config.next_count());
            assert_eq!(next.iter().take(tail.len()).collect::<Vec<_>>(), tail);
            queue = next;
        }
    }

    #[test]
    fn draw_does_not_touch_source_queue() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(3);
        let (_, queue) = PieceQueue::new().draw_next(&config, &mut rng).unwrap();
        let before = queue.clone();
        let _ = queue.draw_next(&config, &mut rng);
        assert_eq!(queue, before);
    }

    #[test]
    fn single_figure_catalog_always_draws_it() {
        let catalog =
            FigureCatalog::new(vec![Figure::new(FigureId::O, &["##", "##"], (0, -1)).unwrap()])
                .unwrap();
        let config = GameConfig::new(6, 8, 2, catalog).unwrap();
        let mut rng = StdRng::seed_from_u64(99);

        let (piece, queue) = PieceQueue::new().draw_next(&config, &mut rng).unwrap();
        assert_eq!(piece.figure, FigureId::O);
        assert_eq!(piece.offset.x, 2);
        assert!(queue.iter().all(|id| id == FigureId::O));
    }

    #[test]
    fn same_seed_same_sequence() {
        let config = GameConfig::default();
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);

        let mut qa = PieceQueue::new();
        let mut qb = PieceQueue::new();
        for _ in 0..20 {
            let (pa, na) = qa.draw_next(&config, &mut a).unwrap();
            let (pb, nb) = qb.draw_next(&config, &mut b).unwrap();
            assert_eq!(pa, pb);
            qa = na;
            qb = nb;
        }
    }
}
