use crate::exploration::{ClosestBook, CoReviewedNeighbor, k_closest, top_k_raw_neighbors};
use crate::exploration_config::ExplorationConfig;
use crate::interactions::{BookId, InteractionIndex};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Both rankings for every seed book of one genre.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenreBatch {
    pub genre: String,
    pub closest: BTreeMap<BookId, Vec<ClosestBook>>,
    pub coreviewed: BTreeMap<BookId, Vec<CoReviewedNeighbor>>,
    /// Seeds with no reviews in the index.
    pub skipped: Vec<BookId>,
}

impl GenreBatch {
    pub fn new(genre: impl Into<String>) -> Self {
        Self {
            genre: genre.into(),
            ..Self::default()
        }
    }

    pub fn processed(&self) -> usize {
        self.closest.len()
    }
}

pub fn run_genre_batch(
    index: &InteractionIndex,
    genre: &str,
    seed_books: &[BookId],
    config: &ExplorationConfig,
) -> GenreBatch {
    run_genre_batch_with_progress(index, genre, seed_books, config, |_, _| {})
}

/// Runs the closest-books search and the one-hop ranking for each seed.
///
/// Seeds missing from the index are logged and listed in
/// [`GenreBatch::skipped`]; they never abort the batch.
pub fn run_genre_batch_with_progress<F>(
    index: &InteractionIndex,
    genre: &str,
    seed_books: &[BookId],
    config: &ExplorationConfig,
    mut on_seed: F,
) -> GenreBatch
where
    F: FnMut(usize, usize),
{
    let mut batch = GenreBatch::new(genre);
    let total = seed_books.len();

    for (position, seed) in seed_books.iter().enumerate() {
        let rankings = k_closest(index, seed, config.closest_k).and_then(|closest| {
            top_k_raw_neighbors(index, seed, config.coreviewed_k).map(|coreviewed| (closest, coreviewed))
        });

        match rankings {
            Ok((closest, coreviewed)) => {
                tracing::debug!(seed = %seed, found = closest.len(), "ranked closest books");
                batch.closest.insert(seed.clone(), closest);
                batch.coreviewed.insert(seed.clone(), coreviewed);
            }
            Err(error) => {
                tracing::warn!(%error, genre, "skipping seed book");
                batch.skipped.push(seed.clone());
            }
        }

        on_seed(position + 1, total);
    }

    tracing::info!(
        genre,
        processed = batch.processed(),
        skipped = batch.skipped.len(),
        "finished genre batch"
    );
    batch
}
