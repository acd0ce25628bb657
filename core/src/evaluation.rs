//! How well graph proximity predicts genre membership.
//!
//! Every ranking of a seed book is scored by the share of its leading
//! neighbors that carry the seed's genre among their top shelf tags, and the
//! scores are summarized per genre.

use crate::batch::GenreBatch;
use crate::degrees::DegreeTable;
use crate::interactions::BookId;
use crate::string_normalization::tag_mentions_genre;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Shelf tags per book, most popular first.
pub type BookGenres = FxHashMap<BookId, Vec<String>>;

#[derive(Debug, Clone, Copy)]
pub struct EvaluationConfig {
    /// Leading neighbors inspected per seed book
    pub neighbors_checked: usize,
    /// Leading shelf tags inspected per neighbor
    pub top_genres: usize,
    /// Highest-degree books used for the baseline
    pub baseline_books: usize,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            neighbors_checked: 10,
            top_genres: 5,
            baseline_books: 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreSummary {
    pub genre: String,
    pub mean: f64,
    pub std: f64,
    pub samples: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreBaseline {
    pub genre: String,
    pub matching: usize,
    pub checked: usize,
}

impl GenreBaseline {
    pub fn percent(&self) -> f64 {
        if self.checked == 0 {
            return 0.0;
        }
        self.matching as f64 / self.checked as f64 * 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookAppearances {
    pub book_id: BookId,
    pub total: usize,
    pub per_genre: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppearanceReport {
    pub seeds_per_genre: BTreeMap<String, usize>,
    pub books: Vec<BookAppearances>,
}

impl AppearanceReport {
    /// Share of the genre's seed books that had `book` among their closest.
    pub fn percent(&self, book: &BookAppearances, genre: &str) -> f64 {
        let seeds = self.seeds_per_genre.get(genre).copied().unwrap_or(0);
        let count = book.per_genre.get(genre).copied().unwrap_or(0);
        if seeds == 0 {
            return 0.0;
        }
        count as f64 / seeds as f64 * 100.0
    }
}

pub fn has_genre(tags: &[String], genre: &str, top_genres: usize) -> bool {
    tags.iter()
        .take(top_genres)
        .any(|tag| tag_mentions_genre(tag, genre))
}

/// Percentage of the first `neighbors_checked` books tagged with `genre`.
///
/// The denominator is always `neighbors_checked`, so short rankings score
/// lower. Books without shelf data count as misses.
pub fn genre_match_percent<'a, I>(
    neighbors: I,
    genre: &str,
    genres: &BookGenres,
    config: &EvaluationConfig,
) -> f64
where
    I: IntoIterator<Item = &'a str>,
{
    if config.neighbors_checked == 0 {
        return 0.0;
    }

    let matching = neighbors
        .into_iter()
        .take(config.neighbors_checked)
        .filter(|book_id| {
            genres
                .get(*book_id)
                .is_some_and(|tags| has_genre(tags, genre, config.top_genres))
        })
        .count();

    matching as f64 / config.neighbors_checked as f64 * 100.0
}

/// Mean and population standard deviation of per-seed percentages.
pub fn summarize(genre: &str, percents: &[f64]) -> GenreSummary {
    let samples = percents.len();
    if samples == 0 {
        return GenreSummary {
            genre: genre.to_string(),
            mean: 0.0,
            std: 0.0,
            samples,
        };
    }

    let mean = percents.iter().sum::<f64>() / samples as f64;
    let variance = percents
        .iter()
        .map(|percent| (percent - mean).powi(2))
        .sum::<f64>()
        / samples as f64;

    GenreSummary {
        genre: genre.to_string(),
        mean,
        std: variance.sqrt(),
        samples,
    }
}

pub fn evaluate_closest(
    batch: &GenreBatch,
    genres: &BookGenres,
    config: &EvaluationConfig,
) -> GenreSummary {
    let percents: Vec<f64> = batch
        .closest
        .values()
        .map(|closest| {
            let neighbors = closest.iter().map(|book| book.book_id.as_str());
            genre_match_percent(neighbors, &batch.genre, genres, config)
        })
        .collect();

    summarize(&batch.genre, &percents)
}

pub fn evaluate_coreviewed(
    batch: &GenreBatch,
    genres: &BookGenres,
    config: &EvaluationConfig,
) -> GenreSummary {
    let percents: Vec<f64> = batch
        .coreviewed
        .values()
        .map(|coreviewed| {
            let neighbors = coreviewed.iter().map(|book| book.book_id.as_str());
            genre_match_percent(neighbors, &batch.genre, genres, config)
        })
        .collect();

    summarize(&batch.genre, &percents)
}

/// Sorts summaries by mean, best genre first.
pub fn rank_summaries(summaries: &mut [GenreSummary]) {
    summaries.sort_by(|a, b| b.mean.partial_cmp(&a.mean).unwrap_or(std::cmp::Ordering::Equal));
}

/// How many of the highest-degree books carry each genre.
///
/// Highly connected books are what any graph walk reaches first, so this is
/// the score a ranking would get by ignoring the seed entirely.
pub fn degree_baseline(
    degrees: &DegreeTable,
    genres: &BookGenres,
    genre_names: &[String],
    config: &EvaluationConfig,
) -> Vec<GenreBaseline> {
    let top_books = degrees.top(config.baseline_books);

    let mut baselines: Vec<GenreBaseline> = genre_names
        .iter()
        .map(|genre| {
            let matching = top_books
                .iter()
                .filter(|(book_id, _)| {
                    genres
                        .get(book_id)
                        .is_some_and(|tags| has_genre(tags, genre, config.top_genres))
                })
                .count();
            GenreBaseline {
                genre: genre.clone(),
                matching,
                checked: top_books.len(),
            }
        })
        .collect();

    baselines.sort_by(|a, b| b.matching.cmp(&a.matching));
    baselines
}

/// Counts how often each book lands among the first `neighbors_checked`
/// closest books of a seed, per genre.
pub fn top_appearances(batches: &[GenreBatch], neighbors_checked: usize) -> AppearanceReport {
    let mut seeds_per_genre = BTreeMap::new();
    let mut counts: FxHashMap<&str, BTreeMap<String, usize>> = FxHashMap::default();

    for batch in batches {
        seeds_per_genre.insert(batch.genre.clone(), batch.closest.len());
        for closest in batch.closest.values() {
            for book in closest.iter().take(neighbors_checked) {
                *counts
                    .entry(book.book_id.as_str())
                    .or_default()
                    .entry(batch.genre.clone())
                    .or_insert(0) += 1;
            }
        }
    }

    let mut books: Vec<BookAppearances> = counts
        .into_iter()
        .map(|(book_id, per_genre)| BookAppearances {
            book_id: book_id.to_string(),
            total: per_genre.values().sum(),
            per_genre,
        })
        .collect();
    books.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.book_id.cmp(&b.book_id)));

    AppearanceReport {
        seeds_per_genre,
        books,
    }
}
