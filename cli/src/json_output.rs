use bookgraph_core::evaluation::{AppearanceReport, GenreBaseline, GenreSummary};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Serialize, Deserialize)]
pub struct JsonEvaluation {
    pub options: JsonOptions,
    pub closest: Vec<GenreSummary>,
    pub coreviewed: Vec<GenreSummary>,
    pub baseline: Vec<JsonBaseline>,
    pub appearances: Vec<JsonAppearance>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonOptions {
    pub neighbors_checked: usize,
    pub top_genres: usize,
    pub baseline_books: usize,
}

#[derive(Serialize, Deserialize)]
pub struct JsonBaseline {
    pub genre: String,
    pub matching: usize,
    pub percent: f64,
}

#[derive(Serialize, Deserialize)]
pub struct JsonAppearance {
    pub book_id: String,
    pub total: usize,
    /// Share of each genre's seed books that had this book among their closest
    pub percent_per_genre: BTreeMap<String, f64>,
}

impl From<&GenreBaseline> for JsonBaseline {
    fn from(baseline: &GenreBaseline) -> Self {
        Self {
            genre: baseline.genre.clone(),
            matching: baseline.matching,
            percent: baseline.percent(),
        }
    }
}

pub fn create_json_appearances(report: &AppearanceReport, limit: usize) -> Vec<JsonAppearance> {
    report
        .books
        .iter()
        .take(limit)
        .map(|book| JsonAppearance {
            book_id: book.book_id.clone(),
            total: book.total,
            percent_per_genre: book
                .per_genre
                .keys()
                .map(|genre| (genre.clone(), report.percent(book, genre)))
                .collect(),
        })
        .collect()
}

pub fn create_json_evaluation(
    options: JsonOptions,
    closest: Vec<GenreSummary>,
    coreviewed: Vec<GenreSummary>,
    baseline: &[GenreBaseline],
    appearances: Vec<JsonAppearance>,
) -> JsonEvaluation {
    JsonEvaluation {
        options,
        closest,
        coreviewed,
        baseline: baseline.iter().map(JsonBaseline::from).collect(),
        appearances,
    }
}
