use crate::interactions::{BookId, InteractionIndex};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Co-review degree of every book plus its rank by descending degree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DegreeTable {
    degrees: FxHashMap<BookId, usize>,
    ranks: FxHashMap<BookId, usize>,
    sorted: Vec<(BookId, usize)>,
}

impl DegreeTable {
    pub fn compute(index: &InteractionIndex) -> Self {
        Self::compute_with_progress(index, |_, _| {})
    }

    /// `on_book(done, total)` fires after each book's degree is known.
    pub fn compute_with_progress<F>(index: &InteractionIndex, mut on_book: F) -> Self
    where
        F: FnMut(usize, usize),
    {
        let total = index.book_count();
        let mut degrees = FxHashMap::with_capacity_and_hasher(total, Default::default());

        for (done, book_id) in index.books().enumerate() {
            degrees.insert(book_id.to_string(), index.degree(book_id));
            on_book(done + 1, total);
        }

        Self::from_degrees(degrees)
    }

    pub fn from_degrees(degrees: FxHashMap<BookId, usize>) -> Self {
        let mut sorted: Vec<(BookId, usize)> = degrees
            .iter()
            .map(|(book_id, &degree)| (book_id.clone(), degree))
            .collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        let ranks = sorted
            .iter()
            .enumerate()
            .map(|(rank, (book_id, _))| (book_id.clone(), rank))
            .collect();

        Self {
            degrees,
            ranks,
            sorted,
        }
    }

    pub fn degree_of(&self, book_id: &str) -> Option<usize> {
        self.degrees.get(book_id).copied()
    }

    /// Zero-based position in the descending degree order.
    pub fn rank_of(&self, book_id: &str) -> Option<usize> {
        self.ranks.get(book_id).copied()
    }

    pub fn sorted(&self) -> &[(BookId, usize)] {
        &self.sorted
    }

    pub fn top(&self, n: usize) -> &[(BookId, usize)] {
        &self.sorted[..n.min(self.sorted.len())]
    }

    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }
}
