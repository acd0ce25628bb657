pub mod dijkstra;
pub mod neighbors;

pub use dijkstra::k_closest;
pub use neighbors::top_k_raw_neighbors;

use crate::interactions::BookId;
use serde::{Deserialize, Serialize};

/// A book reached by the closest-books search.
///
/// Serialized as `[book_id, distance, hops]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "(BookId, f64, usize)", from = "(BookId, f64, usize)")]
pub struct ClosestBook {
    pub book_id: BookId,
    /// Sum of `1 / shared_reviewers` along the path found.
    pub distance: f64,
    /// Edges on that path, not necessarily the fewest possible.
    pub hops: usize,
}

impl From<ClosestBook> for (BookId, f64, usize) {
    fn from(book: ClosestBook) -> Self {
        (book.book_id, book.distance, book.hops)
    }
}

impl From<(BookId, f64, usize)> for ClosestBook {
    fn from((book_id, distance, hops): (BookId, f64, usize)) -> Self {
        Self {
            book_id,
            distance,
            hops,
        }
    }
}

/// A direct co-review neighbor. Serialized as `[book_id, shared_reviewers]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "(BookId, usize)", from = "(BookId, usize)")]
pub struct CoReviewedNeighbor {
    pub book_id: BookId,
    pub shared_reviewers: usize,
}

impl From<CoReviewedNeighbor> for (BookId, usize) {
    fn from(neighbor: CoReviewedNeighbor) -> Self {
        (neighbor.book_id, neighbor.shared_reviewers)
    }
}

impl From<(BookId, usize)> for CoReviewedNeighbor {
    fn from((book_id, shared_reviewers): (BookId, usize)) -> Self {
        Self {
            book_id,
            shared_reviewers,
        }
    }
}
