use super::CoReviewedNeighbor;
use crate::error::GraphError;
use crate::interactions::InteractionIndex;

/// One-hop ranking: the `k` books sharing the most reviewers with `source`.
///
/// Ties on the shared count are ordered by book id.
pub fn top_k_raw_neighbors(
    index: &InteractionIndex,
    source: &str,
    k: usize,
) -> Result<Vec<CoReviewedNeighbor>, GraphError> {
    if !index.contains_book(source) {
        return Err(GraphError::UnknownBook {
            book_id: source.to_string(),
        });
    }

    let mut neighbors: Vec<(&str, usize)> =
        index.neighbors_with_weights(source).into_iter().collect();
    neighbors.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    neighbors.truncate(k);

    Ok(neighbors
        .into_iter()
        .map(|(book_id, shared_reviewers)| CoReviewedNeighbor {
            book_id: book_id.to_string(),
            shared_reviewers,
        })
        .collect())
}
