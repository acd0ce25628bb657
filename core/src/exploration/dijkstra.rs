use super::ClosestBook;
use crate::error::{EmptyQueueError, GraphError};
use crate::interactions::InteractionIndex;
use crate::priority_queue::IndexedPriorityQueue;
use rustc_hash::{FxHashMap, FxHashSet};

struct ClosestBooksState<'a> {
    // identity -> hops from source, prioritized by accumulated distance
    queue: IndexedPriorityQueue<&'a str, usize, f64>,
    visited: FxHashSet<&'a str>,
}

impl<'a> ClosestBooksState<'a> {
    fn new(source: &'a str) -> Self {
        let mut queue = IndexedPriorityQueue::new();
        queue.upsert(source, 0, 0.0);

        Self {
            queue,
            visited: FxHashSet::default(),
        }
    }

    fn visit_neighbors(
        &mut self,
        neighbors: FxHashMap<&'a str, usize>,
        current_distance: f64,
        current_hops: usize,
    ) {
        let mut unvisited: Vec<(&'a str, usize)> = neighbors
            .into_iter()
            .filter(|(book_id, _)| !self.visited.contains(book_id))
            .collect();
        // Fixed insertion order makes equal-distance pops deterministic.
        unvisited.sort_unstable_by(|a, b| a.0.cmp(b.0));

        for (neighbor, shared_reviewers) in unvisited {
            let edge_cost = 1.0 / shared_reviewers as f64;
            self.queue
                .upsert(neighbor, current_hops + 1, current_distance + edge_cost);
        }
    }
}

/// Best-first search for the `k` books nearest to `source`.
///
/// Edges are co-review links costing `1 / shared_reviewers`, generated lazily
/// from the index as each book is finalized. Results are ordered by distance
/// and never include `source`; fewer than `k` come back when the component is
/// smaller than that.
pub fn k_closest<'a>(
    index: &'a InteractionIndex,
    source: &'a str,
    k: usize,
) -> Result<Vec<ClosestBook>, GraphError> {
    if !index.contains_book(source) {
        return Err(GraphError::UnknownBook {
            book_id: source.to_string(),
        });
    }

    let mut closest = Vec::with_capacity(k.min(index.book_count()));
    if k == 0 {
        return Ok(closest);
    }

    let mut state = ClosestBooksState::new(source);

    for popped in 0..=k {
        let (book_id, hops, distance) = match state.queue.pop_min() {
            Ok(entry) => entry,
            Err(EmptyQueueError) => {
                tracing::debug!(
                    source,
                    connected = popped,
                    "book graph exhausted before k closest books were found"
                );
                break;
            }
        };
        state.visited.insert(book_id);

        if popped > 0 {
            closest.push(ClosestBook {
                book_id: book_id.to_string(),
                distance,
                hops,
            });
        }

        if closest.len() == k {
            break;
        }

        let neighbors = index.neighbors_with_weights(book_id);
        state.visit_neighbors(neighbors, distance, hops);
    }

    Ok(closest)
}
