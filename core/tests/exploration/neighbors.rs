use super::TestGraph;
use bookgraph_core::{CoReviewedNeighbor, GraphError, top_k_raw_neighbors};
use pretty_assertions::assert_eq;

fn summary(neighbors: &[CoReviewedNeighbor]) -> Vec<(&str, usize)> {
    neighbors
        .iter()
        .map(|neighbor| (neighbor.book_id.as_str(), neighbor.shared_reviewers))
        .collect()
}

#[test]
fn test_ranks_by_shared_reviewers() {
    let index = TestGraph::triangle();

    let neighbors = top_k_raw_neighbors(&index, "A", 10).unwrap();

    assert_eq!(summary(&neighbors), vec![("B", 2), ("C", 1)]);
}

#[test]
fn test_truncates_to_k() {
    let index = TestGraph::detour();

    let neighbors = top_k_raw_neighbors(&index, "A", 1).unwrap();

    assert_eq!(summary(&neighbors), vec![("B", 4)]);
}

#[test]
fn test_ties_are_ordered_by_book_id() {
    let index = TestGraph::star();

    let neighbors = top_k_raw_neighbors(&index, "seed", 3).unwrap();

    assert_eq!(summary(&neighbors), vec![("alpha", 1), ("mid", 1), ("zeta", 1)]);
}

#[test]
fn test_does_not_traverse_past_one_hop() {
    let index = TestGraph::detour();

    // D is only reachable from A through B for the weighted search,
    // but the direct single-reviewer edge still counts here.
    let neighbors = top_k_raw_neighbors(&index, "A", 10).unwrap();

    assert_eq!(summary(&neighbors), vec![("B", 4), ("D", 1)]);
}

#[test]
fn test_unknown_source_fails_fast() {
    let index = TestGraph::split();

    assert_eq!(
        top_k_raw_neighbors(&index, "Z", 3),
        Err(GraphError::UnknownBook {
            book_id: "Z".to_string()
        })
    );
}

#[test]
fn test_serializes_as_pairs() {
    let neighbors = vec![CoReviewedNeighbor {
        book_id: "B".to_string(),
        shared_reviewers: 2,
    }];

    assert_eq!(serde_json::to_string(&neighbors).unwrap(), r#"[["B",2]]"#);
}
