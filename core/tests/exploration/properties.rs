use bookgraph_core::{InteractionIndex, k_closest};
use proptest::prelude::*;

fn reviews() -> impl Strategy<Value = Vec<(u8, u8)>> {
    prop::collection::vec((0u8..12, 0u8..20), 1..80)
}

fn build(reviews: &[(u8, u8)]) -> InteractionIndex {
    InteractionIndex::from_reviews(
        reviews
            .iter()
            .map(|(user, book)| (format!("u{user}"), format!("b{book}"))),
    )
}

proptest! {
    #[test]
    fn closest_books_are_sorted_bounded_and_exclude_source(
        reviews in reviews(),
        k in 0usize..25,
    ) {
        let index = build(&reviews);

        for source in index.books() {
            let closest = k_closest(&index, source, k).unwrap();

            prop_assert!(closest.len() <= k);
            prop_assert!(closest.iter().all(|book| book.book_id != source));
            prop_assert!(closest.iter().all(|book| book.hops >= 1));
            prop_assert!(closest.windows(2).all(|pair| pair[0].distance <= pair[1].distance));
        }
    }

    #[test]
    fn short_results_mean_the_component_was_exhausted(reviews in reviews()) {
        let index = build(&reviews);

        for source in index.books() {
            let closest = k_closest(&index, source, index.book_count()).unwrap();
            let direct = index.neighbors_with_weights(source);

            // Every direct neighbor is reachable, and nothing beyond the
            // rest of the graph can be returned.
            prop_assert!(closest.len() >= direct.len());
            prop_assert!(closest.len() < index.book_count());
            for book in &closest {
                if let Some(&shared) = direct.get(book.book_id.as_str()) {
                    prop_assert!(book.distance <= 1.0 / shared as f64);
                }
            }
        }
    }

    #[test]
    fn edge_weights_are_symmetric(reviews in reviews()) {
        let index = build(&reviews);

        for book in index.books() {
            for (neighbor, shared) in index.neighbors_with_weights(book) {
                prop_assert!(shared >= 1);
                prop_assert_eq!(index.edge_weight(book, neighbor), shared);
                prop_assert_eq!(index.edge_weight(neighbor, book), shared);
                prop_assert_eq!(index.neighbors_with_weights(neighbor).get(book).copied(), Some(shared));
            }
        }
    }
}
