use super::{book_id_map, reviewed, unreviewed};
use bookgraph_core::{GraphError, InteractionIndex};

#[test]
fn test_build_translates_book_ids() {
    let index = InteractionIndex::build(
        [reviewed("u1", "1"), reviewed("u1", "2"), reviewed("u2", "2")],
        &book_id_map(2),
    )
    .unwrap();

    assert_eq!(index.book_count(), 2);
    assert_eq!(index.user_count(), 2);
    assert!(index.contains_book("gr-1"));
    assert!(!index.contains_book("1"));
    assert_eq!(index.reviewers_of("gr-2").map(|users| users.len()), Some(2));
}

#[test]
fn test_build_ignores_unreviewed_records() {
    let index = InteractionIndex::build(
        [reviewed("u1", "1"), unreviewed("u1", "2"), unreviewed("u2", "3")],
        &book_id_map(3),
    )
    .unwrap();

    assert_eq!(index.book_count(), 1);
    assert_eq!(index.user_count(), 1);
    assert!(!index.contains_book("gr-2"));
}

#[test]
fn test_unreviewed_record_with_unknown_id_is_not_an_error() {
    let result = InteractionIndex::build(
        [reviewed("u1", "1"), unreviewed("u1", "999")],
        &book_id_map(1),
    );

    assert!(result.is_ok());
}

#[test]
fn test_unknown_book_id_is_fatal() {
    let result = InteractionIndex::build(
        [reviewed("u1", "1"), reviewed("u1", "999")],
        &book_id_map(1),
    );

    assert_eq!(
        result,
        Err(GraphError::UnknownBookId {
            csv_book_id: "999".to_string()
        })
    );
}

#[test]
fn test_build_is_order_independent() {
    let records = vec![
        reviewed("u1", "1"),
        reviewed("u2", "1"),
        reviewed("u1", "2"),
        reviewed("u3", "3"),
        reviewed("u2", "3"),
        reviewed("u1", "1"),
    ];
    let map = book_id_map(3);

    let forward = InteractionIndex::build(records.clone(), &map).unwrap();
    let backward = InteractionIndex::build(records.into_iter().rev(), &map).unwrap();

    assert_eq!(forward, backward);
}

#[test]
fn test_index_is_symmetric() {
    let index = InteractionIndex::from_reviews([
        ("u1", "a"),
        ("u1", "b"),
        ("u2", "b"),
        ("u2", "c"),
        ("u3", "a"),
    ]);

    for book in index.books() {
        for user in index.reviewers_of(book).unwrap() {
            assert!(index.books_of(user).unwrap().contains(book));
        }
    }
    for user in ["u1", "u2", "u3"] {
        for book in index.books_of(user).unwrap() {
            assert!(index.reviewers_of(book).unwrap().contains(user));
        }
    }
}

#[test]
fn test_index_round_trips_through_json() {
    let index = InteractionIndex::from_reviews([("u1", "a"), ("u1", "b"), ("u2", "b")]);

    let json = serde_json::to_string(&index).unwrap();
    let restored: InteractionIndex = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, index);
}
