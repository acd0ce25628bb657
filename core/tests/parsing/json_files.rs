use super::write_temp;
use bookgraph_core::{
    LoadError,
    parsing::{read_book_genres, read_genre_seeds},
};

#[test]
fn test_reads_genre_seeds() {
    let file = write_temp(r#"{"horror": ["1", "2"], "romance": ["3"]}"#);

    let seeds = read_genre_seeds(file.path()).unwrap();

    assert_eq!(seeds.len(), 2);
    assert_eq!(seeds["horror"], vec!["1".to_string(), "2".to_string()]);
}

#[test]
fn test_reads_scraped_genres_in_shelf_order() {
    let file = write_temp(
        r#"[
            {"book_id": "1", "genres": ["Horror", "Fiction"]},
            {"book_id": "2", "genres": []}
        ]"#,
    );

    let genres = read_book_genres(file.path()).unwrap();

    assert_eq!(genres["1"], vec!["Horror".to_string(), "Fiction".to_string()]);
    assert!(genres["2"].is_empty());
}

#[test]
fn test_malformed_json_is_reported() {
    let file = write_temp("{ not json");

    assert!(matches!(
        read_genre_seeds(file.path()),
        Err(LoadError::Json { .. })
    ));
}
