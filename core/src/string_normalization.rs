use unidecode::unidecode;

/// Folds a genre or shelf name to ASCII lowercase with single spaces.
///
/// Shelf names use `-` and `_` as word separators ("historical-fiction"),
/// so both are treated as whitespace.
pub fn normalize_genre(input: &str) -> String {
    unidecode(input)
        .to_lowercase()
        .replace(['-', '_'], " ")
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}

/// Whether `tag` mentions `genre`, e.g. "Fantasy > Urban Fantasy" mentions
/// "urban fantasy".
pub fn tag_mentions_genre(tag: &str, genre: &str) -> bool {
    let genre = normalize_genre(genre);
    !genre.is_empty() && normalize_genre(tag).contains(&genre)
}
