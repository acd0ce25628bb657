
use bookgraph_core::{InteractionIndex, evaluation::BookGenres};

/// Two horror books share readers with each other and with one romance
/// book; a romance cluster hangs off the side.
pub fn shelf_index() -> InteractionIndex {
    InteractionIndex::from_reviews([
        ("u1", "dracula"),
        ("u1", "carmilla"),
        ("u2", "dracula"),
        ("u2", "carmilla"),
        ("u3", "carmilla"),
        ("u3", "persuasion"),
        ("u4", "persuasion"),
        ("u4", "emma"),
        ("u5", "persuasion"),
        ("u5", "emma"),
    ])
}

pub fn shelf_genres() -> BookGenres {
    [
        ("dracula", vec!["Horror", "Classics", "Vampires"]),
        ("carmilla", vec!["Classics", "Horror", "Vampires"]),
        ("persuasion", vec!["Classics", "Romance"]),
        ("emma", vec!["Romance", "Historical-Fiction"]),
    ]
    .into_iter()
    .map(|(book, tags)| {
        (
            book.to_string(),
            tags.into_iter().map(str::to_string).collect(),
        )
    })
    .collect()
}

pub fn seeds(books: &[&str]) -> Vec<String> {
    books.iter().map(|book| book.to_string()).collect()
}
