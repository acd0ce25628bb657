use crate::error::LoadError;
use crate::evaluation::BookGenres;
use crate::interactions::{BookId, BookIdMap, InteractionIndex, InteractionIndexBuilder};
use serde::{Deserialize, de::DeserializeOwned};
use std::{collections::BTreeMap, fs::File, io::BufReader, path::Path};

// Column positions in the interactions dump:
// user_id,book_id,is_read,rating,is_reviewed
const USER_COLUMN: usize = 0;
const BOOK_COLUMN: usize = 1;
const REVIEWED_COLUMN: usize = 4;

/// Genre name to the seed book ids verified for it.
pub type GenreSeeds = BTreeMap<String, Vec<BookId>>;

#[derive(Deserialize)]
struct BookIdMapRow {
    book_id_csv: String,
    book_id: BookId,
}

#[derive(Deserialize)]
struct ScrapedBook {
    book_id: BookId,
    genres: Vec<String>,
}

pub fn read_book_id_map(path: &Path) -> Result<BookIdMap, LoadError> {
    let mut reader = open_csv(path)?;
    let mut book_id_map = BookIdMap::default();

    for row in reader.deserialize::<BookIdMapRow>() {
        let row = row.map_err(|source| csv_error(path, source))?;
        book_id_map.insert(row.book_id_csv, row.book_id);
    }

    tracing::info!(entries = book_id_map.len(), path = %path.display(), "loaded book id map");
    Ok(book_id_map)
}

pub fn read_interactions(path: &Path, book_id_map: &BookIdMap) -> Result<InteractionIndex, LoadError> {
    read_interactions_with_progress(path, book_id_map, |_| {})
}

/// Streams the interactions CSV into an [`InteractionIndex`].
///
/// Only reviewed rows are kept. A reviewed row whose book id is missing from
/// `book_id_map` aborts the load. `on_row` receives the running row count.
pub fn read_interactions_with_progress<F>(
    path: &Path,
    book_id_map: &BookIdMap,
    mut on_row: F,
) -> Result<InteractionIndex, LoadError>
where
    F: FnMut(u64),
{
    let mut reader = open_csv(path)?;
    let mut builder = InteractionIndexBuilder::new();
    let mut row = csv::StringRecord::new();

    while reader
        .read_record(&mut row)
        .map_err(|source| csv_error(path, source))?
    {
        let line = row.position().map_or(0, |position| position.line());
        builder.add_raw(
            column(&row, USER_COLUMN, "user_id", line)?,
            column(&row, BOOK_COLUMN, "book_id", line)?,
            column(&row, REVIEWED_COLUMN, "is_reviewed", line)? == "1",
            book_id_map,
        )?;
        on_row(builder.records_seen());
    }

    Ok(builder.finish())
}

pub fn read_genre_seeds(path: &Path) -> Result<GenreSeeds, LoadError> {
    read_json(path)
}

pub fn read_book_genres(path: &Path) -> Result<BookGenres, LoadError> {
    let scraped: Vec<ScrapedBook> = read_json(path)?;
    Ok(scraped
        .into_iter()
        .map(|book| (book.book_id, book.genres))
        .collect())
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| LoadError::Json {
        path: path.display().to_string(),
        source,
    })
}

fn open_csv(path: &Path) -> Result<csv::Reader<File>, LoadError> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|source| csv_error(path, source))
}

fn column<'r>(
    row: &'r csv::StringRecord,
    position: usize,
    name: &'static str,
    line: u64,
) -> Result<&'r str, LoadError> {
    row.get(position)
        .ok_or(LoadError::MissingColumn { line, column: name })
}

fn csv_error(path: &Path, source: csv::Error) -> LoadError {
    LoadError::Csv {
        path: path.display().to_string(),
        source,
    }
}
