use crate::batch::GenreBatch;
use crate::error::LoadError;
use crate::parsing::read_json;
use serde::Serialize;
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

pub fn closest_results_path(dir: &Path, genre: &str) -> PathBuf {
    dir.join(format!("{}-closest-books-network-distance-weighted.json", file_stem(genre)))
}

pub fn coreviewed_results_path(dir: &Path, genre: &str) -> PathBuf {
    dir.join(format!("{}-most-coreviewed-neighbors.json", file_stem(genre)))
}

/// Writes both rankings of a batch as `seed -> results` JSON maps.
pub fn write_genre_batch(dir: &Path, batch: &GenreBatch) -> Result<(PathBuf, PathBuf), LoadError> {
    fs::create_dir_all(dir).map_err(|source| io_error(dir, source))?;

    let closest_path = closest_results_path(dir, &batch.genre);
    let coreviewed_path = coreviewed_results_path(dir, &batch.genre);
    write_json_pretty(&closest_path, &batch.closest)?;
    write_json_pretty(&coreviewed_path, &batch.coreviewed)?;

    Ok((closest_path, coreviewed_path))
}

/// Loads the result files written by [`write_genre_batch`].
///
/// Skipped seeds are not persisted, so [`GenreBatch::skipped`] comes back empty.
pub fn read_genre_batch(dir: &Path, genre: &str) -> Result<GenreBatch, LoadError> {
    Ok(GenreBatch {
        genre: genre.to_string(),
        closest: read_json(&closest_results_path(dir, genre))?,
        coreviewed: read_json(&coreviewed_results_path(dir, genre))?,
        skipped: Vec::new(),
    })
}

pub fn write_json_pretty<T: Serialize>(path: &Path, value: &T) -> Result<(), LoadError> {
    let file = File::create(path).map_err(|source| io_error(path, source))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value).map_err(|source| LoadError::Json {
        path: path.display().to_string(),
        source,
    })?;
    writer.flush().map_err(|source| io_error(path, source))
}

fn file_stem(genre: &str) -> String {
    genre.to_lowercase()
}

fn io_error(path: &Path, source: std::io::Error) -> LoadError {
    LoadError::Io {
        path: path.display().to_string(),
        source,
    }
}
