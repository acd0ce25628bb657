use bookgraph_core::{
    ArtifactCache, CacheError, DegreeTable, InteractionIndex, JsonFileCache,
    evaluation::BookGenres,
    parsing::{self, GenreSeeds},
};
use std::{error::Error, path::PathBuf};

use crate::args::Args;
use crate::progress;

pub const INTERACTION_INDEX_KEY: &str = "interaction-index";
pub const DEGREES_KEY: &str = "book-degrees";

pub struct BookGraphApp {
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
    pub cache: JsonFileCache,
}

impl BookGraphApp {
    pub fn new(args: &Args) -> Result<Self, Box<dyn Error>> {
        let data_dir = match &args.data_dir {
            Some(path) => PathBuf::from(path),
            None => dirs::home_dir()
                .ok_or("Could not find home directory")?
                .join(".bookgraph"),
        };

        if !data_dir.exists() {
            return Err(format!("Data path does not exist: {:?}", data_dir).into());
        }

        let cache_dir = args
            .cache_dir
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join("cache"));

        let app = Self {
            data_dir,
            output_dir: PathBuf::from(&args.output_dir),
            cache: JsonFileCache::new(cache_dir),
        };

        if args.rebuild {
            app.cache.invalidate(INTERACTION_INDEX_KEY)?;
            app.cache.invalidate(DEGREES_KEY)?;
        }

        Ok(app)
    }

    pub fn interactions_path(&self) -> PathBuf {
        self.data_dir.join("goodreads_interactions.csv")
    }

    pub fn book_id_map_path(&self) -> PathBuf {
        self.data_dir.join("book_id_map.csv")
    }

    pub fn genre_seeds_path(&self) -> PathBuf {
        self.data_dir.join("genre_matched_books_dict.json")
    }

    pub fn book_genres_path(&self) -> PathBuf {
        self.data_dir.join("all_books.json")
    }

    /// Cached interaction index, built from the raw CSVs on a cache miss.
    pub fn load_index(&self) -> Result<InteractionIndex, Box<dyn Error>> {
        if !self.cache.contains(INTERACTION_INDEX_KEY) {
            self.require_files(&[self.interactions_path(), self.book_id_map_path()])?;
        }

        let index = self.cache.get_or_compute(INTERACTION_INDEX_KEY, || {
            let book_id_map = parsing::read_book_id_map(&self.book_id_map_path())
                .map_err(|error| CacheError::build(INTERACTION_INDEX_KEY, error))?;

            let rows = progress::row_spinner("Reading interactions");
            let index = parsing::read_interactions_with_progress(
                &self.interactions_path(),
                &book_id_map,
                |row| progress::tick_rows(&rows, row),
            );
            rows.finish_and_clear();

            index.map_err(|error| CacheError::build(INTERACTION_INDEX_KEY, error))
        })?;

        Ok(index)
    }

    /// Cached degree table. The interaction index is only loaded on a miss.
    pub fn load_degrees(&self) -> Result<DegreeTable, Box<dyn Error>> {
        let degrees = self.cache.get_or_compute(DEGREES_KEY, || {
            let index = self
                .load_index()
                .map_err(|error| CacheError::build(DEGREES_KEY, error))?;

            let bar = progress::counter_bar(index.book_count() as u64, "books");
            let table = DegreeTable::compute_with_progress(&index, |done, _| bar.set_position(done as u64));
            bar.finish_and_clear();
            Ok(table)
        })?;

        Ok(degrees)
    }

    pub fn load_genre_seeds(&self) -> Result<GenreSeeds, Box<dyn Error>> {
        self.require_files(&[self.genre_seeds_path()])?;
        Ok(parsing::read_genre_seeds(&self.genre_seeds_path())?)
    }

    pub fn load_book_genres(&self) -> Result<BookGenres, Box<dyn Error>> {
        self.require_files(&[self.book_genres_path()])?;
        Ok(parsing::read_book_genres(&self.book_genres_path())?)
    }

    fn require_files(&self, paths: &[PathBuf]) -> Result<(), Box<dyn Error>> {
        let missing: Vec<String> = paths
            .iter()
            .filter(|path| !path.exists())
            .map(|path| path.display().to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(format!("Data files not found in {:?}: {}", self.data_dir, missing.join(", ")).into())
        }
    }
}
