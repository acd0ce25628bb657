use bookgraph_core::{
    BookId, ExplorationConfig,
    evaluation::{self, AppearanceReport, EvaluationConfig, GenreBaseline, GenreSummary},
    parsing::GenreSeeds,
    results, run_genre_batch_with_progress,
    string_normalization::normalize_genre,
};
use std::{error::Error, time::Instant};

use crate::app::BookGraphApp;
use crate::args::{Args, Command};
use crate::colors::ColorScheme;
use crate::display::*;
use crate::json_output::{JsonOptions, create_json_appearances, create_json_evaluation};
use crate::progress;

pub fn run(args: &Args, colors: &ColorScheme) -> Result<(), Box<dyn Error>> {
    let app = BookGraphApp::new(args)?;
    tracing::debug!(data_dir = %app.data_dir.display(), cache_dir = %app.cache.dir().display(), "resolved directories");

    match &args.command {
        Command::Closest { genre, k, coreviewed_k } => {
            let config = ExplorationConfig::new(*k, *coreviewed_k);
            run_closest(&app, genre, &config, args.verbose, colors)
        }
        Command::Degrees { top } => run_degrees(&app, *top, colors),
        Command::Evaluate {
            genres,
            checked,
            top_genres,
            baseline_books,
            appearances,
            json,
        } => {
            let config = EvaluationConfig {
                neighbors_checked: *checked,
                top_genres: *top_genres,
                baseline_books: *baseline_books,
            };
            run_evaluate(&app, genres, &config, *appearances, *json, colors)
        }
    }
}

pub fn run_closest(
    app: &BookGraphApp,
    genre: &str,
    config: &ExplorationConfig,
    verbose: bool,
    colors: &ColorScheme,
) -> Result<(), Box<dyn Error>> {
    let seeds = app.load_genre_seeds()?;
    let (genre, seed_books) = find_genre_seeds(&seeds, genre)?;
    let index = app.load_index()?;
    tracing::debug!(genre, seeds = seed_books.len(), books = index.book_count(), "starting genre batch");

    display_closest_info(genre, seed_books.len(), config, colors);

    let start_time = Instant::now();
    let bar = progress::counter_bar(seed_books.len() as u64, "seeds");
    let batch = run_genre_batch_with_progress(&index, genre, seed_books, config, |done, _| {
        bar.set_position(done as u64)
    });
    bar.finish_and_clear();
    let search_duration = start_time.elapsed().as_secs_f64();

    let (closest_path, coreviewed_path) = results::write_genre_batch(&app.output_dir, &batch)?;
    display_batch_summary(
        &batch,
        (closest_path.as_path(), coreviewed_path.as_path()),
        search_duration,
        verbose,
        colors,
    );

    Ok(())
}

pub fn run_degrees(app: &BookGraphApp, top: usize, colors: &ColorScheme) -> Result<(), Box<dyn Error>> {
    let degrees = app.load_degrees()?;
    display_degrees(&degrees, top, colors);
    Ok(())
}

/// Everything `evaluate` reports, best-scoring genres first.
#[derive(Debug, Clone, PartialEq)]
pub struct GenreEvaluation {
    pub closest: Vec<GenreSummary>,
    pub coreviewed: Vec<GenreSummary>,
    pub baseline: Vec<GenreBaseline>,
    pub appearances: AppearanceReport,
}

/// Scores the saved rankings of `genres` against the scraped shelf tags.
pub fn evaluate_genres(
    app: &BookGraphApp,
    genres: &[String],
    config: &EvaluationConfig,
) -> Result<GenreEvaluation, Box<dyn Error>> {
    let batches = genres
        .iter()
        .map(|genre| results::read_genre_batch(&app.output_dir, genre))
        .collect::<Result<Vec<_>, _>>()?;
    let book_genres = app.load_book_genres()?;

    let degrees = app.load_degrees()?;
    let baseline = evaluation::degree_baseline(&degrees, &book_genres, genres, config);

    let mut closest: Vec<_> = batches
        .iter()
        .map(|batch| evaluation::evaluate_closest(batch, &book_genres, config))
        .collect();
    let mut coreviewed: Vec<_> = batches
        .iter()
        .map(|batch| evaluation::evaluate_coreviewed(batch, &book_genres, config))
        .collect();
    evaluation::rank_summaries(&mut closest);
    evaluation::rank_summaries(&mut coreviewed);

    Ok(GenreEvaluation {
        closest,
        coreviewed,
        baseline,
        appearances: evaluation::top_appearances(&batches, config.neighbors_checked),
    })
}

pub fn run_evaluate(
    app: &BookGraphApp,
    genres: &[String],
    config: &EvaluationConfig,
    appearances: usize,
    json: bool,
    colors: &ColorScheme,
) -> Result<(), Box<dyn Error>> {
    let scores = evaluate_genres(app, genres, config)?;

    if json {
        let options = JsonOptions {
            neighbors_checked: config.neighbors_checked,
            top_genres: config.top_genres,
            baseline_books: config.baseline_books,
        };
        let output = create_json_evaluation(
            options,
            scores.closest,
            scores.coreviewed,
            &scores.baseline,
            create_json_appearances(&scores.appearances, appearances),
        );
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        display_evaluation(&scores.closest, &scores.coreviewed, &scores.baseline, config.baseline_books, colors);
        display_appearances(&scores.appearances, appearances, colors);
    }

    Ok(())
}

/// Seed books for a genre, matched exactly first and then by normalized name.
pub fn find_genre_seeds<'a>(
    seeds: &'a GenreSeeds,
    genre: &str,
) -> Result<(&'a str, &'a [BookId]), String> {
    if let Some((name, books)) = seeds.get_key_value(genre) {
        return Ok((name.as_str(), books.as_slice()));
    }

    let wanted = normalize_genre(genre);
    seeds
        .iter()
        .find(|(name, _)| normalize_genre(name) == wanted)
        .map(|(name, books)| (name.as_str(), books.as_slice()))
        .ok_or_else(|| {
            let known = seeds.keys().map(String::as_str).collect::<Vec<_>>().join(", ");
            format!("Genre '{}' has no seed books (known genres: {})", genre, known)
        })
}
