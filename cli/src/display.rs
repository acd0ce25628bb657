use bookgraph_core::{
    DegreeTable, ExplorationConfig, GenreBatch,
    evaluation::{AppearanceReport, GenreBaseline, GenreSummary},
};
use std::path::Path;

use crate::colors::ColorScheme;
use crate::utils::{format_number, format_percent};

pub fn display_closest_info(
    genre: &str,
    seed_count: usize,
    config: &ExplorationConfig,
    colors: &ColorScheme,
) {
    println!(
        "📚 Ranking closest books for {} seed books in {}",
        colors.number(&format_number(seed_count)),
        colors.genre(&format!("\"{}\"", genre))
    );
    println!(
        "⚙️  Weighted search k = {}, co-reviewed neighbors k = {}",
        colors.number(&config.closest_k.to_string()),
        colors.number(&config.coreviewed_k.to_string())
    );
    println!("🔍 Searching...");
}

pub fn display_batch_summary(
    batch: &GenreBatch,
    written: (&Path, &Path),
    search_duration: f64,
    verbose: bool,
    colors: &ColorScheme,
) {
    if verbose {
        for (seed, closest) in &batch.closest {
            let nearest = closest
                .iter()
                .take(3)
                .map(|book| format!("{} ({:.3})", colors.book(&book.book_id), book.distance))
                .collect::<Vec<_>>()
                .join(", ");
            println!("{} → {}", colors.book(seed), nearest);
        }
        println!("\n---\n");
    }

    println!(
        "{} Ranked {} seed books",
        colors.success("✅"),
        colors.number(&format_number(batch.processed()))
    );

    if !batch.skipped.is_empty() {
        println!(
            "{} Skipped {} books not connected in the book graph: {}",
            colors.warning("⚠️ "),
            colors.number(&format_number(batch.skipped.len())),
            batch.skipped.join(", ")
        );
    }

    println!("💾 {}", written.0.display());
    println!("💾 {}", written.1.display());
    println!(
        "{} Finished in {} sec",
        colors.stats("📊"),
        colors.number(&format!("{:.3}", search_duration))
    );
}

pub fn display_degrees(degrees: &DegreeTable, top: usize, colors: &ColorScheme) {
    println!(
        "📈 {} books by co-review degree (of {}):\n",
        colors.number(&top.min(degrees.len()).to_string()),
        colors.number(&format_number(degrees.len()))
    );

    for (rank, (book_id, degree)) in degrees.top(top).iter().enumerate() {
        let rank_label = format!("{}.", rank + 1);
        println!(
            "{:>4} {} {}",
            colors.rank(&rank_label),
            colors.book(book_id),
            colors.number(&format_number(*degree))
        );
    }
}

pub fn display_evaluation(
    closest: &[GenreSummary],
    coreviewed: &[GenreSummary],
    baseline: &[GenreBaseline],
    baseline_books: usize,
    colors: &ColorScheme,
) {
    println!("Baseline membership in genres for the {} highest-degree books:", baseline_books);
    for entry in baseline {
        println!(
            "    {}: {} ({})",
            colors.genre(&entry.genre),
            colors.number(&entry.matching.to_string()),
            colors.percent(&format_percent(entry.percent()), entry.percent())
        );
    }

    println!("\nAverage percentage of closest books in the same genre:");
    display_summaries(closest, colors);

    println!("\nAverage percentage of most co-reviewed neighbors in the same genre:");
    display_summaries(coreviewed, colors);
}

fn display_summaries(summaries: &[GenreSummary], colors: &ColorScheme) {
    for summary in summaries {
        println!(
            "    {}: {} ± {:.2} std ({} seeds)",
            colors.genre(&summary.genre),
            colors.percent(&format!("{:.2}", summary.mean), summary.mean),
            summary.std,
            format_number(summary.samples)
        );
    }
}

pub fn display_appearances(report: &AppearanceReport, limit: usize, colors: &ColorScheme) {
    if limit == 0 || report.books.is_empty() {
        return;
    }

    println!("\nBooks appearing most often among the closest:");
    for book in report.books.iter().take(limit) {
        let shares = book
            .per_genre
            .keys()
            .map(|genre| {
                let share = report.percent(book, genre);
                format!("{} {}", colors.genre(genre), colors.percent(&format_percent(share), share))
            })
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "    {} ({}): {}",
            colors.book(&book.book_id),
            colors.number(&format_number(book.total)),
            shares
        );
    }
}
