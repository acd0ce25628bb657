use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const ROW_TICK: u64 = 100_000;

/// Spinner for streams of unknown length, e.g. the interaction dump.
pub fn row_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {msg} {pos} rows") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}

/// Reports only every `ROW_TICK`th row.
pub fn tick_rows(spinner: &ProgressBar, row: u64) {
    if row % ROW_TICK == 0 {
        spinner.set_position(row);
    }
}

pub fn counter_bar(total: u64, unit: &str) -> ProgressBar {
    let bar = ProgressBar::new(total);
    let template = format!("{{spinner:.green}} [{{elapsed_precise}}] [{{wide_bar:.cyan/blue}}] {{pos}}/{{len}} {unit} ({{eta}})");
    if let Ok(style) = ProgressStyle::with_template(&template) {
        bar.set_style(style.progress_chars("#>-"));
    }
    bar
}
