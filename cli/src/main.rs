use bookgraph::{Args, ColorScheme, commands, logging};
use clap::Parser;

fn main() {
    let args = Args::parse();
    logging::init_tracing(args.verbose);
    let colors = ColorScheme::new(!args.no_color);

    if let Err(error) = commands::run(&args, &colors) {
        eprintln!("{} {}", colors.error("❌ Error:"), error);
        std::process::exit(1);
    }
}
