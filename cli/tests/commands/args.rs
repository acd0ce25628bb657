use bookgraph::{Args, Command};
use clap::Parser;

#[test]
fn test_closest_defaults() {
    let args = Args::try_parse_from(["bookgraph", "closest", "--genre", "horror"]).unwrap();

    match args.command {
        Command::Closest { genre, k, coreviewed_k } => {
            assert_eq!(genre, "horror");
            assert_eq!(k, 100);
            assert_eq!(coreviewed_k, 100);
        }
        other => panic!("unexpected command {other:?}"),
    }
    assert_eq!(args.data_dir, None);
    assert_eq!(args.output_dir, "results");
    assert!(!args.rebuild);
    assert!(!args.verbose);
}

#[test]
fn test_global_flags_after_subcommand() {
    let args = Args::try_parse_from(["bookgraph", "degrees", "-t", "5", "--rebuild", "-v", "-d", "/tmp/books"])
        .unwrap();

    assert!(matches!(args.command, Command::Degrees { top: 5 }));
    assert!(args.rebuild);
    assert!(args.verbose);
    assert_eq!(args.data_dir.as_deref(), Some("/tmp/books"));
}

#[test]
fn test_evaluate_splits_genres() {
    let args = Args::try_parse_from(["bookgraph", "evaluate", "-g", "horror,romance", "-n", "20", "--json"]).unwrap();

    match args.command {
        Command::Evaluate {
            genres,
            checked,
            top_genres,
            baseline_books,
            appearances,
            json,
        } => {
            assert_eq!(genres, vec!["horror".to_string(), "romance".to_string()]);
            assert_eq!(checked, 20);
            assert_eq!(top_genres, 5);
            assert_eq!(baseline_books, 500);
            assert_eq!(appearances, 10);
            assert!(json);
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn test_evaluate_requires_genres() {
    assert!(Args::try_parse_from(["bookgraph", "evaluate"]).is_err());
}

#[test]
fn test_subcommand_is_required() {
    assert!(Args::try_parse_from(["bookgraph"]).is_err());
}
