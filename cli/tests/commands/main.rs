mod args;

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Data directory holding a four-book shelf: dracula and carmilla share two
/// reviewers, carmilla and persuasion one, persuasion and emma two.
pub fn shelf_data_dir() -> TempDir {
    let dir = TempDir::new().unwrap();

    write(
        dir.path(),
        "book_id_map.csv",
        "book_id_csv,book_id\n0,dracula\n1,carmilla\n2,persuasion\n3,emma\n",
    );
    write(
        dir.path(),
        "goodreads_interactions.csv",
        "user_id,book_id,is_read,rating,is_reviewed\n\
         u1,0,1,5,1\n\
         u1,1,1,4,1\n\
         u2,0,1,5,1\n\
         u2,1,1,4,1\n\
         u3,1,1,4,1\n\
         u3,2,1,3,1\n\
         u4,2,1,5,1\n\
         u4,3,1,5,1\n\
         u5,2,1,4,1\n\
         u5,3,1,4,1\n\
         u6,0,1,2,0\n\
         u6,3,1,2,0\n",
    );
    write(
        dir.path(),
        "genre_matched_books_dict.json",
        r#"{"horror": ["dracula", "carmilla", "frankenstein"], "romance": ["emma"]}"#,
    );
    write(
        dir.path(),
        "all_books.json",
        r#"[
            {"book_id": "dracula", "genres": ["Horror", "Classics"]},
            {"book_id": "carmilla", "genres": ["Classics", "Horror"]},
            {"book_id": "persuasion", "genres": ["Classics", "Romance"]},
            {"book_id": "emma", "genres": ["Romance", "Historical-Fiction"]}
        ]"#,
    );

    dir
}

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

pub fn args_for(data_dir: &Path, output_dir: &Path, command: &[&str]) -> bookgraph::Args {
    use clap::Parser;

    let mut argv = vec![
        "bookgraph".to_string(),
        "--no-color".to_string(),
        "-d".to_string(),
        data_dir.display().to_string(),
        "-o".to_string(),
        output_dir.display().to_string(),
    ];
    argv.extend(command.iter().map(|part| part.to_string()));
    bookgraph::Args::try_parse_from(argv).unwrap()
}
