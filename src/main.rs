use std::path::PathBuf;

use chrono::{Local, Utc};
use rusqlite::Connection;

use mbti_graph::cli::{self, context::CliContext};
use mbti_graph::config::{self, AppConfig};
use mbti_graph::db::schema;
use mbti_graph::migrate;
use mbti_graph::ops::friend_ops;
use mbti_graph::reference::ReferenceData;
use mbti_graph::store::FriendStore;

#[derive(Debug, Default, PartialEq)]
struct Args {
    db_path: Option<PathBuf>,
    import_path: Option<PathBuf>,
    /// `Some(None)` for a bare `--export`, which uses the dated default name.
    export_path: Option<Option<PathBuf>>,
    help: bool,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args, String> {
    let mut args = args.into_iter().peekable();
    let mut parsed = Args::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--file" | "-f" => {
                parsed.db_path = Some(
                    args.next()
                        .map(PathBuf::from)
                        .ok_or("--file requires a path argument")?,
                );
            }
            "--import" => {
                parsed.import_path = Some(
                    args.next()
                        .map(PathBuf::from)
                        .ok_or("--import requires a JSON file path")?,
                );
            }
            "--export" => {
                parsed.export_path = Some(args.next_if(|a| !a.starts_with('-')).map(PathBuf::from));
            }
            "--help" | "-h" => parsed.help = true,
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }
    Ok(parsed)
}

fn print_usage() {
    println!("mbti-graph - MBTI friend cards");
    println!();
    println!("Usage: mbti-graph [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -f, --file <PATH>      Database file path (default: .data/mbti-graph.db)");
    println!("  --import <JSON_PATH>   Replace all friends with a JSON backup");
    println!("  --export [JSON_PATH]   Write all friends to a JSON backup");
    println!("  -h, --help             Show this help");
    println!();
    println!("Environment:");
    println!("  {}          Database file path", config::DB_PATH_ENV);
    println!("  {}         Log filter (falls back to RUST_LOG)", config::LOG_ENV);
}

fn main() {
    let args = match parse_args(std::env::args().skip(1)) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Use --help for usage information.");
            std::process::exit(1);
        }
    };
    if args.help {
        print_usage();
        return;
    }

    let Args {
        db_path,
        import_path,
        export_path,
        ..
    } = args;
    let export_path = export_path.map(|path| {
        path.unwrap_or_else(|| {
            PathBuf::from(migrate::default_export_file_name(Local::now().date_naive()))
        })
    });

    let cfg = AppConfig::resolve(db_path);
    config::init_logging(&cfg.log_filter);

    if let Err(e) = cfg.ensure_data_dir() {
        eprintln!("Error creating data directory: {}", e);
        std::process::exit(1);
    }

    let conn = match Connection::open(&cfg.db_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error opening database: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = schema::initialize(&conn) {
        eprintln!("Error initializing database: {}", e);
        std::process::exit(1);
    }

    let reference = ReferenceData::builtin();
    let mut store = match FriendStore::load_or_seed(&conn, &reference, Utc::now().timestamp_millis()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error loading friends: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(json_path) = import_path {
        println!("Importing from {}...", json_path.display());
        let result = migrate::import_json(&json_path)
            .and_then(|friends| friend_ops::import_friends(&mut store, friends))
            .and_then(|count| store.save(&conn).map(|_| count));
        match result {
            Ok(count) => println!("Import complete! {} friends.", count),
            Err(e) => {
                eprintln!("Import failed: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    if let Some(json_path) = export_path {
        match migrate::export_json(&json_path, store.friends()) {
            Ok(count) => println!("Exported {} friends to {}", count, json_path.display()),
            Err(e) => {
                eprintln!("Export failed: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    cli::run(CliContext::new(conn, store, reference));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Args, String> {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn export_path_is_optional() {
        let parsed = args(&["--export", "--file", "x.db"]).unwrap();
        assert_eq!(parsed.export_path, Some(None));
        assert_eq!(parsed.db_path, Some(PathBuf::from("x.db")));

        let parsed = args(&["--export", "out.json"]).unwrap();
        assert_eq!(parsed.export_path, Some(Some(PathBuf::from("out.json"))));

        let parsed = args(&["-f", "x.db", "--export"]).unwrap();
        assert_eq!(parsed.export_path, Some(None));
    }

    #[test]
    fn missing_values_and_unknown_flags_are_errors() {
        assert!(args(&["--file"]).is_err());
        assert!(args(&["--import"]).is_err());
        assert!(args(&["--verbose"]).is_err());
        assert!(args(&["-h"]).unwrap().help);
    }
}
