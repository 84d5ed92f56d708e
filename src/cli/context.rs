use chrono::{Local, NaiveDate, Utc};
use rusqlite::Connection;
use std::io::{self, Write};

use crate::error::GraphError;
use crate::model::FriendRecord;
use crate::ops::friend_ops;
use crate::queries::view_queries::ViewState;
use crate::reference::ReferenceData;
use crate::store::FriendStore;

pub struct CliContext {
    pub conn: Connection,
    pub store: FriendStore,
    pub reference: ReferenceData,
    pub state: ViewState,
}

impl CliContext {
    pub fn new(conn: Connection, store: FriendStore, reference: ReferenceData) -> Self {
        Self {
            conn,
            store,
            reference,
            state: ViewState::default(),
        }
    }

    /// Prompt and read a line from stdin. Returns None on EOF.
    pub fn read_line(&self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok();
        let mut buf = String::new();
        match io::stdin().read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()),
            Err(_) => None,
        }
    }

    /// Read a line, trimmed.
    pub fn prompt(&self, prompt: &str) -> Option<String> {
        self.read_line(prompt).map(|s| s.trim().to_string())
    }

    /// Asks a yes/no question; anything but y/yes is a no.
    pub fn confirm(&self, question: &str) -> bool {
        matches!(
            self.prompt(&format!("{} [y/N] ", question)).as_deref(),
            Some("y") | Some("Y") | Some("yes")
        )
    }

    /// Find a friend by name query. Prints a message if not found or ambiguous.
    pub fn find_friend(&self, args: &str) -> Option<FriendRecord> {
        let query = args.trim();
        if query.is_empty() {
            return None;
        }

        let matches = friend_ops::find_by_name(&self.store, query);
        match matches.len() {
            0 => {
                println!("No friend found matching '{}'", query);
                None
            }
            1 => Some(matches[0].clone()),
            _ => {
                println!("Multiple matches found:");
                for f in &matches {
                    println!("  {} ({})", f.name, f.personality_type);
                }
                println!("Please be more specific.");
                None
            }
        }
    }

    /// Persist the roster after a mutation.
    pub fn save(&self) {
        if let Err(e) = self.store.save(&self.conn) {
            self.print_error(&e);
        }
    }

    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    pub fn now_ms() -> i64 {
        Utc::now().timestamp_millis()
    }

    /// One-line summary used by list-style commands.
    pub fn format_friend(&self, friend: &FriendRecord) -> String {
        let pin = if friend.is_pinned { "📌 " } else { "" };
        let age = friend.age.map(|a| format!(", {}岁", a)).unwrap_or_default();
        let place = friend
            .province
            .as_deref()
            .map(|p| match friend.city.as_deref() {
                Some(c) => format!(" @ {} {}", p, c),
                None => format!(" @ {}", p),
            })
            .unwrap_or_default();
        let groups = if friend.groups.is_empty() {
            String::new()
        } else {
            format!(" [{}]", friend.groups.join(", "))
        };
        format!(
            "{}{} ({} {}, {}{}){}{}",
            pin,
            friend.name,
            friend.personality_type,
            self.reference.type_name(&friend.personality_type),
            friend.gender,
            age,
            place,
            groups
        )
    }

    /// Print an error.
    pub fn print_error(&self, e: &GraphError) {
        println!("Error: {}", e);
    }
}
