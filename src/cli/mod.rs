pub mod context;
pub mod friend_commands;
pub mod view_commands;
pub mod transfer_commands;

use context::CliContext;

/// Run the interactive REPL.
pub fn run(mut ctx: CliContext) {
    println!("MBTI Friend Graph");
    println!("Type 'help' for commands, 'exit' to quit.");
    println!();
    println!("Loaded {} friends.", ctx.store.len());
    if ctx.store.unreadable_count() > 0 {
        println!(
            "{} stored entries could not be read; they are kept unchanged in the database.",
            ctx.store.unreadable_count()
        );
    }

    repl_loop(&mut ctx);
}

fn repl_loop(ctx: &mut CliContext) {
    loop {
        let input = match ctx.read_line("> ") {
            Some(s) => s,
            None => break,
        };

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let (command, args) = parse_command(input);

        match command {
            "help" | "?" => print_help(),
            "quit" | "exit" | "q" => break,

            // Friend commands
            "list" | "ls" => friend_commands::list(ctx),
            "show" | "view" => friend_commands::show(ctx, args),
            "add" => friend_commands::add(ctx, args),
            "edit" => friend_commands::edit(ctx, args),
            "delete" | "rm" => friend_commands::delete(ctx, args),
            "pin" | "unpin" => friend_commands::pin(ctx, args),
            "birthdays" | "bday" => friend_commands::birthdays(ctx),
            "match" => friend_commands::match_type(ctx, args),

            // View commands
            "groups" => view_commands::groups(ctx),
            "dimension" | "dim" => view_commands::dimension(ctx, args),
            "group" => view_commands::group(ctx, args),
            "search" | "find" => view_commands::search(ctx, args),
            "sort" => view_commands::sort(ctx, args),
            "stats" => view_commands::stats(ctx, args),
            "map" => view_commands::map(ctx, args),
            "graph" => view_commands::graph(ctx),

            // Backup
            "export" => transfer_commands::export(ctx, args),
            "import" => transfer_commands::import(ctx, args),

            _ => println!("Unknown command: {}. Type 'help' for commands.", command),
        }
    }
}

/// Split input into command and the rest of the line.
fn parse_command(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.find(|c: char| c == ' ' || c == '\t') {
        Some(pos) => (&input[..pos], input[pos..].trim()),
        None => (input, ""),
    }
}

fn print_help() {
    println!("{}", HELP);
}

const HELP: &str = r#"
COMMANDS:

  Friends:
    list                    List friends in the current view
    show <name>             Show friend details
    add [name]              Add a new friend (interactive)
    edit <name>             Edit a friend
    delete <name>           Delete a friend
    pin <name>              Pin or unpin a friend
    birthdays               Birthdays in the next 30 days
    match <TYPE>            Compatible types and friends for a type

  View:
    groups                  List groups for the current dimension
    dimension [custom|demographic]
                            Show or switch the grouping dimension
    group [label]           Select a group (empty or 全部 for everyone)
    search [text]           Filter by name, type, nationality, province or education
    sort [recent|age-asc|age-desc]
                            Show or change the sort order
    stats [group|type]      Personality distribution of the view
    map [province|city]     Friends by location
    map <province>          Cities within one province
    graph                   Compatibility links in the view

  Backup:
    export [path]           Write all friends to a JSON file
    import <path>           Replace all friends from a JSON file

  Other:
    help                    Show this help
    exit / quit / q         Exit
"#;
