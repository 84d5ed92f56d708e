use std::path::PathBuf;

use crate::cli::context::CliContext;
use crate::migrate;
use crate::ops::friend_ops;

/// `export [path]`; without a path the dated backup name is used.
pub fn export(ctx: &CliContext, args: &str) {
    let path = if args.is_empty() {
        PathBuf::from(migrate::default_export_file_name(CliContext::today()))
    } else {
        PathBuf::from(args)
    };

    match migrate::export_json(&path, ctx.store.friends()) {
        Ok(count) => println!("Exported {} friends to {}", count, path.display()),
        Err(e) => ctx.print_error(&e),
    }
}

/// `import <path>` replaces the whole roster after confirmation.
pub fn import(ctx: &mut CliContext, args: &str) {
    if args.is_empty() {
        println!("Usage: import <path>");
        return;
    }

    let path = PathBuf::from(args);
    let friends = match migrate::import_json(&path) {
        Ok(f) => f,
        Err(e) => {
            ctx.print_error(&e);
            return;
        }
    };

    let question = format!(
        "Replace all {} current friends with {} from {}?",
        ctx.store.len(),
        friends.len(),
        path.display()
    );
    if !ctx.confirm(&question) {
        println!("Cancelled.");
        return;
    }

    match friend_ops::import_friends(&mut ctx.store, friends) {
        Ok(count) => {
            ctx.save();
            println!("Imported {} friends.", count);
        }
        Err(e) => ctx.print_error(&e),
    }
}
