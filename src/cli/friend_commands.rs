use chrono::NaiveDate;

use crate::cli::context::CliContext;
use crate::migrate::{DEFAULT_NATIONALITY, DEFAULT_PROVINCE};
use crate::model::*;
use crate::ops::friend_ops;
use crate::queries::*;
use crate::reference::zodiac_sign;

pub fn list(ctx: &CliContext) {
    let view = view_queries::compute_view(ctx.store.friends(), &ctx.state, &ctx.reference);
    if ctx.store.is_empty() {
        println!("No friends yet. Use 'add' to add someone.");
        return;
    }

    let query = if ctx.state.query.trim().is_empty() {
        String::new()
    } else {
        format!(", search '{}'", ctx.state.query)
    };
    println!(
        "Friends in {} ({} of {}{}):",
        ctx.state.group,
        view.friends.len(),
        ctx.store.len(),
        query
    );
    println!();
    if view.friends.is_empty() {
        println!("  (no matches)");
    }
    for friend in &view.friends {
        println!("  {}", ctx.format_friend(friend));
    }
}

pub fn show(ctx: &CliContext, args: &str) {
    if args.is_empty() {
        println!("Usage: show <name>");
        return;
    }
    let friend = match ctx.find_friend(args) {
        Some(f) => f,
        None => return,
    };

    println!();
    println!("Name: {}", friend.name);
    println!("Gender: {}", friend.gender);
    println!(
        "Type: {} {} ({})",
        friend.personality_type,
        ctx.reference.type_name(&friend.personality_type),
        ctx.reference.coarse_group(&friend.personality_type)
    );
    if !friend.tags.is_empty() {
        println!("Tags: {}", friend.tags.join(", "));
    }
    match friend.birth_date {
        Some(bd) => {
            let next = birthday_queries::days_until_next_birthday(bd, CliContext::today())
                .map(|days| match days {
                    0 => ", today".to_string(),
                    n => format!(", in {} days", n),
                })
                .unwrap_or_default();
            println!("Birthday: {} ({}{})", bd, zodiac_sign(bd), next);
        }
        None => println!("Birthday: (none)"),
    }
    println!("Age: {}", friend.age.map(|a| a.to_string()).unwrap_or_else(|| "(unknown)".into()));
    println!("Nationality: {}", friend.nationality.as_deref().unwrap_or("(none)"));
    println!("Province: {}", friend.province.as_deref().unwrap_or("(none)"));
    println!("City: {}", friend.city.as_deref().unwrap_or("(none)"));
    println!("Education: {}", friend.education.as_deref().unwrap_or("(none)"));
    println!(
        "Groups: {}",
        if friend.groups.is_empty() { "(none)".to_string() } else { friend.groups.join(", ") }
    );
    println!("Pinned: {}", if friend.is_pinned { "yes" } else { "no" });
}

/// Prompts for a field. Enter keeps `current`, '-' clears it.
/// Returns None on EOF.
fn prompt_field(ctx: &CliContext, label: &str, current: Option<&str>) -> Option<Option<String>> {
    let shown = current.map(|c| format!(" [{}]", c)).unwrap_or_default();
    let input = ctx.prompt(&format!("{}{}: ", label, shown))?;
    Some(match input.as_str() {
        "" => current.map(String::from),
        "-" => None,
        s => Some(s.to_string()),
    })
}

fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok()
}

fn parse_groups(input: &str) -> Vec<String> {
    input
        .split([',', '，'])
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Walks through every editable field of `draft`.
fn fill_draft(ctx: &CliContext, draft: &mut FriendDraft) -> Option<()> {
    if let Some(name) = prompt_field(ctx, "Name", Some(draft.name.as_str()).filter(|s| !s.is_empty()))? {
        draft.name = name;
    }

    let genders = ctx.reference.genders().join("/");
    let default_gender = Some(draft.gender.as_str())
        .filter(|s| !s.is_empty())
        .or_else(|| ctx.reference.genders().first().map(String::as_str));
    if let Some(gender) = prompt_field(ctx, &format!("Gender ({})", genders), default_gender)? {
        draft.gender = gender;
    }

    let current_type = Some(draft.personality_type.as_str())
        .filter(|s| !s.is_empty())
        .unwrap_or("INTJ")
        .to_string();
    if let Some(t) = prompt_field(ctx, "MBTI type", Some(&current_type))? {
        let t = t.to_uppercase();
        if !ctx.reference.is_known_type(&t) {
            println!("Note: '{}' is not one of the 16 types.", t);
        }
        draft.personality_type = t;
    }

    let current_birth = draft.birth_date.map(|d| d.to_string());
    match prompt_field(ctx, "Birth date (YYYY-MM-DD)", current_birth.as_deref())? {
        Some(s) => match parse_date(&s) {
            Some(d) => draft.birth_date = Some(d),
            None => println!("Invalid date '{}', birth date left unchanged.", s),
        },
        None => draft.birth_date = None,
    }

    let nationality = draft.nationality.clone().unwrap_or_else(|| DEFAULT_NATIONALITY.into());
    draft.nationality = prompt_field(ctx, "Nationality", Some(&nationality))?;
    let province = draft.province.clone().unwrap_or_else(|| DEFAULT_PROVINCE.into());
    draft.province = prompt_field(ctx, "Province", Some(&province))?;
    draft.city = prompt_field(ctx, "City", draft.city.clone().as_deref())?;
    draft.education = prompt_field(ctx, "Education", draft.education.clone().as_deref())?;

    let existing = draft.groups.join(", ");
    let current_groups = Some(existing.as_str()).filter(|s| !s.is_empty());
    draft.groups = prompt_field(ctx, "Groups (comma separated)", current_groups)?
        .map(|s| parse_groups(&s))
        .unwrap_or_default();
    Some(())
}

pub fn add(ctx: &mut CliContext, args: &str) {
    println!("Adding a new friend (Enter accepts the value in brackets, '-' clears it)");
    println!();

    let mut draft = FriendDraft::default();
    if !args.is_empty() {
        draft.name = args.to_string();
    }
    if fill_draft(ctx, &mut draft).is_none() {
        return;
    }

    match friend_ops::submit_friend(&mut ctx.store, draft, &ctx.reference, CliContext::today(), CliContext::now_ms()) {
        Ok(f) => {
            ctx.save();
            println!("Added {}", ctx.format_friend(&f));
        }
        Err(e) => ctx.print_error(&e),
    }
}

pub fn edit(ctx: &mut CliContext, args: &str) {
    if args.is_empty() {
        println!("Usage: edit <name>");
        return;
    }
    let friend = match ctx.find_friend(args) {
        Some(f) => f,
        None => return,
    };

    println!("Editing {} (Enter keeps the current value, '-' clears it)", friend.name);
    let mut draft = FriendDraft::from_record(&friend);
    if fill_draft(ctx, &mut draft).is_none() {
        return;
    }

    match friend_ops::submit_friend(&mut ctx.store, draft, &ctx.reference, CliContext::today(), CliContext::now_ms()) {
        Ok(f) => {
            ctx.save();
            println!("Updated {}", ctx.format_friend(&f));
        }
        Err(e) => ctx.print_error(&e),
    }
}

pub fn delete(ctx: &mut CliContext, args: &str) {
    if args.is_empty() {
        println!("Usage: delete <name>");
        return;
    }
    let friend = match ctx.find_friend(args) {
        Some(f) => f,
        None => return,
    };

    if !ctx.confirm(&format!("Delete {}? This cannot be undone.", friend.name)) {
        println!("Cancelled.");
        return;
    }

    match friend_ops::delete_friend(&mut ctx.store, &friend.id) {
        Ok(f) => {
            ctx.save();
            println!("Deleted {}", f.name);
        }
        Err(e) => ctx.print_error(&e),
    }
}

pub fn pin(ctx: &mut CliContext, args: &str) {
    if args.is_empty() {
        println!("Usage: pin <name>");
        return;
    }
    let friend = match ctx.find_friend(args) {
        Some(f) => f,
        None => return,
    };

    match friend_ops::toggle_pin(&mut ctx.store, &friend.id) {
        Ok(f) => {
            ctx.save();
            println!("{} {}", if f.is_pinned { "Pinned" } else { "Unpinned" }, f.name);
        }
        Err(e) => ctx.print_error(&e),
    }
}

pub fn birthdays(ctx: &CliContext) {
    let upcoming = birthday_queries::upcoming_birthdays(
        ctx.store.friends(),
        CliContext::today(),
        birthday_queries::UPCOMING_WINDOW_DAYS,
    );
    if upcoming.is_empty() {
        println!("No birthdays in the next {} days.", birthday_queries::UPCOMING_WINDOW_DAYS);
        return;
    }

    println!("Upcoming birthdays ({}):", upcoming.len());
    for b in &upcoming {
        let when = match b.days_until {
            0 => "today".to_string(),
            1 => "tomorrow".to_string(),
            n => format!("in {} days", n),
        };
        println!(
            "  {} - {}月{}日, {} (turns {})",
            b.friend.name, b.month, b.day, when, b.next_age
        );
    }
}

pub fn match_type(ctx: &CliContext, args: &str) {
    let code = args.trim().to_uppercase();
    if code.is_empty() {
        println!("Usage: match <TYPE>");
        return;
    }
    let compat = match ctx.reference.compatibility(&code) {
        Some(c) => c,
        None => {
            println!("No compatibility data for '{}'", code);
            return;
        }
    };

    let found = relationship_queries::compatible_friends(&code, ctx.store.friends(), &ctx.reference);
    println!("{} {} ({})", code, ctx.reference.type_name(&code), ctx.reference.coarse_group(&code));
    println!();
    println!("  Best matches: {}", compat.best_match.join(", "));
    for f in &found.best_match {
        println!("    {}", ctx.format_friend(f));
    }
    println!("  Challenging: {}", compat.challenging.join(", "));
    for f in &found.challenging {
        println!("    {}", ctx.format_friend(f));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_groups_with_either_comma() {
        assert_eq!(parse_groups("公司, 家人，大学同学,,"), vec!["公司", "家人", "大学同学"]);
    }

    #[test]
    fn parses_iso_dates() {
        assert_eq!(parse_date(" 2000-01-15 "), NaiveDate::from_ymd_opt(2000, 1, 15));
        assert_eq!(parse_date("15/01/2000"), None);
    }
}
