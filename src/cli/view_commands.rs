use crate::cli::context::CliContext;
use crate::model::*;
use crate::queries::*;
use crate::queries::geo_queries::GeoBucket;
use crate::queries::stats_queries::DistributionEntry;

fn dimension_name(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::Custom => "custom",
        Dimension::Demographic => "demographic",
    }
}

fn sort_name(key: SortKey) -> &'static str {
    match key {
        SortKey::MostRecent => "recent",
        SortKey::AgeAscending => "age-asc",
        SortKey::AgeDescending => "age-desc",
    }
}

fn mode_name(mode: DistributionMode) -> &'static str {
    match mode {
        DistributionMode::Coarse => "group",
        DistributionMode::Fine => "type",
    }
}

fn level_name(level: LocationLevel) -> &'static str {
    match level {
        LocationLevel::Province => "province",
        LocationLevel::City => "city",
    }
}

pub fn groups(ctx: &CliContext) {
    let options = taxonomy_queries::group_options(ctx.store.friends(), ctx.state.dimension, &ctx.reference);
    println!("Groups ({}):", dimension_name(ctx.state.dimension));
    for option in &options {
        let count = ctx
            .store
            .friends()
            .iter()
            .filter(|f| filter_queries::matches_group(f, ctx.state.dimension, option))
            .count();
        let marker = if *option == ctx.state.group { "*" } else { " " };
        println!("  {} {} ({})", marker, option, count);
    }
}

pub fn dimension(ctx: &mut CliContext, args: &str) {
    if args.is_empty() {
        println!("Dimension: {}", dimension_name(ctx.state.dimension));
        return;
    }
    match args.parse::<Dimension>() {
        Ok(d) => {
            ctx.state.set_dimension(d);
            println!("Dimension set to {} (group reset to {})", dimension_name(d), ctx.state.group);
        }
        Err(e) => ctx.print_error(&e),
    }
}

pub fn group(ctx: &mut CliContext, args: &str) {
    let selected = GroupFilter::parse(args);
    let options = taxonomy_queries::group_options(ctx.store.friends(), ctx.state.dimension, &ctx.reference);
    if !options.contains(&selected) {
        println!("Note: nobody is in '{}' yet.", selected);
    }
    println!("Group set to {}", selected);
    ctx.state.group = selected;
}

pub fn search(ctx: &mut CliContext, args: &str) {
    ctx.state.query = args.to_string();
    if args.is_empty() {
        println!("Search cleared.");
    } else {
        println!("Searching for '{}'", args);
    }
}

pub fn sort(ctx: &mut CliContext, args: &str) {
    if args.is_empty() {
        println!("Sort: {} (options: recent, age-asc, age-desc)", sort_name(ctx.state.sort));
        return;
    }
    match args.parse::<SortKey>() {
        Ok(key) => {
            ctx.state.sort = key;
            println!("Sort set to {}", sort_name(key));
        }
        Err(e) => ctx.print_error(&e),
    }
}

fn print_distribution(entries: &[DistributionEntry], total: usize, indent: &str) {
    for entry in entries {
        println!(
            "{}{:<8} {:>3}  {:>5.1}%",
            indent,
            entry.label,
            entry.count,
            entry.percentage(total)
        );
    }
}

pub fn stats(ctx: &mut CliContext, args: &str) {
    if !args.is_empty() {
        match args.parse::<DistributionMode>() {
            Ok(mode) => ctx.state.distribution_mode = mode,
            Err(e) => {
                ctx.print_error(&e);
                return;
            }
        }
    }

    let view = view_queries::compute_view(ctx.store.friends(), &ctx.state, &ctx.reference);
    let stats = stats_queries::roster_stats(&view.friends, ctx.state.distribution_mode, &ctx.reference);

    println!("Statistics for {}:", ctx.state.group);
    println!("  Shown: {} of {}", stats.total, ctx.store.len());
    println!("  Pinned: {}", stats.pinned);
    println!("  With birthday: {}", stats.with_birth_date);
    println!();
    println!("  Distribution by {}:", mode_name(ctx.state.distribution_mode));
    if stats.distribution.is_empty() {
        println!("    (empty)");
    }
    print_distribution(&stats.distribution, stats.total, "    ");
}

fn print_buckets(buckets: &[GeoBucket<'_>]) {
    if buckets.is_empty() {
        println!("  (no locations)");
    }
    for bucket in buckets {
        let names: Vec<&str> = bucket.friends.iter().map(|f| f.name.as_str()).collect();
        let types: Vec<String> = bucket
            .types
            .iter()
            .map(|t| format!("{}×{}", t.label, t.count))
            .collect();
        println!("  {} ({}): {}", bucket.map_name, bucket.total, names.join(", "));
        println!("      {}", types.join(" "));
    }
}

/// `map`, `map province|city`, or `map <province>` to drill into its cities.
pub fn map(ctx: &mut CliContext, args: &str) {
    if !args.is_empty() {
        if let Ok(level) = args.parse::<LocationLevel>() {
            ctx.state.location_level = level;
        } else {
            let view = view_queries::compute_view(ctx.store.friends(), &ctx.state, &ctx.reference);
            let provinces =
                geo_queries::geo_buckets(view.friends.iter().copied(), LocationLevel::Province, &ctx.reference);
            let province = match geo_queries::find_bucket(&provinces, args) {
                Some(b) => b,
                None => {
                    println!("Nobody shown lives in '{}'", args);
                    return;
                }
            };
            let cities = geo_queries::city_buckets_in(province.friends.iter().copied(), args, &ctx.reference);
            println!("Cities in {} ({}):", province.map_name, province.total);
            print_buckets(&cities);
            return;
        }
    }

    let view = view_queries::compute_view(ctx.store.friends(), &ctx.state, &ctx.reference);
    println!("Friends by {}:", level_name(ctx.state.location_level));
    print_buckets(&view.geo);
}

pub fn graph(ctx: &CliContext) {
    let view = view_queries::compute_view(ctx.store.friends(), &ctx.state, &ctx.reference);
    if view.edges.is_empty() {
        println!("No compatibility links among the {} friends shown.", view.friends.len());
        return;
    }

    let name_of = |id: &Id<FriendRecord>| {
        view.friends
            .iter()
            .find(|f| &f.id == id)
            .map(|f| format!("{} ({})", f.name, f.personality_type))
            .unwrap_or_else(|| id.to_string())
    };

    println!("Compatibility links ({}):", view.edges.len());
    for edge in &view.edges {
        println!(
            "  {} ── {} ── {}",
            name_of(&edge.source),
            edge.kind.label(),
            name_of(&edge.target)
        );
    }
}
