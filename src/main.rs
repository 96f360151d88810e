//! # chatpulse CLI
//!
//! Command-line interface for the chatpulse library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatpulse::ChatpulseError;
use chatpulse::cli::Args;
use chatpulse::config::StatsConfig;
use chatpulse::core::session::ChatSession;
use chatpulse::core::stats::{
    UserScope, activity_heatmap, fetch_stats, month_activity_map, monthly_timeline,
    most_busy_users, week_activity_map,
};
use chatpulse::core::words::{emoji_usage, most_common_words};
use chatpulse::format::{OutputFormat, write_to_format};
use chatpulse::logging::init_logging;
use chatpulse::parser::ChatLogParser;

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), ChatpulseError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();
    init_logging(args.verbose);

    let output_path = args.output_path();
    let format: OutputFormat = args.format.into();
    let filter = args.filter_config()?;

    println!("📦 chatpulse v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for input in &args.inputs {
        println!("📂 Input:   {input}");
    }
    println!("💾 Output:  {output_path}");
    println!("📄 Format:  {format}");
    if let Some(ref after) = args.after {
        println!("📅 After:   {after}");
    }
    if let Some(ref before) = args.before {
        println!("📅 Before:  {before}");
    }
    if let Some(ref user) = args.user {
        println!("👤 User:    {user}");
    }
    println!();

    // Step 1: Parse
    println!("⏳ Parsing {} export(s)...", args.inputs.len());
    let parse_start = Instant::now();
    let parser = ChatLogParser::with_config(args.parser_config());
    let session = ChatSession::from_paths(&args.inputs, &parser)?;
    for file in session.files() {
        let invalid = file.warnings.iter().filter(|w| w.is_per_record()).count();
        if invalid > 0 {
            println!(
                "   {}: {} messages, {} without a valid date",
                file.name,
                file.len(),
                invalid
            );
        } else {
            println!("   {}: {} messages", file.name, file.len());
        }
    }
    let skipped = args.inputs.len() - session.files().len();
    if skipped > 0 {
        println!("   ⚠️  {skipped} export(s) without messages skipped");
    }
    println!(
        "   Found {} messages ({:.2}s)",
        session.len(),
        parse_start.elapsed().as_secs_f64()
    );

    // Step 2: Filter
    let filtered = if filter.is_active() {
        println!("🔍 Filtering messages...");
        let filtered = session.filtered(&filter);
        println!("   {} messages after filtering", filtered.len());
        filtered
    } else {
        session.clone()
    };

    // Step 3: Write
    println!("💾 Writing {format}...");
    let write_start = Instant::now();
    let rows = filtered.rows();
    write_to_format(&rows, &output_path, format, &args.output_config())?;
    println!("   Written in {:.2}s", write_start.elapsed().as_secs_f64());

    // Step 4: Report
    if args.stats {
        let scope = match args.user {
            Some(ref user) => session.scope(user)?,
            None => UserScope::Overall,
        };
        print_report(&filtered, &scope, &args.stats_config());
    }

    println!();
    println!("✅ Done! Output saved to {output_path}");
    println!(
        "   {} records in {:.2}s",
        rows.len(),
        total_start.elapsed().as_secs_f64()
    );

    Ok(())
}

fn print_report(session: &ChatSession, scope: &UserScope, config: &StatsConfig) {
    let stats = fetch_stats(session.records(), scope, config);

    println!();
    println!("📊 Statistics ({scope}):");
    println!("   Messages:  {}", stats.messages);
    println!("   Words:     {}", stats.words);
    println!("   Media:     {}", stats.media);
    println!("   Links:     {}", stats.links);

    let timeline = monthly_timeline(session.records(), scope);
    if !timeline.is_empty() {
        println!();
        println!("📅 Monthly timeline:");
        for month in &timeline {
            println!("   {:<16} {}", month.label, month.messages);
        }
    }

    let week = week_activity_map(session.records(), scope);
    if let Some(busiest) = week.first() {
        println!("   Busiest day:    {} ({})", busiest.name, busiest.messages);
    }
    let months = month_activity_map(session.records(), scope);
    if let Some(busiest) = months.first() {
        println!("   Busiest month:  {} ({})", busiest.name, busiest.messages);
    }

    let heatmap = activity_heatmap(session.records(), scope);
    if !heatmap.is_empty() {
        let (day, hour) = busiest_slot(&heatmap.counts);
        println!(
            "   Busiest hour:   {} {}",
            heatmap.days[day], heatmap.periods[hour]
        );
    }

    if *scope == UserScope::Overall {
        let busy = most_busy_users(session.records(), config.top_n);
        println!();
        println!("👥 Most busy users:");
        for (user, count) in &busy.top {
            let percent = busy
                .shares
                .iter()
                .find(|s| &s.user == user)
                .map_or(0.0, |s| s.percent);
            println!("   {user:<24} {count:>6}  {percent:>6.2}%");
        }

        if session.files().len() > 1 {
            for (source, busy) in session.busy_users_per_source(config.top_n) {
                let names: Vec<_> = busy.top.iter().map(|(u, _)| u.as_str()).collect();
                println!("   [{source}] {}", names.join(", "));
            }
        }
    }

    let words = most_common_words(session.records(), scope, config);
    if !words.is_empty() {
        println!();
        println!("💬 Most common words:");
        let line: Vec<_> = words.iter().map(|(w, n)| format!("{w} ({n})")).collect();
        println!("   {}", line.join(", "));
    }

    let emoji = emoji_usage(session.records(), scope);
    if !emoji.is_empty() {
        println!();
        println!("😀 Emoji:");
        let line: Vec<_> = emoji
            .iter()
            .take(config.top_n)
            .map(|(e, n)| format!("{e} {n}"))
            .collect();
        println!("   {}", line.join("  "));
    }
}

/// Returns the (weekday, hour) cell with most messages.
fn busiest_slot(counts: &[Vec<usize>]) -> (usize, usize) {
    let mut best = (0, 0, 0);
    for (day, row) in counts.iter().enumerate() {
        for (hour, &count) in row.iter().enumerate() {
            if count > best.2 {
                best = (day, hour, count);
            }
        }
    }
    (best.0, best.1)
}
