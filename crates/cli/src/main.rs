use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use data_loader::{CatalogIndex, TitleKind, TitleRecord};
use dataflow::{SelectionEvent, SelectionGraph, ViewOutputs};
use query::{ACTORS_PER_PAGE, FilterEngine, paginate};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Catalog Explorer - browse media titles by country, type, and cast
#[derive(Parser)]
#[command(name = "catalog-explorer")]
#[command(about = "Explore a media catalog by country, type, and cast", long_about = None)]
struct Cli {
    /// Path to the catalog CSV
    #[arg(short, long, default_value = "netflix_titles.csv")]
    data: PathBuf,

    /// Emit machine-readable JSON instead of formatted text
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum KindArg {
    Movie,
    Tv,
}

impl From<KindArg> for TitleKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Movie => TitleKind::Movie,
            KindArg::Tv => TitleKind::TvShow,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List selectable countries with their title counts
    Countries,

    /// Show movie/TV counts for one country
    Stats {
        /// Country name (exact, case-sensitive)
        #[arg(long)]
        country: String,
    },

    /// List titles for a country and kind
    Titles {
        /// Country name (exact, case-sensitive)
        #[arg(long)]
        country: String,

        /// Title kind to filter by
        #[arg(long, value_enum, default_value = "movie")]
        kind: KindArg,
    },

    /// Show the detail record for one title
    Details {
        /// Exact title name
        #[arg(long)]
        title: String,
    },

    /// Show one page of a title's cast
    Cast {
        /// Exact title name
        #[arg(long)]
        title: String,

        /// Page index (10 actors per page)
        #[arg(long, default_value = "0")]
        page: usize,
    },

    /// Interactive event loop driving the selection graph
    Explore,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    println!("Loading catalog from {}...", cli.data.display());
    let start = Instant::now();
    let index = Arc::new(
        CatalogIndex::load_from_csv(&cli.data)
            .with_context(|| format!("Failed to load catalog from {}", cli.data.display()))?,
    );
    println!("{} Loaded catalog in {:?}", "✓".green(), start.elapsed());

    match cli.command {
        Commands::Countries => handle_countries(index, cli.json),
        Commands::Stats { country } => handle_stats(index, &country, cli.json),
        Commands::Titles { country, kind } => {
            handle_titles(index, &country, kind.into(), cli.json)
        }
        Commands::Details { title } => handle_details(index, &title, cli.json),
        Commands::Cast { title, page } => handle_cast(index, &title, page, cli.json),
        Commands::Explore => handle_explore(index),
    }
}

/// Handle the 'countries' command
fn handle_countries(index: Arc<CatalogIndex>, json: bool) -> Result<()> {
    let aggregates = index.aggregates();

    if json {
        println!("{}", serde_json::to_string_pretty(aggregates.counts())?);
        return Ok(());
    }

    println!("{}", "Countries:".bold().blue());
    for country in aggregates.countries() {
        println!("  {} ({} titles)", country, aggregates.count(country));
    }
    println!("Total: {} countries", aggregates.countries().len());
    Ok(())
}

/// Handle the 'stats' command
fn handle_stats(index: Arc<CatalogIndex>, country: &str, json: bool) -> Result<()> {
    let engine = FilterEngine::new(index);
    let movies = engine.titles_for(Some(country), TitleKind::Movie).len();
    let tv_shows = engine.titles_for(Some(country), TitleKind::TvShow).len();

    if json {
        println!(
            "{}",
            serde_json::json!({ "country": country, "movies": movies, "tv_shows": tv_shows })
        );
        return Ok(());
    }

    println!("{}", format!("Stats for {country}:").bold().blue());
    println!("  {}Movies: {}", "• ".green(), movies);
    println!("  {}TV Shows: {}", "• ".green(), tv_shows);
    Ok(())
}

/// Handle the 'titles' command
fn handle_titles(index: Arc<CatalogIndex>, country: &str, kind: TitleKind, json: bool) -> Result<()> {
    let engine = FilterEngine::new(index);
    let titles = engine.titles_for(Some(country), kind);

    if json {
        let names: Vec<&str> = titles.iter().map(|r| r.title.as_str()).collect();
        println!("{}", serde_json::to_string_pretty(&names)?);
        return Ok(());
    }

    println!(
        "{}",
        format!("{kind} titles in {country}:").bold().blue()
    );
    for record in &titles {
        println!("  - {}", record.title);
    }
    if titles.is_empty() {
        println!("  (none)");
    }
    Ok(())
}

/// Handle the 'details' command
fn handle_details(index: Arc<CatalogIndex>, title: &str, json: bool) -> Result<()> {
    let engine = FilterEngine::new(index);
    let Some(record) = engine.details_for(title) else {
        println!("No details found for '{title}'");
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(record)?);
        return Ok(());
    }

    print_details(record);
    Ok(())
}

/// Handle the 'cast' command
fn handle_cast(index: Arc<CatalogIndex>, title: &str, page: usize, json: bool) -> Result<()> {
    let engine = FilterEngine::new(index);
    let cast = engine.cast_for(title);
    let page_actors = paginate(&cast, page, ACTORS_PER_PAGE);

    if json {
        println!("{}", serde_json::to_string_pretty(&page_actors)?);
        return Ok(());
    }

    println!(
        "{}",
        format!("Cast of {title} (page {page}):").bold().blue()
    );
    for actor in page_actors {
        println!("  - {actor}");
    }
    if page_actors.is_empty() {
        println!("  (empty page)");
    }
    Ok(())
}

/// Handle the 'explore' command: a REPL feeding events through the
/// selection graph, one per line, printing the refreshed outputs.
fn handle_explore(index: Arc<CatalogIndex>) -> Result<()> {
    let mut graph = SelectionGraph::new(index);

    println!("{}", "Interactive explorer".bold().blue());
    println!("Commands: country <name> | kind movie|tv | title <name> | click <name> | prev | next | quit");

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let Some(event) = parse_event(line.trim()) else {
            if matches!(line.trim(), "quit" | "exit" | "q") {
                break;
            }
            if !line.trim().is_empty() {
                println!("{} unrecognized command", "!".yellow());
            }
            continue;
        };

        let outputs = graph.apply(event);
        print_outputs(outputs);
    }
    Ok(())
}

/// Parse one REPL line into a selection event.
fn parse_event(line: &str) -> Option<SelectionEvent> {
    let (command, rest) = match line.split_once(' ') {
        Some((c, r)) => (c, r.trim()),
        None => (line, ""),
    };

    match (command, rest) {
        ("country", name) if !name.is_empty() => {
            Some(SelectionEvent::SelectCountry(name.to_string()))
        }
        ("kind", "movie") => Some(SelectionEvent::SelectKind(TitleKind::Movie)),
        ("kind", "tv") => Some(SelectionEvent::SelectKind(TitleKind::TvShow)),
        ("title", name) if !name.is_empty() => {
            Some(SelectionEvent::SelectTitle(name.to_string()))
        }
        ("click", name) if !name.is_empty() => Some(SelectionEvent::MapClick(name.to_string())),
        ("prev", "") => Some(SelectionEvent::PrevActorsPage),
        ("next", "") => Some(SelectionEvent::NextActorsPage),
        _ => None,
    }
}

/// Print the current output snapshot for the REPL.
fn print_outputs(outputs: &ViewOutputs) {
    match (&outputs.dropdown_value, &outputs.country_stats) {
        (Some(country), Some(stats)) => println!(
            "{} {} — {} movies, {} TV shows",
            "Country:".bold(),
            country,
            stats.movies,
            stats.tv_shows
        ),
        _ => println!("{} (none)", "Country:".bold()),
    }

    println!(
        "{} {} option(s)",
        "Titles:".bold(),
        outputs.title_options.len()
    );

    match &outputs.title_details {
        Some(record) => print_details(record),
        None => println!("{} (none selected)", "Title:".bold()),
    }

    if outputs.actor_page.is_empty() {
        println!("{} (empty page)", "Actors:".bold());
    } else {
        println!("{} {}", "Actors:".bold(), outputs.actor_page.join(", "));
    }
}

/// Print one detail record; absent fields are rendered here, in the
/// presentation layer, never defaulted in the core.
fn print_details(record: &TitleRecord) {
    let shown = |value: &Option<String>| match value {
        Some(v) => v.clone(),
        None => "(unknown)".to_string(),
    };

    println!("{}", format!("Title: {}", record.title).bold());
    match record.kind {
        Some(kind) => println!("  Type: {kind}"),
        None => println!("  Type: (unknown)"),
    }
    println!("  Director: {}", shown(&record.director));
    match record.release_year {
        Some(year) => println!("  Release year: {year}"),
        None => println!("  Release year: (unknown)"),
    }
    println!("  Duration: {}", shown(&record.duration));
    println!("  Rating: {}", shown(&record.rating));
}
