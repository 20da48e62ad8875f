// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use console::Emoji;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

use podorder::{
    Episode, FilterCompiler, FilterSpec, ListPreferences, SortOrder, SortScope, StoreSchema,
    read_episodes, read_preferences, read_schema, reorder, reorder_with_rng, write_preferences,
};

// Emoji with fallback for terminals without Unicode support
static HEADPHONES: Emoji<'_, '_> = Emoji("🎧 ", "[i] ");
static FUNNEL: Emoji<'_, '_> = Emoji("🔎 ", "[~] ");
static SUCCESS: Emoji<'_, '_> = Emoji("✅ ", "[+] ");

/// Order and filter podcast episode lists
#[derive(Parser, Debug)]
#[command(name = "podorder")]
#[command(about = "Order and filter podcast episode lists")]
#[command(version)]
struct Cli {
    /// Log debug diagnostics to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Reorder a JSON list of episodes and print it
    Sort {
        /// JSON file containing an array of episodes
        episodes: PathBuf,

        /// Sort order tag, e.g. DATE_NEW_OLD or SMART_SHUFFLE_OLD_NEW
        #[arg(short, long)]
        order: Option<SortOrder>,

        /// Seed for RANDOM, for reproducible shuffles
        #[arg(long)]
        seed: Option<u64>,

        /// Preferences file supplying the sort order when --order is absent
        #[arg(short, long)]
        prefs: Option<PathBuf>,

        /// Print the reordered episodes as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the SQL predicate for a filter
    Filter {
        #[command(flatten)]
        flags: FilterArgs,

        /// Preferences file whose filter is combined with the given flags
        #[arg(short, long)]
        prefs: Option<PathBuf>,

        /// JSON file overriding table and column names
        #[arg(short, long)]
        schema: Option<PathBuf>,
    },

    /// Write a preferences file
    Prefs {
        /// Preferences file to write
        file: PathBuf,

        /// Sort order tag to store
        #[arg(short, long)]
        order: Option<SortOrder>,

        #[command(flatten)]
        flags: FilterArgs,
    },

    /// List all sort orders
    Orders,
}

/// Filter flags, one switch per flag
#[derive(Args, Debug, Default)]
struct FilterArgs {
    /// Comma-separated flag names, e.g. "unplayed,downloaded"
    #[arg(short, long)]
    filter: Option<FilterSpec>,

    #[arg(long)]
    played: bool,
    /// Unplayed and new episodes
    #[arg(long)]
    unplayed: bool,
    #[arg(long)]
    new: bool,
    #[arg(long)]
    paused: bool,
    #[arg(long)]
    not_paused: bool,
    #[arg(long)]
    queued: bool,
    #[arg(long)]
    not_queued: bool,
    #[arg(long)]
    downloaded: bool,
    #[arg(long)]
    not_downloaded: bool,
    #[arg(long)]
    has_media: bool,
    #[arg(long)]
    no_media: bool,
    #[arg(long)]
    favorite: bool,
    #[arg(long)]
    not_favorite: bool,
    /// Episodes completed at least once
    #[arg(long)]
    in_history: bool,
    /// Include episodes of feeds that are not subscribed
    #[arg(long)]
    all_feeds: bool,
}

impl FilterArgs {
    /// Merge the switches into a base filter
    fn apply_to(&self, base: FilterSpec) -> FilterSpec {
        let base = self.filter.unwrap_or(base);
        FilterSpec {
            show_played: base.show_played || self.played,
            show_unplayed: base.show_unplayed || self.unplayed,
            show_new: base.show_new || self.new,
            show_paused: base.show_paused || self.paused,
            show_not_paused: base.show_not_paused || self.not_paused,
            show_queued: base.show_queued || self.queued,
            show_not_queued: base.show_not_queued || self.not_queued,
            show_downloaded: base.show_downloaded || self.downloaded,
            show_not_downloaded: base.show_not_downloaded || self.not_downloaded,
            show_has_media: base.show_has_media || self.has_media,
            show_no_media: base.show_no_media || self.no_media,
            show_is_favorite: base.show_is_favorite || self.favorite,
            show_not_favorite: base.show_not_favorite || self.not_favorite,
            show_in_history: base.show_in_history || self.in_history,
            include_not_subscribed: base.include_not_subscribed || self.all_feeds,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Sort {
            episodes,
            order,
            seed,
            prefs,
            json,
        } => run_sort(episodes, order, seed, prefs, json),
        Commands::Filter {
            flags,
            prefs,
            schema,
        } => run_filter(&flags, prefs, schema),
        Commands::Prefs { file, order, flags } => run_prefs(file, order, &flags),
        Commands::Orders => {
            run_orders();
            Ok(())
        }
    }
}

fn load_prefs(path: Option<PathBuf>) -> Result<ListPreferences> {
    match path {
        Some(path) => read_preferences(&path)
            .with_context(|| format!("Failed to load preferences from {}", path.display())),
        None => Ok(ListPreferences::default()),
    }
}

fn run_sort(
    path: PathBuf,
    order: Option<SortOrder>,
    seed: Option<u64>,
    prefs: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let order = match order {
        Some(order) => order,
        None => load_prefs(prefs)?.sort_order_or_default(),
    };

    let mut episodes = read_episodes(&path).context("Failed to load episodes")?;

    match seed {
        Some(seed) => reorder_with_rng(&mut episodes, order, &mut StdRng::seed_from_u64(seed)),
        None => reorder(&mut episodes, order),
    }

    if json {
        let output =
            serde_json::to_string_pretty(&episodes).context("Failed to serialize episodes")?;
        println!("{output}");
        return Ok(());
    }

    println!(
        "\n{HEADPHONES}{} episodes, {}\n",
        episodes.len().to_string().cyan(),
        order.to_string().bold().magenta()
    );
    for (index, episode) in episodes.iter().enumerate() {
        println!("{}", format_episode(index, episode));
    }
    println!();

    Ok(())
}

fn format_episode(index: usize, episode: &Episode) -> String {
    let date = episode
        .pub_date
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "undated".to_string());
    let feed = episode.feed_title.as_deref().unwrap_or("-");
    let title = episode.title.as_deref().unwrap_or("Untitled Episode");

    format!(
        "{:>4}  {}  {}  {}",
        (index + 1).to_string().dimmed(),
        date.cyan(),
        truncate(feed, 24).yellow(),
        title
    )
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let head: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{head}...")
    }
}

fn run_filter(flags: &FilterArgs, prefs: Option<PathBuf>, schema: Option<PathBuf>) -> Result<()> {
    let base = load_prefs(prefs)?.filter;
    let spec = flags.apply_to(base);

    let schema = match schema {
        Some(path) => read_schema(&path).context("Failed to load store schema")?,
        None => StoreSchema::default(),
    };

    match predicate_for(&spec, schema) {
        Some(predicate) => println!("{predicate}"),
        None => eprintln!("{FUNNEL}{}", "No filtering: every episode matches".dimmed()),
    }

    Ok(())
}

/// The compiled predicate, verbatim, or `None` when every episode matches
fn predicate_for(spec: &FilterSpec, schema: StoreSchema) -> Option<String> {
    if spec.is_unfiltered() {
        return None;
    }
    Some(FilterCompiler::new(schema).compile(spec))
}

fn run_prefs(file: PathBuf, order: Option<SortOrder>, flags: &FilterArgs) -> Result<()> {
    let prefs = ListPreferences {
        sort_order: order,
        filter: flags.apply_to(FilterSpec::default()),
    };

    write_preferences(&prefs, &file)
        .with_context(|| format!("Failed to write preferences to {}", file.display()))?;

    println!(
        "{SUCCESS}Saved {} to {}",
        stored_order_label(&prefs).bold(),
        file.display().to_string().cyan()
    );

    Ok(())
}

fn stored_order_label(prefs: &ListPreferences) -> String {
    match prefs.sort_order {
        Some(order) => order.to_string(),
        None => format!("default order ({})", prefs.sort_order_or_default()),
    }
}

fn run_orders() {
    for order in SortOrder::ALL {
        let scope = match order.scope() {
            SortScope::IntraFeed => "any list".dimmed(),
            SortScope::InterFeed => "multi-feed lists".yellow(),
        };
        println!("{:<26} {}", order.as_str(), scope);
    }
}
