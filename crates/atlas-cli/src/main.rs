mod render;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use atlas_core::{Dataset, FilterState, Selection, TimeRange};
use atlas_store::{ChangeBus, KvStore, Session, default_data_dir};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "atlas", about = "Philosopher atlas directory CLI")]
struct Cli {
    /// Dataset JSON path (falls back to ATLAS_DATASET)
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    /// Override the storage directory (falls back to ATLAS_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the directory and record the query in history
    Search {
        /// Query text
        query: String,
    },

    /// List philosophers with optional filters
    List {
        /// Filter by text query (not recorded in history)
        #[arg(long)]
        query: Option<String>,

        /// Filter by period
        #[arg(long)]
        period: Option<String>,

        /// Filter by school
        #[arg(long)]
        school: Option<String>,

        /// Filter by birth city
        #[arg(long)]
        city: Option<String>,

        /// Range start year (negative = BCE)
        #[arg(long, allow_hyphen_values = true)]
        from: Option<i32>,

        /// Range end year (negative = BCE)
        #[arg(long, allow_hyphen_values = true)]
        to: Option<i32>,
    },

    /// Show one philosopher and record it as recently viewed
    View {
        /// Philosopher id
        id: String,
    },

    /// Toggle a philosopher in the favorites list
    Fav {
        /// Philosopher id
        id: String,
    },

    /// List favorites in insertion order
    Favorites,

    /// List recently viewed philosophers, most recent first
    Recent,

    /// Show search history
    History {
        /// Clear the whole history
        #[arg(long)]
        clear: bool,

        /// Remove the entry at this position (0 = most recent)
        #[arg(long)]
        remove: Option<usize>,
    },

    /// List derived filter facets
    Facets,

    /// Show dataset and collection statistics
    Stats,
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn dataset_path(cli: &Cli) -> Result<PathBuf> {
    if let Some(path) = &cli.dataset {
        return Ok(path.clone());
    }
    if let Ok(path) = std::env::var("ATLAS_DATASET") {
        return Ok(PathBuf::from(path));
    }
    bail!("no dataset: pass --dataset or set ATLAS_DATASET");
}

fn data_dir(cli: &Cli) -> PathBuf {
    cli.data_dir
        .clone()
        .or_else(|| std::env::var("ATLAS_DATA_DIR").ok().map(PathBuf::from))
        .unwrap_or_else(default_data_dir)
}

fn load_dataset(path: &Path) -> Result<Arc<Dataset>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read dataset {}", path.display()))?;
    let dataset = Dataset::parse_json(&json)
        .with_context(|| format!("failed to parse dataset {}", path.display()))?;
    Ok(Arc::new(dataset))
}

fn open_session(cli: &Cli) -> Result<Session> {
    let dataset = load_dataset(&dataset_path(cli)?)?;

    let dir = data_dir(cli);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create {}", dir.display()))?;
    let store = KvStore::open(&dir.join("atlas.db")).context("failed to open store")?;

    let bus = Arc::new(ChangeBus::new());
    Session::open(dataset, Arc::new(store), bus).context("failed to open session")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Search { query } => cmd_search(&cli, query),
        Commands::List {
            query,
            period,
            school,
            city,
            from,
            to,
        } => cmd_list(
            &cli,
            query.as_deref(),
            period.as_deref(),
            school.as_deref(),
            city.as_deref(),
            *from,
            *to,
        ),
        Commands::View { id } => cmd_view(&cli, id),
        Commands::Fav { id } => cmd_fav(&cli, id),
        Commands::Favorites => cmd_favorites(&cli),
        Commands::Recent => cmd_recent(&cli),
        Commands::History { clear, remove } => cmd_history(&cli, *clear, *remove),
        Commands::Facets => cmd_facets(&cli),
        Commands::Stats => cmd_stats(&cli),
    }
}

fn print_results(session: &Session) {
    let results = session.filtered_philosophers();
    if results.is_empty() {
        println!("(no matches)");
        return;
    }
    for p in &results {
        println!("{}", render::row(p));
    }
    println!("{} match(es)", results.len());
}

fn cmd_search(cli: &Cli, query: &str) -> Result<()> {
    let mut session = open_session(cli)?;
    session.set_search_query(query);
    session
        .add_search_history(query)
        .context("failed to record search")?;
    print_results(&session);
    Ok(())
}

fn cmd_list(
    cli: &Cli,
    query: Option<&str>,
    period: Option<&str>,
    school: Option<&str>,
    city: Option<&str>,
    from: Option<i32>,
    to: Option<i32>,
) -> Result<()> {
    let mut session = open_session(cli)?;

    let selection = |v: Option<&str>| v.map_or(Selection::All, Selection::only);
    session.set_filters(FilterState {
        period: selection(period),
        school: selection(school),
        city: selection(city),
    });

    let range = TimeRange::new(
        from.unwrap_or_else(|| session.min_year()),
        to.unwrap_or_else(|| session.max_year()),
    );
    session.set_time_range(range);

    if let Some(q) = query {
        session.set_search_query(q);
    }

    print_results(&session);
    Ok(())
}

fn cmd_view(cli: &Cli, id: &str) -> Result<()> {
    let mut session = open_session(cli)?;
    session.add_recently_viewed(id)?;

    // add_recently_viewed already rejected unknown ids
    if let Some(p) = session.dataset().by_id(id) {
        print!("{}", render::detail(p));
        if session.is_favorite(id) {
            println!("\n(in favorites)");
        }
    }
    Ok(())
}

fn cmd_fav(cli: &Cli, id: &str) -> Result<()> {
    let mut session = open_session(cli)?;
    let now_favorite = session.toggle_favorite(id)?;

    if now_favorite {
        println!("added {id} to favorites");
    } else {
        println!("removed {id} from favorites");
    }
    Ok(())
}

fn cmd_favorites(cli: &Cli) -> Result<()> {
    let session = open_session(cli)?;
    let favorites = session.favorites();
    if favorites.is_empty() {
        println!("(no favorites)");
        return Ok(());
    }
    for p in favorites {
        println!("{}", render::row(p));
    }
    Ok(())
}

fn cmd_recent(cli: &Cli) -> Result<()> {
    let session = open_session(cli)?;
    let recent = session.recently_viewed();
    if recent.is_empty() {
        println!("(nothing viewed yet)");
        return Ok(());
    }
    for p in recent {
        println!("{}", render::row(p));
    }
    Ok(())
}

fn cmd_history(cli: &Cli, clear: bool, remove: Option<usize>) -> Result<()> {
    let mut session = open_session(cli)?;

    if clear {
        session.clear_search_history()?;
        println!("search history cleared");
        return Ok(());
    }

    if let Some(index) = remove {
        session.remove_search_history_entry(index)?;
        println!("removed history entry {index}");
        return Ok(());
    }

    let history = session.search_history();
    if history.is_empty() {
        println!("(no search history)");
        return Ok(());
    }
    for (i, query) in history.iter().enumerate() {
        println!("{i:>2}  {query}");
    }
    Ok(())
}

fn cmd_facets(cli: &Cli) -> Result<()> {
    let session = open_session(cli)?;
    println!("periods: {}", session.periods().join(", "));
    println!("schools: {}", session.schools().join(", "));
    println!("cities:  {}", session.cities().join(", "));
    println!(
        "years:   {} – {}",
        render::format_year(session.min_year()),
        render::format_year(session.max_year())
    );
    Ok(())
}

fn cmd_stats(cli: &Cli) -> Result<()> {
    let session = open_session(cli)?;
    println!("philosophers: {}", session.dataset().len());
    println!("periods:      {}", session.periods().len());
    println!("schools:      {}", session.schools().len());
    println!("cities:       {}", session.cities().len());
    println!(
        "span:         {} – {}",
        render::format_year(session.min_year()),
        render::format_year(session.max_year())
    );
    println!("favorites:    {}", session.favorites().len());
    println!("recent:       {}", session.recently_viewed().len());
    println!("history:      {}", session.search_history().len());
    Ok(())
}
