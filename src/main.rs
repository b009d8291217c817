use anyhow::Result;
use clap::{Parser, Subcommand};

use pocketbook::cli::{
    handle_add_command, handle_list_command, handle_parse_command, handle_remove_command,
    handle_search_command, AddCommands, KindFilter, OutputFormat,
};
use pocketbook::config::{paths::PocketPaths, settings::Settings};
use pocketbook::storage::Storage;

#[derive(Parser)]
#[command(
    name = "pocketbook",
    version,
    about = "Track expenses, incomes and budgets, and find them again",
    long_about = "Pocketbook records expenses, incomes and budgets and lets you find \
                  them with a single free-text search: words match descriptions and \
                  categories, numbers match amounts, and dates like 1/1/26 or \
                  'Jan 1, 2026' narrow results to a day or range."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record an expense, income or budget
    #[command(subcommand)]
    Add(AddCommands),

    /// List stored records
    #[command(alias = "ls")]
    List {
        /// Record kinds to list
        #[arg(short, long, value_enum, default_value_t = KindFilter::All)]
        kind: KindFilter,
    },

    /// Search records with a free-text query
    #[command(alias = "find")]
    Search {
        /// Words, amounts and dates, e.g. "coffee 12.33 1/1/26 - 1/7/26"
        query: String,
        /// Record kinds to search
        #[arg(short, long, value_enum, default_value_t = KindFilter::All)]
        kind: KindFilter,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Show how a search query is understood
    Parse {
        query: String,
        /// Print the parsed query as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove a record by id
    #[command(alias = "rm")]
    Remove {
        /// Record id (e.g. exp-1a2b3c4d)
        id: String,
    },

    /// Initialize the data directory and settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let paths = PocketPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Parse { query, json }) => {
            handle_parse_command(&settings, &query, json)?;
        }
        Some(Commands::Init) => {
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialized Pocketbook at: {}", paths.base_dir().display());
        }
        Some(Commands::Config) => {
            println!("Pocketbook Configuration");
            println!("========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Date order:      {:?}", settings.date_order);
        }
        Some(Commands::Add(cmd)) => {
            let storage = open_storage(paths)?;
            handle_add_command(&storage, &settings, cmd)?;
        }
        Some(Commands::List { kind }) => {
            let storage = open_storage(paths)?;
            handle_list_command(&storage, &settings, kind)?;
        }
        Some(Commands::Search {
            query,
            kind,
            format,
        }) => {
            let storage = open_storage(paths)?;
            handle_search_command(&storage, &settings, &query, kind, format)?;
        }
        Some(Commands::Remove { id }) => {
            let storage = open_storage(paths)?;
            handle_remove_command(&storage, &id)?;
        }
        None => {
            println!("Pocketbook - expense, income and budget tracking");
            println!();
            println!("Run 'pocketbook --help' for usage information.");
            println!("Run 'pocketbook search \"coffee 1/1/26\"' to find records.");
        }
    }

    Ok(())
}

fn open_storage(paths: PocketPaths) -> Result<Storage> {
    let mut storage = Storage::new(paths)?;
    storage.load_all()?;
    Ok(storage)
}
