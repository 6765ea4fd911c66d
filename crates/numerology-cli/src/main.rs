mod payload;
mod render;
mod server;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use numerology_core::{
    CanonicalNumber, compatibility_report, expression_number, has_insight, insight_for,
    is_master, life_path_number, meaning_for,
};
use numerology_store::{Config, OutputFormat, SavedInputs, Store, default_base_dir};
use rmcp::{ServiceExt, service::ServerInitializeError, transport::stdio};

use crate::payload::InputError;

#[derive(Parser)]
#[command(name = "numerology", about = "Numerology calculator CLI and MCP server")]
struct Cli {
    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Do not remember the birth date or name used in this run
    #[arg(long, global = true)]
    no_save: bool,

    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Life path number for a birth date (YYYY-MM-DD)
    LifePath {
        /// Birth date; falls back to the remembered one
        date: Option<String>,
    },

    /// Expression number for a name
    Expression {
        /// Name; falls back to the remembered one
        name: Option<String>,
    },

    /// Meaning of a canonical number (1-9, 11, 22, 33)
    Meaning { number: u32 },

    /// Purpose, potential, challenge and keys to success for a number
    Insight { number: u32 },

    /// Compatibility score between two numbers (1-33)
    Compat { a: u32, b: u32 },

    /// Show the remembered birth date and name
    Recall,

    /// Forget the remembered birth date and name
    Forget,

    /// Start MCP server on stdio transport
    Serve,
}

/// Resolved runtime settings: CLI flags layered over `config.toml`.
struct Settings {
    data_dir: PathBuf,
    format: OutputFormat,
    save_inputs: bool,
}

impl Settings {
    fn resolve(cli: &Cli) -> Result<Self> {
        let data_dir = std::env::var("NUMEROLOGY_DATA_DIR")
            .ok()
            .map(PathBuf::from)
            .unwrap_or_else(default_base_dir);
        let config = Config::load(&data_dir).context("failed to load config.toml")?;
        Ok(Self {
            format: if cli.json {
                OutputFormat::Json
            } else {
                config.default_format
            },
            save_inputs: config.save_inputs && !cli.no_save,
            data_dir,
        })
    }

    fn open_store(&self) -> Result<Store> {
        Store::open_in(Some(&self.data_dir)).context("failed to open profile store")
    }

    /// Remembered inputs, read without creating the store if it does not exist.
    fn saved_inputs(&self) -> Result<SavedInputs> {
        let Some(store) = Store::open_existing_in(Some(&self.data_dir))
            .context("failed to open profile store")?
        else {
            return Ok(SavedInputs::default());
        };
        store
            .saved_inputs()
            .context("failed to read remembered inputs")
    }
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

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let settings = Settings::resolve(&cli)?;

    match &cli.command {
        Commands::Serve => cmd_serve(&settings).await,
        Commands::LifePath { date } => cmd_life_path(&settings, date.as_deref()),
        Commands::Expression { name } => cmd_expression(&settings, name.as_deref()),
        Commands::Meaning { number } => cmd_meaning(&settings, *number),
        Commands::Insight { number } => cmd_insight(&settings, *number),
        Commands::Compat { a, b } => cmd_compat(&settings, *a, *b),
        Commands::Recall => cmd_recall(&settings),
        Commands::Forget => cmd_forget(&settings),
    }
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("failed to serialize result")?
    );
    Ok(())
}

/// Save an input through `save`, logging rather than failing on error.
fn remember(settings: &Settings, save: impl FnOnce(&Store) -> numerology_store::Result<()>) {
    if !settings.save_inputs {
        return;
    }
    match settings.open_store() {
        Ok(store) => {
            if let Err(e) = save(&store) {
                tracing::warn!("failed to remember input: {e}");
            }
        }
        Err(e) => tracing::warn!("{e:#}"),
    }
}

/// Use `given`, or the remembered value picked by `pick` when absent.
fn given_or_remembered(
    settings: &Settings,
    given: Option<&str>,
    pick: impl FnOnce(SavedInputs) -> Option<String>,
) -> Result<Option<String>> {
    if let Some(v) = given {
        return Ok(Some(v.to_string()));
    }
    Ok(pick(settings.saved_inputs()?))
}

fn cmd_life_path(settings: &Settings, date: Option<&str>) -> Result<()> {
    let date = given_or_remembered(settings, date, |s| s.birth_date)?
        .ok_or(InputError::MissingDate)?;
    tracing::debug!("life path for {date:?}");

    if settings.format == OutputFormat::Json {
        print_json(&payload::life_path(&date)?)?;
    } else {
        if date.trim().is_empty() {
            return Err(InputError::MissingDate.into());
        }
        let n = life_path_number(&date).ok_or_else(|| InputError::InvalidDate(date.clone()))?;
        println!("{}", render::number_line("life path", n, is_master(n)));
        if let Some(m) = meaning_for(n) {
            println!("{}", render::meaning(m));
        }
    }

    remember(settings, |store| store.save_birth_date(&date));
    Ok(())
}

fn cmd_expression(settings: &Settings, name: Option<&str>) -> Result<()> {
    let name =
        given_or_remembered(settings, name, |s| s.name)?.ok_or(InputError::MissingName)?;
    tracing::debug!("expression for {name:?}");

    if settings.format == OutputFormat::Json {
        print_json(&payload::expression(&name)?)?;
    } else {
        let n = match expression_number(&name) {
            None => return Err(InputError::MissingName.into()),
            Some(0) => return Err(InputError::InvalidName(name.trim().to_string()).into()),
            Some(n) => n,
        };
        println!("{}", render::number_line("expression", n, is_master(n)));
        if let Some(m) = meaning_for(n) {
            println!("How you naturally express {:?}:", name.trim());
            println!("{}", render::meaning(m));
        }
    }

    remember(settings, |store| store.save_name(&name));
    Ok(())
}

fn cmd_meaning(settings: &Settings, number: u32) -> Result<()> {
    if settings.format == OutputFormat::Json {
        return print_json(&payload::meaning(number)?);
    }
    let n = CanonicalNumber::new(number).ok_or(InputError::NotCanonical(number))?;
    println!("{}", render::number_line("number", n.get(), n.is_master()));
    if let Some(m) = meaning_for(n.get()) {
        println!("{}", render::meaning(m));
    }
    Ok(())
}

fn cmd_insight(settings: &Settings, number: u32) -> Result<()> {
    if settings.format == OutputFormat::Json {
        return print_json(&payload::insight(number));
    }
    if !has_insight(number) {
        tracing::info!("no dedicated insight for {number}, using the generic reading");
    }
    println!("{}", render::number_line("number", number, is_master(number)));
    println!("{}", render::insight(insight_for(number)));
    Ok(())
}

fn cmd_compat(settings: &Settings, a: u32, b: u32) -> Result<()> {
    if settings.format == OutputFormat::Json {
        return print_json(&payload::compatibility(a, b)?);
    }
    let report = compatibility_report(a, b).ok_or(InputError::OutOfRange(a, b))?;
    println!("{}", render::report(&report));
    Ok(())
}

fn cmd_recall(settings: &Settings) -> Result<()> {
    let saved = settings.saved_inputs()?;

    if settings.format == OutputFormat::Json {
        return print_json(&serde_json::json!({
            "birthDate": saved.birth_date,
            "name": saved.name,
        }));
    }

    match &saved.birth_date {
        Some(date) => match life_path_number(date) {
            Some(n) => println!("birth date: {date} (life path {n})"),
            None => println!("birth date: {date}"),
        },
        None => println!("birth date: (none)"),
    }
    match &saved.name {
        Some(name) => match expression_number(name) {
            Some(n) if n > 0 => println!("name:       {name} (expression {n})"),
            _ => println!("name:       {name}"),
        },
        None => println!("name:       (none)"),
    }
    Ok(())
}

fn cmd_forget(settings: &Settings) -> Result<()> {
    let store = Store::open_existing_in(Some(&settings.data_dir))
        .context("failed to open profile store")?;
    if let Some(store) = store {
        store
            .clear_inputs()
            .context("failed to clear remembered inputs")?;
    }
    println!("forgot remembered birth date and name");
    Ok(())
}

async fn cmd_serve(settings: &Settings) -> Result<()> {
    let store = if settings.save_inputs {
        Some(settings.open_store()?)
    } else {
        None
    };
    tracing::info!(
        "starting MCP server (data dir {}, remember inputs: {})",
        settings.data_dir.display(),
        settings.save_inputs
    );

    let server = server::NumerologyServer::new(store);
    let service = match server.serve(stdio()).await {
        Ok(service) => service,
        // Client hung up before finishing the handshake; a clean exit, not a failure.
        Err(ServerInitializeError::ConnectionClosed(stage)) => {
            tracing::debug!("client disconnected during initialization ({stage})");
            return Ok(());
        }
        Err(e) => return Err(e).context("failed to start MCP server"),
    };
    service.waiting().await?;
    Ok(())
}
