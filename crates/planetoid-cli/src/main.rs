mod render;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use planetoid_core::{AppConfig, AppContext, CoreError};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "planetoid", version, about = "Players, Pokémon and TV series lookups")]
struct Cli {
    /// Config file to use instead of the per-user one.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the players known to the game server.
    Players,
    /// Store a new player on the game server.
    AddPlayer {
        name: String,
    },
    /// Look a Pokémon up by name.
    Pokemon {
        name: String,
    },
    /// Search TV shows.
    Series,
    /// Query every service at once.
    All {
        #[arg(long, default_value = "pikachu")]
        pokemon: String,
    },
    /// Print the effective configuration.
    Config,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let ctx = match AppContext::new(config) {
        Ok(ctx) => ctx,
        Err(e) => return fail(&e),
    };

    match run(&ctx, cli.command).await {
        Ok(code) => code,
        Err(e) => fail(&e),
    }
}

async fn run(ctx: &AppContext, command: Command) -> Result<ExitCode, CoreError> {
    match command {
        Command::Players => {
            let players = ctx.players().fetch_players().await?;
            print!("{}", render::players_table(&players).render());
        }
        Command::AddPlayer { name } => {
            let player = ctx.players().add_player(&name).await?;
            match player.id() {
                Some(id) => println!("Stored player {} (id {id})", player.name),
                None => println!("Stored player {}", player.name),
            }
        }
        Command::Pokemon { name } => {
            let record = ctx.pokemon().fetch_pokemon(&name).await?;
            print!("{}", render::creature_summary(&record));
        }
        Command::Series => {
            let entries = ctx.series().get_series().await?;
            print!("{}", render::series_table(&entries).render());
        }
        Command::All { pokemon } => {
            let ok = run_all(ctx, &pokemon, &mut io::stdout(), &mut io::stderr()).await?;
            if !ok {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Config => {
            println!("# {}", AppConfig::config_path().display());
            print!("{}", ctx.config().to_toml_string()?);
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Print every section to `out` and every failure to `err`.
/// Returns whether all three lookups succeeded.
async fn run_all(
    ctx: &AppContext,
    pokemon: &str,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<bool> {
    let dashboard = ctx.dashboard(pokemon).await;
    let mut failed = false;

    writeln!(out, "== players")?;
    match &dashboard.players {
        Ok(players) => write!(out, "{}", render::players_table(players).render())?,
        Err(e) => failed |= report(err, "players", e)?,
    }

    writeln!(out, "\n== pokemon")?;
    match &dashboard.pokemon {
        Ok(record) => write!(out, "{}", render::creature_summary(record))?,
        Err(e) => failed |= report(err, "pokemon", e)?,
    }

    writeln!(out, "\n== series")?;
    match &dashboard.series {
        Ok(entries) => write!(out, "{}", render::series_table(entries).render())?,
        Err(e) => failed |= report(err, "series", e)?,
    }

    Ok(!failed)
}

fn report(err: &mut impl Write, section: &str, e: &dyn std::error::Error) -> io::Result<bool> {
    tracing::error!(section, error = %e, "request failed");
    writeln!(err, "error ({section}): {e}")?;
    Ok(true)
}

fn fail(e: &CoreError) -> ExitCode {
    tracing::error!(error = %e, "command failed");
    eprintln!("error: {e}");
    ExitCode::FAILURE
}
