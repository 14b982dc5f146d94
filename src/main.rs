//! Numberle - CLI
//!
//! Equation-guessing game with TUI and console modes, plus catalog tooling.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use numberle::{
    catalog::{Catalog, EQUATIONS, loader},
    commands::{analyze_guess, check_entries, run_simple},
    config::GameConfig,
    error::FatalError,
    game::GameSession,
    logging,
    output::{print_analysis_result, print_check_report},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "numberle",
    about = "Guess the hidden equation in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// TOML configuration file; flags override its values
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Equation file to use instead of the embedded catalog
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Show the target equation
    #[arg(long, global = true)]
    show_target: bool,

    /// Accept guesses whose sides are not equal
    #[arg(long, global = true)]
    lenient: bool,

    /// Always use the first catalog equation as the target
    #[arg(long, global = true)]
    fixed_target: bool,

    /// Do not explain why a guess was rejected
    #[arg(long, global = true)]
    hide_errors: bool,

    /// Seed for reproducible random targets
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple console mode without TUI
    Simple,

    /// Validate every equation in the catalog
    Check,

    /// Measure how much a guess reveals about the target
    Analyze {
        /// Equation to analyze
        guess: String,
    },
}

impl Cli {
    /// Build the session configuration: file first, then flags
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => GameConfig::new(),
        };

        if self.show_target {
            config = config.with_show_target(true);
        }
        if self.lenient {
            config = config.with_strict_validation(false);
        }
        if self.fixed_target {
            config = config.with_random_target(false);
        }
        if self.hide_errors {
            config = config.with_report_errors(false);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(path) = &self.catalog {
            config = config.with_catalog(path.clone());
        }

        Ok(config)
    }
}

fn load_catalog(config: &GameConfig) -> Result<Catalog> {
    match &config.catalog {
        Some(path) => loader::load_from_file(path).context("failed to load equation catalog"),
        None => Ok(Catalog::embedded()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.game_config()?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // Log lines would corrupt the alternate screen
    if !matches!(command, Commands::Play) {
        logging::init(cli.verbose);
    }

    match command {
        Commands::Play => run_play_command(config),
        Commands::Simple => run_simple_command(config),
        Commands::Check => run_check_command(&config),
        Commands::Analyze { guess } => run_analyze_command(&guess, &config),
    }
}

fn run_play_command(config: GameConfig) -> Result<()> {
    use numberle::interactive::{App, run_tui};

    let catalog = load_catalog(&config)?;
    let session = GameSession::start(catalog, config)?;
    run_tui(App::new(session))
}

fn run_simple_command(config: GameConfig) -> Result<()> {
    let catalog = load_catalog(&config)?;
    let mut session = GameSession::start(catalog, config)?;
    run_simple(&mut session)
}

fn run_check_command(config: &GameConfig) -> Result<()> {
    let report = match &config.catalog {
        Some(path) => {
            let lines = loader::read_lines(path).context("failed to read equation catalog")?;
            check_entries(&lines, true)
        }
        None => check_entries(&loader::numbered(EQUATIONS), true),
    };

    print_check_report(&report);
    if report.is_empty() {
        return Err(FatalError::EmptyCatalog.into());
    }
    if !report.is_clean() {
        bail!(
            "catalog has {} invalid and {} duplicate entries",
            report.invalid.len(),
            report.duplicates.len()
        );
    }
    Ok(())
}

fn run_analyze_command(guess: &str, config: &GameConfig) -> Result<()> {
    let catalog = load_catalog(config)?;
    let result = analyze_guess(guess, &catalog, config.strict_validation)
        .with_context(|| format!("cannot analyze {guess:?}"))?;
    print_analysis_result(&result);
    Ok(())
}
