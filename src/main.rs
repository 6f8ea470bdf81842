use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mathchess::core::{load_settings, save_settings, GameSettings};
use mathchess::game::ai::{AIDifficulty, FallbackEngine, GameConfig, LocalEngine, MoveEngine, Opponent};
use mathchess::game::math::{generate_math_problem, MathDifficulty};
use mathchess::game::rules::move_to_notation;
use mathchess::game::telemetry::LogTracker;
use mathchess::game::types::Color;
use mathchess::game::GameController;
use mathchess::networking::RemoteEngine;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Mathematical Chess: rules engine, AI and math challenges", author, version)]
struct Cli {
    /// Debug logging
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Let the AI play against itself
    Selfplay {
        #[arg(long, default_value_t = AIDifficulty::Medium)]
        white: AIDifficulty,

        #[arg(long, default_value_t = AIDifficulty::Medium)]
        black: AIDifficulty,

        #[arg(long, value_name = "SEED")]
        seed: Option<u64>,

        #[arg(long, default_value_t = 200)]
        max_plies: u32,

        /// Use an external engine, falling back to the local AI
        #[arg(long, value_name = "URL")]
        engine_url: Option<String>,
    },

    /// Print a math problem
    Problem {
        #[arg(long, default_value_t = MathDifficulty::Easy)]
        difficulty: MathDifficulty,

        #[arg(long, value_name = "SEED")]
        seed: Option<u64>,
    },

    /// Show the effective settings
    Settings {
        /// Write them to the settings file
        #[arg(long)]
        save: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut settings = load_settings();
    settings
        .apply_env_overrides()
        .context("Invalid environment override")?;

    match cli.command {
        Command::Selfplay {
            white,
            black,
            seed,
            max_plies,
            engine_url,
        } => selfplay(&settings, white, black, seed, max_plies, engine_url).await,
        Command::Problem { difficulty, seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            let problem = generate_math_problem(difficulty, &mut rng);
            println!("{}", problem.question);
            println!("answer: {}", problem.answer);
            if let Some(explanation) = problem.explanation {
                println!("{}", explanation);
            }
            Ok(())
        }
        Command::Settings { save } => {
            println!("{}", serde_json::to_string_pretty(&settings)?);
            if save {
                let path = save_settings(&settings).context("Failed to save settings")?;
                println!("saved to {}", path.display());
            }
            Ok(())
        }
    }
}

async fn selfplay(
    settings: &GameSettings,
    white: AIDifficulty,
    black: AIDifficulty,
    seed: Option<u64>,
    max_plies: u32,
    engine_url: Option<String>,
) -> Result<()> {
    let seed = seed.unwrap_or_else(rand::random);
    info!("[GAME] Selfplay seed {}", seed);

    let config = GameConfig {
        opponent: Opponent::Selfplay,
        ..GameConfig::from(settings)
    };
    let mut controller = GameController::new(config, seed, Arc::new(LogTracker));
    let local = LocalEngine::new(seed);

    let url = engine_url.or_else(|| settings.engine.enabled.then(|| settings.engine.url.clone()));
    let engine: Box<dyn MoveEngine> = match url {
        Some(url) => {
            let remote = RemoteEngine::new(url).with_timeouts(
                settings.engine.health_timeout(),
                settings.engine.analysis_timeout(),
            );
            let engine = FallbackEngine::new(remote, local);
            engine.check_primary().await;
            Box::new(engine)
        }
        None => Box::new(local),
    };

    for _ in 0..max_plies {
        if controller.state().is_game_over() {
            break;
        }
        let side = controller.state().current_player;
        controller.set_difficulty(match side {
            Color::White => white,
            Color::Black => black,
        });

        let Some(mv) = controller.play_ai_turn(engine.as_ref()).await? else {
            break;
        };
        let stats = controller.state().ai_stats.clone();
        println!(
            "{:>3}. {:<5} {}  ({})",
            controller.state().history.len(),
            side,
            move_to_notation(&mv),
            stats
                .map(|s| format!("{} {:.1} {}ms", s.engine, s.score, s.thinking_time_ms))
                .unwrap_or_default()
        );
    }

    let state = controller.state();
    println!("{}", state.fen());
    println!("{}", state.status.message(state.current_player));
    Ok(())
}
