//! Command line driver for the Game of Life engine

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use game_of_life_engine::{
    config::{CliOverrides, Settings},
    game_of_life::{create_example_patterns, load_grid_from_file, save_grid_to_file, GenerationEngine},
    simulation::{FrameLimiter, InputEvent, Session, Viewport},
    utils::{ColorOutput, GenerationSnapshot, GridFormatter},
    Phase,
};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "game_of_life_engine")]
#[command(about = "Conway's Game of Life generation engine")]
#[command(version = "0.1.0")]
struct Cli {
    /// Verbose logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a headless session: seed, start, tick, stop
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Seed pattern file (overrides config)
        #[arg(short, long)]
        pattern: Option<PathBuf>,

        /// Pointer click at pixel position X,Y during seeding (repeatable)
        #[arg(long = "click", value_parser = parse_point)]
        clicks: Vec<(f32, f32)>,

        /// Number of frame ticks to run
        #[arg(short, long, default_value_t = 600)]
        frames: u64,

        /// Stop after this many generations (overrides config)
        #[arg(short = 'g', long)]
        max_generations: Option<u64>,

        /// Cell size in pixels (overrides config)
        #[arg(long)]
        cell_size: Option<u32>,

        /// Split each step across worker threads
        #[arg(long)]
        parallel: bool,

        /// Pace frames at the configured frame rate
        #[arg(long)]
        realtime: bool,

        /// Save generation snapshots to this directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Advance a pattern file a number of generations
    Step {
        /// Pattern file
        pattern: PathBuf,

        /// Generations to advance
        #[arg(short, long, default_value_t = 1)]
        generations: u64,

        /// Write the result here instead of printing it
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Create example configuration and pattern files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Show the grid a viewport configuration produces
    Info {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,
    },
}

fn parse_point(value: &str) -> Result<(f32, f32), String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{}'", value))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<f32>()
            .map_err(|e| format!("invalid coordinate '{}': {}", part, e))
    };
    Ok((parse(x)?, parse(y)?))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.command {
        Commands::Run {
            config,
            pattern,
            clicks,
            frames,
            max_generations,
            cell_size,
            parallel,
            realtime,
            output,
        } => {
            let overrides = CliOverrides {
                cell_size,
                max_generations,
                parallel: parallel.then_some(true),
                seed_pattern: pattern,
                output_dir: output.clone(),
            };
            run_command(config, overrides, clicks, frames, realtime, output.is_some())
        }
        Commands::Step {
            pattern,
            generations,
            output,
        } => step_command(pattern, generations, output),
        Commands::Setup { directory, force } => setup_command(directory, force),
        Commands::Info { config } => info_command(config),
    }
}

fn load_settings(config_path: &PathBuf) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Ok(Settings::default())
    }
}

fn run_command(
    config_path: PathBuf,
    overrides: CliOverrides,
    clicks: Vec<(f32, f32)>,
    frames: u64,
    realtime: bool,
    save: bool,
) -> Result<()> {
    let mut settings = load_settings(&config_path)?;
    settings.merge_with_cli(&overrides);
    settings
        .validate()
        .context("Configuration validation failed")?;

    let mut session = Session::new(&settings).context("Failed to allocate the simulation grid")?;

    if let Some(ref pattern_path) = settings.input.seed_pattern {
        let pattern = load_grid_from_file(pattern_path)?;
        session
            .seed_pattern(&pattern, settings.input.pattern_origin)
            .with_context(|| format!("Pattern {} does not fit the grid", pattern_path.display()))?;
    }
    for (x, y) in clicks {
        session.handle(InputEvent::Click { x, y })?;
    }

    println!(
        "{}",
        ColorOutput::info(&format!(
            "Seeded {} cells on a {}x{} grid",
            session.engine().current().living_count(),
            session.engine().rows(),
            session.engine().cols()
        ))
    );

    let record = save || settings.output.show_generations;
    let mut snapshots = Vec::new();
    if record {
        snapshots.push(GenerationSnapshot::capture(0, session.engine().current()));
    }

    let start_time = Instant::now();
    let mut limiter = realtime.then(|| FrameLimiter::new(settings.simulation.frame_rate));

    session.handle(InputEvent::ToggleRun)?;
    for _ in 0..frames {
        if session.tick()? {
            let engine = session.engine();
            if settings.output.show_generations {
                println!("Generation {}:", engine.generation());
                println!("{}", GridFormatter::format_grid_compact(engine.current()));
            }
            if record {
                snapshots.push(GenerationSnapshot::capture(engine.generation(), engine.current()));
            }
        }
        if session.phase() == Phase::Stopped {
            break;
        }
        if let Some(ref mut limiter) = limiter {
            limiter.delay();
        }
    }
    session.handle(InputEvent::ToggleRun)?;

    let stats = session.stats();
    println!(
        "{}",
        ColorOutput::success(&format!(
            "Ran {} generations in {:.3}s",
            stats.generation,
            start_time.elapsed().as_secs_f64()
        ))
    );
    print!("{}", GridFormatter::format_stats(&stats));

    let final_grid = session.finish();
    println!("\nFinal generation:");
    println!("{}", GridFormatter::format_grid_compact(&final_grid));

    if save {
        GridFormatter::save_snapshots(
            &snapshots,
            &settings.output.output_directory,
            settings.output.format,
        )
        .context("Failed to save generation snapshots")?;
        println!(
            "{}",
            ColorOutput::success(&format!(
                "Snapshots saved to {}",
                settings.output.output_directory.display()
            ))
        );
    }

    Ok(())
}

fn step_command(pattern_path: PathBuf, generations: u64, output: Option<PathBuf>) -> Result<()> {
    let pattern = load_grid_from_file(&pattern_path)?;

    let mut engine = GenerationEngine::new(pattern.rows(), pattern.cols())?;
    for (row, col) in pattern.living_cells() {
        engine.seed(row, col)?;
    }
    engine.start()?;
    for _ in 0..generations {
        engine.step()?;
    }
    engine.stop()?;

    let result = engine.into_grid();
    match output {
        Some(path) => {
            save_grid_to_file(&result, &path)?;
            println!(
                "{}",
                ColorOutput::success(&format!(
                    "Generation {} written to {}",
                    generations,
                    path.display()
                ))
            );
        }
        None => {
            println!("Generation {} (living: {}):", generations, result.living_count());
            println!("{}", GridFormatter::format_grid_with_coords(&result));
        }
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let pattern_dir = directory.join("input/patterns");
    let output_dir = directory.join("output/generations");

    for dir in [&config_dir, &pattern_dir, &output_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_example_patterns(&pattern_dir).context("Failed to create example patterns")?;
    println!("Created example patterns in: {}", pattern_dir.display());

    let glider_path = config_dir.join("glider.yaml");
    if !glider_path.exists() || force {
        let mut glider = Settings::default();
        glider.simulation.max_generations = Some(40);
        glider.input.seed_pattern = Some(PathBuf::from("input/patterns/glider.txt"));
        glider.input.pattern_origin = (2, 2);
        glider.to_file(&glider_path)?;
        println!("Created: {}", glider_path.display());
    }

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Run: cargo run -- run --config config/glider.yaml");

    Ok(())
}

fn info_command(config_path: PathBuf) -> Result<()> {
    let settings = load_settings(&config_path)?;
    settings.validate()?;

    let viewport = Viewport::from_config(&settings.viewport)?;
    let (offset_x, offset_y) = viewport.offset();

    println!(
        "Viewport: {}x{} px, {} px cells",
        settings.viewport.width, settings.viewport.height, settings.viewport.cell_size
    );
    println!("Grid: {} rows x {} cols", viewport.rows(), viewport.cols());
    println!("Offset: ({}, {})", offset_x, offset_y);
    println!(
        "Step cadence: every {} ticks at {} fps",
        settings.simulation.ticks_per_generation, settings.simulation.frame_rate
    );

    Ok(())
}
