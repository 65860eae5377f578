use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use murmur_clock::{Driver, TickGate};
use murmur_common::{FlockConfig, TimingMode};
use murmur_kernel::Flock;
use murmur_tools::FlockInspector;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "murmur-cli", about = "Headless runner for the murmur flock engine")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command that builds a flock.
#[derive(Args)]
struct FlockArgs {
    /// JSON or YAML config file; defaults are used for missing fields
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Override the population size
    #[arg(short, long)]
    agents: Option<usize>,
    /// RNG seed for spawning
    #[arg(short, long, default_value = "42")]
    seed: u64,
    /// Advance one fixed unit per tick regardless of the tick rate
    #[arg(long)]
    legacy_timing: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and default configuration
    Info,
    /// Run the flock headless and report its state
    Run {
        #[command(flatten)]
        flock: FlockArgs,
        /// Number of ticks to simulate
        #[arg(short, long, default_value = "600")]
        ticks: u64,
        /// Logical tick rate
        #[arg(long, default_value = "60")]
        fps: f32,
        /// Print a summary every N ticks (0 = final summary only)
        #[arg(long, default_value = "0")]
        report_every: u64,
        /// Emit summaries as JSON lines
        #[arg(long)]
        json: bool,
    },
    /// Run the same seed twice and compare state hashes tick by tick
    Determinism {
        #[command(flatten)]
        flock: FlockArgs,
        /// Number of ticks to simulate
        #[arg(short, long, default_value = "300")]
        ticks: u64,
    },
    /// Print one agent's state after a number of ticks
    Inspect {
        #[command(flatten)]
        flock: FlockArgs,
        /// Number of ticks to simulate first
        #[arg(short, long, default_value = "0")]
        ticks: u64,
        /// Agent index
        #[arg(short, long, default_value = "0")]
        index: usize,
    },
}

const DEFAULT_DT: f32 = 1.0 / 60.0;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            let config = FlockConfig::default();
            println!("murmur-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("default config:");
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        Commands::Run {
            flock,
            ticks,
            fps,
            report_every,
            json,
        } => {
            let flock = build_flock(&flock)?;
            let gate = TickGate::new(fps)?;
            let mut driver = Driver::new(flock, gate);
            driver.play();

            tracing::info!(
                agents = driver.flock().agent_count(),
                seed = driver.flock().seed(),
                ticks,
                fps,
                "running flock"
            );
            run_ticks(&mut driver, ticks, report_every, |f| report(f, json))?;
            report(driver.flock(), json)?;
        }
        Commands::Determinism { flock, ticks } => {
            let mut a = build_flock(&flock)?;
            let mut b = build_flock(&flock)?;
            a.reset_with_seed(flock.seed);
            b.reset_with_seed(flock.seed);

            let mut diverged_at = None;
            for _ in 0..ticks {
                a.step(DEFAULT_DT);
                b.step(DEFAULT_DT);
                if a.state_hash() != b.state_hash() {
                    diverged_at = Some(a.tick());
                    break;
                }
            }
            println!(
                "Determinism: seed={}, ticks={}, agents={}",
                flock.seed,
                ticks,
                a.agent_count()
            );
            println!("Run 1: tick={}, hash={:#x}", a.tick(), a.state_hash());
            println!("Run 2: tick={}, hash={:#x}", b.tick(), b.state_hash());
            match diverged_at {
                None => println!("Match: OK"),
                Some(tick) => anyhow::bail!("runs diverged at tick {tick}"),
            }
        }
        Commands::Inspect {
            flock,
            ticks,
            index,
        } => {
            let mut f = build_flock(&flock)?;
            for _ in 0..ticks {
                f.step(DEFAULT_DT);
            }
            let info = FlockInspector::inspect_agent(&f, index).with_context(|| {
                format!("agent {index} out of range (flock has {})", f.agent_count())
            })?;
            println!("{}", FlockInspector::summary(&f));
            println!("{info}");
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<FlockConfig> {
    match path {
        Some(p) => FlockConfig::load(p).with_context(|| format!("loading {}", p.display())),
        None => Ok(FlockConfig::default()),
    }
}

fn build_flock(args: &FlockArgs) -> anyhow::Result<Flock> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(n) = args.agents {
        config.population = n;
    }
    if args.legacy_timing {
        config.timing = TimingMode::Legacy;
    }
    Ok(Flock::with_seed(config, args.seed)?)
}

/// Feed the driver one gate interval per frame until `ticks` ticks have fired.
///
/// Counts the ticks the driver reports rather than reading the flock's tick
/// counter, which an empty flock never advances. `on_report` runs every
/// `report_every` ticks, excluding the last one. Returns the ticks fired.
fn run_ticks(
    driver: &mut Driver,
    ticks: u64,
    report_every: u64,
    mut on_report: impl FnMut(&Flock) -> anyhow::Result<()>,
) -> anyhow::Result<u64> {
    let frame = driver.gate().interval();
    let mut fired = 0u64;
    while fired < ticks {
        let stepped = u64::from(driver.frame(frame));
        if stepped == 0 {
            anyhow::bail!("driver stopped firing ticks after {fired}");
        }
        for _ in 0..stepped {
            fired += 1;
            if report_every > 0 && fired % report_every == 0 && fired < ticks {
                on_report(driver.flock())?;
            }
        }
    }
    Ok(fired)
}

fn report(flock: &Flock, json: bool) -> anyhow::Result<()> {
    let summary = FlockInspector::summary(flock);
    if json {
        println!("{}", serde_json::to_string(&summary)?);
    } else {
        println!("{summary}");
    }
    Ok(())
}
