use anyhow::Context;
use clap::{Parser, Subcommand};
use prover_bench_report::reports::{self, block, provers};
use prover_bench_report::{Backend, BlockProfile, ErrorPolicy, ReportConfig};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Subcommand, Debug)]
enum Command {
    /// Generic block benchmark results (`block_*.json`).
    Block {
        /// Which field layout to print.
        #[arg(long, value_enum, default_value_t = BlockProfile::Extended)]
        profile: BlockProfile,
    },

    /// Per-backend prover results (`<backend>-prover-bench/`).
    Provers {
        /// Restrict to these backends. Can be provided multiple times; defaults to all.
        #[arg(long, value_enum, action = clap::ArgAction::Append)]
        backend: Vec<Backend>,
    },

    /// Block report followed by every prover report.
    All {
        #[arg(long, value_enum, default_value_t = BlockProfile::Extended)]
        profile: BlockProfile,
    },
}

#[derive(Parser, Debug)]
#[command(name = "prover-bench-report")]
#[command(about = "Print benchmark result JSON files as labeled console reports")]
struct Args {
    /// Directory holding the result files.
    #[arg(long, value_name = "DIR", default_value = ".", global = true)]
    dir: PathBuf,

    /// Warn about and skip unreadable or incomplete result files instead of failing.
    #[arg(long, default_value_t = false, global = true)]
    keep_going: bool,

    #[command(subcommand)]
    cmd: Command,
}

fn init_tracing() {
    // Reports own stdout; diagnostics go to stderr.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Args::parse();
    let policy = if args.keep_going {
        ErrorPolicy::Skip
    } else {
        ErrorPolicy::Abort
    };
    let cfg = ReportConfig::new(args.dir).with_policy(policy);
    tracing::debug!(dir = %cfg.base_dir.display(), policy = cfg.policy.as_str(), "starting");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &args.cmd {
        Command::Block { profile } => {
            block::run(&cfg, *profile, &mut out).context("block report failed")?;
        }
        Command::Provers { backend } => {
            provers::run(&cfg, backend, &mut out).context("prover report failed")?;
        }
        Command::All { profile } => {
            let mut sections = vec![block::section(*profile)];
            sections.extend(provers::sections(&Backend::ALL));
            reports::run_sections(&cfg, &sections, &mut out).context("report failed")?;
        }
    }

    out.flush()?;
    Ok(())
}
