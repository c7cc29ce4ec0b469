mod logic;
mod util;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use jewel_core::DumpNaming;
use std::io::{Write, stdout};
use std::path::{Path, PathBuf};
use std::time::Instant;

use logic::{DumpAssets, DumpRequest, FindPlan, rezip_all, run_dump, run_find, write_found};
use util::{parse_conquerors, resolve_jewel_types};

#[derive(Debug, Parser)]
#[command(name = "jewel-dump", version = "0.1.0")]
#[command(about = "Timeless jewel seed sweeps and single-configuration dumps")]
struct Args {
    /// Directory holding the compressed data tables
    #[arg(long, global = true, default_value = "./data")]
    data_dir: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Re-encode the plain JSON source tables as compressed data tables
    #[command(name = "re-zip")]
    ReZip {
        /// Directory holding the plain JSON source tables
        #[arg(long, default_value = "./source_data")]
        source_dir: PathBuf,
    },

    /// Count which stats every seed of each jewel can produce
    Find {
        /// Output file (defaults to <data-dir>/possible_stats.json.gz)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Jewel types to sweep (comma-separated, or `all`)
        #[arg(long, default_value = "all")]
        jewel_types: String,

        /// Conqueror to sweep its jewel with instead of the first declared one (repeatable)
        #[arg(long = "conqueror")]
        conquerors: Vec<String>,

        /// Log progress whenever the seed is a multiple of this (0 disables)
        #[arg(long, default_value_t = 500)]
        progress_every: u32,

        /// Sweep jewel types on separate threads
        #[arg(long)]
        parallel: bool,
    },

    /// Write every result one seed/jewel/conqueror produces
    Dump {
        seed: String,
        jewel_type: String,
        conqueror: String,

        /// Directory dump files are written to
        #[arg(long, default_value = "jewels")]
        out_dir: PathBuf,

        /// Include the conqueror in the file name so dumps do not overwrite each other
        #[arg(long)]
        conqueror_in_name: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    announce_banner();

    let start_time = Instant::now();
    match &args.command {
        Command::ReZip { source_dir } => cmd_rezip(source_dir, &args.data_dir),
        Command::Find {
            output,
            jewel_types,
            conquerors,
            progress_every,
            parallel,
        } => {
            let plan = FindPlan {
                jewel_types: resolve_jewel_types(jewel_types)?,
                conquerors: parse_conquerors(conquerors)?,
                progress_every: *progress_every,
                parallel: *parallel,
            };
            let output = output
                .clone()
                .unwrap_or_else(|| default_found_path(&args.data_dir));
            cmd_find(&plan, &args.data_dir, &output, start_time)
        }
        Command::Dump {
            seed,
            jewel_type,
            conqueror,
            out_dir,
            conqueror_in_name,
        } => {
            let request = DumpRequest::parse(seed, jewel_type, conqueror)?;
            let naming = if *conqueror_in_name {
                DumpNaming::WithConqueror
            } else {
                DumpNaming::SeedOnly
            };
            cmd_dump(request, &args.data_dir, out_dir, naming)
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn announce_banner() {
    println!("{}", "💎 Timeless Jewel Dump".bright_cyan().bold());
    println!("{}", "======================".cyan());
}

fn default_found_path(data_dir: &Path) -> PathBuf {
    data_dir.join("possible_stats.json.gz")
}

fn cmd_rezip(source_dir: &Path, data_dir: &Path) -> Result<()> {
    let written = rezip_all(source_dir, data_dir)?;
    println!(
        "Re-zipped {} tables into {}",
        written.to_string().green(),
        data_dir.display()
    );
    Ok(())
}

fn cmd_find(plan: &FindPlan, data_dir: &Path, output: &Path, start_time: Instant) -> Result<()> {
    let assets = DumpAssets::load(data_dir)?;
    let found = run_find(plan, &assets.evaluator, &assets.skills);
    write_found(output, &found)?;

    let mut out = stdout().lock();
    logic::reports::write_sweep_summary(&mut out, &found, output, start_time.elapsed())?;
    out.flush()?;
    Ok(())
}

fn cmd_dump(
    request: DumpRequest,
    data_dir: &Path,
    out_dir: &Path,
    naming: DumpNaming,
) -> Result<()> {
    let assets = DumpAssets::load(data_dir)?;
    let (report, path) = run_dump(request, &assets.evaluator, &assets.skills, out_dir, naming)?;

    let mut out = stdout().lock();
    logic::reports::write_dump_summary(&mut out, &report, &path)?;
    out.flush()?;
    Ok(())
}
