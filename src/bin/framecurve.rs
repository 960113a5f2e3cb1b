use std::{
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "framecurve", version)]
struct Cli {
    /// Log filter (overridden by `RUST_LOG` when set).
    #[arg(long, global = true, default_value = "warn")]
    log: String,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a property sheet.
    Check(CheckArgs),
    /// Resolve a property sheet at one frame.
    Sample(SampleArgs),
    /// Resolve a property sheet over a frame range, one JSON line per frame.
    Table(TableArgs),
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Input property sheet JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Input property sheet JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame index (may be negative).
    #[arg(long, allow_negative_numbers = true)]
    frame: i64,

    /// Print only this property's value.
    #[arg(long)]
    property: Option<String>,
}

#[derive(Parser, Debug)]
struct TableArgs {
    /// Input property sheet JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// First frame (inclusive). Defaults to 0.
    #[arg(long, allow_negative_numbers = true)]
    start: Option<i64>,

    /// Last frame (exclusive). Defaults to the sheet duration.
    #[arg(long, allow_negative_numbers = true)]
    end: Option<i64>,

    /// Resolve frames on a rayon pool.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log)?;
    match cli.cmd {
        Command::Check(args) => cmd_check(args),
        Command::Sample(args) => cmd_sample(args),
        Command::Table(args) => cmd_table(args),
    }
}

fn init_tracing(default_filter: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .with_context(|| format!("parse log filter '{default_filter}'"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn read_sheet(path: &Path) -> anyhow::Result<framecurve::PropertySheet> {
    framecurve::PropertySheet::from_path(path)
        .with_context(|| format!("load property sheet '{}'", path.display()))
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let sheet = read_sheet(&args.in_path)?;
    println!("ok ({} properties)", sheet.properties.len());
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let sheet = read_sheet(&args.in_path)?;
    let resolved = framecurve::Evaluator::eval_frame(&sheet, framecurve::FrameIndex(args.frame))?;

    match args.property {
        Some(name) => {
            let v = resolved
                .value(&name)
                .with_context(|| format!("unknown property '{name}'"))?;
            println!("{v}");
        }
        None => println!("{}", serde_json::to_string_pretty(&resolved)?),
    }
    Ok(())
}

fn cmd_table(args: TableArgs) -> anyhow::Result<()> {
    let sheet = read_sheet(&args.in_path)?;
    let timeline = sheet.timeline()?;
    let range = framecurve::FrameRange::new(
        args.start.map_or(timeline.start, framecurve::FrameIndex),
        args.end.map_or(timeline.end, framecurve::FrameIndex),
    )?;
    let threading = framecurve::EvalThreading {
        parallel: args.parallel,
        threads: args.threads,
    };

    let frames = framecurve::Evaluator::eval_frames(&sheet, range, &threading)?;

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for frame in &frames {
        serde_json::to_writer(&mut out, frame).context("write frame JSON")?;
        out.write_all(b"\n").context("write frame JSON")?;
    }
    out.flush().context("flush output")?;
    Ok(())
}
