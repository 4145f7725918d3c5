use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "stargaze", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print frame count, fps and canvas size of a config.
    Meta(MetaArgs),
    /// Resolve a single frame's visual state as JSON.
    Frame(FrameArgs),
    /// Resolve a range of frames as JSON lines.
    Frames(FramesArgs),
}

#[derive(Parser, Debug)]
struct MetaArgs {
    /// Input stars config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input stars config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Write JSON here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Input stars config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// First frame (inclusive). Defaults to 0.
    #[arg(long)]
    start: Option<u64>,

    /// Last frame (exclusive). Defaults to the config's duration.
    #[arg(long)]
    end: Option<u64>,

    /// Resolve frames on a thread pool.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Write JSON lines here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Meta(args) => cmd_meta(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
    }
}

fn load_config(path: &Path) -> anyhow::Result<stargaze::AnimationConfig> {
    let cfg = stargaze::StarsConfig::from_path(path)?
        .validate()
        .with_context(|| format!("load stars config '{}'", path.display()))?;
    Ok(cfg)
}

fn open_output(out: Option<&Path>) -> anyhow::Result<Box<dyn Write>> {
    let Some(path) = out else {
        return Ok(Box::new(std::io::stdout().lock()));
    };
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let f = std::fs::File::create(path)
        .with_context(|| format!("create output '{}'", path.display()))?;
    Ok(Box::new(std::io::BufWriter::new(f)))
}

fn cmd_meta(args: MetaArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.in_path)?;
    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &cfg.metadata())?;
    writeln!(out)?;
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.in_path)?;
    let state = stargaze::resolve_visual_state(&cfg, stargaze::FrameIndex(args.frame))?;

    let mut out = open_output(args.out.as_deref())?;
    serde_json::to_writer_pretty(&mut out, &state)?;
    writeln!(out)?;
    out.flush()?;

    if let Some(path) = &args.out {
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.in_path)?;
    let range = stargaze::FrameRange::new(
        stargaze::FrameIndex(args.start.unwrap_or(0)),
        stargaze::FrameIndex(args.end.unwrap_or(cfg.duration_frames())),
    )?;
    let threading = stargaze::ResolveThreading {
        parallel: args.parallel,
        threads: args.threads,
    };
    let states = stargaze::resolve_range(&cfg, range, &threading)?;

    let mut out = open_output(args.out.as_deref())?;
    for state in &states {
        serde_json::to_writer(&mut out, state)?;
        writeln!(out)?;
    }
    out.flush()?;

    if let Some(path) = &args.out {
        eprintln!("wrote {} frames to {}", states.len(), path.display());
    }
    Ok(())
}
