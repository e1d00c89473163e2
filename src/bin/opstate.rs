use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "opstate", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Bake every entry of a frame JSON and report the resolved state of accepted ops.
    Bake(BakeArgs),
}

#[derive(Parser, Debug)]
struct BakeArgs {
    /// Input frame JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Print accepted ops as a JSON array instead of text.
    #[arg(long)]
    json: bool,

    /// Emit debug logs to stderr.
    #[arg(long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Bake(args) => cmd_bake(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_frame_json(path: &Path) -> anyhow::Result<opstate::FrameDesc> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("read frame '{}'", path.display()))?;
    let frame = opstate::FrameDesc::from_json_str(&s)
        .with_context(|| format!("parse frame JSON '{}'", path.display()))?;
    Ok(frame)
}

fn cmd_bake(args: BakeArgs) -> anyhow::Result<()> {
    init_tracing(args.verbose);

    let frame = read_frame_json(&args.in_path)?;
    let mut arena = opstate::BakedOpArena::default();
    let report = opstate::bake_frame(&frame, &mut arena)?;
    let summaries = report.summaries(&arena)?;

    if args.json {
        let out = serde_json::to_string_pretty(&summaries).context("serialize summaries")?;
        println!("{out}");
    } else {
        let mut accepted = summaries.iter().peekable();
        for outcome in &report.outcomes {
            let kind = outcome.kind;
            match accepted.next_if(|s| s.index == outcome.index) {
                Some(s) => println!(
                    "#{:<4} {:<10} clip={} bounds={} sides={:?} alpha={}",
                    s.index,
                    kind,
                    fmt_rect(s.clip_rect),
                    fmt_rect(s.clipped_bounds),
                    s.clip_side_flags,
                    s.alpha
                ),
                None => println!("#{:<4} {:<10} rejected", outcome.index, kind),
            }
        }
    }

    eprintln!(
        "accepted {} rejected {} ({} bytes in arena)",
        report.accepted(),
        report.rejected(),
        arena.used_bytes()
    );
    Ok(())
}

fn fmt_rect(r: opstate::Rect) -> String {
    format!("({}, {}, {}, {})", r.x0, r.y0, r.x1, r.y1)
}
