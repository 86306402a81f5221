use std::{
    fs::File,
    io::{BufReader, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "pivra", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plan a single frame and emit it as JSON.
    Frame(FrameArgs),
    /// Plan every frame and emit JSON Lines (one plan per line).
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input composition JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output JSON path; prints to stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input composition JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output JSON Lines path.
    #[arg(long)]
    out: PathBuf,

    /// Plan frames on a thread pool.
    #[arg(long)]
    parallel: bool,

    /// Worker count for --parallel (defaults to all cores).
    #[arg(long)]
    threads: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn read_comp_json(path: &Path) -> anyhow::Result<pivra::Composition> {
    let f = File::open(path).with_context(|| format!("open composition '{}'", path.display()))?;
    let r = BufReader::new(f);
    let comp: pivra::Composition =
        serde_json::from_reader(r).with_context(|| "parse composition JSON")?;
    Ok(comp)
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let comp = read_comp_json(&args.in_path)?;
    comp.validate()?;

    let plan = pivra::plan_frame(&comp, pivra::FrameIndex(args.frame))?;

    match args.out {
        Some(out) => {
            ensure_parent_dir(&out)?;
            let f = File::create(&out).with_context(|| format!("write '{}'", out.display()))?;
            let mut w = BufWriter::new(f);
            serde_json::to_writer_pretty(&mut w, &plan).with_context(|| "serialize frame plan")?;
            w.write_all(b"\n")?;
            w.flush()?;
            eprintln!("wrote {}", out.display());
        }
        None => {
            let s = serde_json::to_string_pretty(&plan).with_context(|| "serialize frame plan")?;
            println!("{s}");
        }
    }
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let comp = read_comp_json(&args.in_path)?;
    comp.validate()?;

    let range = pivra::FrameRange::new(pivra::FrameIndex(0), comp.duration)?;
    let threading = pivra::PlanThreading {
        parallel: args.parallel,
        threads: args.threads,
    };
    let plans = pivra::plan_frames_with(&comp, range, &threading)?;

    ensure_parent_dir(&args.out)?;
    let f = File::create(&args.out).with_context(|| format!("write '{}'", args.out.display()))?;
    let mut w = BufWriter::new(f);
    for plan in &plans {
        serde_json::to_writer(&mut w, plan).with_context(|| "serialize frame plan")?;
        w.write_all(b"\n")?;
    }
    w.flush()?;

    eprintln!("wrote {} ({} plans)", args.out.display(), plans.len());
    Ok(())
}
