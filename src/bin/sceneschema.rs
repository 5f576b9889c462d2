use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use sceneschema::{Composition, ValidateOpts};

#[derive(Parser, Debug)]
#[command(name = "sceneschema", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a scene document and report the first rejected field.
    Check(CheckArgs),
    /// Validate a scene document and print its normalized JSON.
    Dump(DumpArgs),
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Input JSON: `{"objects": [...]}`, an array of objects, or a single object.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Validate objects in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Parser, Debug)]
struct DumpArgs {
    /// Input JSON document.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Write to this file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Check(args) => cmd_check(args),
        Command::Dump(args) => cmd_dump(args),
    }
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let opts = ValidateOpts {
        parallel: args.parallel,
        threads: args.threads,
    };
    let comp = Composition::from_path(&args.in_path, &opts)
        .with_context(|| format!("check '{}'", args.in_path.display()))?;
    eprintln!("ok: {} objects", comp.len());
    Ok(())
}

fn cmd_dump(args: DumpArgs) -> anyhow::Result<()> {
    let comp = Composition::from_path(&args.in_path, &ValidateOpts::default())
        .with_context(|| format!("load '{}'", args.in_path.display()))?;
    let json = serde_json::to_string_pretty(&comp.to_value()?)?;

    match args.out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(&out, json).with_context(|| format!("write '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
