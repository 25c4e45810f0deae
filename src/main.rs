use std::path::PathBuf;

use clap::Parser;
use staticgzip::{io_utils::error_chain, schema, Stage, StageConfig, DEFAULT_ARGUMENTS_PATH};

/// Compress the file input of an osbuild pipeline into the tree with gzip.
#[derive(Parser)]
#[command(name = "staticgzip", version)]
struct Args {
    /// Print the stage schema as JSON and exit
    #[arg(long)]
    schema: bool,
    /// Read stage arguments from this file
    #[arg(long, hide = true, default_value = DEFAULT_ARGUMENTS_PATH)]
    arguments: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("{}", error_chain(&*e));
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    if args.schema {
        println!("{}", serde_json::to_string_pretty(&schema())?);
        return Ok(());
    }

    let stage = Stage::new(StageConfig::default().with_arguments_path(args.arguments));
    let plan = stage.run()?;
    log::info!("wrote {}", plan.target.display());
    Ok(())
}
