use ansi_term::Colour::Red;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// The Hero Programming Language Compiler
#[derive(Parser)]
#[command(name = "hero", version)]
struct Args {
    /// Source file (.hero)
    source: PathBuf,
    /// Output executable file
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Show the token sequence and generated C source
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    if args.source.extension().map_or(true, |ext| ext != "hero") {
        log::warn!("source file doesn't have a .hero extension");
    }
    match hero::compile::compile(&args.source, args.output.as_deref(), args.verbose) {
        Ok(output) => {
            println!(
                "Successfully compiled {} to {}",
                args.source.display(),
                output.display()
            );
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{} {}", Red.bold().paint("?"), error);
            ExitCode::FAILURE
        }
    }
}
