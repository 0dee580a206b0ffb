/*!
# Rust Compile Module

This Rust module drives a whole compilation: read the source file, run
the pipeline (lex, resolve, build, generate), write the generated C to a
temporary file, and hand it to the external C compiler. The temporary
file is removed on every exit path.

*/

use crate::cgen;
use crate::error;
use crate::lang::{self, Error};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

type Result<T> = std::result::Result<T, Error>;

const C_COMPILER: &str = "gcc";

/// Compile a `.hero` source file into a platform executable. Returns the
/// path of the executable on success. `verbose` prints the token
/// sequence, the instruction list, and the generated C source; it
/// changes no compilation behavior.
pub fn compile(source: &Path, output: Option<&Path>, verbose: bool) -> Result<PathBuf> {
    let output = match output {
        Some(path) => path.to_path_buf(),
        None => default_output(source),
    };
    let text = std::fs::read_to_string(source)
        .map_err(|e| error!(FileNotFound; format!("{}: {}", source.display(), e)))?;

    log::debug!("lexing {}", source.display());
    let tokens = lang::lex(&text)?;
    if verbose {
        println!("Tokens:");
        for token in &tokens {
            println!("  {}", token);
        }
    }

    log::debug!("parsing {} tokens", tokens.len());
    let tables = lang::resolve(&tokens);
    let instructions = lang::parse(&tokens, &tables)?;
    if verbose {
        println!("\nInstructions:");
        for instruction in &instructions {
            println!("  {:?}", instruction);
        }
    }

    log::debug!("generating C for {} instructions", instructions.len());
    let c_source = cgen::generate(&instructions, &tables);
    if verbose {
        println!("\nGenerated C:\n{}", c_source);
    }

    invoke_cc(&c_source, &output)?;
    Ok(output)
}

/// Write the generated C to a temp file and run the external compiler.
/// The temp file is deleted when it drops, success or failure.
fn invoke_cc(c_source: &str, output: &Path) -> Result<()> {
    let mut temp = tempfile::Builder::new()
        .prefix("hero")
        .suffix(".c")
        .tempfile()
        .map_err(|e| error!(FileWrite; e.to_string()))?;
    temp.write_all(c_source.as_bytes())
        .map_err(|e| error!(FileWrite; e.to_string()))?;
    log::debug!("invoking {} on {}", C_COMPILER, temp.path().display());

    let result = Command::new(C_COMPILER)
        .arg(temp.path())
        .arg("-o")
        .arg(output)
        .output();
    let out = match result {
        Ok(out) => out,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(error!(CompilerNotFound; C_COMPILER))
        }
        Err(e) => return Err(error!(CompilerFailed; e.to_string())),
    };
    if !out.status.success() {
        let stderr = String::from_utf8_lossy(&out.stderr);
        return Err(error!(CompilerFailed; stderr.trim_end().to_string()));
    }
    Ok(())
}

fn default_output(source: &Path) -> PathBuf {
    let mut path = source.with_extension("");
    if cfg!(windows) {
        path.set_extension("exe");
    }
    path
}
