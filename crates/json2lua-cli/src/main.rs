//! `json2lua` CLI — convert JSON documents into Lua table-literal chunks.
//!
//! ## Usage
//!
//! ```sh
//! # Convert JSON to an indented Lua chunk (stdin → stdout)
//! echo '{"name":"Alice","age":30}' | json2lua convert
//!
//! # Convert from file to file
//! json2lua convert -i config.json -o config.lua
//!
//! # Single-line output
//! echo '[1,2,3]' | json2lua convert --compact
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "json2lua",
    version,
    about = "Convert JSON documents into Lua table-literal chunks"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert JSON to a Lua chunk (`return { ... }`)
    Convert {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Emit a single-line chunk instead of tab-indented lines
        #[arg(long)]
        compact: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            output,
            compact,
        } => {
            let json = read_input(input.as_deref())?;
            let lua = json2lua_core::convert(json.trim_end(), !compact)
                .context("Failed to convert JSON to Lua")?;
            write_output(output.as_deref(), &lua)?;
        }
    }

    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
