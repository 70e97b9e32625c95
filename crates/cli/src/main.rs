//! RISC-V instruction encoder CLI.
//!
//! This binary is a thin front end over `rvasm-core`. It provides:
//! 1. **Demo:** Prints the `add` and `addi` reference words (the default).
//! 2. **Encode:** Encodes one line of assembly, e.g. `rvasm encode addi a0, zero, 10`.
//! 3. **Dump:** Encodes several lines into a little-endian stream and lists its words.

use std::process;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use rvasm_core::config::{Config, OutputConfig};
use rvasm_core::isa::abi::{X1, X2, X3, X5, X10};
use rvasm_core::isa::encode::{add, addi};
use rvasm_core::ProgramWriter;

#[derive(Parser, Debug)]
#[command(
    name = "rvasm",
    author,
    version,
    about = "RISC-V instruction word encoder",
    long_about = "Pack RISC-V instruction fields into 32-bit words.\n\nExamples:\n  rvasm\n  rvasm encode addi x1, x2, 512\n  rvasm dump 'add x1, x2, x3' 'sw a0, -8(sp)'"
)]
struct Cli {
    /// JSON configuration file for output formatting. Give it before the
    /// subcommand.
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print reference encodings (default when no subcommand is given).
    Demo {
        /// Also emit a stream covering every instruction format.
        #[arg(long)]
        extended: bool,
    },

    /// Encode a single line of assembly.
    ///
    /// Everything after `encode` is instruction text, so `--config` must come
    /// before the subcommand: `rvasm --config out.json encode addi a0, zero, 1`.
    Encode {
        /// Instruction text; unquoted words are joined with spaces.
        #[arg(required = true, allow_hyphen_values = true, trailing_var_arg = true)]
        line: Vec<String>,
    },

    /// Encode one instruction per argument and list the resulting words.
    Dump {
        /// Instruction lines.
        #[arg(required = true, allow_hyphen_values = true)]
        lines: Vec<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = cli.config.as_deref().map_or_else(Config::default, |path| {
        Config::load(path).unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            process::exit(1);
        })
    });
    debug!(?config, "loaded configuration");

    match cli.command {
        None => cmd_demo(&config.output, false),
        Some(Commands::Demo { extended }) => cmd_demo(&config.output, extended),
        Some(Commands::Encode { line }) => cmd_encode(&config.output, &line.join(" ")),
        Some(Commands::Dump { lines }) => cmd_dump(&config.output, &lines),
    }
}

/// Prints `add x1, x2, x3` and `addi x1, x2, 512`; with `extended`, also a
/// stream with one instruction of every format.
fn cmd_demo(out: &OutputConfig, extended: bool) {
    print_labeled(out, "add x1, x2, x3", add(X1, X2, X3));
    print_labeled(out, "addi x1, x2, 512", addi(X1, X2, 512));

    if extended {
        let mut asm = ProgramWriter::new();
        asm.add(X1, X2, X3);
        asm.addi(X1, X2, 512);
        asm.auipc(X5, 0x12345);
        asm.jal(X10, 0x12344);
        asm.beq(X1, X2, 0x556);
        asm.sb(X2, X3, -0x555);

        println!();
        for word in asm.words() {
            println!("{}", out.listing(word));
        }
    }
}

fn cmd_encode(out: &OutputConfig, line: &str) {
    match rvasm_core::asm::assemble_line(line) {
        Ok(word) => print_labeled(out, line.trim(), word),
        Err(e) => {
            eprintln!("Error: {line}: {e}");
            process::exit(1);
        }
    }
}

fn cmd_dump(out: &OutputConfig, lines: &[String]) {
    let mut asm = ProgramWriter::new();
    for line in lines {
        if let Err(e) = asm.emit_line(line) {
            eprintln!("Error: {line}: {e}");
            process::exit(1);
        }
    }
    for (index, word) in asm.words().enumerate() {
        println!("{:08x}: {}", index * 4, out.listing(word));
    }
}

fn print_labeled(out: &OutputConfig, label: &str, word: u32) {
    println!("{}", out.labeled(label, word));
}
