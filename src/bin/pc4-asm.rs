use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use pc4_rs::{assemble, isa::pico};

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Assemble 4-bit-PC assembly into 8-bit machine words"
)]
struct Opts {
    /// Source file (`-` for stdin)
    #[arg(value_name = "ASMFILE")]
    input: String,
    /// Also print each word as 8 binary digits with its address
    #[arg(long)]
    binary: bool,
    /// Print the resolved symbol table before the words
    #[arg(long)]
    symbols: bool,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opts = Opts::parse();
    let source = if opts.input == "-" {
        std::io::read_to_string(std::io::stdin())?
    } else {
        std::fs::read_to_string(&opts.input).with_context(|| format!("reading {}", opts.input))?
    };

    let isa = pico::instruction_set();
    let assembly = assemble(&isa, &source)?;

    for notice in &assembly.notices {
        eprintln!("warning: {notice:?}");
    }

    match opts.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&assembly)?),
        OutputFormat::Text => {
            if opts.symbols {
                for (label, addr) in &assembly.symbols {
                    println!("{label}: {addr:04b}");
                }
            }
            for (addr, word) in assembly.words.iter().enumerate() {
                if opts.binary {
                    println!("{addr:04b}: {} {}", word.bits(), word.hex());
                } else {
                    println!("{}", word.hex());
                }
            }
        }
    }

    Ok(())
}
