use anyhow::{Context, Result};
use clap::Parser;

use pc4_rom::{listing, render_v2_raw};
use pc4_rs::{assemble, isa::pico};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Emit a Logisim v2.0 raw ROM image from 4-bit-PC assembly"
)]
struct Opts {
    /// Assembly source file
    #[arg(value_name = "ASMFILE")]
    input: String,
    /// Write the output here instead of stdout
    #[arg(long, value_name = "FILE")]
    out: Option<String>,
    /// Emit a JSON listing (address/bits/hex rows) instead of the ROM image
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let opts = Opts::parse();
    let source = std::fs::read_to_string(&opts.input)
        .with_context(|| format!("reading {}", opts.input))?;

    let isa = pico::instruction_set();
    let assembly = assemble(&isa, &source)?;

    for notice in &assembly.notices {
        eprintln!("warning: {notice:?}");
    }

    let rendered = if opts.json {
        let mut s = serde_json::to_string_pretty(&listing(&assembly))?;
        s.push('\n');
        s
    } else {
        render_v2_raw(&assembly.words)
    };

    match opts.out {
        Some(path) => {
            std::fs::write(&path, rendered).with_context(|| format!("writing {path}"))?
        }
        None => print!("{rendered}"),
    }

    Ok(())
}
