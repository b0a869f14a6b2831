use std::io::{self, prelude::*};

use huffman::{bit_string, Compressed};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let mut text = Vec::new();
    io::stdin().read_to_end(&mut text)?;

    // Treat the input as one line of text, like an interactive prompt would.
    if text.ends_with(b"\n") {
        text.pop();
        if text.ends_with(b"\r") {
            text.pop();
        }
    }

    let Some(compressed) = Compressed::new(&text) else {
        println!("Empty string provided.");
        return Ok(());
    };

    let mut out = io::stdout().lock();

    let mut outline = String::new();
    compressed.tree.write_outline(&mut outline)?;
    writeln!(out, "Huffman tree:\n{outline}")?;

    writeln!(out, "Huffman codes:")?;
    for (symbol, code) in compressed.codes.iter() {
        writeln!(out, "{:?}: {}", symbol as char, bit_string(code))?;
    }

    writeln!(out, "\nEncoded text:\n{}", bit_string(&compressed.bits))?;
    writeln!(
        out,
        "\nPacked ({} bits):\n{}",
        compressed.bits.len(),
        hex::encode(compressed.bits.as_raw_slice())
    )?;

    let decoded = compressed.decompress();
    writeln!(out, "\nDecoded text:\n{}", String::from_utf8_lossy(&decoded))?;

    writeln!(out, "\n{}", compressed.report)?;

    anyhow::ensure!(decoded == text, "decoded text differs from input");

    Ok(())
}
