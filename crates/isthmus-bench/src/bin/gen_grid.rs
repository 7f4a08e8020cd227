//! Generates the huge-tier benchmark fixture to disk.
//!
//! Writes an XLarge grid in the text format to `target/bench-fixtures/`,
//! where `benches/huge_grid.rs` loads it at benchmark time.

use std::error::Error;
use std::fs;
use std::io::{BufWriter, Write};

use isthmus_bench::{SizeTier, generate_isthmus, huge_fixture_path};
use isthmus_core::to_text;

fn main() -> Result<(), Box<dyn Error>> {
    let path = huge_fixture_path();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let config = SizeTier::XLarge.config(42);
    eprintln!(
        "Generating XLarge tier ({}x{} cells)...",
        config.width, config.height
    );
    let grid = generate_isthmus(&config)?;
    eprintln!("Generated {} land cells", grid.land_count());

    eprintln!("Writing text to {}...", path.display());
    let mut writer = BufWriter::new(fs::File::create(&path)?);
    writer.write_all(to_text(&grid).as_bytes())?;
    writer.flush()?;

    let meta = fs::metadata(&path)?;
    eprintln!("Text: {:.1} MB", meta.len() as f64 / (1024.0 * 1024.0));

    Ok(())
}
