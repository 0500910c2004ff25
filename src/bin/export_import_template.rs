// Small dev utility: write the student import template CSV.
//
// Usage:
//   cargo run --bin export_import_template -- [output_path]
//
// Without an output path the template goes to stdout.

use placement_tracker::importer::write_template_csv;
use std::fs::File;
use std::io::{self, BufWriter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    match std::env::args().nth(1).filter(|p| !p.trim().is_empty()) {
        Some(path) => {
            write_template_csv(BufWriter::new(File::create(&path)?))?;
            eprintln!("Template written to {}", path);
        }
        None => write_template_csv(io::stdout().lock())?,
    }
    Ok(())
}
