// Render the timestring man page
//
// Usage: generate-man [OUT_DIR]
// Writes timestring.1 into OUT_DIR, or to stdout when no directory is given.

use std::io::Write;
use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::CommandFactory;
use timestring::cli::Cli;

fn main() -> Result<()> {
    let man = clap_mangen::Man::new(Cli::command());
    let mut buffer = Vec::new();
    man.render(&mut buffer).context("Failed to render man page")?;

    match std::env::args().nth(1) {
        Some(dir) => {
            let out_dir = PathBuf::from(dir);
            std::fs::create_dir_all(&out_dir)
                .with_context(|| format!("Failed to create directory: {}", out_dir.display()))?;
            let path = out_dir.join("timestring.1");
            std::fs::write(&path, &buffer)
                .with_context(|| format!("Failed to write man page: {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
        None => {
            std::io::stdout().write_all(&buffer).context("Failed to write man page")?;
        }
    }

    Ok(())
}
