use anyhow::{Context, Result};
use log::{info, warn};
use std::{fs, path::PathBuf};

pub mod public_key;
pub mod secret_key;

/// Outcome of one extraction step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    /// Rendered C declaration
    Declaration(String),
    /// Input file absent; holds the guidance message
    Missing(String),
}

impl Section {
    pub fn text(&self) -> &str {
        match self {
            Section::Declaration(s) | Section::Missing(s) => s,
        }
    }
}

pub struct ExtractOptions {
    pub public_key: PathBuf,
    pub secret_key: PathBuf,
    pub cols: usize,
}

/// Public key step, then secret key step. A missing file in one step
/// never stops the other; any other failure aborts.
pub fn run(opts: &ExtractOptions) -> Result<Vec<Section>> {
    let public = public_key::extract(&opts.public_key, opts.cols)?;
    let secret = secret_key::extract(&opts.secret_key, opts.cols)?;
    Ok(vec![public, secret])
}

/// Sections separated by a blank line, as printed to stdout.
pub fn render_report(sections: &[Section]) -> String {
    let parts: Vec<&str> = sections.iter().map(Section::text).collect();
    format!("{}\n", parts.join("\n\n"))
}

/// Standalone C source holding only the declarations.
pub fn render_c_source(sections: &[Section]) -> String {
    let decls: Vec<&str> = sections
        .iter()
        .filter_map(|s| match s {
            Section::Declaration(d) => Some(d.as_str()),
            Section::Missing(_) => None,
        })
        .collect();
    format!(
        "/* Generated by {} {}. Do not edit. */\n#include <stdint.h>\n\n{}\n",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        decls.join("\n\n")
    )
}

pub fn emit(sections: Vec<Section>, out: Option<PathBuf>) -> Result<()> {
    let Some(p) = out else {
        print!("{}", render_report(&sections));
        return Ok(());
    };

    for s in &sections {
        if let Section::Missing(msg) = s {
            println!("{msg}");
        }
    }
    if !sections.iter().any(|s| matches!(s, Section::Declaration(_))) {
        warn!("no key material found, {} not written", p.display());
        return Ok(());
    }

    if let Some(parent) = p.parent() {
        fs::create_dir_all(parent).ok();
    }
    fs::write(&p, render_c_source(&sections)).with_context(|| format!("writing {}", p.display()))?;
    info!("wrote {}", p.display());
    println!("✓ Wrote {}", p.display());
    Ok(())
}
