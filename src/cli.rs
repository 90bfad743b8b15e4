use clap::Parser;
use std::path::PathBuf;

use crate::defaults::Defaults;

/// Firmware key exporter: PEM public key + raw secret key -> C hex arrays
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Print firmware key material as C uint8_t arrays (offline). No network calls."
)]
pub struct Cli {
    /// PEM file holding the EC public key (P-256 or secp256k1)
    #[arg(long, default_value = Defaults::PUBLIC_KEY_FILE)]
    pub public_key: PathBuf,

    /// Raw binary secret key file
    #[arg(long, default_value = Defaults::SECRET_KEY_FILE)]
    pub secret_key: PathBuf,

    /// Hex literals per row
    #[arg(
        long,
        default_value_t = Defaults::COLS,
        value_parser = parse_cols
    )]
    pub cols: usize,

    /// Optional path to write a C source file instead of printing
    #[arg(long)]
    pub out: Option<PathBuf>,
}

fn parse_cols(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|e| format!("{e}"))?;
    if (1..=Defaults::MAX_COLS).contains(&n) {
        Ok(n)
    } else {
        Err(format!("must be between 1 and {}", Defaults::MAX_COLS))
    }
}
