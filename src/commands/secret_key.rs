use anyhow::Result;
use log::{debug, warn};
use std::path::Path;
use zeroize::Zeroizing;

use super::Section;
use crate::defaults::Defaults;
use crate::encoding::{c_array, fmt_bytes};
use crate::util::{missing_message, read_optional};

/// Load the raw key at `path` and render `AES_SECRET_KEY[N]`, N = file length.
pub fn extract(path: &Path, cols: usize) -> Result<Section> {
    let Some(bytes) = read_optional(path)? else {
        warn!("{} not found, skipping secret key", path.display());
        return Ok(Section::Missing(missing_message(path, Defaults::KEYGEN_HINT)));
    };
    // Wiped on drop; only the length is logged.
    let key = Zeroizing::new(bytes);
    debug!("{}: {} bytes", path.display(), key.len());

    Ok(Section::Declaration(render(&key, path, cols)))
}

pub fn render(key: &[u8], source: &Path, cols: usize) -> String {
    format!(
        "/* AES Secret Key (from {}) */\n{}",
        source.display(),
        c_array(
            Defaults::SECRET_KEY_ARRAY,
            key.len(),
            &fmt_bytes(key, Defaults::INDENT, cols)
        )
    )
}
