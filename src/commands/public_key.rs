use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::path::Path;

use super::Section;
use crate::defaults::Defaults;
use crate::encoding::{c_array, fmt_bytes};
use crate::key::PublicKeyXy;
use crate::util::{missing_message, read_optional};

/// Load the PEM public key at `path` and render `ECDSA_public_key_xy[64]`.
/// A missing file yields the guidance message instead of an error.
pub fn extract(path: &Path, cols: usize) -> Result<Section> {
    let Some(bytes) = read_optional(path)? else {
        warn!("{} not found, skipping public key", path.display());
        return Ok(Section::Missing(missing_message(path, Defaults::KEYGEN_HINT)));
    };

    let pem = String::from_utf8(bytes)
        .with_context(|| format!("{} is not PEM text", path.display()))?;
    let xy = PublicKeyXy::from_pem(&pem)
        .with_context(|| format!("parsing public key {}", path.display()))?;

    info!("{}: {} public key", path.display(), xy.curve.name());
    debug!("x = {}", hex::encode(xy.x));
    debug!("y = {}", hex::encode(xy.y));

    Ok(Section::Declaration(render(&xy, path, cols)))
}

pub fn render(xy: &PublicKeyXy, source: &Path, cols: usize) -> String {
    let indent = Defaults::INDENT;
    let bytes = xy.to_bytes();
    let (x, y) = bytes.split_at(32);

    let body = format!(
        "{indent}/* X Coordinate */\n{},\n\n{indent}/* Y Coordinate */\n{}",
        fmt_bytes(x, indent, cols),
        fmt_bytes(y, indent, cols),
    );
    format!(
        "/* ECDSA Public Key (from {}) */\n{}",
        source.display(),
        c_array(Defaults::PUBLIC_KEY_ARRAY, bytes.len(), &body)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::Curve;
    use std::fs;
    use tempfile::TempDir;

    const P256_PEM: &str = include_str!("../../tests/fixtures/public_p256.pem");

    fn sample() -> PublicKeyXy {
        PublicKeyXy {
            curve: Curve::P256,
            x: std::array::from_fn(|i| i as u8),
            y: std::array::from_fn(|i| 0xE0 + i as u8),
        }
    }

    #[test]
    fn render_layout() {
        let out = render(&sample(), Path::new("public.pem"), 8);
        let expected = "\
/* ECDSA Public Key (from public.pem) */
const uint8_t ECDSA_public_key_xy[64] = {
    /* X Coordinate */
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07,
    0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E, 0x0F,
    0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17,
    0x18, 0x19, 0x1A, 0x1B, 0x1C, 0x1D, 0x1E, 0x1F,

    /* Y Coordinate */
    0xE0, 0xE1, 0xE2, 0xE3, 0xE4, 0xE5, 0xE6, 0xE7,
    0xE8, 0xE9, 0xEA, 0xEB, 0xEC, 0xED, 0xEE, 0xEF,
    0xF0, 0xF1, 0xF2, 0xF3, 0xF4, 0xF5, 0xF6, 0xF7,
    0xF8, 0xF9, 0xFA, 0xFB, 0xFC, 0xFD, 0xFE, 0xFF
};";
        assert_eq!(out, expected);
    }

    #[test]
    fn render_holds_64_literals() {
        let out = render(&sample(), Path::new("public.pem"), 5);
        assert_eq!(out.matches("0x").count(), 64);
    }

    #[test]
    fn extract_fixture() {
        let dir = TempDir::new().unwrap();
        let p = dir.path().join("public.pem");
        fs::write(&p, P256_PEM).unwrap();

        let Section::Declaration(text) = extract(&p, 8).unwrap() else {
            panic!("expected a declaration");
        };
        assert!(text.contains("const uint8_t ECDSA_public_key_xy[64] = {"));
        assert!(text.contains("    0xF7, 0xA8, 0xBE, 0x39, 0xEC, 0x2C, 0x9A, 0x8E,"));
        assert!(text.ends_with("    0x2F, 0x32, 0x40, 0x24, 0x7B, 0x41, 0xD1, 0xE9\n};"));
    }

    #[test]
    fn extract_missing() {
        let dir = TempDir::new().unwrap();
        let p = dir.path().join("public.pem");
        match extract(&p, 8).unwrap() {
            Section::Missing(msg) => {
                assert!(msg.starts_with("Error: '"));
                assert!(msg.ends_with("public.pem' not found. Run keygen.py first."));
            }
            other => panic!("expected Missing, got {other:?}"),
        }
    }

    #[test]
    fn extract_malformed_propagates() {
        let dir = TempDir::new().unwrap();
        let p = dir.path().join("public.pem");
        fs::write(&p, "-----BEGIN PUBLIC KEY-----\nAAAA\n-----END PUBLIC KEY-----\n").unwrap();
        let err = extract(&p, 8).unwrap_err();
        assert!(format!("{err:#}").contains("parsing public key"));
    }
}
