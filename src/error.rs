use spki::ObjectIdentifier;
use thiserror::Error;

/// Failures while turning a PEM public key into X/Y coordinates.
#[derive(Error, Debug)]
pub enum KeyError {
    #[error("malformed PEM: {0}")]
    Pem(#[from] spki::der::Error),

    #[error("expected a 'PUBLIC KEY' PEM block, found '{0}'")]
    UnexpectedLabel(String),

    #[error("invalid SubjectPublicKeyInfo: {0}")]
    Spki(#[from] spki::Error),

    #[error("not an elliptic-curve public key (algorithm {0})")]
    NotEcKey(ObjectIdentifier),

    #[error("unsupported curve {0} (expected P-256 or secp256k1)")]
    UnsupportedCurve(ObjectIdentifier),

    #[error("coordinate is {0} bytes, expected 32")]
    CoordinateLength(usize),
}
