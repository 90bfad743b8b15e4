use p256::elliptic_curve::sec1::ToEncodedPoint;
use p256::pkcs8::DecodePublicKey;
use spki::der::Document;
use spki::{ObjectIdentifier, SubjectPublicKeyInfoRef};

use crate::error::KeyError;

/// id-ecPublicKey
const ID_EC_PUBLIC_KEY: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.2.1");
/// secp256r1 / prime256v1, the bootloader verifier's curve
const OID_SECP256R1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.3.1.7");
const OID_SECP256K1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.132.0.10");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Curve {
    P256,
    Secp256k1,
}

impl Curve {
    pub fn from_oid(oid: ObjectIdentifier) -> Result<Self, KeyError> {
        match oid {
            o if o == OID_SECP256R1 => Ok(Curve::P256),
            o if o == OID_SECP256K1 => Ok(Curve::Secp256k1),
            other => Err(KeyError::UnsupportedCurve(other)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Curve::P256 => "P-256",
            Curve::Secp256k1 => "secp256k1",
        }
    }
}

/// Affine coordinates of an EC public key, both 32-byte big-endian.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKeyXy {
    pub curve: Curve,
    pub x: [u8; 32],
    pub y: [u8; 32],
}

impl PublicKeyXy {
    /// Parse a `-----BEGIN PUBLIC KEY-----` (SubjectPublicKeyInfo) block.
    pub fn from_pem(pem: &str) -> Result<Self, KeyError> {
        let (label, doc) = Document::from_pem(pem)?;
        if label != "PUBLIC KEY" {
            return Err(KeyError::UnexpectedLabel(label.to_string()));
        }
        Self::from_der(doc.as_bytes())
    }

    pub fn from_der(der: &[u8]) -> Result<Self, KeyError> {
        let info = SubjectPublicKeyInfoRef::try_from(der)?;
        if info.algorithm.oid != ID_EC_PUBLIC_KEY {
            return Err(KeyError::NotEcKey(info.algorithm.oid));
        }
        let curve = Curve::from_oid(info.algorithm.parameters_oid()?)?;

        // The curve crates check the point is on the curve.
        let (x, y) = match curve {
            Curve::P256 => {
                let point = p256::PublicKey::from_public_key_der(der)?.to_encoded_point(false);
                (coord(point.x().map(|c| c.as_slice()))?, coord(point.y().map(|c| c.as_slice()))?)
            }
            Curve::Secp256k1 => {
                let point = k256::PublicKey::from_public_key_der(der)?.to_encoded_point(false);
                (coord(point.x().map(|c| c.as_slice()))?, coord(point.y().map(|c| c.as_slice()))?)
            }
        };

        Ok(PublicKeyXy { curve, x, y })
    }

    /// X || Y
    pub fn to_bytes(&self) -> [u8; 64] {
        let mut xy = [0u8; 64];
        xy[..32].copy_from_slice(&self.x);
        xy[32..].copy_from_slice(&self.y);
        xy
    }
}

fn coord(bytes: Option<&[u8]>) -> Result<[u8; 32], KeyError> {
    let bytes = bytes.unwrap_or_default();
    <[u8; 32]>::try_from(bytes).map_err(|_| KeyError::CoordinateLength(bytes.len()))
}
