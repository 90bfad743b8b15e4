//! Central place for all default values.
//! Update these and the whole tool picks them up.

pub struct Defaults;

impl Defaults {

    /* Inputs */
    pub const PUBLIC_KEY_FILE: &'static str = "public.pem";
    pub const SECRET_KEY_FILE: &'static str = "secret.key";

    /* Firmware symbol names (keys.c) */
    pub const PUBLIC_KEY_ARRAY: &'static str = "ECDSA_public_key_xy";
    pub const SECRET_KEY_ARRAY: &'static str = "AES_SECRET_KEY";

    /* Layout */
    pub const COLS: usize = 8;
    pub const MAX_COLS: usize = 64;
    pub const INDENT: &'static str = "    ";

    /* Shown when an input file is missing */
    pub const KEYGEN_HINT: &'static str = "Run keygen.py first.";
}
