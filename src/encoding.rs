// src/encoding.rs

/// Format bytes as C hex literals (`0xNN`), `cols` per row.
///
/// Every row starts with `indent`; rows are joined with `",\n"` so the
/// result drops straight into an initializer list. Empty input gives "".
pub fn fmt_bytes(data: &[u8], indent: &str, cols: usize) -> String {
    data.chunks(cols.max(1))
        .map(|chunk| {
            let row: Vec<String> = chunk.iter().map(|b| format!("0x{b:02X}")).collect();
            format!("{indent}{}", row.join(", "))
        })
        .collect::<Vec<_>>()
        .join(",\n")
}

/// `const uint8_t NAME[LEN] = {` ... `};`
pub fn c_array(name: &str, len: usize, body: &str) -> String {
    format!("const uint8_t {name}[{len}] = {{\n{body}\n}};")
}
