use crate::error::Diagnostic;

/// Decodes a `SetColor` argument into straight sRGB bytes.
///
/// Accepts `rgb` or `rrggbb`, each with an optional leading `#`. Shorthand
/// digits are doubled (`abc` → `aabbcc`).
pub fn parse_hex_color(text: &str) -> Result<[u8; 3], Diagnostic> {
    let malformed = || Diagnostic::MalformedColor { text: text.to_string() };

    let hex = text.strip_prefix('#').unwrap_or(text);
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(malformed());
    }

    let digits: Vec<u8> = hex
        .bytes()
        .map(|b| match b {
            b'0'..=b'9' => b - b'0',
            b'a'..=b'f' => b - b'a' + 10,
            _ => b - b'A' + 10,
        })
        .collect();

    match digits.as_slice() {
        &[r, g, b] => Ok([r * 17, g * 17, b * 17]),
        &[r1, r0, g1, g0, b1, b0] => Ok([r1 << 4 | r0, g1 << 4 | g0, b1 << 4 | b0]),
        _ => Err(malformed()),
    }
}
