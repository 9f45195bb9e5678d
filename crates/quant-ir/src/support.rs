//! Formatting helpers shared by the textual renderings of types and attributes.

/// Renders a floating-point number the way MLIR prints float attributes and quantization parameters: in scientific
/// notation with six fractional digits and an explicitly signed, zero-padded exponent (e.g., `5.000000e-01`).
/// Non-finite values are rendered using the hexadecimal representation of their bits (e.g.,
/// `0x7FF0000000000000` for positive infinity).
pub fn format_float(value: f64) -> String {
    if !value.is_finite() {
        return format!("0x{:016X}", value.to_bits());
    }
    let formatted = format!("{value:.6e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exponent) => {
                let sign = if exponent < 0 { '-' } else { '+' };
                format!("{mantissa}e{sign}{:02}", exponent.abs())
            }
            Err(_) => formatted,
        },
        None => formatted,
    }
}

/// Renders a string literal using MLIR escaping rules (i.e., surrounded by double quotes, with quotes, backslashes,
/// and non-printable characters escaped).
pub fn format_string_literal(value: &str) -> String {
    let mut rendered = String::with_capacity(value.len() + 2);
    rendered.push('"');
    for character in value.chars() {
        match character {
            '"' => rendered.push_str("\\\""),
            '\\' => rendered.push_str("\\\\"),
            '\n' => rendered.push_str("\\n"),
            '\t' => rendered.push_str("\\t"),
            character if character.is_control() => {
                let mut buffer = [0u8; 4];
                for byte in character.encode_utf8(&mut buffer).bytes() {
                    rendered.push_str(&format!("\\{byte:02X}"));
                }
            }
            character => rendered.push(character),
        }
    }
    rendered.push('"');
    rendered
}
