//! Colour transcoding between the host's packed representation and the
//! textual forms each output format wants.
//!
//! Hosts report colours packed into an integer with red in the low byte,
//! green in the middle byte and blue in the high byte (0xBBGGRR).

/// Swap the red and blue channels of a packed colour, turning host order
/// 0xBBGGRR into canonical 0xRRGGBB (the operation is its own inverse).
/// Anything above the low 24 bits is discarded.
pub fn rotate_rgb(colour: u32) -> u32 {
    ((colour & 0xff0000) >> 16) | (colour & 0x00ff00) | ((colour & 0x0000ff) << 16)
}

/// Pack canonical channels into host order.
pub fn pack(red: u8, green: u8, blue: u8) -> u32 {
    (red as u32) | ((green as u32) << 8) | ((blue as u32) << 16)
}

/// Split a host ordered colour into its (red, green, blue) channels.
pub fn channels(colour: u32) -> (u8, u8, u8) {
    (
        (colour & 0xff) as u8,
        ((colour >> 8) & 0xff) as u8,
        ((colour >> 16) & 0xff) as u8,
    )
}

/// Six lowercase hex digits in rrggbb order for a host ordered colour. The
/// caller supplies the leading `#`.
pub fn html_colour(colour: u32) -> String {
    format!("{:06x}", rotate_rgb(colour))
}

/// The `r, g, b` triple LaTeX's `[rgb]` colour model takes, each channel
/// scaled onto 0..1 with one decimal digit.
pub fn tex_colour(colour: u32) -> String {
    let (red, green, blue) = channels(colour);

    format!(
        "{}, {}, {}",
        tex_channel(red),
        tex_channel(green),
        tex_channel(blue)
    )
}

// The decimal point is written by hand from integer parts so that it is
// always '.', whatever the locale.
fn tex_channel(channel: u8) -> String {
    let scaled = scale(channel);
    format!("{}.{}", scaled / 10, scaled % 10)
}

// round(channel / 256 * 10), half rounding up, in integer arithmetic.
fn scale(channel: u8) -> u32 {
    (channel as u32 * 10 + 128) / 256
}

/// Parse a `#rrggbb` (or bare `rrggbb`) string into a host ordered colour.
pub fn parse_hex(text: &str) -> Option<u32> {
    let digits = text
        .strip_prefix('#')
        .unwrap_or(text);

    if digits.len() != 6
        || !digits
            .bytes()
            .all(|b| b.is_ascii_hexdigit())
    {
        return None;
    }

    let canonical = u32::from_str_radix(digits, 16).ok()?;
    Some(rotate_rgb(canonical))
}
