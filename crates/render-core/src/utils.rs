/// Get the PDF base font name for a standard family and weight.
pub fn get_styled_font_name(base_name: &str, bold: bool) -> String {
    if bold {
        format!("{base_name}-Bold")
    } else {
        base_name.to_string()
    }
}

/// Convert layout Y coordinate to PDF Y coordinate (flip origin)
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}

/// Encodes text for a standard font's WinAnsi encoding; anything outside
/// Latin-1 becomes `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| if c as u32 <= 255 { c as u8 } else { b'?' })
        .collect()
}
