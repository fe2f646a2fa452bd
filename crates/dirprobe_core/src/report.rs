/// Column width the matched word is padded to in report lines.
pub const DISPLAY_WIDTH: usize = 40;

/// Format one matched probe for the final report.
///
/// The word keeps its leading slash and is left-aligned in a fixed-width
/// field so the status column lines up across rows. Words longer than the
/// field are printed in full.
pub fn format_match_line(word: &str, status: u16, length: u64) -> String {
    format!(
        "/{:<width$}  [ Status: {}  Length: {} ]",
        word,
        status,
        length,
        width = DISPLAY_WIDTH
    )
}
