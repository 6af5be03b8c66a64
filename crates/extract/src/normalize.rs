/// Line-oriented and whole-text views over one receipt's OCR output.
/// The matchers downstream pick whichever view suits them: merchant
/// identification walks lines, date/time/amount patterns scan the full text.
#[derive(Debug, Clone)]
pub struct Normalized<'a> {
    /// The raw OCR text, untouched.
    pub text: &'a str,
    /// Trimmed, non-empty lines in document order.
    pub lines: Vec<&'a str>,
}

/// Split raw OCR text into trimmed, non-empty lines. Empty input yields an
/// empty sequence; there is no failure mode.
pub fn normalize(raw_text: &str) -> Normalized<'_> {
    let lines = raw_text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    Normalized { text: raw_text, lines }
}
