//! Structural pre-scan for quoted fields
//!
//! The `csv` reader silently closes a quoted field at end of input. A feed
//! that ends inside a quote is almost always truncated, so the normalizer
//! checks for it up front and reports the line where the quote was opened.
//!
//! Quote handling follows the reader: a quote only opens a quoted field at
//! the very start of a field, and inside a quoted field a doubled quote is an
//! escaped literal.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    FieldStart,
    Unquoted,
    Quoted,
    QuoteInQuoted,
}

/// Return the 1-based line of a quoted field that is still open at end of input
///
/// `\n`, `\r` and `\r\n` each end one line, as they do for the reader.
pub fn find_unterminated_quote(text: &str) -> Option<usize> {
    let mut state = ScanState::FieldStart;
    let mut line = 1;
    let mut opened_on = 0;
    let mut previous = 0u8;

    for byte in text.bytes() {
        if byte == b'\r' || (byte == b'\n' && previous != b'\r') {
            line += 1;
        }
        previous = byte;

        state = match (state, byte) {
            (ScanState::FieldStart, b'"') => {
                opened_on = line;
                ScanState::Quoted
            }
            (ScanState::FieldStart, b',') => ScanState::FieldStart,
            (ScanState::QuoteInQuoted, b'"') => ScanState::Quoted,
            (ScanState::Quoted, b'"') => ScanState::QuoteInQuoted,
            (ScanState::Quoted, _) => ScanState::Quoted,
            (_, b'\n' | b'\r') => ScanState::FieldStart,
            (ScanState::Unquoted | ScanState::QuoteInQuoted, b',') => ScanState::FieldStart,
            (ScanState::FieldStart | ScanState::Unquoted | ScanState::QuoteInQuoted, _) => {
                ScanState::Unquoted
            }
        };
    }

    (state == ScanState::Quoted).then_some(opened_on)
}
