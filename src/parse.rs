/// The field separator used by the quote-wrapped export format: the whole
/// payload sits inside one pair of double quotes and fields are joined by
/// the literal three-character token `","`.
pub const SEP: &str = "\",\"";

/// Strip the line-level quote wrapper and split the payload into fields.
///
/// Reproduces the exact substring arithmetic of the format this was built
/// against: the payload starts one past the first `"` and runs for
/// `last_quote_index - 1` characters. When the first quote is not at
/// index 0 this over-reads past the closing quote; that behavior is kept
/// deliberately for compatibility with existing exports (see the quirk
/// test below). Never errors: a line without quotes yields whatever the
/// arithmetic produces, and callers treat unrecognizable field lists as
/// lines to skip.
pub fn split_quoted_line(line: &str, sep: &str) -> Vec<String> {
    let first = line.find('"').unwrap_or(0);
    let last = line.rfind('"').unwrap_or(0);
    let start = (first + 1).min(line.len());
    let mut end = (start + last.saturating_sub(1)).min(line.len());
    // Quote positions sit on ASCII bytes, so `start` is a char boundary;
    // `end` may not be if the payload holds multibyte text near the end.
    while !line.is_char_boundary(end) {
        end -= 1;
    }
    line[start..end].split(sep).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_a_wrapped_line() {
        let fields = split_quoted_line("\"Aruba\",\"ABW\",\"CO2 emissions (kt)\",\"EN.ATM.CO2E.KT\",\"204.62\"", SEP);
        assert_eq!(
            fields,
            vec!["Aruba", "ABW", "CO2 emissions (kt)", "EN.ATM.CO2E.KT", "204.62"]
        );
    }

    #[test]
    fn empty_cells_survive_as_empty_fields() {
        let fields = split_quoted_line("\"Aruba\",\"ABW\",\"X\",\"X.CODE\",\"\",\"12\"", SEP);
        assert_eq!(fields, vec!["Aruba", "ABW", "X", "X.CODE", "", "12"]);
    }

    #[test]
    fn line_without_quotes_is_tolerated() {
        // No quotes at all: both finds fall back to 0 and the slice is
        // whatever the arithmetic lands on. Must not panic.
        let fields = split_quoted_line("Data Source,World Development Indicators", SEP);
        assert_eq!(fields.len(), 1);
    }

    #[test]
    fn blank_line_yields_one_empty_field() {
        assert_eq!(split_quoted_line("", SEP), vec![""]);
    }

    #[test]
    fn leading_junk_quirk_is_preserved() {
        // First quote at index 1, last at index 8. The payload length is
        // taken as last - 1 = 7 starting at index 2, which runs one past
        // the closing quote. Pinned so nobody "fixes" it silently.
        let fields = split_quoted_line(" \"a\",\"b\"", SEP);
        assert_eq!(fields, vec!["a", "b\""]);
    }
}
