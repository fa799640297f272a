/// Single-pass delimited-text scanner with RFC 4180 quoting.
///
/// A doubled quote inside a quoted field is a literal quote; the delimiter
/// and line breaks are ordinary characters while quoted. Outside quotes,
/// `\r` is dropped so `\r\n` and `\n` line endings both work, and a final
/// field without a trailing newline still closes the last row.
///
/// Parsing is total: malformed input (an unterminated quote, rows of uneven
/// width) produces a ragged table for downstream normalization, never an
/// error.
pub fn parse(text: &str, delimiter: char) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(ch);
            }
        } else if ch == '"' {
            in_quotes = true;
        } else if ch == delimiter {
            row.push(std::mem::take(&mut field));
        } else if ch == '\n' {
            row.push(std::mem::take(&mut field));
            rows.push(std::mem::take(&mut row));
        } else if ch != '\r' {
            field.push(ch);
        }
    }

    // Close the trailing row unless the text ended on a line break.
    row.push(field);
    if row.len() > 1 || !row[0].is_empty() {
        rows.push(row);
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_rows_split_on_delimiter_and_newline() {
        let rows = parse("a,b,c\nd,e,f\n", ',');
        assert_eq!(rows, vec![vec!["a", "b", "c"], vec!["d", "e", "f"]]);
    }

    #[test]
    fn quoted_fields_keep_delimiters_and_newlines() {
        let rows = parse("\"a,b\",c\n\"line1\nline2\",d\n", ',');
        assert_eq!(rows, vec![vec!["a,b", "c"], vec!["line1\nline2", "d"]]);
    }

    #[test]
    fn doubled_quote_is_a_literal_quote() {
        let rows = parse("\"say \"\"hi\"\"\",x\n", ',');
        assert_eq!(rows, vec![vec!["say \"hi\"", "x"]]);
    }

    #[test]
    fn crlf_line_endings_are_supported() {
        let rows = parse("a,b\r\nc,d\r\n", ',');
        assert_eq!(rows, vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn missing_final_newline_still_closes_the_last_row() {
        let rows = parse("a,b\nc,d", ',');
        assert_eq!(rows, vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn trailing_newline_does_not_add_a_phantom_row() {
        let rows = parse("a,b\n", ',');
        assert_eq!(rows, vec![vec!["a", "b"]]);
    }

    #[test]
    fn empty_input_parses_to_no_rows() {
        assert!(parse("", ',').is_empty());
    }

    #[test]
    fn tab_delimited_input() {
        let rows = parse("a\tb\nc\td", '\t');
        assert_eq!(rows, vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn ragged_rows_pass_through_unchanged() {
        let rows = parse("a,b,c\nd\ne,f\n", ',');
        assert_eq!(rows, vec![vec!["a", "b", "c"], vec!["d"], vec!["e", "f"]]);
    }

    #[test]
    fn unterminated_quote_consumes_the_rest_of_the_text() {
        let rows = parse("\"open,never closed\nstill inside", ',');
        assert_eq!(rows, vec![vec!["open,never closed\nstill inside"]]);
    }

    #[test]
    fn trailing_empty_field_before_newline_is_kept() {
        let rows = parse("a,\nb,c\n", ',');
        assert_eq!(rows, vec![vec!["a", ""], vec!["b", "c"]]);
    }
}
