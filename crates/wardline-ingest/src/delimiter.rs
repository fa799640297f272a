/// Pick the delimiter by voting over the first line only. Body lines may
/// legitimately contain any of the candidates inside quoted fields, so only
/// the header is sampled.
///
/// Most frequent of comma, tab, and semicolon wins; comma wins ties and
/// delimiter-free input.
pub fn detect_delimiter(text: &str) -> char {
    let first_line = text.split('\n').next().unwrap_or("");
    let mut commas = 0usize;
    let mut tabs = 0usize;
    let mut semicolons = 0usize;
    for ch in first_line.chars() {
        match ch {
            ',' => commas += 1,
            '\t' => tabs += 1,
            ';' => semicolons += 1,
            _ => {}
        }
    }
    if commas >= tabs && commas >= semicolons {
        ','
    } else if tabs >= semicolons {
        '\t'
    } else {
        ';'
    }
}
