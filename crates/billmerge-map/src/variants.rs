//! Synonym matching over a list of column names.
//!
//! Both functions are pure: they look only at the synonym list and the
//! column names they are given, never at table contents.

/// Returns every column that equals, or contains, one of `synonyms`.
///
/// Comparison is case-insensitive and ignores surrounding whitespace on the
/// column name. Results keep the order of `columns`, without repeats.
pub fn match_all<'a, S: AsRef<str>>(synonyms: &[&str], columns: &'a [S]) -> Vec<&'a str> {
    let patterns: Vec<String> = synonyms.iter().map(|s| s.to_uppercase()).collect();
    let mut matched: Vec<&'a str> = Vec::new();
    for column in columns {
        let column = column.as_ref();
        if matched.contains(&column) {
            continue;
        }
        let key = column.trim().to_uppercase();
        if patterns
            .iter()
            .any(|pattern| key == *pattern || key.contains(pattern.as_str()))
        {
            matched.push(column);
        }
    }
    matched
}

/// Returns the first synonym, in priority order, present verbatim in
/// `columns`.
pub fn match_first<'a, S: AsRef<str>>(synonyms: &[&str], columns: &'a [S]) -> Option<&'a str> {
    synonyms.iter().find_map(|synonym| {
        columns.iter().find_map(|column| {
            let column: &'a str = column.as_ref();
            (column == *synonym).then_some(column)
        })
    })
}
