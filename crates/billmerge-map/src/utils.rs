//! Column name normalization.

/// Normalizes a raw header: strips a UTF-8 BOM, trims, uppercases.
///
/// # Examples
///
/// ```
/// use billmerge_map::normalize_column_name;
///
/// assert_eq!(normalize_column_name("  Addr1 "), "ADDR1");
/// assert_eq!(normalize_column_name("\u{feff}CustomerNumber"), "CUSTOMERNUMBER");
/// ```
pub fn normalize_column_name(raw: &str) -> String {
    raw.trim_matches(|ch: char| ch.is_whitespace() || ch == '\u{feff}')
        .to_uppercase()
}

/// Normalizes every header of a file, keeping the input order.
pub fn normalize_column_names<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    raw.iter()
        .map(|name| normalize_column_name(name.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercases_and_trims() {
        assert_eq!(normalize_column_name(" billingAddress2\t"), "BILLINGADDRESS2");
    }

    #[test]
    fn keeps_inner_separators() {
        assert_eq!(normalize_column_name("street_dir"), "STREET_DIR");
        assert_eq!(normalize_column_name("Street Name"), "STREET NAME");
    }

    #[test]
    fn strips_bom_before_trimming() {
        assert_eq!(normalize_column_name("\u{feff} addr1"), "ADDR1");
    }
}
