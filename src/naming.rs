//! Project folder naming convention.
//!
//! Project folders may carry an optional numeric prefix that controls their
//! order in the portfolio: `010-Night-Walks/` sorts before `020-Tidal/`.
//! Folders without a prefix sort after all numbered ones, by name.
//!
//! The name part doubles as a fallback title for projects whose
//! `project.json` has no `title`: dashes become spaces, so
//! `010-Night-Walks` → "Night Walks".

/// Result of parsing a folder name like `010-Night-Walks`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedName {
    /// Number prefix if present.
    pub number: Option<u32>,
    /// Name with dashes converted to spaces. Empty if number-only.
    pub display_title: String,
}

pub fn parse_entry_name(name: &str) -> ParsedName {
    if let Some((prefix, rest)) = name.split_once('-')
        && let Ok(number) = prefix.parse::<u32>()
    {
        return ParsedName {
            number: Some(number),
            display_title: rest.replace('-', " "),
        };
    }
    if let Ok(number) = name.parse::<u32>() {
        return ParsedName {
            number: Some(number),
            display_title: String::new(),
        };
    }
    ParsedName {
        number: None,
        display_title: name.replace('-', " "),
    }
}

/// Sort key for project folders: numbered first (by number), then by name.
pub fn sort_key(name: &str) -> (u32, String) {
    (
        parse_entry_name(name).number.unwrap_or(u32::MAX),
        name.to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_multi_word() {
        let p = parse_entry_name("010-Night-Walks");
        assert_eq!(p.number, Some(10));
        assert_eq!(p.display_title, "Night Walks");
    }

    #[test]
    fn number_only() {
        let p = parse_entry_name("007");
        assert_eq!(p.number, Some(7));
        assert_eq!(p.display_title, "");
    }

    #[test]
    fn unnumbered_keeps_whole_name() {
        let p = parse_entry_name("tidal-studies");
        assert_eq!(p.number, None);
        assert_eq!(p.display_title, "tidal studies");
    }

    #[test]
    fn sort_key_orders_numbered_before_unnumbered() {
        let mut names = vec!["zeta", "020-Tidal", "alpha", "010-Night-Walks"];
        names.sort_by_key(|n| sort_key(n));
        assert_eq!(names, vec!["010-Night-Walks", "020-Tidal", "alpha", "zeta"]);
    }
}
