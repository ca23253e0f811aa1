//! Utility functions for newsdesk

use crate::markdown::{Block, plain_text};

/// Maximum excerpt length in characters, before the ellipsis.
const EXCERPT_CHARS: usize = 160;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Formats ISO date as human readable text
///
/// Converts `YYYY-MM-DD` (optionally followed by a time part, as TOML
/// datetimes are) into "March 1, 2024". Anything else is returned verbatim
/// so hand written dates still display.
///
/// # Arguments
///
/// * `date`: Date string from article metadata
///
/// # Returns
///
/// Display string for the date
pub fn format_date(date: &str) -> String {
    parse_ymd(date)
        .map(|(year, month, day)| format!("{} {}, {}", MONTHS[month - 1], day, year))
        .unwrap_or_else(|| date.to_string())
}

fn parse_ymd(date: &str) -> Option<(u32, usize, u32)> {
    let ymd = date.get(..10)?;
    if date.len() > 10 && !date[10..].starts_with(['T', 't', ' ']) {
        return None;
    }

    let mut parts = ymd.split('-');
    let (year, month, day) = (parts.next()?, parts.next()?, parts.next()?);
    if year.len() != 4 || month.len() != 2 || day.len() != 2 {
        return None;
    }

    let year: u32 = year.parse().ok()?;
    let month: usize = month.parse().ok()?;
    let day: u32 = day.parse().ok()?;
    if !(1..=12).contains(&month) || day < 1 || day > days_in_month(year, month) {
        return None;
    }

    Some((year, month, day))
}

fn days_in_month(year: u32, month: usize) -> u32 {
    match month {
        2 if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Extracts plain text teaser from rendered blocks
///
/// Uses the first paragraph, falling back to the first list item, with bold
/// markers removed. Text longer than the excerpt limit is cut at the last
/// word boundary and suffixed with an ellipsis.
///
/// # Returns
///
/// Excerpt text, or `None` when the blocks hold no body text
pub fn excerpt(blocks: &[Block]) -> Option<String> {
    let text = blocks
        .iter()
        .find_map(|block| match block {
            Block::Paragraph { text } => Some(plain_text(text)),
            _ => None,
        })
        .or_else(|| {
            blocks.iter().find_map(|block| match block {
                Block::List { items } => items.first().map(|item| plain_text(item)),
                _ => None,
            })
        })?;

    Some(truncate_words(&text, EXCERPT_CHARS))
}

fn truncate_words(text: &str, max_chars: usize) -> String {
    let Some((cut, _)) = text.char_indices().nth(max_chars) else {
        return text.to_string();
    };

    let head = &text[..cut];
    let head = match head.rfind(char::is_whitespace) {
        Some(space) if space > 0 => &head[..space],
        _ => head,
    };
    format!("{}…", head.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::render;

    #[test]
    fn test_format_date_iso() {
        assert_eq!(format_date("2024-03-01"), "March 1, 2024");
        assert_eq!(format_date("1999-12-31"), "December 31, 1999");
    }

    #[test]
    fn test_format_date_with_time() {
        assert_eq!(format_date("2024-07-04T10:00:00Z"), "July 4, 2024");
    }

    #[test]
    fn test_format_date_passthrough() {
        assert_eq!(format_date("Spring 2024"), "Spring 2024");
        assert_eq!(format_date("2024-13-01"), "2024-13-01");
        assert_eq!(format_date("2024-1-1"), "2024-1-1");
        assert_eq!(format_date("2024-03-01extra"), "2024-03-01extra");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn test_format_date_rejects_impossible_days() {
        assert_eq!(format_date("2024-02-31"), "2024-02-31");
        assert_eq!(format_date("2023-02-29"), "2023-02-29");
        assert_eq!(format_date("2024-04-31"), "2024-04-31");
        assert_eq!(format_date("1900-02-29"), "1900-02-29");
    }

    #[test]
    fn test_format_date_leap_day() {
        assert_eq!(format_date("2024-02-29"), "February 29, 2024");
        assert_eq!(format_date("2000-02-29"), "February 29, 2000");
    }

    #[test]
    fn test_excerpt_first_paragraph() {
        // Arrange
        let blocks = render("# Title\n\nOur **new** office opens.\n\nSecond paragraph.");

        // Act
        let text = excerpt(&blocks);

        // Assert
        assert_eq!(text.as_deref(), Some("Our new office opens."));
    }

    #[test]
    fn test_excerpt_falls_back_to_list() {
        // Arrange
        let blocks = render("## Highlights\n- First item\n- Second item");

        // Act
        let text = excerpt(&blocks);

        // Assert
        assert_eq!(text.as_deref(), Some("First item"));
    }

    #[test]
    fn test_excerpt_none_without_text() {
        assert!(excerpt(&render("# Only heading\n---")).is_none());
    }

    #[test]
    fn test_excerpt_truncates_at_word_boundary() {
        // Arrange
        let long = "word ".repeat(50);
        let blocks = render(&long);

        // Act
        let text = excerpt(&blocks).expect("Should produce excerpt");

        // Assert
        assert!(text.ends_with("word…"), "Got: {}", text);
        assert!(text.chars().count() <= EXCERPT_CHARS + 1);
    }

    #[test]
    fn test_truncate_words_short_text_unchanged() {
        assert_eq!(truncate_words("short", 10), "short");
    }

    #[test]
    fn test_truncate_words_multibyte() {
        // Arrange: cut index must land on a char boundary
        let text = "ééééé ééééé";

        // Act
        let result = truncate_words(text, 8);

        // Assert
        assert_eq!(result, "ééééé…");
    }
}
