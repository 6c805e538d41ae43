use chrono::{DateTime, FixedOffset};

/// `YYYY-MM-DD HH:MM:SS`, used by the search API.
pub const API_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// `YYYY/MM/DD HH:MM`, used by chapter rows on index pages.
pub const INDEX_FORMAT: &str = "%Y/%m/%d %H:%M";

/// Catalog timestamps carry no offset; they are always read as `+09:00`.
pub fn parse(text: &str, format: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    DateTime::parse_from_str(&format!("{} +0900", text.trim()), &format!("{format} %z"))
}

pub fn parse_api(text: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    parse(text, API_FORMAT)
}

pub fn parse_index(text: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    parse(text, INDEX_FORMAT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_format_is_read_as_jst() {
        let parsed = parse_index("2019/08/16 08:35").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2019-08-16T08:35:00+09:00");
        assert_eq!(parsed.timestamp(), 1_565_912_100);
    }

    #[test]
    fn api_format_keeps_seconds() {
        let parsed = parse_api("2019-05-06 18:39:05").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2019-05-06T18:39:05+09:00");
    }

    #[test]
    fn rejects_the_other_format() {
        assert!(parse_index("2019-08-16 08:35:52").is_err());
        assert!(parse_api("2019/08/16 08:35").is_err());
        assert!(parse_index("").is_err());
    }
}
