/// Date formatting and parsing for purchase dates
///
/// Purchase dates are calendar dates, `YYYY-MM-DD` on the wire and in
/// `<input type="date">`.
use chrono::NaiveDate;

/// Column header form: "05/03"
pub fn format_day_month(date: NaiveDate) -> String {
    date.format("%d/%m").to_string()
}

/// Card form: "05/03/2024"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Header text for an optional column date, "—" when the column is empty
pub fn format_header(date: Option<NaiveDate>) -> String {
    date.map(format_day_month)
        .unwrap_or_else(|| "—".to_string())
}

/// Value of a date input; empty or malformed text means "no date"
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Inverse of [`parse_input_date`]
pub fn to_input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_format_day_month() {
        assert_eq!(format_day_month(d(2024, 3, 5)), "05/03");
        assert_eq!(format_day_month(d(2024, 12, 31)), "31/12");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(d(2024, 1, 15)), "15/01/2024");
    }

    #[test]
    fn test_format_header() {
        assert_eq!(format_header(Some(d(2024, 2, 10))), "10/02");
        assert_eq!(format_header(None), "—");
    }

    #[test]
    fn test_input_round_trip() {
        assert_eq!(parse_input_date("2024-03-05"), Some(d(2024, 3, 5)));
        assert_eq!(to_input_value(Some(d(2024, 3, 5))), "2024-03-05");
        assert_eq!(to_input_value(None), "");
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(parse_input_date(""), None);
        assert_eq!(parse_input_date("05/03/2024"), None);
        assert_eq!(parse_input_date("2024-02-30"), None);
    }
}
