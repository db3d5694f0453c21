//! Display Formatting
//!
//! Currency, dates and sizes as shown in tables and cards.

use chrono::{DateTime, NaiveDate};

/// `1234567` -> `1,234,567`
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Philippine peso with two decimals, e.g. `₱1,234.50`
pub fn peso(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let text = format!("₱{}.{:02}", thousands(cents / 100), cents % 100);
    if negative {
        format!("-{}", text)
    } else {
        text
    }
}

/// `2024-01-05` -> `Jan 5, 2024`; anything unparseable is shown as-is
pub fn date(iso: &str) -> String {
    let head = iso.get(..10).unwrap_or(iso);
    match NaiveDate::parse_from_str(head, "%Y-%m-%d") {
        Ok(d) => d.format("%b %-d, %Y").to_string(),
        Err(_) => iso.to_string(),
    }
}

/// RFC 3339 timestamp -> `Jan 5, 2024 14:03`
pub fn datetime(rfc3339: &str) -> String {
    match DateTime::parse_from_rfc3339(rfc3339) {
        Ok(dt) => dt.format("%b %-d, %Y %H:%M").to_string(),
        Err(_) => date(rfc3339),
    }
}

pub fn file_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    let b = bytes as f64;
    if b < KB {
        format!("{} B", bytes)
    } else if b < KB * KB {
        format!("{:.1} KB", b / KB)
    } else if b < KB * KB * KB {
        format!("{:.1} MB", b / (KB * KB))
    } else {
        format!("{:.2} GB", b / (KB * KB * KB))
    }
}

/// Today's local date as `YYYY-MM-DD` (browser clock)
pub fn today_iso() -> String {
    let now = js_sys::Date::new_0();
    format!(
        "{:04}-{:02}-{:02}",
        now.get_full_year(),
        now.get_month() + 1,
        now.get_date()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1000), "1,000");
        assert_eq!(thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_peso() {
        assert_eq!(peso(1234.5), "₱1,234.50");
        assert_eq!(peso(0.0), "₱0.00");
        assert_eq!(peso(-42.0), "-₱42.00");
    }

    #[test]
    fn test_dates() {
        assert_eq!(date("2024-01-05"), "Jan 5, 2024");
        assert_eq!(date("2024-01-05T08:00:00Z"), "Jan 5, 2024");
        assert_eq!(date("not a date"), "not a date");
        assert_eq!(datetime("2024-03-09T14:03:00+08:00"), "Mar 9, 2024 14:03");
    }

    #[test]
    fn test_file_size() {
        assert_eq!(file_size(512), "512 B");
        assert_eq!(file_size(1536), "1.5 KB");
        assert_eq!(file_size(5 * 1024 * 1024), "5.0 MB");
    }
}
