//! WhatsApp export prefix handling.
//!
//! Every message in an export starts at the beginning of a line with a
//! timestamp prefix. This module knows the prefix patterns for each
//! [`ExportLayout`], detects which layout a file uses, decides the day/month
//! order, and turns the captured date and time strings into timestamps.

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

use crate::config::{DateOrder, ExportLayout};

/// Date: `1/2/23`, `01.02.2023`, `1-2-23`.
const DATE: &str = r"(\d{1,2}[/.\-]\d{1,2}[/.\-]\d{2,4})";
/// Time: `9:05`, `21:05:33`.
const TIME: &str = r"(\d{1,2}:\d{2}(?::\d{2})?)";
/// Optional meridiem, possibly after a (narrow no-break) space.
const MERIDIEM: &str = r"(?:\s?([AaPp]\.?[Mm]\.?))?";

static ANDROID_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?m)^\x{{200E}}?{DATE},?\s{TIME}{MERIDIEM}\s[-–]\s"))
        .expect("android prefix pattern is valid")
});

static IOS_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?m)^\x{{200E}}?\[{DATE},?\s{TIME}{MERIDIEM}\]\s"))
        .expect("ios prefix pattern is valid")
});

/// Number of non-empty lines inspected by [`detect_layout`].
pub const DETECTION_SAMPLE: usize = 20;

impl ExportLayout {
    /// Returns the multi-line prefix regex for this layout.
    ///
    /// Capture groups: 1 = date, 2 = time, 3 = optional AM/PM marker.
    pub fn prefix_regex(self) -> &'static Regex {
        match self {
            ExportLayout::Android => &ANDROID_PREFIX,
            ExportLayout::Ios => &IOS_PREFIX,
        }
    }
}

/// A timestamp prefix located in the export text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefix<'a> {
    /// Byte offset where the prefix starts
    pub start: usize,
    /// Byte offset just past the prefix separator
    pub end: usize,
    /// Raw date string, e.g. `12/1/23`
    pub date: &'a str,
    /// Raw time string, e.g. `10:00`
    pub time: &'a str,
    /// AM/PM marker, if present
    pub meridiem: Option<&'a str>,
}

/// Finds every timestamp prefix of `layout` in `text`, in order.
pub fn find_prefixes(text: &str, layout: ExportLayout) -> Vec<Prefix<'_>> {
    layout
        .prefix_regex()
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(Prefix {
                start: whole.start(),
                end: whole.end(),
                date: caps.get(1)?.as_str(),
                time: caps.get(2)?.as_str(),
                meridiem: caps.get(3).map(|m| m.as_str()),
            })
        })
        .collect()
}

/// Auto-detects the export layout by analyzing sample lines.
///
/// Each layout scores one point per line whose start matches its prefix.
/// Returns `None` if no line matches any layout.
pub fn detect_layout(lines: &[&str]) -> Option<ExportLayout> {
    let layouts = ExportLayout::all();
    let mut scores = vec![0usize; layouts.len()];

    for line in lines {
        for (i, layout) in layouts.iter().enumerate() {
            if layout
                .prefix_regex()
                .find(line)
                .is_some_and(|m| m.start() == 0)
            {
                scores[i] += 1;
            }
        }
    }

    // Find the winner (highest score)
    let max_score = *scores.iter().max()?;
    if max_score == 0 {
        return None;
    }

    let winner_idx = scores.iter().position(|&s| s == max_score)?;
    Some(layouts[winner_idx])
}

/// Detects the layout from the first [`DETECTION_SAMPLE`] non-empty lines of
/// `text`.
pub fn detect_layout_in(text: &str) -> Option<ExportLayout> {
    let sample: Vec<&str> = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .take(DETECTION_SAMPLE)
        .collect();
    detect_layout(&sample)
}

/// Splits a date string into its three numeric components.
fn date_components(date: &str) -> Option<(u32, u32, u32)> {
    let mut parts = date.split(['/', '.', '-']).map(|p| p.parse::<u32>().ok());
    let first = parts.next()??;
    let second = parts.next()??;
    let year = parts.next()??;
    Some((first, second, year))
}

/// Resolves [`DateOrder::Auto`] by looking at every date in the export.
///
/// A first component above 12 can only be a day; a second component above 12
/// can only be a day too. The first unambiguous date wins. With no evidence
/// either way, month-first is assumed.
pub fn resolve_date_order<'a>(order: DateOrder, dates: impl IntoIterator<Item = &'a str>) -> DateOrder {
    if order != DateOrder::Auto {
        return order;
    }

    for date in dates {
        if let Some((first, second, _)) = date_components(date) {
            if first > 12 {
                return DateOrder::DayFirst;
            }
            if second > 12 {
                return DateOrder::MonthFirst;
            }
        }
    }

    DateOrder::MonthFirst
}

/// Returns chrono parse formats for a resolved date order.
fn date_parse_formats(order: DateOrder) -> &'static [&'static str] {
    match order {
        DateOrder::DayFirst => &[
            "%d/%m/%y, %I:%M:%S %p",
            "%d/%m/%y, %I:%M %p",
            "%d/%m/%Y, %I:%M:%S %p",
            "%d/%m/%Y, %I:%M %p",
            "%d/%m/%y, %H:%M:%S",
            "%d/%m/%y, %H:%M",
            "%d/%m/%Y, %H:%M:%S",
            "%d/%m/%Y, %H:%M",
        ],
        DateOrder::MonthFirst | DateOrder::Auto => &[
            "%m/%d/%y, %I:%M:%S %p",
            "%m/%d/%y, %I:%M %p",
            "%m/%d/%Y, %I:%M:%S %p",
            "%m/%d/%Y, %I:%M %p",
            "%m/%d/%y, %H:%M:%S",
            "%m/%d/%y, %H:%M",
            "%m/%d/%Y, %H:%M:%S",
            "%m/%d/%Y, %H:%M",
        ],
    }
}

/// Parses a timestamp from the captured date, time and meridiem strings.
///
/// Returns `None` when the combination is not a valid date-time, e.g. month
/// 13 or `25:00`.
pub fn parse_whatsapp_timestamp(
    date: &str,
    time: &str,
    meridiem: Option<&str>,
    order: DateOrder,
) -> Option<NaiveDateTime> {
    let date = date.replace(['.', '-'], "/");
    let datetime_str = match meridiem {
        Some(m) => {
            let m: String = m.chars().filter(|c| c.is_ascii_alphabetic()).collect();
            format!("{date}, {time} {}", m.to_ascii_uppercase())
        }
        None => format!("{date}, {time}"),
    };

    for parse_format in date_parse_formats(order) {
        if let Ok(naive) = NaiveDateTime::parse_from_str(&datetime_str, parse_format) {
            return Some(naive);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn test_detect_layout_android() {
        let lines = vec![
            "12/1/23, 10:00 am - Alice: Hello",
            "12/1/23, 10:01 am - Bob: Hi there",
        ];
        assert_eq!(detect_layout(&lines), Some(ExportLayout::Android));
    }

    #[test]
    fn test_detect_layout_android_24h() {
        let lines = vec![
            "26.10.2025, 20:40 - Alice: Hello",
            "26.10.2025, 20:41 - Bob: Hi there",
        ];
        assert_eq!(detect_layout(&lines), Some(ExportLayout::Android));
    }

    #[test]
    fn test_detect_layout_ios() {
        let lines = vec![
            "[1/15/24, 10:30:45 AM] Alice: Hello",
            "[1/15/24, 10:31:00 AM] Bob: Hi there",
        ];
        assert_eq!(detect_layout(&lines), Some(ExportLayout::Ios));
    }

    #[test]
    fn test_detect_layout_ios_with_lrm() {
        let lines = vec!["\u{200e}[1/15/24, 10:30:45 AM] Alice: \u{200e}image omitted"];
        assert_eq!(detect_layout(&lines), Some(ExportLayout::Ios));
    }

    #[test]
    fn test_detect_layout_none() {
        let lines = vec!["just some notes", "nothing timestamped"];
        assert_eq!(detect_layout(&lines), None);
        assert_eq!(detect_layout(&[]), None);
    }

    #[test]
    fn test_find_prefixes_only_at_line_start() {
        let text = "12/1/23, 10:00 am - Alice: see 12/1/23, 10:00 am - inline\n\
                    12/1/23, 10:05 am - Bob: ok\n";
        let prefixes = find_prefixes(text, ExportLayout::Android);
        assert_eq!(prefixes.len(), 2);
        assert_eq!(prefixes[0].start, 0);
        assert_eq!(prefixes[1].date, "12/1/23");
        assert_eq!(prefixes[1].time, "10:05");
        assert_eq!(prefixes[1].meridiem, Some("am"));
    }

    #[test]
    fn test_find_prefixes_narrow_nbsp_meridiem() {
        let text = "3/4/24, 9:15\u{202f}PM - Carol: night\n";
        let prefixes = find_prefixes(text, ExportLayout::Android);
        assert_eq!(prefixes.len(), 1);
        assert_eq!(prefixes[0].meridiem, Some("PM"));
    }

    #[test]
    fn test_resolve_date_order() {
        assert_eq!(
            resolve_date_order(DateOrder::Auto, ["1/2/23", "25/2/23"]),
            DateOrder::DayFirst
        );
        assert_eq!(
            resolve_date_order(DateOrder::Auto, ["1/2/23", "2/25/23"]),
            DateOrder::MonthFirst
        );
        assert_eq!(
            resolve_date_order(DateOrder::Auto, ["1/2/23"]),
            DateOrder::MonthFirst
        );
        assert_eq!(
            resolve_date_order(DateOrder::DayFirst, ["2/25/23"]),
            DateOrder::DayFirst
        );
    }

    #[test]
    fn test_parse_timestamp_month_first_meridiem() {
        let ts = parse_whatsapp_timestamp("12/1/23", "10:00", Some("pm"), DateOrder::MonthFirst)
            .unwrap();
        assert_eq!(ts.date(), NaiveDate::from_ymd_opt(2023, 12, 1).unwrap());
        assert_eq!(ts.hour(), 22);
    }

    #[test]
    fn test_parse_timestamp_midnight_and_noon() {
        let midnight =
            parse_whatsapp_timestamp("1/1/24", "12:30", Some("AM"), DateOrder::MonthFirst)
                .unwrap();
        assert_eq!(midnight.hour(), 0);
        let noon =
            parse_whatsapp_timestamp("1/1/24", "12:30", Some("p.m."), DateOrder::MonthFirst)
                .unwrap();
        assert_eq!(noon.hour(), 12);
    }

    #[test]
    fn test_parse_timestamp_day_first_four_digit_year() {
        let ts =
            parse_whatsapp_timestamp("26.10.2025", "20:40", None, DateOrder::DayFirst).unwrap();
        assert_eq!(ts.date(), NaiveDate::from_ymd_opt(2025, 10, 26).unwrap());
        assert_eq!(ts.hour(), 20);
    }

    #[test]
    fn test_parse_timestamp_with_seconds() {
        let ts = parse_whatsapp_timestamp("1/15/24", "10:30:45", Some("AM"), DateOrder::MonthFirst)
            .unwrap();
        assert_eq!(ts.second(), 45);
    }

    #[test]
    fn test_parse_timestamp_invalid() {
        assert!(parse_whatsapp_timestamp("13/13/23", "10:00", None, DateOrder::MonthFirst).is_none());
        assert!(parse_whatsapp_timestamp("2/30/23", "10:00", None, DateOrder::MonthFirst).is_none());
        assert!(parse_whatsapp_timestamp("1/1/23", "25:00", None, DateOrder::MonthFirst).is_none());
    }
}
