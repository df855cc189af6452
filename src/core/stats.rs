//! Descriptive statistics over a record set.
//!
//! Every function is pure: it reads the [`RecordSet`], narrows it with the
//! given [`SenderFilter`], and returns an owned result. An empty selection
//! gives empty tables and zero counts.
//!
//! | Function | Result |
//! |----------|--------|
//! | [`basic_counts`] | messages, words, media, links |
//! | [`monthly_timeline`] | messages per calendar month |
//! | [`daily_timeline`] | messages per calendar day |
//! | [`busiest_weekday`] | messages per day name, busiest first |
//! | [`busiest_month`] | messages per month name, busiest first |
//! | [`activity_heatmap`] | weekday × hour grid |
//! | [`most_active_senders`] | top senders and everyone's share |
//! | [`common_words`] | most frequent non-stop words |
//! | [`emoji_frequency`] | emoji glyphs, most frequent first |
//!
//! # Example
//!
//! ```
//! use chatlens::config::AnalysisConfig;
//! use chatlens::core::filter::SenderFilter;
//! use chatlens::core::stats::basic_counts;
//! use chatlens::parse;
//!
//! let records = parse(
//!     "12/1/23, 10:00 am - Alice: Hello there\n12/1/23, 10:01 am - Bob: <Media omitted>\n",
//! );
//! let counts = basic_counts(&SenderFilter::All, &records, &AnalysisConfig::default());
//!
//! assert_eq!(counts.messages, 2);
//! assert_eq!(counts.words, 2);
//! assert_eq!(counts.media, 1);
//! assert_eq!(counts.links, 0);
//! ```

use std::collections::BTreeMap;

use chrono::{NaiveDate, Weekday};
use serde::Serialize;

use crate::config::AnalysisConfig;
use crate::core::filter::SenderFilter;
use crate::core::models::RecordSet;
use crate::core::tally::Tally;
use crate::core::text::{
    find_emojis, find_links, is_link, is_stop_word, normalize_token, strip_punctuation, word_count,
};
use crate::message::{HourPeriod, Sender, day_name, month_name};

/// Headline numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BasicCounts {
    /// Messages selected by the filter
    pub messages: usize,
    /// Whitespace-separated tokens in non-media messages
    pub words: usize,
    /// Messages whose body is a media placeholder
    pub media: usize,
    /// URLs found in message bodies
    pub links: usize,
}

/// Message count for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyBucket {
    pub year: i32,
    pub month_num: u32,
    /// `"January 2024"`
    pub label: String,
    pub count: usize,
}

/// Message count for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyBucket {
    pub date: NaiveDate,
    pub count: usize,
}

/// A named count, e.g. a day name or month name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

/// Message count for one sender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SenderCount {
    pub sender: Sender,
    pub count: usize,
}

/// A sender's share of all messages, in percent rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SenderShare {
    pub sender: Sender,
    pub percent: f64,
}

/// Busiest senders of the whole chat.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SenderActivity {
    /// The first N senders by message count
    pub top: Vec<SenderCount>,
    /// Every sender with their share of all messages
    pub shares: Vec<SenderShare>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmojiCount {
    pub emoji: String,
    pub count: usize,
}

/// Messages per weekday and hour bucket.
///
/// Rows run Monday to Sunday, columns from `00-1` to `23-00`. Every cell is
/// present; combinations without messages are zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityHeatmap {
    /// Row labels, `"Monday"` .. `"Sunday"`
    pub rows: Vec<&'static str>,
    /// Column labels, one per [`HourPeriod`]
    pub columns: Vec<String>,
    /// `cells[row][column]`
    pub cells: Vec<Vec<usize>>,
}

impl Default for ActivityHeatmap {
    fn default() -> Self {
        Self {
            rows: WEEK.iter().map(|&d| day_name(d)).collect(),
            columns: HourPeriod::all().map(HourPeriod::label).collect(),
            cells: vec![vec![0; 24]; 7],
        }
    }
}

impl ActivityHeatmap {
    /// Count for one weekday and hour bucket.
    pub fn get(&self, weekday: Weekday, period: HourPeriod) -> usize {
        self.cells[weekday.num_days_from_monday() as usize][period.hour() as usize]
    }

    /// Sum over all cells.
    pub fn total(&self) -> usize {
        self.cells.iter().flatten().sum()
    }

    /// Returns the busiest cell as `(weekday, period, count)`, or `None` when
    /// the grid is all zeros. Ties go to the earliest weekday, then hour.
    pub fn peak(&self) -> Option<(Weekday, HourPeriod, usize)> {
        let mut best: Option<(Weekday, HourPeriod, usize)> = None;
        for (row, weekday) in WEEK.iter().enumerate() {
            for (col, &count) in self.cells[row].iter().enumerate() {
                if count > best.map_or(0, |b| b.2) {
                    best = Some((*weekday, HourPeriod::new(col as u32), count));
                }
            }
        }
        best
    }
}

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Message, word, media and link counts.
///
/// Media placeholder messages count as messages and media, but their
/// placeholder text is not counted as words.
pub fn basic_counts(filter: &SenderFilter, records: &RecordSet, config: &AnalysisConfig) -> BasicCounts {
    let mut counts = BasicCounts::default();

    for msg in filter.select(records) {
        counts.messages += 1;
        if config.is_media(&msg.body) {
            counts.media += 1;
        } else {
            counts.words += word_count(&msg.body);
        }
        counts.links += find_links(&msg.body).count();
    }

    counts
}

/// Messages per (year, month), in chronological order.
pub fn monthly_timeline(filter: &SenderFilter, records: &RecordSet) -> Vec<MonthlyBucket> {
    let mut months: BTreeMap<(i32, u32), usize> = BTreeMap::new();
    for msg in filter.select(records) {
        *months.entry((msg.year(), msg.month_num())).or_insert(0) += 1;
    }

    months
        .into_iter()
        .map(|((year, month_num), count)| MonthlyBucket {
            year,
            month_num,
            label: format!("{} {}", month_name(month_num), year),
            count,
        })
        .collect()
}

/// Messages per calendar day, in chronological order.
///
/// Days without messages are not listed.
pub fn daily_timeline(filter: &SenderFilter, records: &RecordSet) -> Vec<DailyBucket> {
    let mut days: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for msg in filter.select(records) {
        *days.entry(msg.date()).or_insert(0) += 1;
    }

    days.into_iter()
        .map(|(date, count)| DailyBucket { date, count })
        .collect()
}

/// Messages per day name, busiest first.
pub fn busiest_weekday(filter: &SenderFilter, records: &RecordSet) -> Vec<LabelCount> {
    ranked_labels(filter.select(records).map(|m| m.day_name()))
}

/// Messages per month name (all years together), busiest first.
pub fn busiest_month(filter: &SenderFilter, records: &RecordSet) -> Vec<LabelCount> {
    ranked_labels(filter.select(records).map(|m| m.month_name()))
}

fn ranked_labels<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<LabelCount> {
    labels
        .collect::<Tally<&str>>()
        .into_ranked()
        .into_iter()
        .map(|(label, count)| LabelCount {
            label: label.to_string(),
            count,
        })
        .collect()
}

/// Weekday × hour bucket grid.
pub fn activity_heatmap(filter: &SenderFilter, records: &RecordSet) -> ActivityHeatmap {
    let mut heatmap = ActivityHeatmap::default();
    for msg in filter.select(records) {
        let row = msg.weekday().num_days_from_monday() as usize;
        let col = msg.period().hour() as usize;
        heatmap.cells[row][col] += 1;
    }
    heatmap
}

/// Every sender with their message count, busiest first.
///
/// System notices are included under [`Sender::System`], so the counts sum
/// to the number of records.
pub fn sender_counts(records: &RecordSet) -> Vec<SenderCount> {
    records
        .iter()
        .map(|m| &m.sender)
        .collect::<Tally<&Sender>>()
        .into_ranked()
        .into_iter()
        .map(|(sender, count)| SenderCount {
            sender: sender.clone(),
            count,
        })
        .collect()
}

/// The `top_n` busiest senders, plus every sender's share of all messages.
///
/// Only meaningful for the whole chat, so it takes no sender filter.
pub fn most_active_senders(records: &RecordSet, top_n: usize) -> SenderActivity {
    let counts = sender_counts(records);
    let total = records.len();

    let shares = counts
        .iter()
        .map(|c| SenderShare {
            sender: c.sender.clone(),
            percent: round2(c.count as f64 / total as f64 * 100.0),
        })
        .collect();

    SenderActivity {
        top: counts.into_iter().take(top_n).collect(),
        shares,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Most frequent words, excluding stop words, links, media placeholders and
/// system notices.
///
/// Tokens are lower-cased and stripped of leading and trailing punctuation.
pub fn common_words(filter: &SenderFilter, records: &RecordSet, config: &AnalysisConfig) -> Vec<WordCount> {
    let mut tally: Tally<String> = Tally::new();

    for msg in filter.select(records) {
        if msg.sender.is_system() || config.is_media(&msg.body) {
            continue;
        }
        for token in msg.body.split_whitespace() {
            if is_link(strip_punctuation(token)) {
                continue;
            }
            let Some(word) = normalize_token(token) else {
                continue;
            };
            if is_stop_word(&word) || config.is_extra_stop_word(&word) {
                continue;
            }
            tally.add(word);
        }
    }

    tally
        .into_ranked()
        .into_iter()
        .take(config.top_words)
        .map(|(word, count)| WordCount { word, count })
        .collect()
}

/// Emoji glyphs by frequency, most frequent first.
///
/// Empty when the selection contains no emoji.
pub fn emoji_frequency(filter: &SenderFilter, records: &RecordSet) -> Vec<EmojiCount> {
    filter
        .select(records)
        .flat_map(|m| find_emojis(&m.body))
        .collect::<Tally<&str>>()
        .into_ranked()
        .into_iter()
        .map(|(emoji, count)| EmojiCount {
            emoji: emoji.to_string(),
            count,
        })
        .collect()
}
