//! One-shot analysis of a record set.

use serde::Serialize;
use tracing::info;

use crate::config::AnalysisConfig;
use crate::core::filter::SenderFilter;
use crate::core::models::RecordSet;
use crate::core::stats::{
    ActivityHeatmap, BasicCounts, DailyBucket, EmojiCount, LabelCount, MonthlyBucket,
    SenderActivity, WordCount, activity_heatmap, basic_counts, busiest_month, busiest_weekday,
    common_words, daily_timeline, emoji_frequency, monthly_timeline, most_active_senders,
};

/// Every statistic for one sender selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    /// Selection the numbers were computed for, `"all"` or a sender name
    pub sender: SenderFilter,
    pub counts: BasicCounts,
    pub monthly_timeline: Vec<MonthlyBucket>,
    pub daily_timeline: Vec<DailyBucket>,
    pub busiest_weekdays: Vec<LabelCount>,
    pub busiest_months: Vec<LabelCount>,
    pub heatmap: ActivityHeatmap,
    /// Only present for [`SenderFilter::All`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_active_senders: Option<SenderActivity>,
    pub common_words: Vec<WordCount>,
    pub emojis: Vec<EmojiCount>,
}

/// Runs every statistic over `records` for `filter`.
///
/// # Example
///
/// ```
/// use chatlens::config::AnalysisConfig;
/// use chatlens::core::filter::SenderFilter;
/// use chatlens::core::report::analyze;
/// use chatlens::parse;
///
/// let records = parse("1/1/24, 9:00 am - Alice: Hello\n1/1/24, 9:01 am - Bob: Hi\n");
///
/// let all = analyze(&records, &SenderFilter::All, &AnalysisConfig::default());
/// assert_eq!(all.counts.messages, 2);
/// assert!(all.most_active_senders.is_some());
///
/// let bob = analyze(&records, &SenderFilter::only("Bob"), &AnalysisConfig::default());
/// assert_eq!(bob.counts.messages, 1);
/// assert!(bob.most_active_senders.is_none());
/// ```
pub fn analyze(records: &RecordSet, filter: &SenderFilter, config: &AnalysisConfig) -> Analysis {
    let analysis = Analysis {
        sender: filter.clone(),
        counts: basic_counts(filter, records, config),
        monthly_timeline: monthly_timeline(filter, records),
        daily_timeline: daily_timeline(filter, records),
        busiest_weekdays: busiest_weekday(filter, records),
        busiest_months: busiest_month(filter, records),
        heatmap: activity_heatmap(filter, records),
        most_active_senders: filter
            .is_all()
            .then(|| most_active_senders(records, config.top_senders)),
        common_words: common_words(filter, records, config),
        emojis: emoji_frequency(filter, records),
    };

    info!(
        sender = %filter,
        messages = analysis.counts.messages,
        words = analysis.counts.words,
        "analysis complete"
    );

    analysis
}
