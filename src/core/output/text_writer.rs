//! Plain-text rendering of an analysis report.

use std::fmt;

use crate::core::report::Analysis;
use crate::core::stats::ActivityHeatmap;

/// Shown in place of the emoji table when the selection has no emoji.
pub const NO_EMOJI_NOTICE: &str = "No emoji data available for the selected sender.";

/// Renders `analysis` as human-readable tables.
///
/// ```
/// use chatlens::config::AnalysisConfig;
/// use chatlens::core::filter::SenderFilter;
/// use chatlens::core::output::to_text;
/// use chatlens::core::report::analyze;
/// use chatlens::parse;
///
/// let records = parse("1/1/24, 9:00 am - Alice: Hello\n");
/// let analysis = analyze(&records, &SenderFilter::All, &AnalysisConfig::default());
/// assert!(to_text(&analysis).contains("Total Messages: 1"));
/// ```
pub fn to_text(analysis: &Analysis) -> String {
    analysis.to_string()
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Chat analysis for: {}", self.sender)?;
        writeln!(f)?;

        section(f, "Top Statistics")?;
        writeln!(f, "Total Messages: {}", self.counts.messages)?;
        writeln!(f, "Total Words:    {}", self.counts.words)?;
        writeln!(f, "Media Shared:   {}", self.counts.media)?;
        writeln!(f, "Links Shared:   {}", self.counts.links)?;
        writeln!(f)?;

        section(f, "Monthly Timeline")?;
        for bucket in &self.monthly_timeline {
            writeln!(f, "{:<16} {:>6}", bucket.label, bucket.count)?;
        }
        writeln!(f)?;

        section(f, "Daily Timeline")?;
        for bucket in &self.daily_timeline {
            writeln!(f, "{:<16} {:>6}", bucket.date.to_string(), bucket.count)?;
        }
        writeln!(f)?;

        section(f, "Most Busy Day")?;
        for row in &self.busiest_weekdays {
            writeln!(f, "{:<16} {:>6}", row.label, row.count)?;
        }
        writeln!(f)?;

        section(f, "Most Busy Month")?;
        for row in &self.busiest_months {
            writeln!(f, "{:<16} {:>6}", row.label, row.count)?;
        }
        writeln!(f)?;

        section(f, "Weekly Activity Map")?;
        write_heatmap(f, &self.heatmap)?;
        writeln!(f)?;

        if let Some(activity) = &self.most_active_senders {
            section(f, "Most Busy Users")?;
            for row in &activity.top {
                writeln!(f, "{:<24} {:>6}", row.sender, row.count)?;
            }
            writeln!(f)?;
            writeln!(f, "{:<24} {:>7}", "Name", "Percent")?;
            for share in &activity.shares {
                writeln!(f, "{:<24} {:>7.2}", share.sender, share.percent)?;
            }
            writeln!(f)?;
        }

        section(f, "Most Common Words")?;
        for row in &self.common_words {
            writeln!(f, "{:<24} {:>6}", row.word, row.count)?;
        }
        writeln!(f)?;

        section(f, "Emoji Analysis")?;
        if self.emojis.is_empty() {
            writeln!(f, "{NO_EMOJI_NOTICE}")?;
        } else {
            for row in &self.emojis {
                writeln!(f, "{:<4} {:>6}", row.emoji, row.count)?;
            }
        }

        Ok(())
    }
}

fn section(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f, "{title}")?;
    writeln!(f, "{}", "-".repeat(title.len()))
}

// Hours as column headers (0..23); the bucket labels are too wide for a grid.
fn write_heatmap(f: &mut fmt::Formatter<'_>, heatmap: &ActivityHeatmap) -> fmt::Result {
    write!(f, "{:<10}", "")?;
    for hour in 0..heatmap.columns.len() {
        write!(f, "{hour:>4}")?;
    }
    writeln!(f)?;

    for (name, cells) in heatmap.rows.iter().zip(&heatmap.cells) {
        write!(f, "{name:<10}")?;
        for count in cells {
            write!(f, "{count:>4}")?;
        }
        writeln!(f)?;
    }
    Ok(())
}
