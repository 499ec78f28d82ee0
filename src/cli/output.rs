//! Output formatting utilities

use crate::domain::{Entry, Journal, MoodBucket, Statistics};

const RULE_WIDTH: usize = 60;

/// Format the journal for display, most recent first, numbered so the
/// numbers can be passed to `delete`. An optional date filter keeps only
/// entries from that date (numbering stays journal-wide).
pub fn format_entry_list(journal: &Journal, date: Option<&str>) -> String {
    let mut lines: Vec<String> = journal
        .entries()
        .iter()
        .enumerate()
        .filter(|(_, entry)| date.map_or(true, |d| entry.date == d))
        .map(|(i, entry)| format_entry_line(i + 1, entry))
        .collect();

    if lines.is_empty() {
        return "No entries found".to_string();
    }

    lines.reverse();
    let mut output = String::new();
    for line in lines {
        output.push_str(&line);
        output.push('\n');
    }
    output
}

fn format_entry_line(number: usize, entry: &Entry) -> String {
    let mood = match entry.mood_score {
        Some(score) => format!(" (Mood: {:.2})", score),
        None => String::new(),
    };
    format!("{:>3}. [{}] {}{}", number, entry.date, entry.preview(50), mood)
}

/// The five buckets with their numeric ranges.
pub fn mood_legend() -> String {
    let mut output = String::from("MOOD SCORE LEGEND:\n");
    for bucket in MoodBucket::ALL {
        output.push_str(&format!(
            "  {:<15} {}\n",
            format!("{}:", bucket.label()),
            bucket.range_label()
        ));
    }
    output
}

fn interpret(score: f64) -> &'static str {
    MoodBucket::classify(score).label()
}

/// Render the full analysis report: legend, totals, per-entry scores,
/// themes, and the distribution matrix.
pub fn format_report(journal: &Journal, stats: &Statistics) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut output = String::new();

    output.push_str("DREAM ANALYSIS\n");
    output.push_str(&rule);
    output.push_str("\n\n");
    output.push_str(&mood_legend());
    output.push('\n');
    output.push_str(&rule);
    output.push_str("\n\n");

    output.push_str(&format!("Total Dreams Recorded: {}\n\n", stats.total_count));
    output.push_str(&format!(
        "Average Mood Score: {:.3} ({})\n\n",
        stats.average_mood,
        interpret(stats.average_mood)
    ));

    output.push_str("Individual Dream Mood Scores:\n");
    for (i, entry) in journal.entries().iter().enumerate() {
        match entry.mood_score {
            Some(score) => output.push_str(&format!(
                "  {}. [{}] {:.3} ({})\n",
                i + 1,
                entry.date,
                score,
                interpret(score)
            )),
            None => output.push_str(&format!("  {}. [{}] N/A\n", i + 1, entry.date)),
        }
        output.push_str(&format!("     \"{}\"\n", entry.preview(40)));
    }

    output.push_str("\nTop Recurring Themes:\n");
    for (i, theme) in stats.top_themes.iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", i + 1, capitalize(theme)));
    }

    output.push('\n');
    output.push_str(&format_mood_matrix(stats));
    output
}

/// The distribution table, one row per non-empty bucket.
pub fn format_mood_matrix(stats: &Statistics) -> String {
    let mut output = String::from("Mood Distribution Matrix:\n");
    output.push_str(&format!(
        "{:<15} {:<8} {:<8} {:<8} {:<8}\n",
        "Category", "Count", "Min", "Max", "Avg"
    ));
    output.push_str(&"=".repeat(55));
    output.push('\n');

    for (bucket, row) in stats.mood_matrix.rows() {
        if row.count == 0 {
            continue;
        }
        output.push_str(&format!(
            "{:<15} {:<8} {:<8.3} {:<8.3} {:<8.3}\n",
            bucket.label(),
            row.count,
            row.min.unwrap_or(0.0),
            row.max.unwrap_or(0.0),
            row.mean.unwrap_or(0.0)
        ));
    }

    output
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
