//! Human-readable formatting helpers

/// `word` for a count of one, `words` otherwise
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElapsedFormat {
    /// `1h 2m 3s`
    Short,
    /// `1 hour 2 minutes 3 seconds`
    Long,
}

/// Format a duration in seconds, skipping zero components
pub fn format_elapsed_time(seconds: u64, format: ElapsedFormat) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    let units: [(u64, &str, &str); 3] = [
        (hours, "hour", "h"),
        (minutes, "minute", "m"),
        (secs, "second", "s"),
    ];

    let parts: Vec<String> = units
        .iter()
        .filter(|(value, _, _)| *value > 0)
        .map(|(value, long, short)| match format {
            ElapsedFormat::Long => format!("{} {}", value, pluralize(long, *value as usize)),
            ElapsedFormat::Short => format!("{}{}", value, short),
        })
        .collect();

    if parts.is_empty() {
        return match format {
            ElapsedFormat::Long => "0 seconds".to_string(),
            ElapsedFormat::Short => "0s".to_string(),
        };
    }

    parts.join(" ")
}
