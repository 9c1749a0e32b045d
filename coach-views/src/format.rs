//! Display formatting shared by all adapters.

use time::OffsetDateTime;

/// Grade ladder, highest threshold first.
const GRADE_THRESHOLDS: [(u32, &str); 10] = [
    (97, "A+"),
    (93, "A"),
    (90, "A-"),
    (87, "B+"),
    (83, "B"),
    (80, "B-"),
    (77, "C+"),
    (73, "C"),
    (70, "C-"),
    (60, "D"),
];

/// Format a whole number of minutes: `45 min`, `1h`, `1h 5m`.
pub fn format_duration(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{} min", minutes);
    }

    let hours = minutes / 60;
    let rest = minutes % 60;
    if rest == 0 {
        format!("{}h", hours)
    } else {
        format!("{}h {}m", hours, rest)
    }
}

/// Describe `date` relative to `now`.
///
/// Calendar days are counted in `date`'s own offset. Dates within the next
/// week are relative (`Today, 18:30`, `Tomorrow, 09:00`, `In 3 days`);
/// anything else, including past dates, is spelled out in full.
pub fn format_relative_date(date: OffsetDateTime, now: OffsetDateTime) -> String {
    let now = now.to_offset(date.offset());
    let days = (date.date() - now.date()).whole_days();

    match days {
        0 => format!("Today, {}", format_clock(date)),
        1 => format!("Tomorrow, {}", format_clock(date)),
        2..=7 => format!("In {} days", days),
        _ => format_long_date(date),
    }
}

/// `Saturday, March 14, 2026`
pub fn format_long_date(date: OffsetDateTime) -> String {
    format!(
        "{}, {} {}, {}",
        date.weekday(),
        date.month(),
        date.day(),
        date.year()
    )
}

fn format_clock(date: OffsetDateTime) -> String {
    format!("{:02}:{:02}", date.hour(), date.minute())
}

/// Map a whole percentage onto the letter-grade ladder.
pub fn grade_from_percentage(percentage: u32) -> &'static str {
    GRADE_THRESHOLDS
        .iter()
        .find(|(threshold, _)| percentage >= *threshold)
        .map(|(_, grade)| *grade)
        .unwrap_or("F")
}

/// `round(part / whole * 100)`, or 0 when `whole` is 0.
pub fn percentage(part: u64, whole: u64) -> u32 {
    if whole == 0 {
        return 0;
    }
    (part as f64 / whole as f64 * 100.0).round() as u32
}

/// `1 member`, `3 members`.
pub fn pluralize(count: u32, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}
