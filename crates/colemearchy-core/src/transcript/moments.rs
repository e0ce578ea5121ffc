use serde::Serialize;

use super::types::TranscriptFragment;

const MOMENT_TEXT_CHARS: usize = 100;

/// A representative point in a transcript.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyMoment {
    pub text: String,
    pub timestamp: f64,
    pub time_string: String,
}

/// Picks up to `max_moments` fragments at an even stride of
/// `len / max_moments`. With fewer fragments than requested moments the
/// stride is 0 and every moment is the first fragment.
pub fn extract_key_moments(fragments: &[TranscriptFragment], max_moments: usize) -> Vec<KeyMoment> {
    if max_moments == 0 || fragments.is_empty() {
        return Vec::new();
    }
    let interval = fragments.len() / max_moments;

    (0..max_moments)
        .map(|i| i * interval)
        .take_while(|&idx| idx < fragments.len())
        .map(|idx| {
            let item = &fragments[idx];
            let mut text: String = item.text.chars().take(MOMENT_TEXT_CHARS).collect();
            text.push_str("...");
            KeyMoment {
                text,
                timestamp: item.start,
                time_string: format_timestamp(item.start),
            }
        })
        .collect()
}

/// Formats seconds as `H:MM:SS`, or `M:SS` under an hour.
pub fn format_timestamp(seconds: f64) -> String {
    let total = seconds.max(0.0).floor() as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frag(text: &str, start: f64) -> TranscriptFragment {
        TranscriptFragment::new(text, start, 1.0)
    }

    #[test]
    fn evenly_distributed() {
        let t: Vec<_> = (0..10).map(|i| frag(&format!("Moment {i}"), i as f64 * 10.0)).collect();
        let m = extract_key_moments(&t, 5);
        assert_eq!(m.len(), 5);
        assert_eq!(m[1].timestamp, 20.0);
        assert_eq!(m[1].text, "Moment 2...");
    }

    #[test]
    fn timestamps_and_strings() {
        let t = [frag("Start", 0.0), frag("Middle", 30.0), frag("End", 60.0)];
        let m = extract_key_moments(&t, 3);
        let strings: Vec<_> = m.iter().map(|k| k.time_string.as_str()).collect();
        assert_eq!(strings, vec!["0:00", "0:30", "1:00"]);
    }

    #[test]
    fn long_text_truncated_to_100_plus_ellipsis() {
        let m = extract_key_moments(&[frag(&"a".repeat(200), 0.0)], 1);
        assert_eq!(m[0].text.chars().count(), 103);
        assert!(m[0].text.ends_with("..."));
    }

    #[test]
    fn more_moments_than_fragments_repeats_first() {
        let m = extract_key_moments(&[frag("Only one", 0.0)], 10);
        assert_eq!(m.len(), 10);
        assert_eq!(m[0].text, m[9].text);
    }

    #[test]
    fn zero_moments_or_empty() {
        assert!(extract_key_moments(&[frag("Test", 0.0)], 0).is_empty());
        assert!(extract_key_moments(&[], 5).is_empty());
    }

    #[test]
    fn timestamp_formats() {
        assert_eq!(format_timestamp(45.0), "0:45");
        assert_eq!(format_timestamp(125.0), "2:05");
        assert_eq!(format_timestamp(3665.0), "1:01:05");
        assert_eq!(format_timestamp(3605.9), "1:00:05");
    }
}
