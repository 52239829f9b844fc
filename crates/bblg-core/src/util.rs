//! Shared utility functions used across multiple modules.

use regex::Regex;

/// Normalize optional text by trimming whitespace and removing empties.
///
/// Returns `None` when the input is `None` or the trimmed value is empty.
pub fn normalize_text_option(value: Option<String>) -> Option<String> {
    let value = value?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Split `compact` into `(number, unit)` pairs captured by `pattern`
///
/// `pattern` must capture the number in group 1 and the unit in group 2.
/// Returns `None` unless the matches cover the whole input back to back.
pub fn unit_tokens<'a>(pattern: &Regex, compact: &'a str) -> Option<Vec<(&'a str, &'a str)>> {
    let mut tokens = Vec::new();
    let mut consumed = 0;
    for cap in pattern.captures_iter(compact) {
        let (Some(whole), Some(value), Some(unit)) = (cap.get(0), cap.get(1), cap.get(2)) else {
            return None;
        };
        if whole.start() != consumed {
            return None;
        }
        consumed = whole.end();
        tokens.push((value.as_str(), unit.as_str()));
    }
    (consumed == compact.len()).then_some(tokens)
}

/// Parse a short duration such as `15m`, `1h30m`, or `90s` into seconds.
///
/// A bare number is read as minutes.
pub fn parse_duration_secs(value: &str) -> Option<u32> {
    let compact = value.split_whitespace().collect::<String>().to_lowercase();
    if compact.is_empty() {
        return None;
    }
    if let Ok(minutes) = compact.parse::<u32>() {
        return minutes.checked_mul(60);
    }

    let re = Regex::new(r"(\d+)(h|m|s)").expect("Invalid regex");
    unit_tokens(&re, &compact)?
        .into_iter()
        .try_fold(0u32, |total, (amount, unit)| {
            let scale = match unit {
                "h" => 3600,
                "m" => 60,
                _ => 1,
            };
            total.checked_add(amount.parse::<u32>().ok()?.checked_mul(scale)?)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_text_option_rejects_empty() {
        assert_eq!(normalize_text_option(None), None);
        assert_eq!(normalize_text_option(Some("   ".to_string())), None);
    }

    #[test]
    fn normalize_text_option_trims_value() {
        assert_eq!(
            normalize_text_option(Some(" Bath time ".to_string())),
            Some("Bath time".to_string())
        );
    }

    #[test]
    fn parse_duration_secs_accepts_units() {
        assert_eq!(parse_duration_secs("15"), Some(900));
        assert_eq!(parse_duration_secs("15m"), Some(900));
        assert_eq!(parse_duration_secs("1h30m"), Some(5400));
        assert_eq!(parse_duration_secs("1h 5m 10s"), Some(3910));
        assert_eq!(parse_duration_secs("90s"), Some(90));
    }

    #[test]
    fn unit_tokens_requires_full_coverage() {
        let re = Regex::new(r"(\d+)(h|m)").unwrap();
        assert_eq!(unit_tokens(&re, "1h30m"), Some(vec![("1", "h"), ("30", "m")]));
        assert_eq!(unit_tokens(&re, "1hx30m"), None);
        assert_eq!(unit_tokens(&re, "x1h"), None);
        assert_eq!(unit_tokens(&re, "1h30"), None);
    }

    #[test]
    fn parse_duration_secs_rejects_overflow() {
        assert_eq!(parse_duration_secs("99999999h"), None);
    }

    #[test]
    fn parse_duration_secs_rejects_garbage() {
        assert_eq!(parse_duration_secs(""), None);
        assert_eq!(parse_duration_secs("h"), None);
        assert_eq!(parse_duration_secs("10x"), None);
        assert_eq!(parse_duration_secs("1h30"), None);
    }
}
