//! Environment variable validation
//!
//! Invalid `FOLIO_*` values never abort a run: the previous value is kept and
//! a warning with a typo suggestion is written instead.

use std::io::Write;

/// Validator for one environment variable
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    valid_values: &'a [&'a str],
}

impl<'a> EnvVarValidator<'a> {
    pub fn new(var_name: &'a str, valid_values: &'a [&'a str]) -> Self {
        Self {
            var_name,
            valid_values,
        }
    }

    /// Parse `value`, falling back to `fallback` with a warning on stderr
    pub fn parse<T, F>(&self, value: &str, parser: F, fallback: T) -> T
    where
        F: Fn(&str) -> Option<T>,
    {
        self.parse_with_writer(value, parser, fallback, &mut std::io::stderr())
    }

    pub fn parse_with_writer<T, F, W>(&self, value: &str, parser: F, fallback: T, writer: &mut W) -> T
    where
        F: Fn(&str) -> Option<T>,
        W: Write,
    {
        if let Some(parsed) = parser(value) {
            return parsed;
        }

        tracing::warn!(var = self.var_name, value, "ignoring invalid environment value");
        let hint = closest(&value.to_lowercase(), self.valid_values)
            .filter(|s| *s != value)
            .map(|s| format!(". Did you mean '{}'?", s))
            .unwrap_or_default();
        let _ = writeln!(
            writer,
            "Warning: Invalid {} value '{}'{}",
            self.var_name, value, hint
        );
        let _ = writeln!(writer, "Valid values: {}", self.valid_values.join(", "));
        fallback
    }
}

/// Closest candidate within two edits, if any. Ties go to the earlier one.
pub fn closest<'c>(input: &str, candidates: &[&'c str]) -> Option<&'c str> {
    candidates
        .iter()
        .map(|c| (*c, levenshtein(input, c)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(c, _)| c)
}

/// Byte-wise Levenshtein distance
pub fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a == b {
        return 0;
    }
    if a.is_empty() || b.is_empty() {
        return a.len().max(b.len());
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ac) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, bc) in b.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein() {
        assert_eq!(levenshtein("color", "color"), 0);
        assert_eq!(levenshtein("colour", "color"), 1);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("alwys", "always"), 1);
    }

    #[test]
    fn test_closest_within_two_edits() {
        assert_eq!(closest("nevr", &["auto", "always", "never"]), Some("never"));
        assert_eq!(closest("sparkles", &["auto", "always", "never"]), None);
    }

    #[test]
    fn test_valid_value_passes_through() {
        let validator = EnvVarValidator::new("FOLIO_TEST", &["on", "off"]);
        let mut output = Vec::new();
        let result = validator.parse_with_writer("on", |s| (s == "on").then_some(true), false, &mut output);
        assert!(result);
        assert!(output.is_empty());
    }

    #[test]
    fn test_invalid_value_keeps_fallback_and_warns() {
        let validator = EnvVarValidator::new("FOLIO_COLOR", &["auto", "always", "never"]);
        let mut output = Vec::new();
        let result = validator.parse_with_writer("alwayz", |_| None::<u8>, 7, &mut output);
        assert_eq!(result, 7);

        let msg = String::from_utf8(output).unwrap();
        assert!(msg.contains("Warning: Invalid FOLIO_COLOR value 'alwayz'"));
        assert!(msg.contains("Did you mean 'always'?"), "{}", msg);
        assert!(msg.contains("Valid values: auto, always, never"));
    }

    #[test]
    fn test_no_suggestion_for_distant_value() {
        let validator = EnvVarValidator::new("FOLIO_ANIMATION", &["auto", "always", "never"]);
        let mut output = Vec::new();
        validator.parse_with_writer("something else entirely", |_| None::<()>, (), &mut output);
        let msg = String::from_utf8(output).unwrap();
        assert!(!msg.contains("Did you mean"), "{}", msg);
    }
}
