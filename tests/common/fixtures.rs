//! Test fixtures - config files shared by CLI tests.

/// Faster timings so timelines stay short
#[allow(dead_code)]
pub const FAST_TIMING: &str = r#"
[timing]
progress_interval_ms = 100
progress_step = 50
welcome_delay_ms = 50
enter_delay_ms = 50
"#;

/// Misspelled key under [reveal]
#[allow(dead_code)]
pub const TYPO_CONFIG: &str = r#"[reveal]
threshold = 0.3
fade_sm = 200
"#;

#[allow(dead_code)]
pub const BAD_THRESHOLD: &str = r#"
[reveal]
threshold = 1.5
"#;
