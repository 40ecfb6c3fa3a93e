//! Duration estimator - turns free-form effort text into whole-day durations

use regex::Regex;
use std::num::IntErrorKind;

/// Converts effort descriptions such as `"13 story points"` into durations.
///
/// The first run of ASCII digits is the effort figure; the duration is half of it
/// rounded up, never less than one. Text without digits degrades to the minimum.
#[derive(Debug, Clone)]
pub struct DurationEstimator {
    digits_re: Regex,
}

impl DurationEstimator {
    pub fn new() -> Self {
        Self {
            digits_re: Regex::new(r"[0-9]+").expect("digit pattern is valid"),
        }
    }

    /// Estimate the duration for an optional effort string
    pub fn estimate(&self, effort: Option<&str>) -> u32 {
        let Some(effort) = effort else {
            return 1;
        };

        let figure = self
            .digits_re
            .find(effort)
            .map(|m| match m.as_str().parse::<u64>() {
                Ok(figure) => figure,
                Err(e) if *e.kind() == IntErrorKind::PosOverflow => u64::MAX,
                Err(_) => 0,
            })
            .unwrap_or(0);

        let halved = figure / 2 + figure % 2;
        u32::try_from(halved).unwrap_or(u32::MAX).max(1)
    }
}

impl Default for DurationEstimator {
    fn default() -> Self {
        Self::new()
    }
}
