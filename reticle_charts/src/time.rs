// Copyright 2026 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick and label helpers for axes denominated in elapsed seconds.

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::format::Formatter;
#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Returns tick values for a span of elapsed time in seconds.
///
/// Steps are chosen from clock-friendly intervals (1 s up to 12 h) rather
/// than powers of ten, so minute spans tick at 15 s or 30 s instead of 20 s.
pub fn nice_time_ticks_seconds(mut min: f64, mut max: f64, count: usize) -> Vec<f64> {
    if count == 0 || !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    if min == max {
        return alloc::vec![min];
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }
    let span = max - min;
    let step0 = span / count.max(1) as f64;
    let step = nice_time_step_seconds(step0);
    if step <= 0.0 {
        return alloc::vec![min, max];
    }

    let start = (min / step).floor() * step;
    let stop = (max / step).ceil() * step;

    let n_f = ((stop - start) / step).round();
    let n = if n_f.is_finite() && n_f >= 0.0 {
        let n_f = n_f.min(10_000.0);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "guarded by finite/non-negative checks and capped at 10k"
        )]
        {
            n_f as u64
        }
    } else {
        0
    };
    (0..=n).map(|i| start + step * i as f64).collect()
}

/// Chooses a clock-friendly step at or above `step0`, in seconds.
pub(crate) fn nice_time_step_seconds(step0: f64) -> f64 {
    const STEPS: [f64; 17] = [
        1.0, 2.0, 5.0, 10.0, 15.0, 30.0, // seconds
        60.0, 120.0, 300.0, 600.0, 900.0, 1800.0, // minutes
        3600.0, 7200.0, 10800.0, 21600.0, 43200.0, // hours
    ];
    if !step0.is_finite() || step0 <= 0.0 {
        return 0.0;
    }
    for step in STEPS {
        if step >= step0 {
            return step;
        }
    }
    // Beyond 12 h steps, fall back to whole hours.
    (step0 / 3600.0).ceil() * 3600.0
}

/// Formats a second count for tick labels: `5`, `1:05`, or `1:02:03`.
///
/// `step` is the tick step of the axis; it decides how many fields appear so
/// that every label on one axis carries the same fields.
pub fn format_time_seconds(value: f64, step: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    #[allow(
        clippy::cast_possible_truncation,
        reason = "rounded absolute seconds; the saturating cast only matters for absurd spans"
    )]
    let total = value.abs().round() as i64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    if step >= 3600.0 || hours > 0 {
        alloc::format!("{sign}{hours}:{minutes:02}:{seconds:02}")
    } else if step >= 60.0 || minutes > 0 {
        alloc::format!("{sign}{minutes}:{seconds:02}")
    } else {
        alloc::format!("{sign}{seconds}")
    }
}

/// A tick formatter rendering elapsed seconds at the given step granularity.
///
/// Pair with [`crate::scale::TimeScale::tick_step`] so the label fields match
/// the tick spacing.
pub fn time_formatter(step_seconds: f64) -> Formatter {
    let step = step_seconds.abs();
    Arc::new(move |value: f64| format_time_seconds(value, step))
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn time_ticks_choose_minute_steps_for_minute_spans() {
        let ticks = nice_time_ticks_seconds(0.0, 600.0, 10);
        assert_eq!(ticks.len(), 11);
        assert!((ticks[1] - ticks[0] - 60.0).abs() < 1e-9);

        // A power-of-ten generator would pick 20 s here.
        let ticks = nice_time_ticks_seconds(0.0, 150.0, 10);
        assert!((ticks[1] - ticks[0] - 15.0).abs() < 1e-9);
    }

    #[test]
    fn time_format_seconds_minutes_hours() {
        assert_eq!(format_time_seconds(5.0, 1.0), "5");
        assert_eq!(format_time_seconds(65.0, 15.0), "1:05");
        assert_eq!(format_time_seconds(3723.0, 60.0), "1:02:03");
        assert_eq!(format_time_seconds(-65.0, 15.0), "-1:05");
    }

    #[test]
    fn time_format_widens_fields_with_the_step() {
        // Coarse steps force the wider form even for small values.
        assert_eq!(format_time_seconds(0.0, 60.0), "0:00");
        assert_eq!(format_time_seconds(0.0, 3600.0), "0:00:00");
    }

    #[test]
    fn time_formatter_captures_the_step() {
        let format = time_formatter(60.0);
        assert_eq!(format(75.0), "1:15");
        assert_eq!(format(0.0), "0:00");
    }
}
