// Copyright 2026 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick label formatters.

use alloc::string::String;
use alloc::sync::Arc;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Maps a tick value to its label text.
///
/// Shared handles so an axis and its callers can hold the same formatter.
pub type Formatter = Arc<dyn Fn(f64) -> String>;

/// A general-purpose numeric formatter.
///
/// Rounds to at most `max_decimal_places` decimal places, then renders the
/// shortest representation of the rounded value: `3.0` becomes `3`, and
/// `0.1234567` at six places becomes `0.123457`.
pub fn general(max_decimal_places: u32) -> Formatter {
    let factor = 10_f64.powf(f64::from(max_decimal_places));
    Arc::new(move |value: f64| {
        let rounded = (value * factor).round() / factor;
        // Rounding can produce negative zero; its sign never belongs in a label.
        let rounded = if rounded == 0.0 { 0.0 } else { rounded };
        alloc::format!("{rounded}")
    })
}

/// A fixed-precision numeric formatter: always `decimal_places` decimals.
pub fn fixed(decimal_places: usize) -> Formatter {
    Arc::new(move |value: f64| alloc::format!("{value:.decimal_places$}"))
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn general_renders_shortest_form() {
        let format = general(6);
        assert_eq!(format(3.0), "3");
        assert_eq!(format(-2.5), "-2.5");
        assert_eq!(format(0.1234567), "0.123457");
        assert_eq!(format(1000.0), "1000");
    }

    #[test]
    fn general_drops_negative_zero() {
        let format = general(2);
        assert_eq!(format(-0.001), "0");
    }

    #[test]
    fn fixed_pads_decimals() {
        let format = fixed(2);
        assert_eq!(format(3.0), "3.00");
        assert_eq!(format(-0.5), "-0.50");
    }
}
