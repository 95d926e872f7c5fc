// Copyright 2026 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scales mapping data domains to pixel ranges, and the tick contract axes
//! consume.

use alloc::vec::Vec;
use core::cell::Cell;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// How an axis obtains representative tick values from a scale.
///
/// Resolved once, when the axis is built, so the axis never has to probe the
/// scale's capabilities mid-render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickSource {
    /// The scale generates tick values; the axis clips them to the domain.
    Generated,
    /// The scale has no tick generator; the domain endpoints stand in.
    DomainEndpoints,
}

/// The scale contract axes consume.
///
/// Implementations use interior mutability for the domain and range so that
/// collaborators sharing one handle (an axis and the plot it frames, say) all
/// observe an update. Handles are consequently single-threaded; see
/// [`LinearScale`] for the reference implementation.
pub trait AxisScale {
    /// The data-space interval, as authored (possibly descending).
    fn domain(&self) -> (f64, f64);

    /// Replaces the data-space interval.
    fn set_domain(&self, domain: (f64, f64));

    /// The output interval in pixels.
    fn range(&self) -> (f64, f64);

    /// Replaces the output interval.
    fn set_range(&self, range: (f64, f64));

    /// Maps a domain value to range space.
    fn scale(&self, value: f64) -> f64;

    /// Maps a range position back to domain space.
    fn invert(&self, position: f64) -> f64;

    /// Representative tick values for the current domain.
    fn ticks(&self) -> Vec<f64>;

    /// Whether [`AxisScale::ticks`] is meaningful for this scale.
    fn tick_source(&self) -> TickSource;
}

/// Tick values an axis should label, honoring the scale's tick capability.
///
/// Generated ticks are filtered to the closed domain interval; a scale is
/// free to propose values just outside it (after a domain change, say) and
/// those must not produce stray labels.
pub fn tick_values(scale: &dyn AxisScale, source: TickSource) -> Vec<f64> {
    match source {
        TickSource::DomainEndpoints => {
            let (d0, d1) = scale.domain();
            alloc::vec![d0, d1]
        }
        TickSource::Generated => {
            let (d0, d1) = scale.domain();
            let min = d0.min(d1);
            let max = d0.max(d1);
            scale
                .ticks()
                .into_iter()
                .filter(|t| *t >= min && *t <= max)
                .collect()
        }
    }
}

/// A continuous linear scale.
#[derive(Debug)]
pub struct LinearScale {
    domain: Cell<(f64, f64)>,
    range: Cell<(f64, f64)>,
    tick_count: Cell<usize>,
}

impl LinearScale {
    /// Creates a linear scale with the given domain and range.
    ///
    /// The default tick count is 10.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain: Cell::new(domain),
            range: Cell::new(range),
            tick_count: Cell::new(10),
        }
    }

    /// Builder-style setter for the requested tick count.
    pub fn with_tick_count(self, count: usize) -> Self {
        self.tick_count.set(count);
        self
    }

    /// The requested tick count.
    pub fn tick_count(&self) -> usize {
        self.tick_count.get()
    }

    /// Replaces the requested tick count.
    pub fn set_tick_count(&self, count: usize) {
        self.tick_count.set(count);
    }
}

impl AxisScale for LinearScale {
    fn domain(&self) -> (f64, f64) {
        self.domain.get()
    }

    fn set_domain(&self, domain: (f64, f64)) {
        self.domain.set(domain);
    }

    fn range(&self) -> (f64, f64) {
        self.range.get()
    }

    fn set_range(&self, range: (f64, f64)) {
        self.range.set(range);
    }

    fn scale(&self, value: f64) -> f64 {
        project(self.domain.get(), self.range.get(), value)
    }

    fn invert(&self, position: f64) -> f64 {
        project(self.range.get(), self.domain.get(), position)
    }

    fn ticks(&self) -> Vec<f64> {
        let (d0, d1) = self.domain.get();
        nice_ticks(d0, d1, self.tick_count.get())
    }

    fn tick_source(&self) -> TickSource {
        TickSource::Generated
    }
}

/// A continuous scale over elapsed time in seconds.
///
/// Linear in its mapping; only tick generation differs, stepping at
/// clock-friendly intervals (15 s, 30 s, 1 min, ...) instead of powers of
/// ten. Pair it with [`crate::time::time_formatter`] for `h:mm:ss` labels.
#[derive(Debug)]
pub struct TimeScale {
    domain: Cell<(f64, f64)>,
    range: Cell<(f64, f64)>,
    tick_count: Cell<usize>,
}

impl TimeScale {
    /// Creates a time scale with the given domain (seconds) and range.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain: Cell::new(domain),
            range: Cell::new(range),
            tick_count: Cell::new(10),
        }
    }

    /// Builder-style setter for the requested tick count.
    pub fn with_tick_count(self, count: usize) -> Self {
        self.tick_count.set(count);
        self
    }

    /// The step in seconds that generated ticks for the current domain use.
    pub fn tick_step(&self) -> f64 {
        let (d0, d1) = self.domain.get();
        let span = (d1 - d0).abs();
        crate::time::nice_time_step_seconds(span / self.tick_count.get().max(1) as f64)
    }
}

impl AxisScale for TimeScale {
    fn domain(&self) -> (f64, f64) {
        self.domain.get()
    }

    fn set_domain(&self, domain: (f64, f64)) {
        self.domain.set(domain);
    }

    fn range(&self) -> (f64, f64) {
        self.range.get()
    }

    fn set_range(&self, range: (f64, f64)) {
        self.range.set(range);
    }

    fn scale(&self, value: f64) -> f64 {
        project(self.domain.get(), self.range.get(), value)
    }

    fn invert(&self, position: f64) -> f64 {
        project(self.range.get(), self.domain.get(), position)
    }

    fn ticks(&self) -> Vec<f64> {
        let (d0, d1) = self.domain.get();
        crate::time::nice_time_ticks_seconds(d0, d1, self.tick_count.get())
    }

    fn tick_source(&self) -> TickSource {
        TickSource::Generated
    }
}

fn project(from: (f64, f64), to: (f64, f64), value: f64) -> f64 {
    let denom = from.1 - from.0;
    if denom == 0.0 {
        return to.0;
    }
    let t = (value - from.0) / denom;
    to.0 + t * (to.1 - to.0)
}

fn nice_ticks(mut min: f64, mut max: f64, count: usize) -> Vec<f64> {
    if count == 0 {
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
    let step = nice_step(step0);
    if step == 0.0 {
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

fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let base = 10_f64.powf(power);
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}
