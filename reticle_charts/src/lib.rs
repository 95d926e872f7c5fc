// Copyright 2026 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis and symbol layout blocks for chart renderers.
//!
//! This crate computes geometry and visibility; it draws nothing:
//! - **Scales** map data values into screen coordinates and propose ticks.
//! - **Axes** measure the thickness they need, place tick marks and labels,
//!   and prune labels that overflow the axis box or crowd each other.
//! - **Drawers** project per-datum attributes into retained nodes for a
//!   renderer to flush.
//!
//! Rendering back ends consume the retained nodes ([`TickMarkNode`],
//! [`TickLabelNode`], [`SymbolNode`]) plus the shared [`TickLabelLayout`].
//! Text shaping is out of scope; axes take their metrics from a
//! [`reticle_text::TextMeasurer`].

#![no_std]

extern crate alloc;

mod axis;
mod boundary;
mod drawer;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod geometry;
mod overlap;
mod scale;
mod symbol;
mod time;

pub use axis::{
    AxisConfigError, AxisStyle, LabelPosition, NumericAxis, Orientation, Rescale, StrokeStyle,
    TickLabelNode, TickMarkNode,
};
pub use boundary::{
    hide_end_labels, hide_marks_with_shown_labels, hide_overflowing_labels, rect_inside,
};
pub use drawer::{
    Animator, AttrValue, AttributeProjections, AttributeSet, DrawStep, ImmediateAnimator,
    Projector, SymbolDrawer, SymbolNode,
};
pub use format::{Formatter, fixed, general};
pub use geometry::{
    TextAnchor, TickLabelLayout, anchored_label_bounds, baseline_line, tick_label_layout,
    tick_label_point, tick_mark_line,
};
pub use overlap::{has_overlap, resolve_stride};
pub use scale::{AxisScale, LinearScale, TickSource, TimeScale, tick_values};
pub use symbol::Symbol;
pub use time::{format_time_seconds, nice_time_ticks_seconds, time_formatter};
