// Copyright 2026 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-box boundary filters for tick labels and marks.

use kurbo::Rect;

use crate::axis::{TickLabelNode, TickMarkNode};
#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Containment with sub-pixel slack on every edge.
///
/// Label boxes come out of fractional text metrics while the axis box is
/// whole pixels; a label must not be discarded for poking out by less than a
/// pixel. Each edge is relaxed toward the inside by flooring the outer
/// minima and ceiling everything else.
pub fn rect_inside(inner: &Rect, outer: &Rect) -> bool {
    outer.x0.floor() <= inner.x0.ceil()
        && outer.y0.floor() <= inner.y0.ceil()
        && inner.x1.floor() <= outer.x1.ceil()
        && inner.y1.floor() <= outer.y1.ceil()
}

/// Hides every label whose box is not inside `bounds`.
pub fn hide_overflowing_labels(labels: &mut [TickLabelNode], bounds: Rect) {
    for label in labels.iter_mut() {
        if !rect_inside(&label.bounds, &bounds) {
            label.visible = false;
        }
    }
}

/// Hides the first and last label when their boxes are not inside `bounds`.
///
/// Applied on its own, before the general overflow sweep, when an axis is
/// configured to suppress end labels.
pub fn hide_end_labels(labels: &mut [TickLabelNode], bounds: Rect) {
    if let Some(first) = labels.first_mut() {
        if !rect_inside(&first.bounds, &bounds) {
            first.visible = false;
        }
    }
    if let Some(last) = labels.last_mut() {
        if !rect_inside(&last.bounds, &bounds) {
            last.visible = false;
        }
    }
}

/// Hides each mark whose label is still shown.
///
/// Used by edge positioning, where a label sits beside its mark and the two
/// occupy the same band. Marks and labels pair up by index.
pub fn hide_marks_with_shown_labels(marks: &mut [TickMarkNode], labels: &[TickLabelNode]) {
    for (mark, label) in marks.iter_mut().zip(labels.iter()) {
        if label.visible {
            mark.visible = false;
        }
    }
}
