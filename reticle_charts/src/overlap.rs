// Copyright 2026 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label crowding resolution by uniform striding.
//!
//! When labels collide, an axis does not drop just the colliding ones; it
//! keeps every n-th label so the survivors stay evenly spaced. This module
//! finds the smallest such n for a run of label boxes.

use kurbo::Rect;

use crate::axis::Orientation;

/// The smallest stride at which no two kept boxes collide.
///
/// Searches upward from 1. If even keeping every `boxes.len()`-th label
/// still collides, returns `boxes.len()`; callers end up keeping only the
/// first label, which cannot overlap itself. Empty input yields 1.
pub fn resolve_stride(boxes: &[Rect], orientation: Orientation, padding: f64) -> usize {
    let mut stride = 1;
    while has_overlap(boxes, orientation, padding, stride) && stride < boxes.len() {
        stride += 1;
    }
    stride
}

/// Whether any two consecutive kept boxes collide at the given stride.
///
/// Boxes must be in axis order. Horizontal axes compare each kept box's
/// right edge against the next kept box's left edge. Vertical axes compare
/// top edges against bottom edges, assuming the later box sits higher on
/// screen (the usual ascending-value, bottom-up range); for top-down ranges
/// the test is conservative and reports overlap.
pub fn has_overlap(boxes: &[Rect], orientation: Orientation, padding: f64, stride: usize) -> bool {
    let mut i = 0;
    while i + stride < boxes.len() {
        let curr = &boxes[i];
        let next = &boxes[i + stride];
        let collides = if orientation.is_horizontal() {
            curr.x1 + padding >= next.x0
        } else {
            curr.y0 - padding <= next.y1
        };
        if collides {
            return true;
        }
        i += stride;
    }
    false
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec::Vec;

    use super::*;

    fn row(xs: &[f64], width: f64) -> Vec<Rect> {
        xs.iter()
            .map(|&x| Rect::new(x, 0.0, x + width, 12.0))
            .collect()
    }

    #[test]
    fn spaced_boxes_need_no_thinning() {
        let boxes = row(&[0.0, 50.0, 100.0], 20.0);
        assert_eq!(resolve_stride(&boxes, Orientation::Bottom, 5.0), 1);
        assert!(!has_overlap(&boxes, Orientation::Bottom, 5.0, 1));
    }

    #[test]
    fn crowded_boxes_double_the_stride() {
        // 36-wide boxes every 30 px: neighbors collide, every other one is
        // clear.
        let boxes = row(&[0.0, 30.0, 60.0, 90.0, 120.0], 36.0);
        assert!(has_overlap(&boxes, Orientation::Bottom, 3.0, 1));
        assert!(!has_overlap(&boxes, Orientation::Bottom, 3.0, 2));
        assert_eq!(resolve_stride(&boxes, Orientation::Bottom, 3.0), 2);
    }

    #[test]
    fn padding_counts_as_collision_space() {
        // Boxes 10 px apart: fine with 5 px padding, crowded with 15 px.
        let boxes = row(&[0.0, 30.0, 60.0], 20.0);
        assert_eq!(resolve_stride(&boxes, Orientation::Bottom, 5.0), 1);
        assert!(resolve_stride(&boxes, Orientation::Bottom, 15.0) > 1);
    }

    #[test]
    fn coincident_boxes_fall_back_to_the_first_label() {
        let boxes = row(&[10.0, 10.0, 10.0, 10.0], 20.0);
        assert_eq!(resolve_stride(&boxes, Orientation::Bottom, 0.0), boxes.len());
    }

    #[test]
    fn vertical_axes_compare_bottom_up() {
        // Bottom-up range: later ticks sit higher, so y0 shrinks.
        let stacked: Vec<Rect> = [90.0, 60.0, 30.0]
            .iter()
            .map(|&y| Rect::new(0.0, y, 30.0, y + 12.0))
            .collect();
        assert!(!has_overlap(&stacked, Orientation::Left, 5.0, 1));

        let crowded: Vec<Rect> = [90.0, 80.0, 70.0]
            .iter()
            .map(|&y| Rect::new(0.0, y, 30.0, y + 12.0))
            .collect();
        assert!(has_overlap(&crowded, Orientation::Left, 5.0, 1));
        assert_eq!(resolve_stride(&crowded, Orientation::Left, 5.0), 2);
    }

    #[test]
    fn empty_run_resolves_to_unit_stride() {
        assert_eq!(resolve_stride(&[], Orientation::Bottom, 5.0), 1);
    }
}
