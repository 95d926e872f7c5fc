// Copyright 2026 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure placement rules for axis furniture.
//!
//! Everything here is a function of orientation and axis-box size; no node
//! state, no measurement. The axis orchestrator calls these, and renderers
//! may call them again to rebuild geometry from a serialized axis.

use kurbo::{Line, Point, Rect};
use reticle_text::TextMetrics;

use crate::axis::{LabelPosition, Orientation};

/// Horizontal text anchoring, matching SVG `text-anchor`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// The coordinate is the left edge of the text.
    Start,
    /// The coordinate is the center of the text.
    Middle,
    /// The coordinate is the right edge of the text.
    End,
}

/// Shared label placement for one render pass.
///
/// Labels are positioned in two stages, mirroring how SVG renderers group
/// them: a per-label coordinate from [`tick_label_point`], adjusted by the
/// em-denominated baseline shift, inside a container translated by
/// `(offset_x, offset_y)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickLabelLayout {
    /// Horizontal anchoring of every label against its coordinate.
    pub anchor: TextAnchor,
    /// Per-label x shift in em units.
    pub dx_em: f64,
    /// Per-label baseline shift in em units.
    pub dy_em: f64,
    /// Horizontal translation of the label container.
    pub offset_x: f64,
    /// Vertical translation of the label container.
    pub offset_y: f64,
}

/// The segment for one tick mark, in axis-local coordinates.
///
/// Marks grow inward from the edge of the axis box that touches the plot:
/// down from the top edge for a `Bottom` axis, left from the right edge for
/// a `Left` axis, and so on. `pos` is the scaled tick position along the
/// axis; `length` the mark length in pixels.
pub fn tick_mark_line(
    orientation: Orientation,
    axis_width: f64,
    axis_height: f64,
    pos: f64,
    length: f64,
) -> Line {
    match orientation {
        Orientation::Bottom => Line::new((pos, 0.0), (pos, length)),
        Orientation::Top => Line::new((pos, axis_height), (pos, axis_height - length)),
        Orientation::Left => Line::new((axis_width, pos), (axis_width - length, pos)),
        Orientation::Right => Line::new((0.0, pos), (length, pos)),
    }
}

/// The baseline segment: the full-length rule along the plot-facing edge.
pub fn baseline_line(orientation: Orientation, axis_width: f64, axis_height: f64) -> Line {
    match orientation {
        Orientation::Bottom => Line::new((0.0, 0.0), (axis_width, 0.0)),
        Orientation::Top => Line::new((0.0, axis_height), (axis_width, axis_height)),
        Orientation::Left => Line::new((axis_width, 0.0), (axis_width, axis_height)),
        Orientation::Right => Line::new((0.0, 0.0), (0.0, axis_height)),
    }
}

/// Per-label coordinate before the container translation.
///
/// Horizontal axes spread labels along x and leave y to the container;
/// vertical axes the other way around.
pub fn tick_label_point(orientation: Orientation, scaled: f64) -> Point {
    match orientation {
        Orientation::Top | Orientation::Bottom => Point::new(scaled, 0.0),
        Orientation::Left | Orientation::Right => Point::new(0.0, scaled),
    }
}

/// Label anchoring and container offsets for one orientation/positioning
/// pair.
///
/// `label_tick_length` is the mark length labels must clear when they sit
/// past the marks (the end-mark length when end labels are shown). Panics if
/// `position` belongs to the other orientation family; axes validate
/// positioning at configuration time, so a mismatch here is a programming
/// error.
pub fn tick_label_layout(
    orientation: Orientation,
    position: LabelPosition,
    axis_width: f64,
    axis_height: f64,
    label_tick_length: f64,
    padding: f64,
) -> TickLabelLayout {
    fn at(anchor: TextAnchor, dy_em: f64, offset_x: f64, offset_y: f64) -> TickLabelLayout {
        TickLabelLayout {
            anchor,
            dx_em: 0.0,
            dy_em,
            offset_x,
            offset_y,
        }
    }

    let w = axis_width;
    let h = axis_height;
    let l = label_tick_length;
    let p = padding;
    match (orientation, position) {
        (Orientation::Bottom, LabelPosition::Left) => at(TextAnchor::End, 0.95, -p, p),
        (Orientation::Bottom, LabelPosition::Center) => at(TextAnchor::Middle, 0.95, 0.0, l + p),
        (Orientation::Bottom, LabelPosition::Right) => at(TextAnchor::Start, 0.95, p, p),

        (Orientation::Top, LabelPosition::Left) => at(TextAnchor::End, -0.25, -p, h - p),
        (Orientation::Top, LabelPosition::Center) => {
            at(TextAnchor::Middle, -0.25, 0.0, h - (l + p))
        }
        (Orientation::Top, LabelPosition::Right) => at(TextAnchor::Start, -0.25, p, h - p),

        (Orientation::Left, LabelPosition::Top) => at(TextAnchor::End, -0.3, w - p, -p),
        (Orientation::Left, LabelPosition::Center) => at(TextAnchor::End, 0.3, w - (l + p), 0.0),
        (Orientation::Left, LabelPosition::Bottom) => at(TextAnchor::End, 1.0, w - p, p),

        (Orientation::Right, LabelPosition::Top) => at(TextAnchor::Start, -0.3, p, -p),
        (Orientation::Right, LabelPosition::Center) => at(TextAnchor::Start, 0.3, l + p, 0.0),
        (Orientation::Right, LabelPosition::Bottom) => at(TextAnchor::Start, 1.0, p, p),

        _ => panic!("tick label position {position:?} does not apply to {orientation:?} axes"),
    }
}

/// Bounding box of a label whose baseline-anchor point is `(x, y)`.
pub fn anchored_label_bounds(x: f64, y: f64, anchor: TextAnchor, metrics: &TextMetrics) -> Rect {
    let width = metrics.advance_width;
    let (x0, x1) = match anchor {
        TextAnchor::Start => (x, x + width),
        TextAnchor::Middle => (x - 0.5 * width, x + 0.5 * width),
        TextAnchor::End => (x - width, x),
    };
    Rect::new(x0, y - metrics.ascent, x1, y + metrics.descent)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn tick_marks_grow_inward_from_the_plot_edge() {
        let bottom = tick_mark_line(Orientation::Bottom, 100.0, 30.0, 40.0, 5.0);
        assert_eq!(bottom, Line::new((40.0, 0.0), (40.0, 5.0)));

        let top = tick_mark_line(Orientation::Top, 100.0, 30.0, 40.0, 5.0);
        assert_eq!(top, Line::new((40.0, 30.0), (40.0, 25.0)));

        let left = tick_mark_line(Orientation::Left, 30.0, 100.0, 40.0, 5.0);
        assert_eq!(left, Line::new((30.0, 40.0), (25.0, 40.0)));

        let right = tick_mark_line(Orientation::Right, 30.0, 100.0, 40.0, 5.0);
        assert_eq!(right, Line::new((0.0, 40.0), (5.0, 40.0)));
    }

    #[test]
    fn baseline_runs_along_the_plot_edge() {
        assert_eq!(
            baseline_line(Orientation::Bottom, 100.0, 30.0),
            Line::new((0.0, 0.0), (100.0, 0.0))
        );
        assert_eq!(
            baseline_line(Orientation::Left, 30.0, 100.0),
            Line::new((30.0, 0.0), (30.0, 100.0))
        );
    }

    #[test]
    fn center_positioning_clears_the_marks() {
        let layout = tick_label_layout(
            Orientation::Bottom,
            LabelPosition::Center,
            100.0,
            27.0,
            5.0,
            10.0,
        );
        assert_eq!(layout.anchor, TextAnchor::Middle);
        assert!((layout.dy_em - 0.95).abs() < 1e-9);
        assert!((layout.offset_x - 0.0).abs() < 1e-9);
        assert!((layout.offset_y - 15.0).abs() < 1e-9);

        let layout = tick_label_layout(
            Orientation::Left,
            LabelPosition::Center,
            40.0,
            100.0,
            5.0,
            10.0,
        );
        assert_eq!(layout.anchor, TextAnchor::End);
        assert!((layout.dy_em - 0.3).abs() < 1e-9);
        assert!((layout.offset_x - 25.0).abs() < 1e-9);
        assert!((layout.offset_y - 0.0).abs() < 1e-9);
    }

    #[test]
    fn edge_positioning_needs_only_the_padding() {
        let layout = tick_label_layout(
            Orientation::Bottom,
            LabelPosition::Left,
            100.0,
            27.0,
            5.0,
            10.0,
        );
        assert_eq!(layout.anchor, TextAnchor::End);
        assert!((layout.offset_x + 10.0).abs() < 1e-9);
        assert!((layout.offset_y - 10.0).abs() < 1e-9);

        let layout = tick_label_layout(
            Orientation::Right,
            LabelPosition::Bottom,
            40.0,
            100.0,
            5.0,
            10.0,
        );
        assert_eq!(layout.anchor, TextAnchor::Start);
        assert!((layout.dy_em - 1.0).abs() < 1e-9);
        assert!((layout.offset_x - 10.0).abs() < 1e-9);
        assert!((layout.offset_y - 10.0).abs() < 1e-9);
    }

    #[test]
    #[should_panic(expected = "does not apply")]
    fn mismatched_positioning_family_panics() {
        let _ = tick_label_layout(
            Orientation::Bottom,
            LabelPosition::Top,
            100.0,
            27.0,
            5.0,
            10.0,
        );
    }

    #[test]
    fn label_points_follow_the_axis_direction() {
        assert_eq!(
            tick_label_point(Orientation::Bottom, 42.0),
            Point::new(42.0, 0.0)
        );
        assert_eq!(
            tick_label_point(Orientation::Right, 42.0),
            Point::new(0.0, 42.0)
        );
    }

    #[test]
    fn anchored_bounds_follow_the_anchor() {
        let metrics = TextMetrics {
            advance_width: 30.0,
            ascent: 9.5,
            descent: 2.5,
            leading: 0.0,
        };
        let start = anchored_label_bounds(10.0, 20.0, TextAnchor::Start, &metrics);
        assert_eq!(start, Rect::new(10.0, 10.5, 40.0, 22.5));

        let middle = anchored_label_bounds(10.0, 20.0, TextAnchor::Middle, &metrics);
        assert_eq!(middle, Rect::new(-5.0, 10.5, 25.0, 22.5));

        let end = anchored_label_bounds(10.0, 20.0, TextAnchor::End, &metrics);
        assert_eq!(end, Rect::new(-20.0, 10.5, 10.0, 22.5));
    }
}
