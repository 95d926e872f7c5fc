// Copyright 2026 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Numeric axis layout: thickness measurement, tick placement, and label
//! pruning.
//!
//! [`NumericAxis`] is renderer-agnostic: it owns retained tick-mark and
//! tick-label nodes and recomputes their geometry and visibility on demand.
//! The protocol mirrors how chart containers drive their components:
//!
//! 1. construct with a scale and an orientation;
//! 2. [`setup`](NumericAxis::setup) with a text measurer;
//! 3. ask [`compute_width`](NumericAxis::compute_width) or
//!    [`compute_height`](NumericAxis::compute_height) for the thickness the
//!    axis wants, allocate a box, and [`resize`](NumericAxis::resize);
//! 4. [`render_immediately`](NumericAxis::render_immediately), then read the
//!    nodes.
//!
//! After a scale domain change, [`rescale`](NumericAxis::rescale) either
//! repaints in place or reports that the allocation no longer fits.

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Line, Rect};
use peniko::Brush;
use peniko::color::palette::css;
use reticle_text::{LineWrapper, TextMeasurer, TextStyle};

use crate::boundary;
use crate::format::{self, Formatter};
use crate::geometry::{self, TickLabelLayout};
use crate::overlap;
use crate::scale::{AxisScale, TickSource, tick_values};

/// Stroke styling for baselines and tick marks.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in pixels.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// A solid stroke of the given color and width.
    pub fn solid(color: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: color.into(),
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            brush: Brush::Solid(css::BLACK),
            stroke_width: 1.0,
        }
    }
}

/// Visual styling for an axis.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisStyle {
    /// Stroke for the baseline and tick marks.
    pub rule: StrokeStyle,
    /// Fill for tick label text.
    pub label_fill: Brush,
    /// Tick label font size in pixels.
    pub label_font_size: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            rule: StrokeStyle::default(),
            label_fill: Brush::Solid(css::BLACK),
            label_font_size: 10.0,
        }
    }
}

/// Which side of the plot an axis sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Above the plot.
    Top,
    /// Below the plot.
    Bottom,
    /// To the left of the plot.
    Left,
    /// To the right of the plot.
    Right,
}

impl Orientation {
    /// Whether ticks spread along the x direction.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    /// Whether ticks spread along the y direction.
    pub fn is_vertical(self) -> bool {
        !self.is_horizontal()
    }
}

/// Where tick labels sit relative to their marks.
///
/// `Left`/`Center`/`Right` apply to horizontal axes, `Top`/`Center`/`Bottom`
/// to vertical ones. `Center` stacks labels past the marks; the edge
/// variants tuck them beside the marks inside the same band.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LabelPosition {
    /// Above the mark (vertical axes).
    Top,
    /// In line with the mark.
    Center,
    /// Below the mark (vertical axes).
    Bottom,
    /// Left of the mark (horizontal axes).
    Left,
    /// Right of the mark (horizontal axes).
    Right,
}

impl Default for LabelPosition {
    fn default() -> Self {
        Self::Center
    }
}

/// Errors from axis configuration setters.
#[derive(Debug, Clone, PartialEq)]
pub enum AxisConfigError {
    /// The label position belongs to the other orientation family.
    LabelPositionMismatch {
        /// The rejected position.
        position: LabelPosition,
        /// The axis orientation it does not fit.
        orientation: Orientation,
    },
    /// A length, padding, or margin setter received a negative value.
    NegativeMeasure {
        /// Which setting was being changed.
        setting: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// Outcome of [`NumericAxis::rescale`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rescale {
    /// The thickness diverged from the allocation; re-run layout, resize,
    /// and render again.
    NeedsRelayout,
    /// The axis repainted in place.
    Repainted,
    /// The axis has no measurer yet; nothing was done.
    NotReady,
}

/// One retained tick-mark segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickMarkNode {
    /// Mark geometry in axis-local coordinates.
    pub line: Line,
    /// Whether the mark survived the visibility filters.
    pub visible: bool,
}

/// One retained tick label.
#[derive(Clone, Debug, PartialEq)]
pub struct TickLabelNode {
    /// The domain value this label names.
    pub value: f64,
    /// Formatted (and line-clamped) label text.
    pub text: String,
    /// Per-label coordinate before the container translation; combine with
    /// [`NumericAxis::label_layout`] to position the glyphs.
    pub x: f64,
    /// See [`TickLabelNode::x`].
    pub y: f64,
    /// Bounding box in axis-local coordinates, translation applied.
    pub bounds: Rect,
    /// Whether the label survived the visibility filters.
    pub visible: bool,
}

/// An axis for continuous numeric scales.
pub struct NumericAxis {
    scale: Arc<dyn AxisScale>,
    tick_source: TickSource,
    orientation: Orientation,
    style: AxisStyle,
    formatter: Formatter,
    wrapper: LineWrapper,
    measurer: Option<Arc<dyn TextMeasurer>>,
    width: f64,
    height: f64,
    tick_length: f64,
    end_tick_length: f64,
    tick_label_padding: f64,
    margin: f64,
    tick_label_position: LabelPosition,
    show_end_tick_labels: bool,
    uses_text_width_approximation: bool,
    computed_width: Option<f64>,
    computed_height: Option<f64>,
    marks: Vec<TickMarkNode>,
    labels: Vec<TickLabelNode>,
}

impl NumericAxis {
    /// Creates an axis for `scale` on the given side of the plot.
    ///
    /// Defaults: 5 px tick marks (ends included), 10 px label padding,
    /// 15 px relayout margin, `Center` label positioning, end labels
    /// suppressed, exact text measurement, and the general-purpose
    /// formatter at six decimal places.
    pub fn new(scale: Arc<dyn AxisScale>, orientation: Orientation) -> Self {
        let tick_source = scale.tick_source();
        Self {
            scale,
            tick_source,
            orientation,
            style: AxisStyle::default(),
            formatter: format::general(6),
            wrapper: LineWrapper::new().with_max_lines(1),
            measurer: None,
            width: 0.0,
            height: 0.0,
            tick_length: 5.0,
            end_tick_length: 5.0,
            tick_label_padding: 10.0,
            margin: 15.0,
            tick_label_position: LabelPosition::Center,
            show_end_tick_labels: false,
            uses_text_width_approximation: false,
            computed_width: None,
            computed_height: None,
            marks: Vec::new(),
            labels: Vec::new(),
        }
    }

    /// Creates a bottom-oriented axis.
    pub fn bottom(scale: Arc<dyn AxisScale>) -> Self {
        Self::new(scale, Orientation::Bottom)
    }

    /// Creates a top-oriented axis.
    pub fn top(scale: Arc<dyn AxisScale>) -> Self {
        Self::new(scale, Orientation::Top)
    }

    /// Creates a left-oriented axis.
    pub fn left(scale: Arc<dyn AxisScale>) -> Self {
        Self::new(scale, Orientation::Left)
    }

    /// Creates a right-oriented axis.
    pub fn right(scale: Arc<dyn AxisScale>) -> Self {
        Self::new(scale, Orientation::Right)
    }

    /// Builder-style setter for the visual style.
    pub fn with_style(mut self, style: AxisStyle) -> Self {
        self.style = style;
        self
    }

    /// Builder-style setter for the tick formatter.
    pub fn with_formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Builder-style setter for end-label visibility.
    pub fn with_show_end_tick_labels(mut self, show: bool) -> Self {
        self.show_end_tick_labels = show;
        self
    }

    /// Supplies the text measurer. Must happen before measurement,
    /// rendering, or rescaling.
    pub fn setup(&mut self, measurer: Arc<dyn TextMeasurer>) {
        self.measurer = Some(measurer);
        self.invalidate_thickness();
    }

    /// Whether [`setup`](Self::setup) has happened.
    pub fn is_setup(&self) -> bool {
        self.measurer.is_some()
    }

    /// Assigns the axis box. Layout engines call this with a box at least
    /// as thick as the last computed width/height.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// The side of the plot this axis sits on.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The scale this axis annotates.
    pub fn scale(&self) -> &dyn AxisScale {
        &*self.scale
    }

    /// The current tick formatter.
    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    /// Replaces the tick formatter.
    pub fn set_formatter(&mut self, formatter: Formatter) {
        self.formatter = formatter;
        self.invalidate_thickness();
    }

    /// The current visual style.
    pub fn style(&self) -> &AxisStyle {
        &self.style
    }

    /// Replaces the visual style.
    pub fn set_style(&mut self, style: AxisStyle) {
        self.style = style;
        self.invalidate_thickness();
    }

    /// Length of interior tick marks, in pixels.
    pub fn tick_length(&self) -> f64 {
        self.tick_length
    }

    /// Sets the length of interior tick marks.
    pub fn set_tick_length(&mut self, length: f64) -> Result<(), AxisConfigError> {
        if length < 0.0 {
            return Err(AxisConfigError::NegativeMeasure {
                setting: "tick_length",
                value: length,
            });
        }
        self.tick_length = length;
        self.invalidate_thickness();
        Ok(())
    }

    /// Length of the first and last tick marks, in pixels.
    pub fn end_tick_length(&self) -> f64 {
        self.end_tick_length
    }

    /// Sets the length of the first and last tick marks.
    pub fn set_end_tick_length(&mut self, length: f64) -> Result<(), AxisConfigError> {
        if length < 0.0 {
            return Err(AxisConfigError::NegativeMeasure {
                setting: "end_tick_length",
                value: length,
            });
        }
        self.end_tick_length = length;
        self.invalidate_thickness();
        Ok(())
    }

    /// Padding between tick marks and labels, in pixels.
    pub fn tick_label_padding(&self) -> f64 {
        self.tick_label_padding
    }

    /// Sets the padding between tick marks and labels. The same distance
    /// separates neighboring labels in the crowding filter.
    pub fn set_tick_label_padding(&mut self, padding: f64) -> Result<(), AxisConfigError> {
        if padding < 0.0 {
            return Err(AxisConfigError::NegativeMeasure {
                setting: "tick_label_padding",
                value: padding,
            });
        }
        self.tick_label_padding = padding;
        self.invalidate_thickness();
        Ok(())
    }

    /// Slack a vertical axis tolerates before asking for relayout when its
    /// labels narrow, in pixels.
    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Sets the relayout margin.
    pub fn set_margin(&mut self, margin: f64) -> Result<(), AxisConfigError> {
        if margin < 0.0 {
            return Err(AxisConfigError::NegativeMeasure {
                setting: "margin",
                value: margin,
            });
        }
        self.margin = margin;
        Ok(())
    }

    /// Where labels sit relative to their marks.
    pub fn tick_label_position(&self) -> LabelPosition {
        self.tick_label_position
    }

    /// Sets the label positioning. Rejects positions from the wrong
    /// orientation family and leaves the axis untouched in that case.
    pub fn set_tick_label_position(
        &mut self,
        position: LabelPosition,
    ) -> Result<(), AxisConfigError> {
        let fits = match self.orientation {
            Orientation::Top | Orientation::Bottom => matches!(
                position,
                LabelPosition::Left | LabelPosition::Center | LabelPosition::Right
            ),
            Orientation::Left | Orientation::Right => matches!(
                position,
                LabelPosition::Top | LabelPosition::Center | LabelPosition::Bottom
            ),
        };
        if !fits {
            return Err(AxisConfigError::LabelPositionMismatch {
                position,
                orientation: self.orientation,
            });
        }
        self.tick_label_position = position;
        self.invalidate_thickness();
        Ok(())
    }

    /// Whether the first and last tick labels may be shown.
    pub fn show_end_tick_labels(&self) -> bool {
        self.show_end_tick_labels
    }

    /// Sets whether the first and last tick labels may be shown.
    pub fn set_show_end_tick_labels(&mut self, show: bool) {
        self.show_end_tick_labels = show;
        self.invalidate_thickness();
    }

    /// Whether width measurement approximates from a reference character.
    pub fn uses_text_width_approximation(&self) -> bool {
        self.uses_text_width_approximation
    }

    /// Enables or disables approximate width measurement. Approximation
    /// measures one reference character and multiplies by label length,
    /// trading fidelity for fewer measurer calls.
    pub fn set_uses_text_width_approximation(&mut self, enable: bool) {
        self.uses_text_width_approximation = enable;
        self.invalidate_thickness();
    }

    /// The current axis box width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// The current axis box height.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// The width reported by the last [`compute_width`](Self::compute_width),
    /// or `None` if configuration changed since.
    pub fn computed_width(&self) -> Option<f64> {
        self.computed_width
    }

    /// The height reported by the last
    /// [`compute_height`](Self::compute_height), or `None` if configuration
    /// changed since.
    pub fn computed_height(&self) -> Option<f64> {
        self.computed_height
    }

    /// The baseline segment for the current box.
    pub fn baseline(&self) -> Line {
        geometry::baseline_line(self.orientation, self.width, self.height)
    }

    /// The shared label placement for the current configuration and box.
    pub fn label_layout(&self) -> TickLabelLayout {
        geometry::tick_label_layout(
            self.orientation,
            self.tick_label_position,
            self.width,
            self.height,
            self.label_tick_length(),
            self.tick_label_padding,
        )
    }

    /// Tick marks from the last render.
    pub fn tick_marks(&self) -> &[TickMarkNode] {
        &self.marks
    }

    /// Tick labels from the last render.
    pub fn tick_labels(&self) -> &[TickLabelNode] {
        &self.labels
    }

    /// The thickness a vertical axis wants: mark band, padding, and the
    /// widest formatted label (edge positioning overlays the label band on
    /// the mark band instead of stacking them).
    ///
    /// Panics if [`setup`](Self::setup) has not happened.
    pub fn compute_width(&mut self) -> f64 {
        let style = self.label_style();
        let measurer = self
            .measurer
            .as_deref()
            .expect("setup() must be called before compute_width()");
        let labels = self.formatted_labels();
        let max_label_extent = if self.uses_text_width_approximation {
            let reference = measurer.measure("M", style).advance_width;
            labels
                .iter()
                .map(|(_, text)| text.chars().count() as f64 * reference)
                .fold(0.0, f64::max)
        } else {
            labels
                .iter()
                .map(|(_, text)| measurer.measure(text, style.clone()).advance_width)
                .fold(0.0, f64::max)
        };
        let width = self.thickness_for(max_label_extent);
        self.computed_width = Some(width);
        width
    }

    /// The thickness a horizontal axis wants: mark band, padding, and one
    /// line box. Label text never matters here, only the font.
    ///
    /// Panics if [`setup`](Self::setup) has not happened.
    pub fn compute_height(&mut self) -> f64 {
        let measurer = self
            .measurer
            .as_deref()
            .expect("setup() must be called before compute_height()");
        let line_height = measurer.measure("Mg", self.label_style()).line_height();
        let height = self.thickness_for(line_height);
        self.computed_height = Some(height);
        height
    }

    /// Reacts to a scale domain change.
    ///
    /// Horizontal axes always repaint in place; their thickness does not
    /// depend on label text. A vertical axis remeasures first: if the new
    /// width outgrows the allocation, or undershoots it by more than the
    /// relayout margin, the caller must re-run layout. Repaints happen
    /// eagerly here; relayout is only reported, never performed.
    pub fn rescale(&mut self) -> Rescale {
        if !self.is_setup() {
            return Rescale::NotReady;
        }
        if self.orientation.is_horizontal() {
            self.render_immediately();
            return Rescale::Repainted;
        }
        let new_width = self.compute_width();
        if new_width > self.width || new_width < self.width - self.margin {
            Rescale::NeedsRelayout
        } else {
            self.render_immediately();
            Rescale::Repainted
        }
    }

    /// Recomputes tick marks, labels, and visibility for the current box.
    ///
    /// Nodes are rebuilt visible, then pruned in order: end labels (unless
    /// enabled), labels escaping the axis box, crowded labels by striding,
    /// and, under edge positioning, marks whose label survived. An axis
    /// with no ticks renders no furniture and skips the filters.
    ///
    /// Panics if [`setup`](Self::setup) has not happened.
    pub fn render_immediately(&mut self) {
        let layout = self.label_layout();
        let style = self.label_style();
        let formatted = self.formatted_labels();
        let measurer = self
            .measurer
            .as_deref()
            .expect("setup() must be called before render_immediately()");

        let count = formatted.len();
        let mut marks = Vec::with_capacity(count);
        let mut labels = Vec::with_capacity(count);
        for (i, (value, text)) in formatted.into_iter().enumerate() {
            let scaled = self.scale.scale(value);
            let length = if i == 0 || i + 1 == count {
                self.end_tick_length
            } else {
                self.tick_length
            };
            marks.push(TickMarkNode {
                line: geometry::tick_mark_line(
                    self.orientation,
                    self.width,
                    self.height,
                    scaled,
                    length,
                ),
                visible: true,
            });

            let point = geometry::tick_label_point(self.orientation, scaled);
            let metrics = measurer.measure(&text, style.clone());
            let anchor_x = layout.offset_x + point.x + layout.dx_em * style.font_size;
            let anchor_y = layout.offset_y + point.y + layout.dy_em * style.font_size;
            let bounds =
                geometry::anchored_label_bounds(anchor_x, anchor_y, layout.anchor, &metrics);
            labels.push(TickLabelNode {
                value,
                text,
                x: point.x,
                y: point.y,
                bounds,
                visible: true,
            });
        }
        self.marks = marks;
        self.labels = labels;

        if self.labels.is_empty() {
            return;
        }

        let bounds = Rect::new(0.0, 0.0, self.width, self.height);
        if !self.show_end_tick_labels {
            boundary::hide_end_labels(&mut self.labels, bounds);
        }
        boundary::hide_overflowing_labels(&mut self.labels, bounds);
        self.hide_crowded_labels();
        if self.tick_label_position != LabelPosition::Center {
            boundary::hide_marks_with_shown_labels(&mut self.marks, &self.labels);
        }
    }

    /// Thins the currently visible labels to a uniform stride.
    fn hide_crowded_labels(&mut self) {
        let mut padding = self.tick_label_padding;
        // Edge-positioned labels sit between marks; give them extra air.
        if self.tick_label_position != LabelPosition::Center {
            padding *= 3.0;
        }
        let visible: Vec<usize> = self
            .labels
            .iter()
            .enumerate()
            .filter(|(_, label)| label.visible)
            .map(|(i, _)| i)
            .collect();
        let boxes: Vec<Rect> = visible.iter().map(|&i| self.labels[i].bounds).collect();
        let stride = overlap::resolve_stride(&boxes, self.orientation, padding);
        for (kept, &i) in visible.iter().enumerate() {
            if kept % stride != 0 {
                self.labels[i].visible = false;
            }
        }
    }

    /// The mark length labels must clear: when end labels are shown they
    /// may sit past an end mark, so the longer of the two lengths governs.
    fn label_tick_length(&self) -> f64 {
        if self.show_end_tick_labels {
            self.tick_length.max(self.end_tick_length)
        } else {
            self.tick_length
        }
    }

    fn thickness_for(&self, max_label_extent: f64) -> f64 {
        let marks = self.label_tick_length();
        if self.tick_label_position == LabelPosition::Center {
            marks + self.tick_label_padding + max_label_extent
        } else {
            marks.max(self.tick_label_padding + max_label_extent)
        }
    }

    fn label_style(&self) -> TextStyle {
        TextStyle::new(self.style.label_font_size)
    }

    fn formatted_labels(&self) -> Vec<(f64, String)> {
        tick_values(&*self.scale, self.tick_source)
            .into_iter()
            .map(|value| {
                let text = self.wrapper.wrap(&(self.formatter)(value));
                (value, text)
            })
            .collect()
    }

    fn invalidate_thickness(&mut self) {
        self.computed_width = None;
        self.computed_height = None;
    }
}

impl fmt::Debug for NumericAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumericAxis")
            .field("orientation", &self.orientation)
            .field("tick_source", &self.tick_source)
            .field("style", &self.style)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("tick_length", &self.tick_length)
            .field("end_tick_length", &self.end_tick_length)
            .field("tick_label_padding", &self.tick_label_padding)
            .field("margin", &self.margin)
            .field("tick_label_position", &self.tick_label_position)
            .field("show_end_tick_labels", &self.show_end_tick_labels)
            .field(
                "uses_text_width_approximation",
                &self.uses_text_width_approximation,
            )
            .field("is_setup", &self.is_setup())
            .field("marks", &self.marks)
            .field("labels", &self.labels)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::sync::Arc;
    use alloc::vec::Vec;

    use reticle_text::{HeuristicTextMeasurer, TextMetrics};

    use crate::scale::LinearScale;

    use super::*;

    fn left_axis(domain: (f64, f64)) -> NumericAxis {
        let scale = Arc::new(LinearScale::new(domain, (100.0, 0.0)));
        let mut axis = NumericAxis::left(scale);
        axis.setup(Arc::new(HeuristicTextMeasurer));
        axis
    }

    #[test]
    fn center_width_stacks_marks_padding_and_labels() {
        let mut axis = left_axis((0.0, 100.0));
        // Widest label is "100": three characters at 0.6 em of the 10 px
        // font, past 5 px marks and 10 px padding.
        let width = axis.compute_width();
        assert!((width - 33.0).abs() < 1e-9);
        assert_eq!(axis.computed_width(), Some(width));
    }

    #[test]
    fn edge_width_is_max_of_marks_and_label_band() {
        let mut axis = left_axis((0.0, 100.0));
        axis.set_tick_label_position(LabelPosition::Top).unwrap();
        let width = axis.compute_width();
        assert!((width - 28.0).abs() < 1e-9);

        axis.set_tick_length(40.0).unwrap();
        let width = axis.compute_width();
        assert!((width - 40.0).abs() < 1e-9);
    }

    #[test]
    fn height_is_marks_padding_and_one_line_box() {
        let scale = Arc::new(LinearScale::new((0.0, 100.0), (0.0, 400.0)));
        let mut axis = NumericAxis::bottom(scale);
        axis.setup(Arc::new(HeuristicTextMeasurer));
        let height = axis.compute_height();
        assert!((height - 27.0).abs() < 1e-9);
        assert_eq!(axis.computed_height(), Some(height));
    }

    #[test]
    fn showing_end_labels_widens_the_label_band() {
        let mut axis = left_axis((0.0, 100.0));
        axis.set_end_tick_length(9.0).unwrap();
        assert!((axis.compute_width() - 33.0).abs() < 1e-9);

        axis.set_show_end_tick_labels(true);
        assert!((axis.compute_width() - 37.0).abs() < 1e-9);
    }

    // A measurer whose reference character is wider than its average
    // character, so approximation visibly diverges from exact measurement.
    struct BlockMeasurer;

    impl TextMeasurer for BlockMeasurer {
        fn measure(&self, text: &str, style: TextStyle) -> TextMetrics {
            let per_char = if text == "M" { 0.9 } else { 0.6 };
            TextMetrics {
                advance_width: per_char * style.font_size * text.chars().count() as f64,
                ascent: 0.95 * style.font_size,
                descent: 0.25 * style.font_size,
                leading: 0.0,
            }
        }
    }

    #[test]
    fn approximation_scales_the_reference_character() {
        let scale = Arc::new(LinearScale::new((0.0, 100.0), (100.0, 0.0)));
        let mut axis = NumericAxis::left(scale);
        axis.setup(Arc::new(BlockMeasurer));

        assert!((axis.compute_width() - 33.0).abs() < 1e-9);

        axis.set_uses_text_width_approximation(true);
        // "100" now costs three reference characters: 3 * 9 px.
        assert!((axis.compute_width() - 42.0).abs() < 1e-9);
    }

    #[test]
    #[should_panic(expected = "setup()")]
    fn measuring_before_setup_panics() {
        let scale = Arc::new(LinearScale::new((0.0, 1.0), (0.0, 100.0)));
        let mut axis = NumericAxis::left(scale);
        let _ = axis.compute_width();
    }

    #[test]
    fn setters_reject_negative_measures() {
        let mut axis = left_axis((0.0, 100.0));
        assert_eq!(
            axis.set_tick_length(-1.0),
            Err(AxisConfigError::NegativeMeasure {
                setting: "tick_length",
                value: -1.0,
            })
        );
        assert!((axis.tick_length() - 5.0).abs() < 1e-9);

        assert!(axis.set_tick_label_padding(-0.5).is_err());
        assert!((axis.tick_label_padding() - 10.0).abs() < 1e-9);

        assert!(axis.set_margin(-3.0).is_err());
        assert!(axis.set_end_tick_length(0.0).is_ok());
    }

    #[test]
    fn label_positioning_rejects_the_wrong_family() {
        let scale = Arc::new(LinearScale::new((0.0, 1.0), (0.0, 100.0)));
        let mut axis = NumericAxis::bottom(scale);
        let err = axis.set_tick_label_position(LabelPosition::Top);
        assert_eq!(
            err,
            Err(AxisConfigError::LabelPositionMismatch {
                position: LabelPosition::Top,
                orientation: Orientation::Bottom,
            })
        );
        assert_eq!(axis.tick_label_position(), LabelPosition::Center);

        assert!(axis.set_tick_label_position(LabelPosition::Left).is_ok());
        assert_eq!(axis.tick_label_position(), LabelPosition::Left);
    }

    #[test]
    fn configuration_changes_invalidate_computed_thickness() {
        let mut axis = left_axis((0.0, 100.0));
        let _ = axis.compute_width();
        assert!(axis.computed_width().is_some());

        axis.set_tick_length(6.0).unwrap();
        assert_eq!(axis.computed_width(), None);
    }

    fn bottom_axis_over(range: (f64, f64)) -> NumericAxis {
        let scale = Arc::new(LinearScale::new((0.0, 4.0), range).with_tick_count(5));
        let mut axis = NumericAxis::bottom(scale);
        axis.setup(Arc::new(HeuristicTextMeasurer));
        axis
    }

    #[test]
    fn marks_and_baseline_follow_the_scale() {
        let mut axis = bottom_axis_over((0.0, 100.0));
        axis.set_end_tick_length(8.0).unwrap();
        axis.resize(100.0, 27.0);
        axis.render_immediately();

        let marks = axis.tick_marks();
        assert_eq!(marks.len(), 5);
        assert_eq!(marks[0].line, Line::new((0.0, 0.0), (0.0, 8.0)));
        assert_eq!(marks[1].line, Line::new((25.0, 0.0), (25.0, 5.0)));
        assert_eq!(marks[4].line, Line::new((100.0, 0.0), (100.0, 8.0)));
        assert!(marks.iter().all(|m| m.visible));
        assert_eq!(axis.baseline(), Line::new((0.0, 0.0), (100.0, 0.0)));

        // End labels spill over the box edges and default to hidden;
        // interior labels stay.
        let shown: Vec<bool> = axis.tick_labels().iter().map(|l| l.visible).collect();
        assert_eq!(shown, alloc::vec![false, true, true, true, false]);
        assert_eq!(axis.tick_labels()[2].text, "2");
    }

    #[test]
    fn rendering_is_idempotent() {
        let mut axis = bottom_axis_over((0.0, 100.0));
        axis.resize(100.0, 27.0);
        axis.render_immediately();
        let marks = axis.tick_marks().to_vec();
        let labels = axis.tick_labels().to_vec();

        axis.render_immediately();
        assert_eq!(axis.tick_marks(), &marks[..]);
        assert_eq!(axis.tick_labels(), &labels[..]);
    }

    #[test]
    fn crowded_labels_thin_to_a_uniform_stride() {
        let scale = Arc::new(LinearScale::new((0.0, 4.0), (40.0, 160.0)).with_tick_count(5));
        let mut axis = NumericAxis::bottom(scale).with_formatter(format::fixed(4));
        axis.set_tick_label_padding(3.0).unwrap();
        axis.setup(Arc::new(HeuristicTextMeasurer));
        let height = axis.compute_height();
        axis.resize(200.0, height);
        axis.render_immediately();

        // "0.0000" runs 36 px wide on a 30 px pitch: neighbors collide, so
        // every other label is kept.
        let shown: Vec<bool> = axis.tick_labels().iter().map(|l| l.visible).collect();
        assert_eq!(shown, alloc::vec![true, false, true, false, true]);
        assert!(axis.tick_marks().iter().all(|m| m.visible));
    }

    #[test]
    fn edge_mode_hides_marks_whose_label_survives() {
        let scale = Arc::new(LinearScale::new((0.0, 4.0), (40.0, 160.0)).with_tick_count(5));
        let mut axis = NumericAxis::bottom(scale);
        axis.set_tick_label_position(LabelPosition::Left).unwrap();
        axis.setup(Arc::new(HeuristicTextMeasurer));
        let height = axis.compute_height();
        axis.resize(200.0, height);
        axis.render_immediately();

        let label_shown: Vec<bool> = axis.tick_labels().iter().map(|l| l.visible).collect();
        assert_eq!(label_shown, alloc::vec![true, false, true, false, true]);

        // Marks yield wherever a label is on display.
        let mark_shown: Vec<bool> = axis.tick_marks().iter().map(|m| m.visible).collect();
        assert_eq!(mark_shown, alloc::vec![false, true, false, true, false]);
    }

    #[test]
    fn vertical_rescale_compares_against_the_margin() {
        let scale = Arc::new(LinearScale::new((0.0, 10.0), (100.0, 0.0)));
        let mut axis = NumericAxis::left(scale.clone());
        axis.setup(Arc::new(HeuristicTextMeasurer));
        let width = axis.compute_width();
        assert!((width - 27.0).abs() < 1e-9);
        axis.resize(width, 100.0);

        // Wider labels always force a relayout.
        scale.set_domain((0.0, 1_000_000.0));
        assert_eq!(axis.rescale(), Rescale::NeedsRelayout);

        let width = axis.compute_width();
        assert!((width - 57.0).abs() < 1e-9);
        axis.resize(width, 100.0);
        assert_eq!(axis.rescale(), Rescale::Repainted);

        // Narrowing within the margin repaints in place.
        scale.set_domain((0.0, 99_999.0));
        assert_eq!(axis.rescale(), Rescale::Repainted);

        // Narrowing past the margin gives the space back.
        scale.set_domain((0.0, 10.0));
        assert_eq!(axis.rescale(), Rescale::NeedsRelayout);
    }

    #[test]
    fn horizontal_rescale_repaints_eagerly() {
        let scale = Arc::new(LinearScale::new((0.0, 4.0), (0.0, 400.0)).with_tick_count(5));
        let mut axis = NumericAxis::bottom(scale.clone());

        // Not set up yet: nothing to do.
        assert_eq!(axis.rescale(), Rescale::NotReady);

        axis.setup(Arc::new(HeuristicTextMeasurer));
        axis.resize(400.0, 27.0);
        axis.render_immediately();

        scale.set_domain((0.0, 8.0));
        assert_eq!(axis.rescale(), Rescale::Repainted);
        // The repaint picked up the new ticks.
        assert_eq!(axis.tick_labels()[1].value, 2.0);
        assert_eq!(axis.tick_labels()[4].value, 8.0);
    }

    #[test]
    fn tickless_domains_render_no_furniture() {
        let scale = Arc::new(LinearScale::new((0.0, 4.0), (0.0, 100.0)).with_tick_count(0));
        let mut axis = NumericAxis::bottom(scale);
        axis.setup(Arc::new(HeuristicTextMeasurer));
        axis.resize(100.0, 27.0);
        axis.render_immediately();
        assert!(axis.tick_marks().is_empty());
        assert!(axis.tick_labels().is_empty());

        // Thickness still covers the mark band and padding.
        assert!((axis.compute_height() - 27.0).abs() < 1e-9);
    }

    #[test]
    fn custom_formatters_shape_label_text() {
        let scale = Arc::new(LinearScale::new((0.0, 4.0), (0.0, 400.0)).with_tick_count(5));
        let mut axis = NumericAxis::bottom(scale)
            .with_formatter(Arc::new(|v: f64| alloc::format!("{v} u\nclipped")));
        axis.setup(Arc::new(HeuristicTextMeasurer));
        axis.resize(400.0, 27.0);
        axis.render_immediately();

        // The single-line wrapper drops everything past the first line.
        assert_eq!(axis.tick_labels()[1].text, "1 u");
    }
}
