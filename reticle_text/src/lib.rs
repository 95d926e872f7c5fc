// Copyright 2026 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement traits and basic style/metrics types for Reticle.
//!
//! This crate is deliberately small and dependency-light: it defines the
//! measurement contract axis layout needs ([`TextMeasurer`]) together with
//! the style and metrics value types that cross it. Real shaping backends
//! implement the trait in downstream crates; the built-in
//! [`HeuristicTextMeasurer`] keeps headless layout and tests deterministic.

#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;

/// Measures text without rendering it.
///
/// Axis layout only ever needs single-line extents, so the contract is one
/// call: the styled advance width plus the vertical metrics of the line box.
pub trait TextMeasurer {
    /// Measure `text` as a single line styled by `style`.
    fn measure(&self, text: &str, style: TextStyle) -> TextMetrics;
}

/// Style inputs that affect measurement.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in user-space units (CSS px).
    pub font_size: f64,
    /// Font family selection.
    pub font_family: FontFamily,
    /// Numeric font weight.
    pub font_weight: FontWeight,
    /// Normal or italic.
    pub font_style: FontStyle,
}

impl TextStyle {
    /// A style with the given size and every other field at its default.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            ..Self::default()
        }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: 12.0,
            font_family: FontFamily::SansSerif,
            font_weight: FontWeight::NORMAL,
            font_style: FontStyle::Normal,
        }
    }
}

/// Font family selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FontFamily {
    /// A serif face chosen by the backend.
    Serif,
    /// A sans-serif face chosen by the backend.
    SansSerif,
    /// A monospace face chosen by the backend.
    Monospace,
    /// A concrete family name passed through to the backend.
    Named(Arc<str>),
}

impl FontFamily {
    /// CSS generic family name, or the named family verbatim.
    #[must_use]
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }
}

/// Numeric font weight on the CSS 1..=1000 scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Regular weight (400).
    pub const NORMAL: Self = Self(400);
    /// Bold weight (700).
    pub const BOLD: Self = Self(700);
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// Slant selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontStyle {
    /// Upright glyphs.
    #[default]
    Normal,
    /// Italic glyphs.
    Italic,
}

/// Metrics for one measured line.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextMetrics {
    /// Advance width of the whole line.
    pub advance_width: f64,
    /// Distance from the baseline to the top of the line box.
    pub ascent: f64,
    /// Distance from the baseline to the bottom of the line box.
    pub descent: f64,
    /// Extra leading the backend inserts between lines.
    pub leading: f64,
}

impl TextMetrics {
    /// Height of one line box.
    #[must_use]
    pub fn line_height(&self) -> f64 {
        self.ascent + self.descent + self.leading
    }
}

/// Width-heuristic measurer for headless layout and tests.
///
/// Every character advances 0.6 em; the line box is 1.2 em, split 0.95 em
/// above the baseline and 0.25 em below. The split matches where axis label
/// baselines are placed, so a label measured here fills the thickness an axis
/// computes for it with no slack on either side.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, style: TextStyle) -> TextMetrics {
        TextMetrics {
            advance_width: 0.6 * style.font_size * text.chars().count() as f64,
            ascent: 0.95 * style.font_size,
            descent: 0.25 * style.font_size,
            leading: 0.0,
        }
    }
}

/// Clamps multi-line text to a maximum number of lines.
///
/// Formatters occasionally emit embedded newlines; axis labels only have room
/// for a fixed number of lines (usually one), so the surplus is dropped
/// rather than measured.
#[derive(Clone, Copy, Debug)]
pub struct LineWrapper {
    max_lines: Option<usize>,
}

impl LineWrapper {
    /// A wrapper that passes text through unchanged.
    #[must_use]
    pub fn new() -> Self {
        Self { max_lines: None }
    }

    /// Builder-style setter for the line limit.
    #[must_use]
    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = Some(max_lines);
        self
    }

    /// The configured line limit, if any.
    #[must_use]
    pub fn max_lines(&self) -> Option<usize> {
        self.max_lines
    }

    /// `text` with any lines past the limit removed.
    #[must_use]
    pub fn wrap(&self, text: &str) -> String {
        match self.max_lines {
            None => String::from(text),
            Some(max_lines) => {
                let mut out = String::new();
                for (i, line) in text.split('\n').take(max_lines).enumerate() {
                    if i > 0 {
                        out.push('\n');
                    }
                    out.push_str(line);
                }
                out
            }
        }
    }
}

impl Default for LineWrapper {
    fn default() -> Self {
        Self::new()
    }
}
