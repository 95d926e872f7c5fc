// Copyright 2026 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `reticle_charts_demo`.

use kurbo::{Line, Rect};
use peniko::Brush;
use reticle_charts::{AttrValue, NumericAxis, StrokeStyle, SymbolNode, TextAnchor};

#[derive(Debug)]
pub(crate) struct SvgDoc {
    view_box: Rect,
    body: String,
}

impl SvgDoc {
    pub(crate) fn new(view_box: Rect) -> Self {
        Self {
            view_box,
            body: String::new(),
        }
    }

    /// Opens a `<g>` translated by `(dx, dy)`; pair with
    /// [`close_group`](Self::close_group).
    pub(crate) fn open_group(&mut self, dx: f64, dy: f64) {
        self.body
            .push_str(&format!("<g transform=\"translate({dx},{dy})\">\n"));
    }

    pub(crate) fn close_group(&mut self) {
        self.body.push_str("</g>\n");
    }

    pub(crate) fn line(&mut self, line: Line, style: &StrokeStyle) {
        self.body.push_str(&format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
            line.p0.x, line.p0.y, line.p1.x, line.p1.y
        ));
        write_paint_attr(&mut self.body, "stroke", &style.brush);
        self.body
            .push_str(&format!(r#" stroke-width="{}"/>"#, style.stroke_width));
        self.body.push('\n');
    }

    /// Emits an axis in axis-local coordinates: baseline, surviving marks,
    /// then surviving labels inside a translated label group.
    pub(crate) fn axis(&mut self, axis: &NumericAxis) {
        let style = axis.style();
        self.line(axis.baseline(), &style.rule);
        for mark in axis.tick_marks() {
            if mark.visible {
                self.line(mark.line, &style.rule);
            }
        }

        let layout = axis.label_layout();
        let anchor = match layout.anchor {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        };
        self.open_group(layout.offset_x, layout.offset_y);
        for label in axis.tick_labels() {
            if !label.visible {
                continue;
            }
            self.body.push_str(&format!(
                r#"<text x="{}" y="{}" dx="{}em" dy="{}em" text-anchor="{anchor}" font-size="{}""#,
                label.x, label.y, layout.dx_em, layout.dy_em, style.label_font_size
            ));
            write_paint_attr(&mut self.body, "fill", &style.label_fill);
            self.body.push('>');
            self.body.push_str(&escape_xml(&label.text));
            self.body.push_str("</text>\n");
        }
        self.close_group();
    }

    /// Emits drawer output: one `<path>` per node carrying the node's
    /// attributes verbatim.
    pub(crate) fn symbols(&mut self, nodes: &[SymbolNode]) {
        for node in nodes {
            self.body.push_str("<path");
            let mut names: Vec<&str> = node.attrs.keys().map(String::as_str).collect();
            names.sort_unstable();
            for name in names {
                let value = match &node.attrs[name] {
                    AttrValue::Number(n) => format!("{n}"),
                    AttrValue::Text(s) => escape_xml(s),
                };
                self.body.push_str(&format!(r#" {name}="{value}""#));
            }
            self.body.push_str("/>\n");
        }
    }

    pub(crate) fn finish(self) -> String {
        let vb = self.view_box;
        let mut out = String::new();
        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="{} {} {} {}" width="{}" height="{}" preserveAspectRatio="xMinYMin meet">"#,
            vb.x0,
            vb.y0,
            vb.width(),
            vb.height(),
            vb.width(),
            vb.height()
        ));
        out.push('\n');
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let paint = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (paint, opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
