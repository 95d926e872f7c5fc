// Copyright 2026 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Symbol shapes for scatter-style drawers.

use alloc::string::String;
use alloc::sync::Arc;

use kurbo::{BezPath, Circle, Shape};

use crate::drawer::{AttrValue, Projector};

/// A small set of symbol shapes.
///
/// Shapes are authored around the origin at [`Symbol::NATIVE_RADIUS`];
/// drawers position and size them per datum with a translate/scale
/// transform rather than re-tessellating the path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// A circle.
    Circle,
    /// An axis-aligned square.
    Square,
    /// A square rotated 45 degrees.
    Diamond,
    /// A plus-shaped cross.
    Cross,
}

impl Symbol {
    /// The radius symbol paths are authored at.
    pub const NATIVE_RADIUS: f64 = 50.0;

    /// The path for this symbol at the native radius, centered on the origin.
    pub fn path(self) -> BezPath {
        match self {
            Self::Circle => circle_path(Self::NATIVE_RADIUS),
            Self::Square => square_path(Self::NATIVE_RADIUS),
            Self::Diamond => diamond_path(Self::NATIVE_RADIUS),
            Self::Cross => cross_path(Self::NATIVE_RADIUS),
        }
    }

    /// SVG path data for this symbol at the native radius.
    pub fn path_data(self) -> String {
        self.path().to_svg()
    }

    /// A `symbol` projector rendering every datum as this shape.
    pub fn projector<D>(self) -> Projector<D> {
        let data = self.path_data();
        Arc::new(move |_: &D, _| AttrValue::Text(data.clone()))
    }
}

fn circle_path(r: f64) -> BezPath {
    let circle = Circle::new((0.0, 0.0), r);
    // Symbols get scaled down two orders of magnitude before display, so a
    // coarse flattening tolerance is plenty.
    let tolerance = 0.1;
    circle.path_elements(tolerance).collect()
}

fn square_path(r: f64) -> BezPath {
    let mut p = BezPath::new();
    p.move_to((-r, -r));
    p.line_to((r, -r));
    p.line_to((r, r));
    p.line_to((-r, r));
    p.close_path();
    p
}

fn diamond_path(r: f64) -> BezPath {
    let mut p = BezPath::new();
    p.move_to((0.0, -r));
    p.line_to((r, 0.0));
    p.line_to((0.0, r));
    p.line_to((-r, 0.0));
    p.close_path();
    p
}

fn cross_path(r: f64) -> BezPath {
    // Arms one third as thick as they are long.
    let t = r / 3.0;
    let mut p = BezPath::new();
    p.move_to((-t, -r));
    p.line_to((t, -r));
    p.line_to((t, -t));
    p.line_to((r, -t));
    p.line_to((r, t));
    p.line_to((t, t));
    p.line_to((t, r));
    p.line_to((-t, r));
    p.line_to((-t, t));
    p.line_to((-r, t));
    p.line_to((-r, -t));
    p.line_to((-t, -t));
    p.close_path();
    p
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn paths_cover_the_native_radius() {
        for symbol in [Symbol::Circle, Symbol::Square, Symbol::Diamond, Symbol::Cross] {
            let bbox = symbol.path().bounding_box();
            assert!(
                (bbox.x0 + 50.0).abs() < 0.5 && (bbox.x1 - 50.0).abs() < 0.5,
                "{symbol:?} width off: {bbox:?}"
            );
            assert!(
                (bbox.y0 + 50.0).abs() < 0.5 && (bbox.y1 - 50.0).abs() < 0.5,
                "{symbol:?} height off: {bbox:?}"
            );
        }
    }

    #[test]
    fn path_data_is_valid_svg() {
        for symbol in [Symbol::Circle, Symbol::Square, Symbol::Diamond, Symbol::Cross] {
            let d = symbol.path_data();
            assert!(d.starts_with('M'), "path data must open with a move: {d}");
        }
    }

    #[test]
    fn projector_ignores_the_datum() {
        let project = Symbol::Diamond.projector::<i32>();
        assert_eq!(project(&7, 0), AttrValue::Text(Symbol::Diamond.path_data()));
        assert_eq!(project(&-3, 9), AttrValue::Text(Symbol::Diamond.path_data()));
    }
}
