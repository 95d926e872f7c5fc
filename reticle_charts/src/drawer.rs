// Copyright 2026 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attribute projection for point-like datasets.
//!
//! A drawer owns retained nodes, one per datum. Each draw step resolves a
//! map of per-datum projector functions into concrete attribute sets and
//! hands them to an [`Animator`] for application. The positional projectors
//! `x`, `y`, `r`, and `symbol` are never applied directly; they are composed
//! into `transform` and `d` attributes, which is what SVG symbol layers
//! consume.

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;
use kurbo::Point;

use crate::symbol::Symbol;

/// A single resolved attribute value.
#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    /// A numeric attribute (coordinates, sizes, opacities).
    Number(f64),
    /// A textual attribute (paints, path data, transforms).
    Text(String),
}

impl AttrValue {
    /// The numeric value, if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    /// The text, if this is textual.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Text(t) => Some(t),
        }
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(String::from(value))
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A per-datum attribute function.
pub type Projector<D> = Arc<dyn Fn(&D, usize) -> AttrValue>;

/// Named projectors for one dataset.
pub struct AttributeProjections<D> {
    entries: HashMap<String, Projector<D>>,
}

impl<D> AttributeProjections<D> {
    /// An empty projector map.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Registers `projector` under `name`, replacing any previous entry.
    pub fn set<F>(&mut self, name: impl Into<String>, projector: F)
    where
        F: Fn(&D, usize) -> AttrValue + 'static,
    {
        self.entries.insert(name.into(), Arc::new(projector));
    }

    /// Registers a constant value under `name`.
    pub fn set_constant(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        let value = value.into();
        self.set(name, move |_, _| value.clone());
    }

    /// The projector registered under `name`.
    pub fn get(&self, name: &str) -> Option<&Projector<D>> {
        self.entries.get(name)
    }

    /// Removes and returns the projector registered under `name`.
    pub fn remove(&mut self, name: &str) -> Option<Projector<D>> {
        self.entries.remove(name)
    }

    /// Iterates over the registered projectors in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Projector<D>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The number of registered projectors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no projectors are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<D> Default for AttributeProjections<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> Clone for AttributeProjections<D> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<D> fmt::Debug for AttributeProjections<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("AttributeProjections")
            .field("names", &names)
            .finish()
    }
}

/// One resolved attribute map per datum.
pub type AttributeSet = HashMap<String, AttrValue>;

/// One retained shape primitive.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SymbolNode {
    /// Attributes applied so far, across all draw steps.
    pub attrs: AttributeSet,
}

impl SymbolNode {
    /// The current value of `name`, if set.
    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attrs.get(name)
    }
}

/// Applies resolved attribute sets to retained nodes.
///
/// Implementations are free to stage the application over time (transitions)
/// or apply it synchronously; the drawer assumes fire-and-forget.
pub trait Animator {
    /// Applies `attrs[i]` to `nodes[i]`.
    fn animate(&self, nodes: &mut [SymbolNode], attrs: &[AttributeSet]);
}

/// Applies attribute sets immediately, with no transition.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImmediateAnimator;

impl Animator for ImmediateAnimator {
    fn animate(&self, nodes: &mut [SymbolNode], attrs: &[AttributeSet]) {
        for (node, set) in nodes.iter_mut().zip(attrs.iter()) {
            for (name, value) in set {
                node.attrs.insert(name.clone(), value.clone());
            }
        }
    }
}

/// One drawing step: a projector map plus the animator that applies it.
pub struct DrawStep<'a, D> {
    /// Attribute projectors for this step.
    pub projections: AttributeProjections<D>,
    /// Applies the resolved attributes.
    pub animator: &'a dyn Animator,
}

impl<D> fmt::Debug for DrawStep<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrawStep")
            .field("projections", &self.projections)
            .finish_non_exhaustive()
    }
}

/// Draws one symbol per datum from projected attributes.
///
/// The drawer keeps its own snapshot of the most recent step's projector map
/// so position queries stay answerable after the caller's map has moved on.
/// The `fill` attribute bypasses the animator and is applied directly, so
/// paints never interpolate mid-transition.
pub struct SymbolDrawer<D> {
    nodes: Vec<SymbolNode>,
    projections: AttributeProjections<D>,
}

impl<D> SymbolDrawer<D> {
    /// A drawer with no bound data.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            projections: AttributeProjections::new(),
        }
    }

    /// Binds `data` and runs every draw step in order.
    ///
    /// Panics if a step's map lacks any of the `x`, `y`, `r`, or `symbol`
    /// projectors; supplying them is the caller's contract.
    pub fn draw(&mut self, data: &[D], steps: &[DrawStep<'_, D>]) {
        // Enter/exit binding: grow with fresh nodes, drop stale ones.
        self.nodes.resize_with(data.len(), SymbolNode::default);
        for step in steps {
            self.draw_step(data, step);
        }
    }

    fn draw_step(&mut self, data: &[D], step: &DrawStep<'_, D>) {
        self.projections = step.projections.clone();

        let mut derived = step.projections.clone();
        let x = derived
            .remove("x")
            .expect("symbol drawer needs an `x` projector");
        let y = derived
            .remove("y")
            .expect("symbol drawer needs a `y` projector");
        let r = derived
            .remove("r")
            .expect("symbol drawer needs an `r` projector");
        let symbol = derived
            .remove("symbol")
            .expect("symbol drawer needs a `symbol` projector");
        let fill = derived.remove("fill");

        let mut resolved: Vec<AttributeSet> = Vec::with_capacity(data.len());
        for (index, datum) in data.iter().enumerate() {
            let mut attrs = AttributeSet::new();
            for (name, projector) in derived.iter() {
                attrs.insert(String::from(name), projector(datum, index));
            }
            let tx = x(datum, index).as_f64().unwrap_or(0.0);
            let ty = y(datum, index).as_f64().unwrap_or(0.0);
            let scale = r(datum, index).as_f64().unwrap_or(0.0) / Symbol::NATIVE_RADIUS;
            attrs.insert(
                String::from("transform"),
                AttrValue::Text(alloc::format!("translate({tx},{ty}) scale({scale})")),
            );
            attrs.insert(String::from("d"), symbol(datum, index));
            resolved.push(attrs);
        }

        if let Some(fill) = fill {
            for (index, (node, datum)) in self.nodes.iter_mut().zip(data.iter()).enumerate() {
                node.attrs.insert(String::from("fill"), fill(datum, index));
            }
        }

        step.animator.animate(&mut self.nodes, &resolved);
    }

    /// The retained nodes, one per bound datum.
    pub fn nodes(&self) -> &[SymbolNode] {
        &self.nodes
    }

    /// Where `datum` lands in pixels, per the most recent draw's projectors.
    ///
    /// Panics if nothing has been drawn yet; position queries only make
    /// sense against a drawn dataset.
    pub fn pixel_point(&self, datum: &D, index: usize) -> Point {
        let coord = |name: &str| {
            let projector = self
                .projections
                .get(name)
                .expect("pixel queries need the positional projectors of a prior draw");
            projector(datum, index).as_f64().unwrap_or(0.0)
        };
        Point::new(coord("x"), coord("y"))
    }
}

impl<D> Default for SymbolDrawer<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> fmt::Debug for SymbolDrawer<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymbolDrawer")
            .field("nodes", &self.nodes)
            .field("projections", &self.projections)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use core::cell::RefCell;

    use super::*;

    fn scatter_projections() -> AttributeProjections<(f64, f64)> {
        let mut projections = AttributeProjections::new();
        projections.set("x", |d: &(f64, f64), _| AttrValue::Number(d.0));
        projections.set("y", |d: &(f64, f64), _| AttrValue::Number(d.1));
        projections.set_constant("r", 100.0);
        projections.set("symbol", |_: &(f64, f64), _| {
            AttrValue::Text(Symbol::Circle.path_data())
        });
        projections
    }

    #[test]
    fn draw_composes_transform_and_path_data() {
        let mut drawer = SymbolDrawer::new();
        let data = [(10.0, 20.0)];
        drawer.draw(
            &data,
            &[DrawStep {
                projections: scatter_projections(),
                animator: &ImmediateAnimator,
            }],
        );

        let node = &drawer.nodes()[0];
        assert_eq!(
            node.attr("transform"),
            Some(&AttrValue::Text(String::from("translate(10,20) scale(2)")))
        );
        assert_eq!(
            node.attr("d"),
            Some(&AttrValue::Text(Symbol::Circle.path_data()))
        );
        // Positional projectors never land as plain attributes.
        assert_eq!(node.attr("x"), None);
        assert_eq!(node.attr("r"), None);
    }

    #[test]
    #[should_panic(expected = "needs an `x` projector")]
    fn missing_positional_projector_panics() {
        let mut projections = scatter_projections();
        projections.remove("x");
        let mut drawer = SymbolDrawer::new();
        drawer.draw(
            &[(0.0, 0.0)],
            &[DrawStep {
                projections,
                animator: &ImmediateAnimator,
            }],
        );
    }

    #[derive(Default)]
    struct RecordingAnimator {
        seen: RefCell<Vec<AttributeSet>>,
    }

    impl Animator for RecordingAnimator {
        fn animate(&self, _nodes: &mut [SymbolNode], attrs: &[AttributeSet]) {
            self.seen.replace(attrs.to_vec());
        }
    }

    #[test]
    fn fill_bypasses_the_animator() {
        let mut projections = scatter_projections();
        projections.set_constant("fill", "#1b9e77");
        projections.set_constant("opacity", 0.5);

        let recorder = RecordingAnimator::default();
        let mut drawer = SymbolDrawer::new();
        drawer.draw(
            &[(1.0, 2.0)],
            &[DrawStep {
                projections,
                animator: &recorder,
            }],
        );

        // The node got its fill even though the recorder applied nothing.
        assert_eq!(
            drawer.nodes()[0].attr("fill"),
            Some(&AttrValue::Text(String::from("#1b9e77")))
        );

        let seen = recorder.seen.borrow();
        assert_eq!(seen.len(), 1);
        assert!(!seen[0].contains_key("fill"));
        assert!(seen[0].contains_key("opacity"));
        assert!(seen[0].contains_key("transform"));
        assert!(seen[0].contains_key("d"));
    }

    #[test]
    fn rebinding_drops_stale_nodes() {
        let mut drawer = SymbolDrawer::new();
        let step = |projections| DrawStep {
            projections,
            animator: &ImmediateAnimator,
        };
        drawer.draw(
            &[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)],
            &[step(scatter_projections())],
        );
        assert_eq!(drawer.nodes().len(), 3);

        drawer.draw(&[(5.0, 5.0)], &[step(scatter_projections())]);
        assert_eq!(drawer.nodes().len(), 1);
    }

    #[test]
    fn pixel_point_answers_from_the_snapshot() {
        let mut drawer = SymbolDrawer::new();
        drawer.draw(
            &[(10.0, 20.0)],
            &[DrawStep {
                projections: scatter_projections(),
                animator: &ImmediateAnimator,
            }],
        );
        assert_eq!(drawer.pixel_point(&(10.0, 20.0), 0), Point::new(10.0, 20.0));
        // Queries may use data that was never bound; only the projectors
        // matter.
        assert_eq!(drawer.pixel_point(&(7.0, 3.0), 5), Point::new(7.0, 3.0));
    }

    #[test]
    fn immediate_animator_merges_attribute_sets() {
        let mut nodes = alloc::vec![SymbolNode::default(), SymbolNode::default()];
        let mut first = AttributeSet::new();
        first.insert(String::from("opacity"), AttrValue::Number(0.25));
        let mut second = AttributeSet::new();
        second.insert(String::from("stroke"), AttrValue::from("none"));

        ImmediateAnimator.animate(&mut nodes, &[first, second]);
        assert_eq!(nodes[0].attr("opacity"), Some(&AttrValue::Number(0.25)));
        assert_eq!(nodes[1].attr("stroke"), Some(&AttrValue::from("none")));
        assert_eq!(nodes[1].attr("opacity"), None);
    }
}
