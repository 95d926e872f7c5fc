// Copyright 2026 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis and drawer demos for `reticle_charts`.
mod html;
mod svg;

use std::sync::Arc;

use kurbo::Rect;
use reticle_charts::{
    AttrValue, AttributeProjections, AxisScale, DrawStep, ImmediateAnimator, LabelPosition,
    LinearScale, NumericAxis, Symbol, SymbolDrawer, TimeScale, fixed, time_formatter,
};
use reticle_text::HeuristicTextMeasurer;

fn main() {
    let sections = vec![
        orientations_demo(),
        label_positions_demo(),
        crowding_demo(),
        time_axis_demo(),
        scatter_demo(),
    ];

    let html = html::render_report("Reticle charts demo", &sections);
    std::fs::write("reticle_charts_demo.html", html).expect("write reticle_charts_demo.html");
    println!("wrote reticle_charts_demo.html");
}

fn measurer() -> Arc<HeuristicTextMeasurer> {
    Arc::new(HeuristicTextMeasurer)
}

fn orientations_demo() -> html::HtmlSection {
    let plot = Rect::new(0.0, 0.0, 220.0, 120.0);

    let x = Arc::new(LinearScale::new((0.0, 100.0), (0.0, plot.width())).with_tick_count(5));
    let y = Arc::new(LinearScale::new((0.0, 50.0), (plot.height(), 0.0)).with_tick_count(5));

    let mut left = NumericAxis::left(y.clone());
    let mut right = NumericAxis::right(y.clone());
    let mut top = NumericAxis::top(x.clone());
    let mut bottom = NumericAxis::bottom(x.clone());
    for axis in [&mut left, &mut right, &mut top, &mut bottom] {
        axis.setup(measurer());
    }

    let left_width = left.compute_width();
    let right_width = right.compute_width();
    let top_height = top.compute_height();
    let bottom_height = bottom.compute_height();

    left.resize(left_width, plot.height());
    right.resize(right_width, plot.height());
    top.resize(plot.width(), top_height);
    bottom.resize(plot.width(), bottom_height);
    for axis in [&mut left, &mut right, &mut top, &mut bottom] {
        axis.render_immediately();
    }

    let view = Rect::new(
        0.0,
        0.0,
        left_width + plot.width() + right_width,
        top_height + plot.height() + bottom_height,
    );
    let mut doc = svg::SvgDoc::new(view.inflate(6.0, 6.0));

    doc.open_group(0.0, top_height);
    doc.axis(&left);
    doc.close_group();

    doc.open_group(left_width + plot.width(), top_height);
    doc.axis(&right);
    doc.close_group();

    doc.open_group(left_width, 0.0);
    doc.axis(&top);
    doc.close_group();

    doc.open_group(left_width, top_height + plot.height());
    doc.axis(&bottom);
    doc.close_group();

    html::HtmlSection {
        title: "Orientations",
        description: "Numeric axes on all four sides of a plot. Each axis measures the \
                      thickness it wants before the boxes are allocated; marks grow inward \
                      from the plot edge.",
        svg: doc.finish(),
    }
}

fn label_positions_demo() -> html::HtmlSection {
    let mut doc = svg::SvgDoc::new(Rect::new(-10.0, -10.0, 250.0, 110.0));
    let mut offset_y = 0.0;
    for position in [
        LabelPosition::Left,
        LabelPosition::Center,
        LabelPosition::Right,
    ] {
        let scale = Arc::new(LinearScale::new((0.0, 4.0), (0.0, 240.0)).with_tick_count(5));
        let mut axis = NumericAxis::bottom(scale);
        axis.set_tick_label_position(position)
            .expect("horizontal positioning");
        axis.setup(measurer());
        let height = axis.compute_height();
        axis.resize(240.0, height);
        axis.render_immediately();

        doc.open_group(0.0, offset_y);
        doc.axis(&axis);
        doc.close_group();
        offset_y += height + 14.0;
    }

    html::HtmlSection {
        title: "Label positions",
        description: "The same bottom axis with Left, Center, and Right label positioning. \
                      Edge positioning shares the mark band with the labels and keeps a tick \
                      mark only where its label went away.",
        svg: doc.finish(),
    }
}

fn crowding_demo() -> html::HtmlSection {
    let mut doc = svg::SvgDoc::new(Rect::new(-6.0, -6.0, 366.0, 70.0));
    let mut offset_y = 0.0;
    for width in [360.0, 160.0] {
        let scale =
            Arc::new(LinearScale::new((0.0, 1.0), (14.0, width - 14.0)).with_tick_count(5));
        let mut axis = NumericAxis::bottom(scale).with_formatter(fixed(2));
        axis.setup(measurer());
        let height = axis.compute_height();
        axis.resize(width, height);
        axis.render_immediately();

        doc.open_group(0.0, offset_y);
        doc.axis(&axis);
        doc.close_group();
        offset_y += height + 14.0;
    }

    html::HtmlSection {
        title: "Crowding",
        description: "The same ticks on a wide and a narrow axis. When neighboring labels \
                      would collide, every other label is dropped until the survivors fit.",
        svg: doc.finish(),
    }
}

fn time_axis_demo() -> html::HtmlSection {
    let scale = Arc::new(TimeScale::new((0.0, 600.0), (20.0, 340.0)).with_tick_count(6));
    let step = scale.tick_step();
    let mut axis = NumericAxis::bottom(scale).with_formatter(time_formatter(step));
    axis.setup(measurer());
    let height = axis.compute_height();
    axis.resize(360.0, height);
    axis.render_immediately();

    let mut doc = svg::SvgDoc::new(Rect::new(-6.0, -6.0, 366.0, height + 6.0));
    doc.axis(&axis);

    html::HtmlSection {
        title: "Time axis",
        description: "A ten-minute span ticked at whole two-minute steps, labeled with the \
                      step-aware clock formatter.",
        svg: doc.finish(),
    }
}

fn scatter_demo() -> html::HtmlSection {
    let plot = Rect::new(0.0, 0.0, 240.0, 140.0);
    let x = Arc::new(LinearScale::new((0.0, 10.0), (0.0, plot.width())).with_tick_count(5));
    let y = Arc::new(LinearScale::new((0.0, 8.0), (plot.height(), 0.0)).with_tick_count(4));

    let mut left = NumericAxis::left(y.clone());
    let mut bottom = NumericAxis::bottom(x.clone());
    left.setup(measurer());
    bottom.setup(measurer());
    let left_width = left.compute_width();
    let bottom_height = bottom.compute_height();
    left.resize(left_width, plot.height());
    bottom.resize(plot.width(), bottom_height);
    left.render_immediately();
    bottom.render_immediately();

    let data: Vec<(f64, f64)> = vec![
        (0.5, 1.2),
        (1.8, 2.9),
        (3.2, 2.1),
        (4.4, 4.8),
        (5.9, 3.4),
        (7.1, 6.2),
        (8.3, 5.0),
        (9.4, 7.1),
    ];

    let palette = ["#1b9e77", "#d95f02", "#7570b3", "#e7298a"];
    let symbols = [Symbol::Circle, Symbol::Square, Symbol::Diamond, Symbol::Cross];

    let mut projections = AttributeProjections::new();
    {
        let x = x.clone();
        projections.set("x", move |d: &(f64, f64), _| AttrValue::from(x.scale(d.0)));
    }
    {
        let y = y.clone();
        projections.set("y", move |d: &(f64, f64), _| AttrValue::from(y.scale(d.1)));
    }
    projections.set_constant("r", 5.0);
    projections.set("symbol", move |_: &(f64, f64), i| {
        AttrValue::from(symbols[i % symbols.len()].path_data())
    });
    projections.set("fill", move |_: &(f64, f64), i| {
        AttrValue::from(palette[i % palette.len()])
    });
    projections.set_constant("opacity", 0.85);

    let mut drawer = SymbolDrawer::new();
    drawer.draw(
        &data,
        &[DrawStep {
            projections,
            animator: &ImmediateAnimator,
        }],
    );

    let view = Rect::new(
        0.0,
        0.0,
        left_width + plot.width(),
        plot.height() + bottom_height,
    );
    let mut doc = svg::SvgDoc::new(view.inflate(8.0, 8.0));

    doc.open_group(0.0, 0.0);
    doc.axis(&left);
    doc.close_group();

    doc.open_group(left_width, plot.height());
    doc.axis(&bottom);
    doc.close_group();

    doc.open_group(left_width, 0.0);
    doc.symbols(drawer.nodes());
    doc.close_group();

    html::HtmlSection {
        title: "Scatter",
        description: "The symbol drawer projecting position, radius, shape, and color per \
                      datum. Radius rides in the transform scale, so the unit paths never \
                      change; fill is applied directly instead of animating.",
        svg: doc.finish(),
    }
}
