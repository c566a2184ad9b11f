use std::f64::consts::TAU;

use anyhow::{anyhow, Result};
use slope_common::render::Shape;
use slope_common::Scene;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

fn js_error(value: JsValue) -> anyhow::Error {
    anyhow!("{value:?}")
}

fn context(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(js_error)?
        .ok_or_else(|| anyhow!("canvas has no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| anyhow!("2d context is not a CanvasRenderingContext2d"))
}

/// Clears the canvas and paints `scene` onto it.
pub fn paint(canvas: &HtmlCanvasElement, scene: &Scene) -> Result<()> {
    let ctx = context(canvas)?;
    ctx.clear_rect(0.0, 0.0, scene.size, scene.size);

    for shape in &scene.shapes {
        match shape {
            Shape::Segment { from, to, color } => {
                ctx.set_stroke_style(&JsValue::from_str(color));
                ctx.begin_path();
                ctx.move_to(from.x, from.y);
                ctx.line_to(to.x, to.y);
                ctx.stroke();
            }
            Shape::Disc { center, radius, color } => {
                ctx.set_fill_style(&JsValue::from_str(color));
                ctx.begin_path();
                ctx.arc(center.x, center.y, *radius, 0.0, TAU).map_err(js_error)?;
                ctx.fill();
            }
        }
    }
    Ok(())
}
