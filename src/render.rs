use crate::constants::*;
use boing_core::constants::KNOB_RADIUS;
use boing_core::RenderFrame;
use glam::DVec2;
use std::f64::consts::{FRAC_PI_4, TAU};
use wasm_bindgen::JsValue;
use web_sys as web;

/// Colour palette for one display theme.
pub struct Theme {
    pub background: &'static str,
    pub wall_fill: &'static str,
    pub wall_edge: &'static str,
    pub tension: &'static str,
    pub spring: &'static str,
    pub shadow: &'static str,
    pub knob_inner: &'static str,
    pub knob_outer: &'static str,
    pub knob_outline: &'static str,
    pub highlight: &'static str,
}

pub const LIGHT: Theme = Theme {
    background: "#ffffff",
    wall_fill: "#cccccc",
    wall_edge: "#aaaaaa",
    tension: "rgba(0,0,0,0.3)",
    spring: "#444444",
    shadow: "rgba(0,0,0,0.3)",
    knob_inner: "#ff6b6b",
    knob_outer: "#c23616",
    knob_outline: "#2d3436",
    highlight: "rgba(255,255,255,0.4)",
};

pub const DARK: Theme = Theme {
    background: "#1e1f24",
    wall_fill: "#3a3c44",
    wall_edge: "#55585f",
    tension: "rgba(255,255,255,0.3)",
    spring: "#c8cbd2",
    shadow: "rgba(0,0,0,0.6)",
    knob_inner: "#ff8080",
    knob_outer: "#b3261e",
    knob_outline: "#0f1012",
    highlight: "rgba(255,255,255,0.35)",
};

#[inline]
pub fn theme(dark: bool) -> &'static Theme {
    if dark {
        &DARK
    } else {
        &LIGHT
    }
}

/// Draw one frame, back to front: background, heatmap, wall, tension line,
/// spring, knob.
pub fn draw(
    ctx: &web::CanvasRenderingContext2d,
    frame: &RenderFrame,
    heatmap: Option<&web::HtmlImageElement>,
    dpr: f64,
) -> Result<(), JsValue> {
    let theme = theme(frame.dark);
    let (w, h) = (frame.layout.width, frame.layout.height);
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;

    ctx.clear_rect(0.0, 0.0, w, h);
    ctx.set_fill_style_str(theme.background);
    ctx.fill_rect(0.0, 0.0, w, h);

    if let (true, Some(img)) = (frame.heatmap, heatmap) {
        ctx.set_global_alpha(HEATMAP_ALPHA);
        ctx.draw_image_with_html_image_element_and_dw_and_dh(img, 0.0, 0.0, w, h)?;
        ctx.set_global_alpha(1.0);
    }

    draw_wall(ctx, theme, frame.layout.anchor.x, h);
    if let Some(target) = frame.drag_target {
        draw_tension(ctx, theme, frame.knob, target)?;
    }
    draw_spring(ctx, theme, &frame.spring_path);
    draw_knob(ctx, theme, frame.knob)?;
    Ok(())
}

fn draw_wall(ctx: &web::CanvasRenderingContext2d, theme: &Theme, wall_x: f64, height: f64) {
    ctx.set_fill_style_str(theme.wall_fill);
    ctx.fill_rect(0.0, 0.0, wall_x, height);
    ctx.set_stroke_style_str(theme.wall_edge);
    ctx.set_line_width(1.0);
    ctx.begin_path();
    ctx.move_to(wall_x, 0.0);
    ctx.line_to(wall_x, height);
    ctx.stroke();
}

fn draw_tension(
    ctx: &web::CanvasRenderingContext2d,
    theme: &Theme,
    knob: DVec2,
    target: DVec2,
) -> Result<(), JsValue> {
    let dash = js_sys::Array::of2(&TENSION_DASH.into(), &TENSION_DASH.into());
    ctx.begin_path();
    ctx.move_to(knob.x, knob.y);
    ctx.line_to(target.x, target.y);
    ctx.set_line_dash(&dash)?;
    ctx.set_stroke_style_str(theme.tension);
    ctx.set_line_width(TENSION_LINE_WIDTH);
    ctx.stroke();
    ctx.set_line_dash(&js_sys::Array::new())?;

    ctx.begin_path();
    ctx.arc(target.x, target.y, TENSION_DOT_RADIUS, 0.0, TAU)?;
    ctx.set_fill_style_str(theme.tension);
    ctx.fill();
    Ok(())
}

fn draw_spring(ctx: &web::CanvasRenderingContext2d, theme: &Theme, path: &[DVec2]) {
    let Some((first, rest)) = path.split_first() else {
        return;
    };
    ctx.begin_path();
    ctx.move_to(first.x, first.y);
    for p in rest {
        ctx.line_to(p.x, p.y);
    }
    ctx.set_line_cap("round");
    ctx.set_line_join("round");
    ctx.set_line_width(SPRING_LINE_WIDTH);
    ctx.set_stroke_style_str(theme.spring);
    ctx.set_shadow_color(theme.shadow);
    ctx.set_shadow_blur(SHADOW_BLUR);
    ctx.set_shadow_offset_y(SHADOW_OFFSET_Y);
    ctx.stroke();

    ctx.set_shadow_color("transparent");
    ctx.set_shadow_blur(0.0);
    ctx.set_shadow_offset_y(0.0);
}

fn draw_knob(
    ctx: &web::CanvasRenderingContext2d,
    theme: &Theme,
    knob: DVec2,
) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(knob.x, knob.y, KNOB_RADIUS, 0.0, TAU)?;
    let grad =
        ctx.create_radial_gradient(knob.x - 4.0, knob.y - 4.0, 2.0, knob.x, knob.y, KNOB_RADIUS)?;
    grad.add_color_stop(0.0, theme.knob_inner)?;
    grad.add_color_stop(1.0, theme.knob_outer)?;
    ctx.set_fill_style_canvas_gradient(&grad);
    ctx.fill();
    ctx.set_stroke_style_str(theme.knob_outline);
    ctx.set_line_width(2.0);
    ctx.stroke();

    // specular highlight
    ctx.begin_path();
    ctx.ellipse(knob.x - 6.0, knob.y - 6.0, 4.0, 2.0, FRAC_PI_4, 0.0, TAU)?;
    ctx.set_fill_style_str(theme.highlight);
    ctx.fill();
    Ok(())
}
