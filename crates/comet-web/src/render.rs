//! 2D-context rasterization of the field: gradient trails, radial glow
//! discs, solid cores, ripple rings, spark dots and the shooting star.

use std::f64::consts::TAU;

use comet_core::constants::STAR_COLOR;
use comet_core::{Comet, CometField, Ripple, ShootingStar, Spark, TrailPoint};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub struct Canvas2d {
    ctx: web::CanvasRenderingContext2d,
}

impl Canvas2d {
    /// `None` when no 2D context is available; the field then runs without
    /// drawing rather than failing.
    pub fn new(canvas: &web::HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<web::CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { ctx })
    }

    pub fn render(&self, field: &CometField, dpr: f64) {
        let (w, h) = field.viewport();
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        self.ctx.clear_rect(0.0, 0.0, w as f64, h as f64);

        // comets are already ordered far to near
        for c in &field.comets {
            self.draw_comet(c);
        }
        if let Some(star) = &field.shooting_star {
            self.draw_star(star);
        }
        for r in &field.ripples {
            self.draw_ripple(r);
        }
        for s in &field.sparks {
            self.draw_spark(s);
        }
    }

    fn trace_trail(&self, trail: &[TrailPoint]) {
        self.ctx.begin_path();
        self.ctx
            .move_to(trail[0].pos.x as f64, trail[0].pos.y as f64);
        for p in trail.iter().skip(1) {
            self.ctx.line_to(p.pos.x as f64, p.pos.y as f64);
        }
    }

    fn draw_comet(&self, c: &Comet) {
        let ctx = &self.ctx;
        let lp = c.layer.params();
        let (x, y) = (c.pos.x as f64, c.pos.y as f64);

        if c.trail.len() > 1 {
            self.trace_trail(&c.trail);
            let head = c.trail[0].pos;
            let tail = c.trail[c.trail.len() - 1].pos;
            let grad = ctx.create_linear_gradient(
                head.x as f64,
                head.y as f64,
                tail.x as f64,
                tail.y as f64,
            );
            _ = grad.add_color_stop(0.0, &c.trail_color.css(lp.trail_alpha));
            _ = grad.add_color_stop(1.0, &c.trail_color.css(0.0));
            #[allow(deprecated)]
            ctx.set_stroke_style(grad.as_ref());
            ctx.set_line_width((c.size * c.scale * 0.7) as f64);
            ctx.set_line_cap("round");
            ctx.stroke();
        }

        let glow_r = (c.glow_radius * c.scale) as f64;
        if glow_r > 0.0 {
            if let Ok(grad) = ctx.create_radial_gradient(x, y, 0.0, x, y, glow_r) {
                _ = grad.add_color_stop(0.0, &c.glow_color.css(0.25));
                _ = grad.add_color_stop(0.5, &c.glow_color.css(0.06));
                _ = grad.add_color_stop(1.0, &c.glow_color.css(0.0));
                #[allow(deprecated)]
                ctx.set_fill_style(grad.as_ref());
                ctx.begin_path();
                _ = ctx.arc(x, y, glow_r, 0.0, TAU);
                ctx.fill();
            }
        }

        ctx.begin_path();
        _ = ctx.arc(x, y, (c.size * c.scale) as f64, 0.0, TAU);
        #[allow(deprecated)]
        ctx.set_fill_style(&JsValue::from_str(&c.core_color.css(0.9)));
        ctx.set_shadow_color(&c.core_color.css(0.6));
        ctx.set_shadow_blur(6.0);
        ctx.fill();
        ctx.set_shadow_blur(0.0);
    }

    fn draw_star(&self, star: &ShootingStar) {
        let ctx = &self.ctx;
        if star.trail.len() > 1 {
            self.trace_trail(&star.trail);
            let head = star.trail[0].pos;
            let tail = star.trail[star.trail.len() - 1].pos;
            let grad = ctx.create_linear_gradient(
                head.x as f64,
                head.y as f64,
                tail.x as f64,
                tail.y as f64,
            );
            _ = grad.add_color_stop(0.0, &STAR_COLOR.css(0.8 * star.life));
            _ = grad.add_color_stop(1.0, &STAR_COLOR.css(0.0));
            #[allow(deprecated)]
            ctx.set_stroke_style(grad.as_ref());
            ctx.set_line_width(1.6);
            ctx.set_line_cap("round");
            ctx.stroke();
        }
        ctx.begin_path();
        _ = ctx.arc(star.pos.x as f64, star.pos.y as f64, 2.2, 0.0, TAU);
        #[allow(deprecated)]
        ctx.set_fill_style(&JsValue::from_str(&STAR_COLOR.css(star.life)));
        ctx.fill();
    }

    fn draw_ripple(&self, r: &Ripple) {
        let ctx = &self.ctx;
        ctx.begin_path();
        _ = ctx.arc(r.pos.x as f64, r.pos.y as f64, r.radius as f64, 0.0, TAU);
        #[allow(deprecated)]
        ctx.set_stroke_style(&JsValue::from_str(&r.color.css(r.alpha * 0.4)));
        ctx.set_line_width(1.0);
        ctx.stroke();
    }

    fn draw_spark(&self, s: &Spark) {
        let ctx = &self.ctx;
        ctx.begin_path();
        _ = ctx.arc(
            s.pos.x as f64,
            s.pos.y as f64,
            (s.size * s.life) as f64,
            0.0,
            TAU,
        );
        #[allow(deprecated)]
        ctx.set_fill_style(&JsValue::from_str(&s.color.css(s.life * 0.6)));
        ctx.fill();
    }
}
