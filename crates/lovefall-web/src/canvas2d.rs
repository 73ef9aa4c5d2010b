//! Canvas backend over the browser's `CanvasRenderingContext2d`.
//!
//! Replays lyon path events as 2D-context path calls, so shapes come out
//! exactly as the engine describes them without CPU tessellation.

use glam::Vec2;
use lovefall_engine::{Canvas, VectorColor, Viewport};
use lyon::path::{Path, PathEvent};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct Canvas2d {
    element: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    size: Vec2,
}

impl Canvas2d {
    pub fn new(element: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
        let size = Vec2::new(element.width() as f32, element.height() as f32);
        Self { element, ctx, size }
    }

    fn trace(&self, path: &Path) {
        self.ctx.begin_path();
        for event in path.iter() {
            match event {
                PathEvent::Begin { at } => self.ctx.move_to(at.x as f64, at.y as f64),
                PathEvent::Line { to, .. } => self.ctx.line_to(to.x as f64, to.y as f64),
                PathEvent::Quadratic { ctrl, to, .. } => self.ctx.quadratic_curve_to(
                    ctrl.x as f64,
                    ctrl.y as f64,
                    to.x as f64,
                    to.y as f64,
                ),
                PathEvent::Cubic { ctrl1, ctrl2, to, .. } => self.ctx.bezier_curve_to(
                    ctrl1.x as f64,
                    ctrl1.y as f64,
                    ctrl2.x as f64,
                    ctrl2.y as f64,
                    to.x as f64,
                    to.y as f64,
                ),
                PathEvent::End { close: true, .. } => self.ctx.close_path(),
                PathEvent::End { .. } => {}
            }
        }
    }
}

/// CSS color string, e.g. `rgba(255, 100, 150, 0.75)`.
pub fn css_rgba(color: VectorColor) -> String {
    let [r, g, b] = color.rgb8();
    format!("rgba({r}, {g}, {b}, {})", color.a)
}

impl Canvas for Canvas2d {
    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.size.x as f64, self.size.y as f64);
    }

    fn resize(&mut self, viewport: Viewport) {
        // Assigning the backing-store size also wipes the bitmap and resets context state.
        self.element.set_width(viewport.width() as u32);
        self.element.set_height(viewport.height() as u32);
        self.size = viewport.size();
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, offset: Vec2) {
        if let Err(err) = self.ctx.translate(offset.x as f64, offset.y as f64) {
            log::warn!("translate failed: {err:?}");
        }
    }

    fn rotate(&mut self, radians: f32) {
        if let Err(err) = self.ctx.rotate(radians as f64) {
            log::warn!("rotate failed: {err:?}");
        }
    }

    fn fill_path(&mut self, path: &Path, color: VectorColor) {
        self.ctx.set_fill_style_str(&css_rgba(color));
        self.trace(path);
        self.ctx.fill();
    }

    fn stroke_path(&mut self, path: &Path, width: f32, color: VectorColor) {
        self.ctx.set_stroke_style_str(&css_rgba(color));
        self.ctx.set_line_width(width as f64);
        self.trace(path);
        self.ctx.stroke();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lovefall_engine::SymbolKind;

    #[test]
    fn css_matches_palette() {
        assert_eq!(css_rgba(SymbolKind::Heart.color(0.75)), "rgba(255, 100, 150, 0.75)");
        assert_eq!(css_rgba(SymbolKind::Star.color(1.0)), "rgba(255, 255, 200, 1)");
    }
}
