use crate::sim::particle::Particle;
use crate::symbols::GlyphStyle;

use super::canvas::Canvas;

/// Paint one particle: its glyph at `size`/`color`, placed at `position`
/// and turned by `rotation`. Leaves the canvas transform as it found it.
pub fn draw_particle(particle: &Particle, canvas: &mut impl Canvas, line_width: f32) {
    let glyph = particle.kind.glyph(particle.size, line_width);

    canvas.save();
    canvas.translate(particle.position);
    canvas.rotate(particle.rotation);
    for part in &glyph.parts {
        match glyph.style {
            GlyphStyle::Fill => canvas.fill_path(part, particle.color),
            GlyphStyle::Stroke { width } => canvas.stroke_path(part, width, particle.color),
        }
    }
    canvas.restore();
}

/// Clear the canvas and paint every particle in iteration order.
/// Read-only with respect to the particles.
pub fn render_frame<'a>(
    particles: impl IntoIterator<Item = &'a Particle>,
    canvas: &mut impl Canvas,
    line_width: f32,
) {
    canvas.clear();
    for particle in particles {
        draw_particle(particle, canvas, line_width);
    }
}
