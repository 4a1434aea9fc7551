//! CPU-side frame batch ready for upload to a GPU vertex buffer

use glam::Vec2;

use super::RenderSink;
use super::shapes::{self, CIRCLE_SEGMENTS};
use super::vertex::Vertex;

/// A text request. Glyph rendering belongs to the host.
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub text: String,
    pub pos: Vec2,
    pub color: [f32; 4],
}

/// Collects one frame of draw calls as line-list and triangle-list vertices
#[derive(Debug, Clone, Default)]
pub struct FrameBatch {
    pub lines: Vec<Vertex>,
    pub triangles: Vec<Vertex>,
    pub texts: Vec<TextItem>,
}

impl FrameBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset for the next frame, keeping allocations
    pub fn clear(&mut self) {
        self.lines.clear();
        self.triangles.clear();
        self.texts.clear();
    }

    pub fn line_count(&self) -> usize {
        self.lines.len() / 2
    }

    pub fn line_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.lines)
    }

    pub fn triangle_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.triangles)
    }
}

impl RenderSink for FrameBatch {
    fn draw_line(&mut self, a: Vec2, b: Vec2, color: [f32; 4]) {
        self.lines.extend_from_slice(&shapes::line(a, b, color));
    }

    fn draw_filled_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]) {
        self.triangles
            .extend(shapes::circle(center, radius, color, CIRCLE_SEGMENTS));
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, color: [f32; 4]) {
        self.texts.push(TextItem {
            text: text.to_string(),
            pos,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_bytes_match_vertex_layout() {
        let mut batch = FrameBatch::new();
        batch.draw_line(Vec2::ZERO, Vec2::ONE, [1.0; 4]);
        assert_eq!(batch.line_count(), 1);
        assert_eq!(batch.line_bytes().len(), 2 * std::mem::size_of::<Vertex>());

        batch.draw_filled_circle(Vec2::ZERO, 2.0, [1.0; 4]);
        assert_eq!(batch.triangles.len(), (CIRCLE_SEGMENTS * 3) as usize);

        batch.clear();
        assert!(batch.lines.is_empty() && batch.triangles.is_empty());
    }
}
