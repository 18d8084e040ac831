//! Drawing surfaces.
//!
//! The particle field draws through [`Surface`]. In the browser that is a 2D
//! canvas; natively it is a [`CommandBuffer`] that records what was drawn.

use crate::layout::Rect;
use crate::style::Color;

/// A drawable 2D surface with a settable size.
pub trait Surface {
    /// Drawable width in pixels.
    fn width(&self) -> f64;

    /// Drawable height in pixels.
    fn height(&self) -> f64;

    /// Resizes the drawable area. Resizing discards previous contents.
    fn set_size(&mut self, width: f64, height: f64);

    /// Clears a region to transparent.
    fn clear(&mut self, region: Rect);

    /// Draws a filled circle.
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color);

    /// Returns the full drawable area.
    fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width(), self.height())
    }
}

/// A recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Region cleared.
    Clear {
        /// Cleared bounds.
        region: Rect,
    },
    /// Filled circle.
    Circle {
        /// Center X.
        x: f64,
        /// Center Y.
        y: f64,
        /// Radius.
        radius: f64,
        /// Fill color.
        color: Color,
    },
}

/// Surface that records draw commands instead of rasterizing them.
#[derive(Debug, Clone, Default)]
pub struct CommandBuffer {
    width: f64,
    height: f64,
    commands: Vec<DrawCommand>,
}

impl CommandBuffer {
    /// Creates an empty buffer with a zero-sized surface.
    #[must_use]
    pub fn new() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            commands: Vec::with_capacity(256),
        }
    }

    /// Returns every command since the last [`Self::take`].
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drains the recorded commands.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Returns the number of circles recorded.
    #[must_use]
    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }
}

impl Surface for CommandBuffer {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn set_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.commands.clear();
    }

    fn clear(&mut self, region: Rect) {
        self.commands.push(DrawCommand::Clear { region });
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
        self.commands.push(DrawCommand::Circle { x, y, radius, color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_records_in_order() {
        let mut buffer = CommandBuffer::new();
        buffer.set_size(100.0, 50.0);

        buffer.clear(buffer.bounds());
        buffer.fill_circle(10.0, 10.0, 1.0, Color::ACCENT);

        let commands = buffer.take();
        assert_eq!(commands.len(), 2);
        assert_eq!(
            commands[0],
            DrawCommand::Clear {
                region: Rect::new(0.0, 0.0, 100.0, 50.0)
            }
        );
        assert!(buffer.commands().is_empty());
    }

    #[test]
    fn test_resize_discards_contents() {
        let mut buffer = CommandBuffer::new();
        buffer.fill_circle(1.0, 1.0, 1.0, Color::WHITE);
        buffer.set_size(10.0, 10.0);
        assert_eq!(buffer.circle_count(), 0);
    }
}
