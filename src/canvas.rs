use std::fs::File;
use std::io::Write;
use std::path::Path;

/// RGB fill color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLUE: Color = Color { r: 0x00, g: 0x00, b: 0xff };
    pub const RED: Color = Color { r: 0xff, g: 0x00, b: 0x00 };
    pub const WHITE: Color = Color { r: 0xff, g: 0xff, b: 0xff };

    /// Format as a hex color string, e.g. "#0000ff"
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Axis-aligned filled rectangle, borderless
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Color,
}

/// Drawing surface that accepts shapes one at a time.
///
/// The surface is owned by the caller and passed in explicitly; the drawing
/// routines in this crate only append to it.
pub trait Canvas {
    fn add_rect(&mut self, rect: Rect);
}

/// Canvas implementation that records shapes in insertion order and can
/// export them as a standalone SVG file.
#[derive(Debug, Default, Clone)]
pub struct ShapeBuffer {
    shapes: Vec<Rect>,
}

impl ShapeBuffer {
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    pub fn shapes(&self) -> &[Rect] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Bounding box of all recorded shapes as (min_x, min_y, max_x, max_y)
    fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let first = self.shapes.first()?;
        let mut min_x = first.x;
        let mut min_y = first.y;
        let mut max_x = first.x + first.width;
        let mut max_y = first.y + first.height;
        for rect in &self.shapes[1..] {
            min_x = min_x.min(rect.x);
            min_y = min_y.min(rect.y);
            max_x = max_x.max(rect.x + rect.width);
            max_y = max_y.max(rect.y + rect.height);
        }
        Some((min_x, min_y, max_x, max_y))
    }

    /// Render recorded shapes as SVG markup, one <rect> per shape in
    /// insertion order. The viewBox is fitted to the shapes with a margin
    /// of one unit on each side.
    pub fn to_svg(&self) -> String {
        let (min_x, min_y, max_x, max_y) = self.bounds().unwrap_or((0.0, 0.0, 1.0, 1.0));
        let margin = 1.0;
        let mut svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{} {} {} {}\">\n",
            min_x - margin,
            min_y - margin,
            (max_x - min_x) + 2.0 * margin,
            (max_y - min_y) + 2.0 * margin,
        );
        for rect in &self.shapes {
            svg.push_str(&format!(
                "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>\n",
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                rect.fill.to_hex(),
            ));
        }
        svg.push_str("</svg>\n");
        svg
    }

    /// Write the recorded shapes to an SVG file
    pub fn write_svg(&self, output_path: &Path) -> Result<(), String> {
        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create output directory: {}", e))?;
        }

        let mut file = File::create(output_path)
            .map_err(|e| format!("Failed to create SVG file {}: {}", output_path.display(), e))?;

        file.write_all(self.to_svg().as_bytes())
            .map_err(|e| format!("Failed to write SVG file {}: {}", output_path.display(), e))?;

        Ok(())
    }
}

impl Canvas for ShapeBuffer {
    fn add_rect(&mut self, rect: Rect) {
        self.shapes.push(rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_to_hex() {
        assert_eq!(Color::BLUE.to_hex(), "#0000ff");
        assert_eq!(Color::RED.to_hex(), "#ff0000");
        assert_eq!(Color::WHITE.to_hex(), "#ffffff");
    }

    #[test]
    fn test_shape_buffer_records_in_order() {
        let mut buffer = ShapeBuffer::new();
        let a = Rect { x: 0.0, y: 0.0, width: 1.0, height: 2.0, fill: Color::BLUE };
        let b = Rect { x: 1.0, y: 0.0, width: 1.0, height: 2.0, fill: Color::RED };
        buffer.add_rect(a);
        buffer.add_rect(b);
        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.shapes()[0], a);
        assert_eq!(buffer.shapes()[1], b);
    }

    #[test]
    fn test_to_svg_one_rect_per_shape() {
        let mut buffer = ShapeBuffer::new();
        buffer.add_rect(Rect { x: 0.5, y: 20.0, width: 1.0, height: 2.0, fill: Color::BLUE });
        buffer.add_rect(Rect { x: 1.5, y: 20.0, width: 1.0, height: 2.0, fill: Color::RED });
        let svg = buffer.to_svg();
        assert_eq!(svg.matches("<rect").count(), 2);
        assert!(svg.contains("fill=\"#0000ff\""));
        assert!(svg.contains("fill=\"#ff0000\""));
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_write_svg_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bands.svg");

        let mut buffer = ShapeBuffer::new();
        buffer.add_rect(Rect { x: 0.0, y: 0.0, width: 1.0, height: 1.0, fill: Color::WHITE });
        buffer.write_svg(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("fill=\"#ffffff\""));
    }
}
