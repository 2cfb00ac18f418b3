use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::canvas::{Canvas, Color, Rect};

/// Default baseline y-coordinate for secondary-structure bands
pub const DEFAULT_YPOS: f64 = 20.0;
/// Default band height
pub const DEFAULT_HEIGHT: f64 = 2.0;

/// Per-residue secondary-structure assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SsCode {
    Sheet,
    Helix,
    Loop,
}

impl SsCode {
    /// Parse a single-character code. Anything outside {S, H, L} is None.
    pub fn from_char(c: char) -> Option<SsCode> {
        match c {
            'S' => Some(SsCode::Sheet),
            'H' => Some(SsCode::Helix),
            'L' => Some(SsCode::Loop),
            _ => None,
        }
    }

    /// Band rectangle for this code at position `p`, width 1, centered
    /// horizontally on `p`. Loop bands are a quarter height and sit
    /// vertically centered within the full band.
    fn band(self, p: f64, ypos: f64, height: f64) -> Rect {
        match self {
            SsCode::Sheet => Rect {
                x: p - 0.5,
                y: ypos,
                width: 1.0,
                height,
                fill: Color::BLUE,
            },
            SsCode::Helix => Rect {
                x: p - 0.5,
                y: ypos,
                width: 1.0,
                height,
                fill: Color::RED,
            },
            SsCode::Loop => Rect {
                x: p - 0.5,
                y: ypos + height * (3.0 / 8.0),
                width: 1.0,
                height: height / 4.0,
                fill: Color::WHITE,
            },
        }
    }
}

/// Draw secondary-structure bands onto a canvas.
///
/// Each character in `ss` is paired positionally with the x-coordinate at the
/// same index; one filled rectangle is added per recognized code (sheet: blue,
/// helix: red, loop: white). Unrecognized characters add no shape and raise
/// no error. Pairing stops at the shorter of the two sequences.
pub fn draw_ss<C: Canvas>(canvas: &mut C, ss: &str, x: &[f64], ypos: f64, height: f64) {
    for (c, &p) in ss.chars().zip(x.iter()) {
        if let Some(code) = SsCode::from_char(c) {
            canvas.add_rect(code.band(p, ypos, height));
        }
    }
}

/// Read a secondary-structure string from a text file.
///
/// Returns the first line that is not empty and does not start with `#` or
/// `@`, whitespace-trimmed. Errors if the file is unreadable or holds no
/// such line.
pub fn read_ss(ss_path: impl AsRef<Path>) -> Result<String, String> {
    let ss_path = ss_path.as_ref();
    let file = File::open(ss_path)
        .map_err(|e| format!("Failed to open ss file {}: {}", ss_path.display(), e))?;

    let reader = BufReader::new(file);
    for line_result in reader.lines() {
        let line = line_result.map_err(|e| format!("Error reading line: {}", e))?;
        if line.starts_with('#') || line.starts_with('@') {
            continue;
        }
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
    }

    Err(format!(
        "No secondary-structure line found in {}",
        ss_path.display()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::ShapeBuffer;
    use std::io::Write;

    #[test]
    fn test_draw_ss_one_shape_per_code_in_order() {
        let mut buffer = ShapeBuffer::new();
        draw_ss(&mut buffer, "SHL", &[1.0, 2.0, 3.0], DEFAULT_YPOS, DEFAULT_HEIGHT);

        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.shapes()[0].fill, Color::BLUE);
        assert_eq!(buffer.shapes()[1].fill, Color::RED);
        assert_eq!(buffer.shapes()[2].fill, Color::WHITE);
    }

    #[test]
    fn test_draw_ss_sheet_geometry() {
        let mut buffer = ShapeBuffer::new();
        draw_ss(&mut buffer, "S", &[4.0], 20.0, 2.0);

        let rect = buffer.shapes()[0];
        assert_eq!(rect.x, 3.5);
        assert_eq!(rect.y, 20.0);
        assert_eq!(rect.width, 1.0);
        assert_eq!(rect.height, 2.0);
    }

    #[test]
    fn test_draw_ss_loop_geometry() {
        let mut buffer = ShapeBuffer::new();
        draw_ss(&mut buffer, "L", &[1.0], 20.0, 2.0);

        let rect = buffer.shapes()[0];
        assert_eq!(rect.x, 0.5);
        assert_eq!(rect.y, 20.75); // ypos + height * 3/8
        assert_eq!(rect.height, 0.5); // height / 4
    }

    #[test]
    fn test_draw_ss_unknown_code_skipped() {
        let mut buffer = ShapeBuffer::new();
        draw_ss(&mut buffer, "SXH", &[1.0, 2.0, 3.0], DEFAULT_YPOS, DEFAULT_HEIGHT);

        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.shapes()[0].fill, Color::BLUE);
        // The X position gets no shape; the helix band lands at x=3
        assert_eq!(buffer.shapes()[1].x, 2.5);
    }

    #[test]
    fn test_draw_ss_empty_inputs() {
        let mut buffer = ShapeBuffer::new();
        draw_ss(&mut buffer, "", &[], DEFAULT_YPOS, DEFAULT_HEIGHT);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_read_ss_skips_comments_and_blanks() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"# assignment for chain A\n\nSHLLH\n").unwrap();
        assert_eq!(read_ss(file.path()).unwrap(), "SHLLH");
    }

    #[test]
    fn test_read_ss_empty_file_is_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = read_ss(file.path()).unwrap_err();
        assert!(err.contains("No secondary-structure line"));
    }

    #[test]
    fn test_ss_code_from_char() {
        assert_eq!(SsCode::from_char('S'), Some(SsCode::Sheet));
        assert_eq!(SsCode::from_char('H'), Some(SsCode::Helix));
        assert_eq!(SsCode::from_char('L'), Some(SsCode::Loop));
        assert_eq!(SsCode::from_char('s'), None);
        assert_eq!(SsCode::from_char('X'), None);
    }
}
