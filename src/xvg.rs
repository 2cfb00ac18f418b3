use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read a two-column xvg-style data file.
///
/// Lines whose first character is `#` or `@` are metadata and skipped. Every
/// other line must carry at least two whitespace-separated numeric fields;
/// the first two are parsed as f64 and appended to the x and y vectors, in
/// file order.
///
/// Malformed lines (fewer than two fields, non-numeric fields) are an error,
/// not skipped.
pub fn read_xvg(xvg_path: impl AsRef<Path>) -> Result<(Vec<f64>, Vec<f64>), String> {
    let xvg_path = xvg_path.as_ref();
    let file = File::open(xvg_path)
        .map_err(|e| format!("Failed to open xvg file {}: {}", xvg_path.display(), e))?;

    let reader = BufReader::new(file);
    let mut x = Vec::new();
    let mut y = Vec::new();

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result.map_err(|e| format!("Error reading line: {}", e))?;

        if line.starts_with('#') || line.starts_with('@') {
            continue;
        }

        let mut fields = line.split_whitespace();
        let x_str = fields.next().ok_or_else(|| {
            format!(
                "Line {} of {}: expected two numeric fields, found none",
                line_num + 1,
                xvg_path.display()
            )
        })?;
        let y_str = fields.next().ok_or_else(|| {
            format!(
                "Line {} of {}: expected two numeric fields, found one",
                line_num + 1,
                xvg_path.display()
            )
        })?;

        let x_val: f64 = x_str.parse().map_err(|e| {
            format!("Line {} of {}: failed to parse x value '{}': {}",
                line_num + 1, xvg_path.display(), x_str, e)
        })?;
        let y_val: f64 = y_str.parse().map_err(|e| {
            format!("Line {} of {}: failed to parse y value '{}': {}",
                line_num + 1, xvg_path.display(), y_str, e)
        })?;

        x.push(x_val);
        y.push(y_val);
    }

    Ok((x, y))
}
