use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

/// Default half-window radius for smoothing
pub const DEFAULT_WINDOW: usize = 3;

/// One row of smoothed output: raw value paired with its running average
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SmoothedPoint {
    pub x: f64,
    pub y: f64,
    pub y_smooth: f64,
}

/// Centered moving average with half-window radius `w`.
///
/// Each output value is the sum of `x[max(0, n-w)..min(len, n+w+1)]` divided
/// by the fixed denominator `2w + 1`, even where the window is truncated at
/// the sequence boundaries. Edge elements are therefore averaged over fewer
/// terms than the denominator implies and come out biased toward zero; this
/// matches the historical output exactly and is kept for parity with
/// existing analysis results.
///
/// Output length always equals input length; `w = 0` returns the input
/// unchanged.
pub fn moving_average(x: &[f64], w: usize) -> Vec<f64> {
    let denominator = (2 * w + 1) as f64;
    (0..x.len())
        .map(|n| {
            let start = n.saturating_sub(w);
            let end = (n + w + 1).min(x.len());
            x[start..end].iter().sum::<f64>() / denominator
        })
        .collect()
}

/// Save smoothed data to CSV file with columns x, y, y_smooth.
///
/// The three slices must have equal length; trajectories can run to millions
/// of points, so a progress bar tracks the rows written.
pub fn save_smoothed_to_csv(
    x: &[f64],
    y: &[f64],
    y_smooth: &[f64],
    output_path: &Path,
) -> Result<(), String> {
    if x.len() != y.len() || y.len() != y_smooth.len() {
        return Err(format!(
            "Mismatched column lengths: {} x values, {} y values, {} smoothed values",
            x.len(),
            y.len(),
            y_smooth.len()
        ));
    }

    let mut writer = csv::Writer::from_path(output_path)
        .map_err(|e| format!("Failed to create CSV file {}: {}", output_path.display(), e))?;

    let pb = ProgressBar::new(x.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} rows ({percent}%) | ETA: {eta}")
            .unwrap()
            .progress_chars("#>-")
    );
    pb.set_message("Writing smoothed data");

    for ((&xi, &yi), &si) in x.iter().zip(y.iter()).zip(y_smooth.iter()) {
        writer
            .serialize(SmoothedPoint { x: xi, y: yi, y_smooth: si })
            .map_err(|e| format!("Failed to write CSV row: {}", e))?;
        pb.inc(1);
    }

    pb.finish_with_message("Write complete");

    writer
        .flush()
        .map_err(|e| format!("Failed to flush CSV file: {}", e))?;

    Ok(())
}
