use plotters::prelude::*;
use thiserror::Error;

use crate::services::statistics::HISTOGRAM_BINS;

#[derive(Error, Debug)]
pub enum HistogramError {
    #[error("failed to render histogram: {0}")]
    Render(String),
}

/// Renders the savings distribution as a PNG bar chart using the same
/// fixed-width binning as the statistics reducer.
pub fn write_histogram_png(output_path: &str, savings: &[f64]) -> Result<(), HistogramError> {
    render_histogram_png(output_path, savings)
}

fn render_histogram_png(output_path: &str, savings: &[f64]) -> Result<(), HistogramError> {
    if savings.is_empty() {
        return Ok(());
    }

    let min_value = savings.iter().cloned().fold(f64::INFINITY, f64::min);
    let max_value = savings.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let range = max_value - min_value;

    // A flat distribution still gets one visible bar.
    let bin_width = if range > 0.0 { range / HISTOGRAM_BINS as f64 } else { 1.0 };
    let bin_count = if range > 0.0 { HISTOGRAM_BINS } else { 1 };

    let mut counts = vec![0usize; bin_count];
    for value in savings {
        let index = (((value - min_value) / bin_width).floor() as usize).min(bin_count - 1);
        counts[index] += 1;
    }
    let max_count = *counts.iter().max().unwrap_or(&1);

    let root = BitMapBackend::new(output_path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    let x_min = min_value - bin_width;
    let x_max = min_value + bin_count as f64 * bin_width + bin_width;
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Savings Distribution", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(x_min..x_max, 0..(max_count + 1))
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Savings vs last year")
        .y_desc("Trials")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_label_formatter(&|value| format!("{value:.0}"))
        .draw()
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    let bar_color = RGBColor(30, 122, 204);
    let bar_style = ShapeStyle::from(&bar_color).filled();
    chart
        .draw_series(counts.iter().enumerate().map(|(index, count)| {
            let left = min_value + index as f64 * bin_width;
            Rectangle::new([(left, 0), (left + bin_width, *count)], bar_style)
        }))
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| HistogramError::Render(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_png_path(tag: &str) -> std::path::PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("savings-{tag}-{nanos}.png"))
    }

    #[test]
    fn write_histogram_png_creates_file_for_spread_savings() {
        let path = temp_png_path("spread");
        let savings: Vec<f64> = (0..500).map(|i| i as f64 * 13.7 - 1000.0).collect();

        write_histogram_png(path.to_str().unwrap(), &savings).unwrap();
        assert!(path.exists());
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn write_histogram_png_handles_identical_savings() {
        let path = temp_png_path("flat");
        let savings = vec![100_000.0; 50];

        write_histogram_png(path.to_str().unwrap(), &savings).unwrap();
        assert!(path.exists());
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn write_histogram_png_ignores_empty_input() {
        let path = temp_png_path("empty");
        write_histogram_png(path.to_str().unwrap(), &[]).unwrap();
        assert!(!path.exists());
    }
}
