//! Loss-curve rendering.
use crate::train::MetricsHistory;
use anyhow::{bail, Result};
use log::info;
use plotters::prelude::*;
use std::path::Path;

/// Render train and validation loss against the iteration index as a PNG
/// line chart with a legend.
pub fn plot_loss_curves<P: AsRef<Path>>(history: &MetricsHistory, path: P) -> Result<()> {
    if history.iterations.is_empty() {
        bail!("nothing to plot: empty metrics history");
    }
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let last_iteration = *history.iterations.last().unwrap_or(&1);
    let max_loss = history
        .train_loss
        .iter()
        .chain(&history.validation_loss)
        .fold(0.0f64, |a, &b| a.max(b));
    let y_top = if max_loss > 0.0 { max_loss * 1.05 } else { 1.0 };

    let root = BitMapBackend::new(path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption("Loss vs. Iteration", ("sans-serif", 28))
        .margin(16)
        .x_label_area_size(42)
        .y_label_area_size(56)
        .build_cartesian_2d(0usize..last_iteration, 0f64..y_top)?;
    chart
        .configure_mesh()
        .x_desc("Iteration")
        .y_desc("Mean cross-entropy")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            history
                .iterations
                .iter()
                .zip(&history.train_loss)
                .map(|(&i, &l)| (i, l)),
            &BLUE,
        ))?
        .label("Train Loss")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));
    chart
        .draw_series(LineSeries::new(
            history
                .iterations
                .iter()
                .zip(&history.validation_loss)
                .map(|(&i, &l)| (i, l)),
            &RED,
        ))?
        .label("Validation Loss")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;
    root.present()?;
    info!("loss curve written to {}", path.display());
    Ok(())
}
