use super::Chart;
use crate::core::traits::ChartRenderer;
use crate::error::{Result, RigError};
use gnuplot::{AxesCommon, Caption, Figure, LineWidth, PointSymbol};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Where the charts end up
#[derive(Debug, Clone, PartialEq)]
pub enum PlotOutput {
    /// One interactive gnuplot window per chart
    Window,
    /// One `.png` per chart inside `dir`
    Png { dir: PathBuf, width: u32, height: u32 },
}

impl PlotOutput {
    pub fn png<P: AsRef<Path>>(dir: P) -> PlotOutput {
        PlotOutput::Png {
            dir: dir.as_ref().to_path_buf(),
            width: 800,
            height: 600,
        }
    }
}

/// Renders charts through the `gnuplot` executable
#[derive(Debug, Clone)]
pub struct GnuplotRenderer {
    output: PlotOutput,
}

impl GnuplotRenderer {
    pub fn new(output: PlotOutput) -> GnuplotRenderer {
        GnuplotRenderer { output }
    }

    /// Path of the image written for `chart`, `None` for interactive output
    pub fn image_path(&self, chart: &Chart) -> Option<PathBuf> {
        match &self.output {
            PlotOutput::Window => None,
            PlotOutput::Png { dir, .. } => Some(dir.join(format!("{}.png", chart.slug()))),
        }
    }

    fn figure(chart: &Chart) -> Figure {
        let mut fg = Figure::new();
        fg.axes2d()
            .lines_points(
                &chart.x,
                &chart.y,
                &[Caption(chart.y_label.as_str()), PointSymbol('O'), LineWidth(1.5)],
            )
            .set_title(&chart.title, &[])
            .set_x_label(&chart.x_label, &[])
            .set_y_label(&chart.y_label, &[])
            .set_x_grid(true)
            .set_y_grid(true);
        fg
    }
}

impl ChartRenderer for GnuplotRenderer {
    fn render(&mut self, charts: &[Chart]) -> Result<()> {
        if let PlotOutput::Png { dir, .. } = &self.output {
            std::fs::create_dir_all(dir)?;
        }
        for chart in charts {
            if chart.x.is_empty() {
                warn!(title = %chart.title, "no data, chart skipped");
                continue;
            }
            let mut fg = GnuplotRenderer::figure(chart);
            let plot_err = |message: String| RigError::Plot {
                title: chart.title.clone(),
                message,
            };
            match (&self.output, self.image_path(chart)) {
                (PlotOutput::Png { width, height, .. }, Some(path)) => {
                    fg.save_to_png(&path, *width, *height)
                        .map_err(|e| plot_err(format!("{:?}", e)))?;
                    info!(title = %chart.title, path = %path.display(), "chart saved");
                }
                _ => {
                    fg.show().map_err(|e| plot_err(format!("{:?}", e)))?;
                    info!(title = %chart.title, "chart shown");
                }
            }
        }
        Ok(())
    }
}
