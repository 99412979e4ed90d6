//! Diagnostic charts of a test run and their rendering

pub mod gnuplot_renderer;

use crate::core::series::SeriesSnapshot;
use crate::engine::profile::EngineType;

pub use gnuplot_renderer::{GnuplotRenderer, PlotOutput};

/// One x/y chart, data and labels only
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl Chart {
    pub fn new(x: Vec<f64>, y: Vec<f64>, title: String, x_label: &str, y_label: &str) -> Chart {
        Chart {
            x,
            y,
            title,
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
        }
    }

    /// File-name friendly version of the title
    pub fn slug(&self) -> String {
        let mut slug = String::with_capacity(self.title.len());
        for c in self.title.chars() {
            if c.is_ascii_alphanumeric() {
                slug.push(c.to_ascii_lowercase());
            } else if !slug.ends_with('_') && !slug.is_empty() {
                slug.push('_');
            }
        }
        slug.trim_end_matches('_').to_string()
    }
}

const BMEP_LABEL: &str = "BMEP (bar)";

/// BMEP vs SFC, BMEP vs brake thermal efficiency, BMEP vs mechanical efficiency and load vs BMEP
pub fn diagnostic_charts(series: &SeriesSnapshot, engine: EngineType) -> Vec<Chart> {
    let bmep = series.bmep.to_vec();
    let title = |what: &str| format!("{} Engine: {}", engine, what);
    vec![
        Chart::new(
            bmep.clone(),
            series.sfc.to_vec(),
            title("BMEP vs SFC"),
            BMEP_LABEL,
            "SFC (kg/kWh)",
        ),
        Chart::new(
            bmep.clone(),
            series.brake_thermal_efficiency.to_vec(),
            title("BMEP vs Brake Thermal Efficiency"),
            BMEP_LABEL,
            "Brake Thermal Efficiency (%)",
        ),
        Chart::new(
            bmep.clone(),
            series.mechanical_efficiency.to_vec(),
            title("BMEP vs Mechanical Efficiency"),
            BMEP_LABEL,
            "Mechanical Efficiency (%)",
        ),
        Chart::new(series.load.to_vec(), bmep, title("Load vs BMEP"), "Load (W)", BMEP_LABEL),
    ]
}
