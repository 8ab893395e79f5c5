use std::fmt;
use std::io::{self, Write};

use crate::analysis::Metrics;

pub const PROCESSING_TEXT: &str = "Processing...";
pub const CHART_TARGET: &str = "chart";

pub const OVERALL_LABEL: &str = "Overall Score";
pub const READABILITY_LABEL: &str = "Readability";
pub const ATS_LABEL: &str = "ATS Compatibility";

const BAR_WIDTH: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreLine {
    pub label: &'static str,
    pub value: f64,
}

impl fmt::Display for ScoreLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {} / 100", self.label, self.value)
    }
}

pub fn score_lines(metrics: &Metrics) -> Vec<ScoreLine> {
    vec![
        ScoreLine {
            label: OVERALL_LABEL,
            value: metrics.overall_score,
        },
        ScoreLine {
            label: READABILITY_LABEL,
            value: metrics.readability_score,
        },
        ScoreLine {
            label: ATS_LABEL,
            value: metrics.ats_score,
        },
    ]
}

/// What the results region currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum RegionContent {
    Processing,
    Scores(Vec<ScoreLine>),
    Error(String),
}

impl RegionContent {
    pub fn error(err: &impl fmt::Display) -> RegionContent {
        RegionContent::Error(err.to_string())
    }

    pub fn lines(&self) -> Vec<String> {
        match self {
            RegionContent::Processing => vec![PROCESSING_TEXT.to_string()],
            RegionContent::Scores(scores) => scores.iter().map(ToString::to_string).collect(),
            RegionContent::Error(message) => vec![format!("Error: {}", message)],
        }
    }
}

impl fmt::Display for RegionContent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub categories: Vec<String>,
    pub values: Vec<f64>,
}

impl BarChart {
    pub fn from_metrics(metrics: &Metrics) -> BarChart {
        let scores = score_lines(metrics);
        BarChart {
            categories: scores.iter().map(|s| s.label.to_string()).collect(),
            values: scores.iter().map(|s| s.value).collect(),
        }
    }
}

/// The output channel a submission renders into.
pub trait ResultsSurface {
    /// Blocking notification for input the handler refuses to send.
    fn alert(&mut self, message: &str);

    /// Replace whatever the results region shows.
    fn set_results(&mut self, content: &RegionContent);

    fn plot(&mut self, target: &str, chart: &BarChart);
}

/// Renders into a terminal: results and chart to `out`, alerts to stderr.
pub struct TerminalSurface<W: Write> {
    out: W,
}

impl TerminalSurface<io::Stdout> {
    pub fn stdout() -> Self {
        TerminalSurface { out: io::stdout() }
    }
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        TerminalSurface { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_block(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text).and_then(|_| self.out.flush()) {
            log::error!("failed to write results: {}", e);
        }
    }
}

impl<W: Write> ResultsSurface for TerminalSurface<W> {
    fn alert(&mut self, message: &str) {
        eprintln!("{}", message);
    }

    fn set_results(&mut self, content: &RegionContent) {
        self.write_block(&content.to_string());
    }

    fn plot(&mut self, _target: &str, chart: &BarChart) {
        self.write_block(&ascii_bars(chart));
    }
}

/// Horizontal bar chart, `BAR_WIDTH` columns at a value of 100.
pub fn ascii_bars(chart: &BarChart) -> String {
    let label_width = chart
        .categories
        .iter()
        .map(|c| c.chars().count())
        .max()
        .unwrap_or(0);

    chart
        .categories
        .iter()
        .zip(chart.values.iter())
        .map(|(category, value)| {
            let filled = (value.clamp(0.0, 100.0) / 100.0 * BAR_WIDTH as f64).round() as usize;
            format!(
                "{:<width$} | {}{} {}",
                category,
                "#".repeat(filled),
                " ".repeat(BAR_WIDTH - filled),
                value,
                width = label_width
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> Metrics {
        Metrics {
            overall_score: 80.0,
            readability_score: 70.0,
            ats_score: 90.0,
        }
    }

    #[test]
    fn processing_is_literal() {
        assert_eq!(RegionContent::Processing.to_string(), "Processing...");
    }

    #[test]
    fn scores_render_three_lines() {
        let content = RegionContent::Scores(score_lines(&metrics()));
        assert_eq!(
            content.lines(),
            vec![
                "Overall Score: 80 / 100",
                "Readability: 70 / 100",
                "ATS Compatibility: 90 / 100",
            ]
        );
    }

    #[test]
    fn fractional_scores_keep_their_precision() {
        let line = ScoreLine {
            label: OVERALL_LABEL,
            value: 72.5,
        };
        assert_eq!(line.to_string(), "Overall Score: 72.5 / 100");
    }

    #[test]
    fn error_renders_single_line() {
        let content = RegionContent::Error("invalid file".to_string());
        assert_eq!(content.to_string(), "Error: invalid file");
        assert_eq!(content.lines().len(), 1);
    }

    #[test]
    fn chart_follows_metric_order() {
        let chart = BarChart::from_metrics(&metrics());
        assert_eq!(
            chart.categories,
            vec!["Overall Score", "Readability", "ATS Compatibility"]
        );
        assert_eq!(chart.values, vec![80.0, 70.0, 90.0]);
    }

    #[test]
    fn terminal_surface_writes_results_and_bars() {
        let mut surface = TerminalSurface::new(Vec::new());
        surface.set_results(&RegionContent::Processing);
        surface.plot(CHART_TARGET, &BarChart::from_metrics(&metrics()));
        let out = String::from_utf8(surface.into_inner()).unwrap();

        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("Processing..."));
        let overall = lines.next().unwrap();
        assert!(overall.starts_with("Overall Score     | "));
        assert_eq!(overall.matches('#').count(), 40);
        assert!(overall.ends_with(" 80"));
    }

    #[test]
    fn bars_clamp_out_of_range_values() {
        let chart = BarChart {
            categories: vec!["a".to_string(), "b".to_string()],
            values: vec![-5.0, 150.0],
        };
        let rendered = ascii_bars(&chart);
        let rows: Vec<&str> = rendered.lines().collect();
        assert_eq!(rows[0].matches('#').count(), 0);
        assert_eq!(rows[1].matches('#').count(), BAR_WIDTH);
        assert!(rows[1].ends_with(" 150"));
    }
}
