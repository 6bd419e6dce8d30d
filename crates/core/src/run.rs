// crates/core/src/run.rs

use std::path::{Path, PathBuf};

use charts::{ChartSink, RecordingSink, SvgSink};
use logging::{InfoFlag, SubscriberConfig, subscriber};
use metrics::{MetricsDocument, RowLayout};
use tracing::info;
use tracing::subscriber::with_default;

use crate::config::ReportConfig;
use crate::error::{ReportError, Result};
use crate::plan::ReportPlan;

/// Outcome of a completed report run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportSummary {
    /// Features in the document.
    pub features: usize,
    /// Charts handed to the sink.
    pub charts: usize,
    /// Files written; empty on a dry run.
    pub written: Vec<PathBuf>,
}

/// Build the plan for `doc` and render it into `sink`.
pub fn generate_report<S: ChartSink + ?Sized>(
    doc: &MetricsDocument,
    layout: RowLayout,
    sink: &mut S,
) -> Result<usize> {
    let plan = ReportPlan::build(doc, layout)?;
    plan.render(sink)
}

pub fn generate_with_config(cfg: &ReportConfig) -> Result<ReportSummary> {
    let sub_cfg = SubscriberConfig::builder()
        .format(cfg.log_format)
        .verbose(cfg.verbose)
        .info(&cfg.info)
        .debug(&cfg.debug)
        .quiet(cfg.quiet)
        .log_file(cfg.log_file.clone())
        .colored(cfg.colored)
        .timestamps(cfg.timestamps)
        .build();
    let sub = subscriber(sub_cfg).map_err(ReportError::Logging)?;
    with_default(sub, || -> Result<ReportSummary> {
        let doc = metrics::load(&cfg.input)?;
        // Extraction runs before the output directory is touched.
        let plan = ReportPlan::build(&doc, cfg.row_layout)?;
        let summary = if cfg.dry_run {
            let mut sink = RecordingSink::new();
            let charts = plan.render(&mut sink)?;
            ReportSummary {
                features: doc.len(),
                charts,
                written: Vec::new(),
            }
        } else {
            let mut sink = SvgSink::new(&cfg.out_dir)?;
            let charts = plan.render(&mut sink)?;
            ReportSummary {
                features: doc.len(),
                charts,
                written: sink.written().to_vec(),
            }
        };
        info!(
            target: InfoFlag::Render.target(),
            features = summary.features,
            charts = summary.charts,
            dry_run = cfg.dry_run,
            "report complete"
        );
        Ok(summary)
    })
}

/// Render the charts for `input` into `out_dir` with default settings.
pub fn generate<I: AsRef<Path>, O: AsRef<Path>>(input: I, out_dir: O) -> Result<ReportSummary> {
    let cfg = ReportConfig::builder()
        .input(input.as_ref())
        .out_dir(out_dir.as_ref())
        .build();
    generate_with_config(&cfg)
}
