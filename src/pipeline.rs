//! Directive processing
//!
//! Directives run strictly in table order, one fetch and one selection each.
//! A failing directive is reported to the observer and skipped; only loading
//! the table and writing the output can fail the run.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::config::ScrapeConfig;
use crate::directive::{load_directives, ScrapeDirective};
use crate::error::{Result, ScrapeError};
use crate::fetch::PageSource;
use crate::selector::select_text;
use crate::table::ResultTable;

/// Called once per directive with what came of it.
pub trait DirectiveObserver {
    fn on_directive(&mut self, directive: &ScrapeDirective, outcome: &Result<Vec<String>>);
}

/// Default observer: one structured log event per directive.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl DirectiveObserver for TracingObserver {
    fn on_directive(&mut self, directive: &ScrapeDirective, outcome: &Result<Vec<String>>) {
        match outcome {
            Ok(names) if names.is_empty() => {
                warn!(label = %directive.label, url = %directive.url, "no names matched")
            }
            Ok(names) => {
                info!(
                    label = %directive.label,
                    url = %directive.url,
                    count = names.len(),
                    "extracted names"
                );
                debug!(label = %directive.label, ?names);
            }
            Err(e) => {
                warn!(label = %directive.label, url = %directive.url, error = %e, "directive failed")
            }
        }
    }
}

/// Fetch, parse and select for a single directive.
pub fn scrape_directive<S: PageSource + ?Sized>(
    source: &S,
    directive: &ScrapeDirective,
) -> Result<Vec<String>> {
    let path = directive.tag_path()?;
    let restriction = directive.class_restriction();
    let html = source.fetch(&directive.url)?;
    Ok(select_text(&html, &path, restriction.as_ref()))
}

/// Run every directive and collect the non-empty results.
pub fn run_directives<S: PageSource + ?Sized>(
    directives: &[ScrapeDirective],
    source: &S,
    observer: &mut dyn DirectiveObserver,
) -> (ResultTable, RunSummary) {
    let mut table = ResultTable::new();
    let mut summary = RunSummary {
        attempted: directives.len(),
        ..Default::default()
    };

    for directive in directives {
        let outcome = scrape_directive(source, directive);
        observer.on_directive(directive, &outcome);

        match outcome {
            Ok(names) if names.is_empty() => summary.empty += 1,
            Ok(names) => {
                summary.succeeded += 1;
                table.insert(directive.label.clone(), names);
            }
            Err(_) => summary.failed += 1,
        }
    }

    summary.columns = table.len();
    summary.rows = table.depth();
    (table, summary)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub attempted: usize,
    pub succeeded: usize,
    pub failed: usize,
    /// Directives that ran cleanly but matched nothing
    pub empty: usize,
    pub columns: usize,
    pub rows: usize,
    pub output: Option<PathBuf>,
}

/// Load the directive table, scrape every label and write the wide CSV.
pub fn run<S: PageSource + ?Sized>(
    config: &ScrapeConfig,
    source: &S,
    observer: &mut dyn DirectiveObserver,
) -> Result<RunSummary> {
    let directives = load_directives(&config.input_path)?;
    info!(path = %config.input_path.display(), count = directives.len(), "loaded directives");

    let (table, mut summary) = run_directives(&directives, source, observer);
    if table.is_empty() {
        return Err(ScrapeError::EmptyResultSet);
    }

    table.write_csv_file(&config.output_path)?;
    info!(
        path = %config.output_path.display(),
        columns = summary.columns,
        rows = summary.rows,
        "wrote results"
    );

    summary.output = Some(config.output_path.clone());
    Ok(summary)
}
