use crate::args::Config;
use crate::catalog::Catalog;
use crate::errors::{RunError, SinkError};
use crate::query::QuerySource;
use crate::reports::Report;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// What a successful run produced.
#[derive(Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// The number of books read, placeholders included.
    pub books: usize,

    /// The report files written, in the order they were produced.
    pub reports: Vec<PathBuf>,
}

/// Load the catalog named by `config` and write every report for it.
///
/// A catalog that cannot be read stops the run before any report file is
/// touched. Reports are then written one at a time in `Report::ALL` order
/// and the first one that fails stops the run, leaving the later ones
/// unwritten.
pub fn run(config: &Config, query: &mut dyn QuerySource) -> Result<RunSummary, RunError> {
    let catalog = Catalog::try_from(config.input.clone())?;
    info!(
        input = %config.input.display(),
        books = catalog.len(),
        "read book list"
    );

    let reports = write_reports(&catalog, &config.output_dir, query)?;

    Ok(RunSummary {
        books: catalog.len(),
        reports,
    })
}

/// Write all reports for an already loaded catalog into `output_dir`.
pub fn write_reports(
    catalog: &Catalog,
    output_dir: &Path,
    query: &mut dyn QuerySource,
) -> Result<Vec<PathBuf>, SinkError> {
    let mut written = Vec::with_capacity(Report::ALL.len());
    for report in Report::ALL {
        written.push(write_report(report, catalog, output_dir, query)?);
    }

    Ok(written)
}

/// Create (or truncate) the report's file and write the report into it.
///
/// The query is only requested once the AuthorFilter file is open, so an
/// unwritable output directory fails before anyone is prompted.
fn write_report(
    report: Report,
    catalog: &Catalog,
    output_dir: &Path,
    query: &mut dyn QuerySource,
) -> Result<PathBuf, SinkError> {
    let path = output_dir.join(report.file_name());
    let file = File::create(&path).map_err(|err| SinkError::Open(report, path.clone(), err))?;
    let mut sink = BufWriter::new(file);

    let author = if report.needs_query() {
        query.author()
    } else {
        String::new()
    };

    report.write_to(catalog, &author, &mut sink)?;
    sink.flush().map_err(|err| SinkError::Write(report, err))?;

    debug!(%report, path = %path.display(), "wrote report");
    Ok(path)
}
