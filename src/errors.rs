use crate::reports::Report;
use std::error::Error;
use std::fmt;
use std::fmt::Formatter;
use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

/// Exit code used when the input file cannot be read.
pub const EXIT_SOURCE_UNREADABLE: i32 = 1;

/// Exit code used when a report cannot be written.
pub const EXIT_SINK_UNWRITABLE: i32 = 2;

#[derive(Debug)]
pub enum SourceError {
    Open(PathBuf, io::Error),
    Read(PathBuf, io::Error),
}

#[derive(Debug)]
pub enum SinkError {
    Open(Report, PathBuf, io::Error),
    Write(Report, io::Error),
    Serialize(Report, csv::Error),
    Encoding(Report, FromUtf8Error),
}

#[derive(Debug)]
pub enum RunError {
    SourceUnreadable(SourceError),
    SinkUnwritable(SinkError),
}

impl SinkError {
    /// The report that was being written when the failure occurred.
    pub fn report(&self) -> Report {
        match self {
            SinkError::Open(report, _, _)
            | SinkError::Write(report, _)
            | SinkError::Serialize(report, _)
            | SinkError::Encoding(report, _) => *report,
        }
    }
}

impl RunError {
    pub fn exit_code(&self) -> i32 {
        match self {
            RunError::SourceUnreadable(_) => EXIT_SOURCE_UNREADABLE,
            RunError::SinkUnwritable(_) => EXIT_SINK_UNWRITABLE,
        }
    }
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Open(path, err) => {
                write!(f, "unable to open {}: {}", path.display(), err)
            }
            SourceError::Read(path, err) => {
                write!(f, "failed to read {}: {}", path.display(), err)
            }
        }
    }
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SinkError::Open(report, path, err) => write!(
                f,
                "unable to open {} report file {}: {}",
                report,
                path.display(),
                err
            ),
            SinkError::Write(report, err) => {
                write!(f, "failed to write {} report: {}", report, err)
            }
            SinkError::Serialize(report, err) => {
                write!(f, "failed to serialize {} report record: {}", report, err)
            }
            SinkError::Encoding(report, err) => {
                write!(f, "failed to encode {} report: {}", report, err)
            }
        }
    }
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            RunError::SourceUnreadable(err) => write!(f, "failed to process input file: {}", err),
            RunError::SinkUnwritable(err) => {
                write!(f, "failed to generate output report: {}", err)
            }
        }
    }
}

impl From<SourceError> for RunError {
    fn from(err: SourceError) -> Self {
        RunError::SourceUnreadable(err)
    }
}

impl From<SinkError> for RunError {
    fn from(err: SinkError) -> Self {
        RunError::SinkUnwritable(err)
    }
}

impl Error for SourceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SourceError::Open(_, err) | SourceError::Read(_, err) => Some(err),
        }
    }
}

impl Error for SinkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SinkError::Open(_, _, err) | SinkError::Write(_, err) => Some(err),
            SinkError::Serialize(_, err) => Some(err),
            SinkError::Encoding(_, err) => Some(err),
        }
    }
}

impl Error for RunError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_errors_to_distinct_exit_codes() {
        let source = RunError::from(SourceError::Open(
            PathBuf::from("books.txt"),
            io::Error::new(io::ErrorKind::NotFound, "missing"),
        ));
        let sink = RunError::from(SinkError::Write(
            Report::YearGroups,
            io::Error::new(io::ErrorKind::Other, "disk full"),
        ));

        assert_eq!(source.exit_code(), EXIT_SOURCE_UNREADABLE);
        assert_eq!(sink.exit_code(), EXIT_SINK_UNWRITABLE);
        assert_ne!(source.exit_code(), sink.exit_code());
    }

    #[test]
    fn should_describe_the_failing_report() {
        let err = SinkError::Open(
            Report::OldestStats,
            PathBuf::from("out/b.txt"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.report(), Report::OldestStats);
        assert_eq!(
            err.to_string(),
            "unable to open oldest-stats report file out/b.txt: denied"
        );
    }
}
