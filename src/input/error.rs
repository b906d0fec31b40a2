//! Input parsing errors

use std::fmt;
use std::io;
use std::error::Error;
use yaml_rust::ScanError;

/// Coarse classification of an `InputError`.
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum InputErrorKind {
    Usage,
    File,
    Parse,
    Location,
    Conversion,
}

/// Error returned when the input cannot be loaded, or a
/// requested field cannot be found or converted.
pub enum InputError {
    /// No input file was named on the command line.
    Usage,
    /// The input file could not be read.
    File { path: String, source: io::Error },
    /// The input is not valid YAML. `line` counts from 1, `col` from 0.
    Parse { line: usize, col: usize, info: String },
    /// A component of a colon-separated path does not exist.
    Location { path: String, missing: String },
    /// A field exists but does not hold a value of the requested type.
    Conversion { path: String, field: String },
}

const HELP_MSG: &str = "Usage: taylor input-file";

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InputError::Usage => write!(f, "no input file specified.\n{}", HELP_MSG),
            InputError::File { path, source } => write!(f, "unable to read input file '{}': {}", path, source),
            InputError::Parse { line, col, info } => write!(f, "input is not valid YAML: {} at line {}, column {}", info, line, col + 1),
            InputError::Location { path, missing } => write!(f, "failed to follow path '{}': component '{}' is missing", path, missing),
            InputError::Conversion { path, field } => write!(f, "could not convert field '{}' (at '{}') to target type", field, path),
        }
    }
}

impl fmt::Debug for InputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl Error for InputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            InputError::File { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ScanError> for InputError {
    fn from(e: ScanError) -> Self {
        let marker = e.marker();
        Self::Parse {
            line: marker.line(),
            col: marker.col(),
            info: e.info().to_owned(),
        }
    }
}

impl InputError {
    pub fn file(path: &str, source: io::Error) -> Self {
        Self::File { path: path.to_owned(), source }
    }

    pub fn location(path: &str, missing: &str) -> Self {
        Self::Location { path: path.to_owned(), missing: missing.to_owned() }
    }

    pub fn conversion(path: &str, field: &str) -> Self {
        Self::Conversion { path: path.to_owned(), field: field.to_owned() }
    }

    pub fn kind(&self) -> InputErrorKind {
        match self {
            InputError::Usage => InputErrorKind::Usage,
            InputError::File { .. } => InputErrorKind::File,
            InputError::Parse { .. } => InputErrorKind::Parse,
            InputError::Location { .. } => InputErrorKind::Location,
            InputError::Conversion { .. } => InputErrorKind::Conversion,
        }
    }
}
