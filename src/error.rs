use std::fmt;
use std::io;

#[derive(Debug)]
pub enum Error {
    /// The sentinel strategy was requested for a type without a representable maximum.
    SentinelUnavailable(&'static str),
    /// `c` in `floor(log2(len / c))` must be positive.
    InvalidStackConstant,
    /// Policy or strategy name that is not known.
    UnknownOption(String),
    /// A cell in a comma-separated row is not an integer.
    ParseRow { line: usize, cell: String },
    Io(io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::SentinelUnavailable(ty) => {
                write!(f, "sentinel merge needs a maximum value, but {ty} has none")
            }
            Error::InvalidStackConstant => write!(f, "stack constant must be at least 1"),
            Error::UnknownOption(name) => write!(f, "unknown option: {name}"),
            Error::ParseRow { line, cell } => {
                write!(f, "line {line}: cannot parse {cell:?} as an integer")
            }
            Error::Io(err) => write!(f, "i/o error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}
