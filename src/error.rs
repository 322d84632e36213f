use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::op::Op;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("write failed: {0}")]
    Write(#[from] io::Error),
    #[error("division by zero")]
    DivisionByZero,
    #[error("subtraction would produce a negative result")]
    NegativeDifference,
    #[error("operand kind does not match operation {op}")]
    OperandMismatch { op: Op },
    #[error("empty sampling range [{lo}, {hi}]")]
    InvalidRange { lo: u32, hi: u32 },
    #[error("unknown operation: {0}")]
    UnknownOp(String),
}

impl Error {
    /// Attaches `path` to a bare write failure.
    pub(crate) fn at(self, path: &Path) -> Self {
        match self {
            Error::Write(source) => Error::Io {
                path: path.to_owned(),
                source,
            },
            e => e,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
