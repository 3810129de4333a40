use std::fmt::Display;

use crate::prefix_code::CodingError;

#[derive(Debug)]
pub enum Error {
    UnableToReadInput(std::io::Error),
    FailedToWriteOutput(std::io::Error),
    InvalidChoice(String),
    CodeConstructionFailed(CodingError),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnableToReadInput(error) => {
                write!(f, "Unable to read from standard input: {}", error)
            }
            Self::FailedToWriteOutput(error) => {
                write!(f, "Failed to write output: {}", error)
            }
            Self::InvalidChoice(_) => write!(f, "Invalid choice"),
            Self::CodeConstructionFailed(error) => {
                write!(f, "Unable to construct code: {}", error)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnableToReadInput(error) | Self::FailedToWriteOutput(error) => Some(error),
            Self::CodeConstructionFailed(error) => Some(error),
            Self::InvalidChoice(_) => None,
        }
    }
}
