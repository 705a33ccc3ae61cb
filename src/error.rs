//! Fatal errors. Unrecognized documentation lines are data, never errors.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read input {}", path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write output {}", path.display())]
    OutputUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
