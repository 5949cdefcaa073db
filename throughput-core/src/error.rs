use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("cannot open benchmark output {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read benchmark output at line {line}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },
}
