use thiserror::Error;

/// Failures while reading the holiday source. Any of these aborts construction.
#[derive(Error, Debug)]
pub enum DataSourceError {
    #[error("cannot open holiday source '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error
    },

    #[error("cannot read holiday source: {0}")]
    Read(#[from] std::io::Error),

    #[error("cannot parse holiday source: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed holiday record at line {line}: {message}")]
    MalformedRecord { line: u64, message: String },

    #[error("unknown source encoding '{0}'")]
    UnknownEncoding(String)
}

impl DataSourceError {
    pub fn malformed(line: u64, message: impl Into<String>) -> DataSourceError {
        DataSourceError::MalformedRecord { line, message: message.into() }
    }
}
