use reqwest::StatusCode;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Every way a weather lookup can fail. Each variant carries enough context
/// to be logged as-is by the binary before it exits.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{context}: {source}")]
    Request {
        context: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{context}: {message}")]
    Api {
        context: &'static str,
        status: StatusCode,
        message: String,
    },

    #[error("{context}: {source}")]
    Decode {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to fetch NWS forecast: no forecast periods returned")]
    NoForecastPeriods,

    #[error("Failed to write file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write to stdout: {0}")]
    Stdout(#[source] io::Error),
}

impl Error {
    pub(crate) fn request(context: &'static str) -> impl FnOnce(reqwest::Error) -> Error {
        move |source| Error::Request { context, source }
    }

    /// The message followed by every underlying cause, joined with ": ".
    /// Causes already spelled out by the text before them are skipped.
    pub fn display_chain(&self) -> String {
        let mut text = self.to_string();
        let mut cause = std::error::Error::source(self);
        while let Some(err) = cause {
            let msg = err.to_string();
            if !text.contains(&msg) {
                text.push_str(": ");
                text.push_str(&msg);
            }
            cause = err.source();
        }
        text
    }
}
