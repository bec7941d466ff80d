use std::io;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("No artist provided")]
    MissingArtist,

    /// Connection failure or a non-2xx status from the service.
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    #[error("reading response from {url} failed: {source}")]
    Body {
        url: String,
        #[source]
        source: io::Error,
    },

    /// The body was not JSON, or did not have the shape we expect.
    #[error("unexpected response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("No artists found for \"{0}\"")]
    NoArtist(String),

    #[error("writing output failed: {0}")]
    Output(#[from] io::Error),
}
