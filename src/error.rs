use ::scraper::error::SelectorErrorKind;

/// All errors that can occur while fetching or extracting cricket scores.
#[derive(thiserror::Error, Debug)]
pub enum CricketError {
    /// HTTP request failed (network, DNS, TLS, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Upstream returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// The underlying HTTP client could not be constructed.
    #[error("failed to build http client: {0}")]
    ClientBuild(reqwest::Error),

    /// A CSS selector string could not be parsed.
    #[error("invalid CSS selector: {0}")]
    Selector(String),

    /// Markup was fetched but no element matched any known marker.
    #[error("no matches found in {context}")]
    NoMatches { context: &'static str },
}

impl<'a> From<SelectorErrorKind<'a>> for CricketError {
    fn from(err: SelectorErrorKind<'a>) -> Self {
        CricketError::Selector(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CricketError>;
