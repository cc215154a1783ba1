use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;
pub type ParameterResult<T> = std::result::Result<T, ParameterError>;
pub type TokenReaderResult<T> = std::result::Result<T, TokenReaderError>;
pub type TransportResult<T> = std::result::Result<T, TransportError>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid consumer configuration : {0}")]
    Config(#[from] ConfigError),
    #[error("OAuth parameter assembly failed : {0}")]
    Parameter(#[from] ParameterError),
    #[error("request failed : {0}")]
    Transport(#[from] TransportError),
    #[error("service provider answered with status {status} : {body}")]
    Status { status: u16, body: String },
    #[error("token acquisition failed : {0}")]
    ResponseFormat(#[from] ResponseFormatError),
    #[error("encoding failed : {0}")]
    Encoding(#[from] EncodingError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("required field {0} is empty")]
    Missing(&'static str),
    #[error("request token url {url} could not be parsed")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("request token url must be http or https, but {0} is specified")]
    UnsupportedScheme(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParameterError {
    #[error("parameter {0} is already present")]
    DuplicateKey(String),
    #[error("parameter {0} is not present")]
    KeyNotFound(String),
}

/// Failure reported by an [`HttpTransport`](crate::HttpTransport).
///
/// The underlying error is kept as the source and never interpreted.
#[derive(Error, Debug)]
#[error("transport failure : {source}")]
pub struct TransportError {
    #[source]
    source: BoxError,
}

impl TransportError {
    pub fn new<E>(source: E) -> Self
    where
        E: Into<BoxError>,
    {
        TransportError {
            source: source.into(),
        }
    }

    /// Returns the error raised by the transport.
    pub fn inner(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self.source.as_ref()
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError::new(err)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResponseFormatError {
    #[error("response has malformed format: not found {0} in {1}")]
    TokenKeyNotFound(&'static str, String),
    #[error("response has malformed format: {0} appears more than once in {1}")]
    DuplicateKey(&'static str, String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    #[error("{context} is not valid UTF-8")]
    Utf8 { context: &'static str },
    #[error("{name} header value contains characters not allowed in a header")]
    Header { name: &'static str },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenReaderError {
    #[error(transparent)]
    Format(#[from] ResponseFormatError),
    #[error(transparent)]
    Encoding(#[from] EncodingError),
}

impl From<TokenReaderError> for Error {
    fn from(err: TokenReaderError) -> Self {
        match err {
            TokenReaderError::Format(e) => Error::ResponseFormat(e),
            TokenReaderError::Encoding(e) => Error::Encoding(e),
        }
    }
}
