use course_assignment_config::ConfigError;
use course_assignment_frontend::error::FormError;

#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error("hyper {0}")]
    Hyper(#[from] hyper::Error),
    #[error("hyper http {0}")]
    HyperHttp(#[from] hyper::http::Error),
    #[error("io {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid server url: {0}")]
    InvalidUri(#[from] hyper::http::uri::InvalidUri),
    #[error("server url {0} has no host")]
    MissingHost(String),
    #[error("unsupported url scheme {0}, only http is spoken")]
    UnsupportedScheme(String),
    #[error("form {0}")]
    Form(#[from] FormError),
    #[error("{0}")]
    Config(#[from] ConfigError),
}
