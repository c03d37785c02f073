use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn invalid_config(message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidConfig {
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn out_of_range(index: isize, len: usize) -> Error {
        Error(ErrorKind::OutOfRange { index, len }.into())
    }

    pub fn past_end() -> Error {
        Error(ErrorKind::PastEnd.into())
    }

    pub fn before_begin() -> Error {
        Error(ErrorKind::BeforeBegin.into())
    }

    /// Returns `true` if this error reports a cursor leaving its view,
    /// either by stepping or by seeking.
    pub fn is_boundary_violation(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::OutOfRange { .. } | ErrorKind::PastEnd | ErrorKind::BeforeBegin
        )
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("index {index} out of range 0..={len}")]
    OutOfRange { index: isize, len: usize },

    #[error("cannot step past the end of the view")]
    PastEnd,

    #[error("cannot step before the beginning of the view")]
    BeforeBegin,
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
