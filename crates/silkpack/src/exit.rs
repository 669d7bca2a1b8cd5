use std::fmt;
use std::io;

#[cfg(feature = "silk")]
use silkpack::codec::CodecError;
#[cfg(feature = "silk")]
use silkpack::container::ContainerError;
use silkpack::pack::PackError;

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const PERMISSION_DENIED: i32 = 50;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        io::ErrorKind::NotFound => FAILURE,
        _ => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}

#[cfg(feature = "silk")]
pub fn container_error(context: &str, err: ContainerError) -> CliError {
    match err {
        ContainerError::Io(source) => io_error(context, source),
        ContainerError::InvalidHeader | ContainerError::FrameTooLarge { .. } => {
            CliError::new(DATA_INVALID, format!("{context}: {err}"))
        }
        other => CliError::new(INTERNAL, format!("{context}: {other}")),
    }
}

#[cfg(feature = "silk")]
pub fn codec_error(context: &str, err: CodecError) -> CliError {
    match err {
        CodecError::Container(source) => container_error(context, source),
        CodecError::MalformedPcmLength { .. } | CodecError::UnsupportedSampleRate { .. } => {
            CliError::new(DATA_INVALID, format!("{context}: {err}"))
        }
        CodecError::EncodeFailed { .. } => CliError::new(FAILURE, format!("{context}: {err}")),
        other => CliError::new(INTERNAL, format!("{context}: {other}")),
    }
}

pub fn pack_error(context: &str, err: PackError) -> CliError {
    match err {
        PackError::UnknownEntry { .. } => CliError::new(USAGE, format!("{context}: {err}")),
        PackError::InvalidContainer { .. }
        | PackError::Base64 { .. }
        | PackError::Json(_) => CliError::new(DATA_INVALID, format!("{context}: {err}")),
    }
}
