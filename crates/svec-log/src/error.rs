#[derive(Debug)]
pub enum LogError {
    UnknownFormat {
        index: usize,
    },
    Uninitialized,
    Poisoned,
    IoError(std::io::Error),
}

impl core::fmt::Display for LogError {

    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnknownFormat { index } => write!(f, "no custom format registered at {}", index),
            Self::Uninitialized => write!(f, "svec logger not initialized"),
            Self::Poisoned => write!(f, "svec logger lock poisoned"),
            Self::IoError(_) => write!(f, "IO error"),
        }
    }
}

impl core::error::Error for LogError {

    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LogError {

    fn from(value: std::io::Error) -> Self {
        Self::IoError(value)
    }
}
