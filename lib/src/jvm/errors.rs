use std::fmt::{Display, Formatter, Result as FmtResult};

#[derive(Debug)]
pub enum Error {
    /// A class or method name is not valid in the binary format
    InvalidName(String),

    /// A catalog descriptor does not parse as a method descriptor
    BadDescriptor(String),

    /// A blocking method was declared without any accepted descriptors
    EmptyBlockingMethod(String),

    /// Two blocking methods share an owner and name (indicates a corrupt catalog)
    DuplicateBlockingMethod(String),

    IoError(std::io::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Error::InvalidName(msg) => f.write_str(msg),
            Error::BadDescriptor(msg) => write!(f, "Bad descriptor: {}", msg),
            Error::EmptyBlockingMethod(method) => {
                write!(f, "Blocking method '{}' has no descriptors", method)
            }
            Error::DuplicateBlockingMethod(method) => {
                write!(f, "Blocking method '{}' is declared more than once", method)
            }
            Error::IoError(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}
