use std::fmt;

#[derive(Debug)]
pub enum Error {
    ParserError(String),
    IoError(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ParserError(msg) => write!(f, "Parser Error: {}", msg),
            Error::IoError(err) => write!(f, "IO Error: {}", err),
        }
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Error {
        Error::ParserError(msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Error {
        Error::ParserError(msg.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}
