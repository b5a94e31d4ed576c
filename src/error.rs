use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use derive_more::derive::{Display, Error};

pub const WRONG_ARGS: u8 = 1;
pub const INPUT_FAIL: u8 = 2;
pub const OUTPUT_FAIL: u8 = 3;

pub type Result<T = ()> = std::result::Result<T, Error>;

#[derive(Display, Error, Debug)]
pub enum Error {
    #[display("{reason}")]
    WrongArgs { reason: String },

    #[display("could not read the input file `{}`: {source}", path.display())]
    Input { path: PathBuf, source: io::Error },

    #[display("could not write the output file `{}`: {source}", path.display())]
    Output { path: PathBuf, source: io::Error },
}

impl Error {
    pub fn wrong_args(reason: impl Into<String>) -> Self {
        Self::WrongArgs {
            reason: reason.into(),
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            Self::WrongArgs { .. } => WRONG_ARGS,
            Self::Input { .. } => INPUT_FAIL,
            Self::Output { .. } => OUTPUT_FAIL,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let io_err = || io::Error::from(io::ErrorKind::NotFound);

        assert_eq!(Error::wrong_args("nope").code(), 1);
        assert_eq!(
            Error::Input {
                path: "a.bin".into(),
                source: io_err(),
            }
            .code(),
            2
        );
        assert_eq!(
            Error::Output {
                path: "a.bin.go".into(),
                source: io_err(),
            }
            .code(),
            3
        );
    }

    #[test]
    fn input_error_names_the_file() {
        let e = Error::Input {
            path: "assets/logo.png".into(),
            source: io::Error::from(io::ErrorKind::NotFound),
        };

        assert!(e.to_string().contains("`assets/logo.png`"));
    }
}
