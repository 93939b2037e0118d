use std::fmt;

use clap::ValueEnum;

/// Minimum number of binary digits written per unit.
pub const UNIT_WIDTH: usize = 8;

pub const USAGE: &str = "Please provide a file name as an argument.";

/// How a file is read before encoding.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReadMode {
    /// Raw bytes, 0-255
    #[default]
    Binary,
    /// UTF-8 characters, encoded by code point
    Text,
}

impl fmt::Display for ReadMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Binary => "binary",
                Self::Text => "text",
            }
        )
    }
}
