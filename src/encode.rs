use std::fmt::{self, Write};

use crate::types::UNIT_WIDTH;

/// Concatenated binary digit strings for a whole file, no separators.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BinaryContent {
    digits: String,
    units: usize,
}

impl BinaryContent {
    fn with_capacity(units: usize) -> Self {
        Self {
            digits: String::with_capacity(units * UNIT_WIDTH),
            units: 0,
        }
    }

    fn push(&mut self, unit: u32) {
        // Writing into a String cannot fail.
        let _ = write!(self.digits, "{:0width$b}", unit, width = UNIT_WIDTH);
        self.units += 1;
    }

    /// Number of units encoded, not the number of digits.
    pub fn units(&self) -> usize {
        self.units
    }

    pub fn into_string(self) -> String {
        self.digits
    }
}

impl std::ops::Deref for BinaryContent {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.digits
    }
}

impl fmt::Display for BinaryContent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.digits)
    }
}

/// Base-2 digits of `unit`, most significant first, left-padded with '0'
/// to at least 8 characters.
///
/// Values above 255 (text mode code points) are not clamped and come out
/// wider than 8 digits.
pub fn encode_unit(unit: impl Into<u32>) -> String {
    format!("{:0width$b}", unit.into(), width = UNIT_WIDTH)
}

pub fn encode_bytes(bytes: &[u8]) -> BinaryContent {
    let mut content = BinaryContent::with_capacity(bytes.len());
    bytes.iter().for_each(|&b| content.push(b.into()));
    content
}

pub fn encode_text(text: &str) -> BinaryContent {
    let mut content = BinaryContent::with_capacity(text.len());
    text.chars().for_each(|c| content.push(c.into()));
    content
}
