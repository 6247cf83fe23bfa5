#![cfg(feature = "std")]

use std::io::{BufRead, Write};
use std::string::String;
use std::vec::Vec;

use crate::board::Coordinate;
use crate::common::InputError;

use super::ShotSource;

/// Reads coordinates interactively, one axis per line.
///
/// Anything that is not a non-negative integer is reported on the writer
/// and the whole coordinate is asked for again. End of input closes the
/// source.
pub struct CliSource<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> CliSource<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn read_axis(&mut self, label: &str) -> Result<Option<usize>, InputError> {
        write!(self.output, "\t{}: ", label)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::Closed);
        }
        let text = line.trim();
        match parse_axis(text) {
            Ok(v) => Ok(Some(v)),
            Err(msg) => {
                writeln!(self.output, "Error converting `{}` to int: {}", text, msg)?;
                Ok(None)
            }
        }
    }

    fn read_coordinate(&mut self) -> Result<Coordinate, InputError> {
        loop {
            write!(self.output, "Input a coordinate:")?;
            let Some(x) = self.read_axis("x")? else {
                continue;
            };
            let Some(y) = self.read_axis("y")? else {
                continue;
            };
            return Ok(Coordinate::new(x, y));
        }
    }
}

/// Parse one axis value. Only plain non-negative integers are accepted.
pub fn parse_axis(text: &str) -> Result<usize, String> {
    if text.is_empty() {
        return Err("empty input".to_string());
    }
    text.parse::<usize>().map_err(|e| e.to_string())
}

impl<R: BufRead, W: Write> ShotSource for CliSource<R, W> {
    fn next_batch(&mut self, count: usize) -> Result<Vec<Coordinate>, InputError> {
        if count > 1 {
            writeln!(self.output, "Enter {} coordinates.", count)?;
        }
        (0..count).map(|_| self.read_coordinate()).collect()
    }
}
