//! Filesystem scenarios (menu items 1 to 3)
//!
//! All three open a user-named file and classify the failure with
//! [`Fault::from_io`]. The handle is owned by the trigger and dropped on every
//! return path.

use super::{Scenario, ScenarioError};
use crate::console::Console;
use crate::fault::{CatchScope, Fault, FaultKind};
use std::fs::File;
use std::io::{BufRead, BufReader, Read, Write};
use tracing::debug;

/// Read the first line of a file
pub struct ReadFirstLine;

impl Scenario for ReadFirstLine {
    const TITLE: FaultKind = FaultKind::IoError;
    const SCOPE: CatchScope = CatchScope::new(&[FaultKind::IoError]);

    fn trigger<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<String, ScenarioError> {
        let path = console.prompt_line("Enter the file name to read: ")?;

        let file = File::open(&path).map_err(|e| Fault::from_io(&path, e))?;
        debug!(path = %path, "opened file");
        let mut reader = BufReader::new(file);

        let mut line = Vec::new();
        let n = reader
            .read_until(b'\n', &mut line)
            .map_err(|e| Fault::from_io(&path, e))?;
        if n == 0 {
            return Ok("First line: <empty file>".to_string());
        }

        let line = String::from_utf8_lossy(&line);
        Ok(format!("First line: {}", line.trim_end_matches(['\n', '\r'])))
    }
}

/// Open a file as an input stream and close it again
pub struct OpenFile;

impl Scenario for OpenFile {
    const TITLE: FaultKind = FaultKind::FileNotFound;
    const SCOPE: CatchScope = CatchScope::new(&[FaultKind::FileNotFound, FaultKind::IoError]);

    fn trigger<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<String, ScenarioError> {
        let path = console.prompt_line("Enter the file name to open: ")?;

        let file = File::open(&path).map_err(|e| Fault::from_io(&path, e))?;
        debug!(path = %path, "opened file");
        drop(file);

        Ok("File opened successfully.".to_string())
    }
}

/// Read single bytes until the stream runs out
pub struct ReadPastEnd;

impl Scenario for ReadPastEnd {
    const TITLE: FaultKind = FaultKind::UnexpectedEof;
    const SCOPE: CatchScope = CatchScope::new(&[FaultKind::UnexpectedEof, FaultKind::IoError]);

    fn trigger<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<String, ScenarioError> {
        let path = console.prompt_line("Enter the file name to read: ")?;

        let file = File::open(&path).map_err(|e| Fault::from_io(&path, e))?;
        let mut reader = BufReader::new(file);
        let mut byte = [0u8; 1];
        let mut bytes_read: u64 = 0;

        // Only a read error leaves this loop
        loop {
            if let Err(e) = reader.read_exact(&mut byte) {
                debug!(path = %path, bytes_read, "stream ended");
                let fault = match Fault::from_io(&path, e) {
                    Fault::UnexpectedEof { path, source, .. } => Fault::UnexpectedEof {
                        path,
                        bytes_read,
                        source,
                    },
                    other => other,
                };
                return Err(fault.into());
            }
            bytes_read += 1;
        }
    }
}
