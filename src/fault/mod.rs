//! Fault taxonomy for the scenario handlers
//!
//! This module defines [`Fault`], the error every scenario deliberately provokes,
//! and [`CatchScope`], which decides the label a fault is reported under.
//!
//! # Reporting
//!
//! A fault is never propagated out of the scenario that raised it. The scenario
//! resolves the fault's [`FaultKind`] against its catch scope and prints one line:
//!
//! ```text
//! <Kind> occurred: <message>
//! ```
//!
//! `<message>` is the fault's `Display` text, which passes through whatever
//! diagnostic the failing operation produced (an `io::Error`, a `rusqlite::Error`,
//! a `ParseIntError`, ...).
//!
//! # Classification
//!
//! Filesystem failures are classified by [`Fault::from_io`] into the most specific
//! kind available (`FileNotFound`, `UnexpectedEof`), falling back to `IoError`. A
//! scope that does not list the specific kind reports it under its parent.

mod kind;

pub use kind::FaultKind;

use std::io;
use std::num::ParseIntError;
use thiserror::Error;

/// A deliberately provoked failure
#[derive(Debug, Error)]
pub enum Fault {
    /// Filesystem failure without a more specific classification
    #[error("{path} ({source})")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("{path} ({source})")]
    FileNotFound {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("{source} after reading {bytes_read} bytes of {path}")]
    UnexpectedEof {
        path: String,
        bytes_read: u64,
        #[source]
        source: io::Error,
    },

    /// The database driver rejected the connection or the validation query
    #[error("{0}")]
    Database(#[from] rusqlite::Error),

    /// No registered driver understands the connection URL
    #[error("no database driver for URL `{url}`")]
    NoDriver { url: String },

    /// The name is the whole message
    #[error("{name}")]
    SymbolNotFound { name: String },

    #[error("{0}")]
    Division(&'static str),

    #[error("cannot invoke `{method}` because `{binding}` is null")]
    NullReference {
        method: &'static str,
        binding: &'static str,
    },

    #[error("Index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: i32, len: usize },

    #[error("array size {size} is outside 0..={limit}")]
    InvalidArraySize { size: i32, limit: usize },

    #[error("`{from}` cannot be cast to `{to}`")]
    InvalidCast { from: String, to: String },

    #[error("timeout value is negative")]
    NegativeTimeout { millis: i64 },

    #[error("{source} for input \"{input}\"")]
    NumberFormat {
        input: String,
        #[source]
        source: ParseIntError,
    },
}

impl Fault {
    /// Classify a filesystem error into the most specific fault available
    pub fn from_io(path: impl Into<String>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => Fault::FileNotFound { path, source },
            io::ErrorKind::UnexpectedEof => Fault::UnexpectedEof {
                path,
                bytes_read: 0,
                source,
            },
            _ => Fault::Io { path, source },
        }
    }

    /// The category this fault belongs to
    pub fn kind(&self) -> FaultKind {
        match self {
            Fault::Io { .. } => FaultKind::IoError,
            Fault::FileNotFound { .. } => FaultKind::FileNotFound,
            Fault::UnexpectedEof { .. } => FaultKind::UnexpectedEof,
            Fault::Database(_) | Fault::NoDriver { .. } => FaultKind::DatabaseError,
            Fault::SymbolNotFound { .. } => FaultKind::SymbolNotFound,
            Fault::Division(_) => FaultKind::DivisionError,
            Fault::NullReference { .. } => FaultKind::NullReference,
            Fault::IndexOutOfBounds { .. } => FaultKind::IndexOutOfBounds,
            Fault::InvalidArraySize { .. } | Fault::NegativeTimeout { .. } => {
                FaultKind::InvalidArgument
            }
            Fault::InvalidCast { .. } => FaultKind::InvalidCast,
            Fault::NumberFormat { .. } => FaultKind::NumberFormat,
        }
    }
}

/// The fault kinds a scenario reports under their own label
#[derive(Debug, Clone, Copy)]
pub struct CatchScope(&'static [FaultKind]);

impl CatchScope {
    pub const fn new(kinds: &'static [FaultKind]) -> Self {
        CatchScope(kinds)
    }

    pub fn catches(&self, kind: FaultKind) -> bool {
        self.0.contains(&kind)
    }

    /// Walk from `kind` up through its parents until one is in scope
    ///
    /// A kind with no ancestor in scope is reported under its own label.
    pub fn resolve(&self, kind: FaultKind) -> FaultKind {
        let mut current = Some(kind);
        while let Some(k) = current {
            if self.catches(k) {
                return k;
            }
            current = k.parent();
        }
        kind
    }

    /// The one-line report for `fault`
    pub fn report(&self, fault: &Fault) -> String {
        format!("{} occurred: {}", self.resolve(fault.kind()), fault)
    }
}
