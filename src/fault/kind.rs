//! Fault categories shown to the user

use std::fmt;

/// A named category of failure, one per demonstrated scenario
///
/// The `Display` form is the label printed in banners and reports, e.g.
/// `"DivisionError occurred: attempt to divide by zero"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultKind {
    /// Any failure reported by the filesystem
    IoError,
    /// The named file does not exist
    FileNotFound,
    /// A read ran past the end of the stream
    UnexpectedEof,
    /// The database endpoint rejected the connection
    DatabaseError,
    /// A type name is not in the registry
    SymbolNotFound,
    /// Integer division by zero (or overflowing division)
    DivisionError,
    /// A method was called through an unset reference
    NullReference,
    /// An array was indexed outside its length
    IndexOutOfBounds,
    /// A value was cast to a type it does not hold
    InvalidCast,
    /// An argument was outside the operation's domain
    InvalidArgument,
    /// A string is not a well-formed integer
    NumberFormat,
}

impl FaultKind {
    /// The broader kind this one specializes, if any
    pub fn parent(self) -> Option<FaultKind> {
        match self {
            FaultKind::FileNotFound | FaultKind::UnexpectedEof => Some(FaultKind::IoError),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FaultKind::IoError => "IoError",
            FaultKind::FileNotFound => "FileNotFound",
            FaultKind::UnexpectedEof => "UnexpectedEof",
            FaultKind::DatabaseError => "DatabaseError",
            FaultKind::SymbolNotFound => "SymbolNotFound",
            FaultKind::DivisionError => "DivisionError",
            FaultKind::NullReference => "NullReference",
            FaultKind::IndexOutOfBounds => "IndexOutOfBounds",
            FaultKind::InvalidCast => "InvalidCast",
            FaultKind::InvalidArgument => "InvalidArgument",
            FaultKind::NumberFormat => "NumberFormat",
        }
    }
}

impl fmt::Display for FaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
