use std::fmt::Display;

use crate::support::format_string_literal;

/// Location that is used for describing where some operation or value is defined in the source program. Locations
/// are metadata: they do not affect the semantics of the IR and are only used for debugging and error reporting
/// (e.g., every [`Diagnostic`](crate::Diagnostic) emitted by verification carries the location of the offending
/// operation).
///
/// Refer to the [official MLIR documentation](https://mlir.llvm.org/docs/Dialects/Builtin/#location-attributes)
/// for more information.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Location {
    /// Location for which no source information is available.
    #[default]
    Unknown,

    /// Location in a source file, identified by its file name, line number, and column number.
    FileLineColumn { file: String, line: usize, column: usize },

    /// Location identified only by a name (e.g., the name of a layer in a model).
    Name(String),
}

impl Location {
    pub fn unknown() -> Self {
        Self::Unknown
    }

    pub fn file_line_column<F: Into<String>>(file: F, line: usize, column: usize) -> Self {
        Self::FileLineColumn { file: file.into(), line, column }
    }

    pub fn name<N: Into<String>>(name: N) -> Self {
        Self::Name(name.into())
    }

    /// Returns `true` if this is [`Location::Unknown`].
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl Display for Location {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown => write!(formatter, "loc(unknown)"),
            Self::FileLineColumn { file, line, column } => {
                write!(formatter, "loc({}:{line}:{column})", format_string_literal(file))
            }
            Self::Name(name) => write!(formatter, "loc({})", format_string_literal(name)),
        }
    }
}
