//! Error types for OBJ and MTL parsing

use thiserror::Error;

/// Reason a single record failed to parse.
///
/// Record-level failures are produced without line context; the loader
/// wraps them into [`ObjError::Parse`] with the offending line number and
/// raw text before they reach the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// A non-numeric token appeared where a float or integer was required.
    #[error("malformed number '{0}'")]
    MalformedNumber(String),

    /// A face reference token was non-numeric or zero.
    #[error("malformed face index '{0}'")]
    MalformedIndex(String),

    /// A face reference resolved outside the accumulated attribute table.
    #[error("index {index} out of range for {len} recorded elements")]
    IndexOutOfRange {
        /// The signed index as written in the document.
        index: i64,
        /// Number of elements accumulated when the reference was resolved.
        len: usize,
    },

    /// The triangulator exhausted its ear search without completing.
    #[error("degenerate polygon cannot be triangulated")]
    DegeneratePolygon,

    /// A face record listed fewer than three vertices.
    #[error("face has {0} vertices, at least 3 required")]
    InvalidFace(usize),
}

/// Errors produced while loading an OBJ document.
#[derive(Debug, Error)]
pub enum ObjError {
    /// Zero bytes were supplied.
    #[error("empty input")]
    EmptyInput,

    /// A full scan produced no meshes, no vertices, and no indices.
    #[error("document contained no geometry")]
    NoGeometry,

    /// A record failed to parse.
    #[error("line {line}: {kind} in {text:?}")]
    Parse {
        /// What went wrong with the record.
        kind: ParseErrorKind,
        /// 1-based line number within the offending document.
        line: usize,
        /// The raw text of the offending line.
        text: String,
    },

    /// Reading the document from disk failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ObjError {
    /// Attach line context to a record-level failure.
    pub(crate) fn at(kind: ParseErrorKind, line: usize, text: &str) -> Self {
        Self::Parse {
            kind,
            line,
            text: text.to_string(),
        }
    }
}
