//! Span types produced by the container scanner.

/// One top-level child of the container, addressed as a byte range of the
/// original document.
///
/// The range covers the whitespace/comment run immediately preceding the
/// child's open tag plus the element itself, so spans partition the
/// container content without gaps and a child keeps its surrounding
/// formatting when it moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildSpan {
    /// Tag name as written, including any namespace prefix.
    pub name: String,
    /// Byte offset where the span starts (end of the previous child).
    pub start: usize,
    /// Byte offset one past the child's closing tag.
    pub end: usize,
}

impl ChildSpan {
    /// The verbatim text of this child within `document`.
    pub fn text<'a>(&self, document: &'a str) -> &'a str {
        &document[self.start..self.end]
    }
}

/// Location of the container and the partition of its inner content.
///
/// Invariant: concatenating every child span in document order, then the
/// trailing residue `trailing_start..content_end`, reproduces
/// `document[content_start..content_end]` byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerLayout {
    /// First byte of the container's inner content.
    pub content_start: usize,
    /// Byte offset of the container's closing tag.
    pub content_end: usize,
    /// Top-level children in document order.
    pub children: Vec<ChildSpan>,
    /// Start of the residue after the last child (whitespace/comments
    /// before the closing tag); stays in place during reassembly.
    pub trailing_start: usize,
}

impl ContainerLayout {
    /// The residue between the last child and the container's close tag.
    pub fn trailing<'a>(&self, document: &'a str) -> &'a str {
        &document[self.trailing_start..self.content_end]
    }
}
