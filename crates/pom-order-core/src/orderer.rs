//! The reordering transform.

use crate::canonical::CanonicalOrder;
use crate::scanner::scan_container;

/// Default container tag for Maven project descriptors.
pub const DEFAULT_CONTAINER: &str = "project";

/// Reorders the top-level children of a container element according to a
/// [`CanonicalOrder`], preserving every byte outside the moved spans.
///
/// Stateless after construction; a single value can serve any number of
/// documents, from any number of threads.
#[derive(Debug, Clone)]
pub struct PomOrderer {
    container: String,
    order: CanonicalOrder,
}

impl PomOrderer {
    /// An orderer with Maven defaults: `<project>` container, the
    /// schema-recommended element order.
    pub fn new() -> Self {
        Self {
            container: DEFAULT_CONTAINER.to_owned(),
            order: CanonicalOrder::maven_project(),
        }
    }

    /// An orderer with an explicit canonical order.
    pub fn with_order(order: CanonicalOrder) -> Self {
        Self {
            container: DEFAULT_CONTAINER.to_owned(),
            order,
        }
    }

    /// Changes the container tag name.
    pub fn with_container(mut self, name: impl Into<String>) -> Self {
        self.container = name.into();
        self
    }

    pub fn container(&self) -> &str {
        &self.container
    }

    pub fn canonical_order(&self) -> &CanonicalOrder {
        &self.order
    }

    /// Returns `text` with the container's children in canonical order.
    ///
    /// Known children come first, grouped by rank, each group keeping its
    /// original relative order; unknown children follow in original
    /// document order. Every child moves together with the whitespace and
    /// comments immediately preceding it. If the document has no
    /// container, cannot be tokenized, or is already canonical, the input
    /// comes back unchanged.
    pub fn order(&self, text: &str) -> String {
        let Some(layout) = scan_container(text, &self.container) else {
            return text.to_owned();
        };

        // Stable sort: ties (same name, or several unknowns) keep their
        // original document order.
        let mut indices: Vec<usize> = (0..layout.children.len()).collect();
        indices.sort_by_key(|&i| {
            self.order
                .rank(&layout.children[i].name)
                .unwrap_or(usize::MAX)
        });

        if indices.iter().enumerate().all(|(target, &source)| target == source) {
            return text.to_owned();
        }

        tracing::debug!(
            children = layout.children.len(),
            "reordering <{}> children",
            self.container
        );

        let mut out = String::with_capacity(text.len());
        out.push_str(&text[..layout.content_start]);
        for &i in &indices {
            out.push_str(layout.children[i].text(text));
        }
        // Trailing residue, the container's closing tag, and everything
        // after it are one contiguous untouched slice.
        out.push_str(&text[layout.trailing_start..]);
        out
    }

    /// True iff [`order`](Self::order) would produce different text.
    pub fn has_changes(&self, text: &str) -> bool {
        self.order(text) != text
    }
}

impl Default for PomOrderer {
    fn default() -> Self {
        Self::new()
    }
}
