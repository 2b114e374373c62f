//! Canonical ordering for Maven pom.xml top-level elements.
//!
//! Reorders the direct children of `<project>` into the
//! schema-recommended sequence while leaving every other byte of the
//! document untouched: whitespace, comments, the XML prolog, and the
//! container tag itself all survive verbatim. Input that cannot be
//! parsed, or that contains no `<project>` element, is returned
//! unchanged rather than rejected.

pub mod canonical;
pub mod error;
pub mod orderer;
pub mod scanner;
pub mod types;

pub use canonical::{CanonicalOrder, MAVEN_PROJECT_ORDER};
pub use error::{OrderError, Result};
pub use orderer::PomOrderer;
pub use scanner::scan_container;
pub use types::{ChildSpan, ContainerLayout};
