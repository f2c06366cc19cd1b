//! Java flavour of the reflective closure: naming conventions, default ignore rules,
//! seed signature parsing and an in-memory type index.

pub mod index;
pub mod layered;
pub mod naming;
pub mod signature;

pub use index::{IndexDocument, JavaTypeIndex, JavaTypeIndexBuilder};
pub use layered::LayeredIndex;
pub use naming::default_ignore_predicate;
pub use signature::{SignatureError, parse_signature};
