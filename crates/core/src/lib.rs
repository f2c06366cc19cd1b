pub mod config;
pub mod engine;
pub mod error;
pub mod filter;
pub mod logging;
pub mod predicate;
pub mod request;
pub mod sink;
pub mod state;
pub mod step;

pub use engine::ClosureEngine;
pub use error::{ReflscopeError, Result};
pub use predicate::{DescriptorPredicate, NamePredicate, PredicateRegistry, any_of};
pub use request::HierarchyRequest;
pub use state::ClosureState;
pub use step::{ClosureReport, ReflectiveHierarchyStep};
