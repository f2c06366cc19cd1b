pub mod descriptor;
pub mod record;
pub mod type_ref;

pub use descriptor::*;
pub use record::*;
pub use type_ref::*;
