pub mod project;
pub mod project_assignment;
pub mod user;

pub mod prelude;

pub use prelude::*;
