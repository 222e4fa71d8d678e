pub mod contact;
pub mod project;

pub use contact::*;
pub use project::*;
