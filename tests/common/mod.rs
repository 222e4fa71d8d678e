pub mod app;
pub mod factory;

pub use app::{test_config, FailingStore, TestApp};
pub use factory::Factory;
