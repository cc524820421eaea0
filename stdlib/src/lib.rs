pub mod events;
pub mod os;
pub mod path;
pub mod process;
pub mod suites;

#[cfg(test)]
mod suites_test;

pub use suites::{SUITES, Suite, register_all, register_suite};
