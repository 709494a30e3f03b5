pub mod check;
pub mod dump;
pub mod loader;
pub mod run_common;
pub mod tokenize;

#[cfg(test)]
mod loader_tests;
