pub mod api;
pub mod config;
pub mod dns;
pub mod outputs;
pub mod runner;
pub mod validation;

#[cfg(test)]
mod tests;
