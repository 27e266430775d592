pub mod config;
pub mod error;
pub mod models;
pub mod session;

#[cfg(test)]
mod testing;
