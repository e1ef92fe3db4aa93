//! The sequence being shown and the scrolling window into it.
mod base;
mod mapper;

pub use base::{Base, Genome};
pub use mapper::ScrollMapper;
