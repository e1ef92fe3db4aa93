#![cfg_attr(not(feature = "std"), no_std)]

pub mod clock;
pub mod config;
pub mod errors;
pub mod fps;
pub mod genome;
pub mod lights;
pub mod logging;
pub mod patterns;

pub use errors::{GenomeError, GenomeResult};
