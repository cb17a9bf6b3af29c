//! Physical quantities carried by simulated stars.

pub mod mass;
pub mod time;

#[cfg(test)]
mod mass_test;

pub use mass::Mass;
pub use time::Time;
