mod error;
mod strategy;


pub use error::InitError;
pub use strategy::{initial_centroids, InitStrategy};
