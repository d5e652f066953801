//! Pure data structures (DTOs) for the order domain.

pub mod filter;
pub mod order;
pub mod seed;

pub use filter::*;
pub use order::*;
pub use seed::*;
