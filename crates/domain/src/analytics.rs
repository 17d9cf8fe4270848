pub mod aggregate;

pub use aggregate::{EntityCount, ResultStats};
