pub mod asset;

pub use asset::{Asset, AssetBuilder};
