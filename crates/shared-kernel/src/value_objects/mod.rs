// crates/shared-kernel/src/value_objects/mod.rs
pub mod asset_id;
pub mod media_type;

pub use asset_id::AssetId;
pub use media_type::MediaType;
