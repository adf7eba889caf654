//! Maven coordinate types shared by the BOM generator crates.

pub mod coordinate;
pub mod version;

pub use coordinate::Coordinate;
pub use version::{PLATFORM_VERSION, PROJECT_VERSION, VersionSpec};
