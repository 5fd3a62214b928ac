//! Adapters behind the domain ports and the filesystem.

pub mod dispenser;
pub mod resources;
