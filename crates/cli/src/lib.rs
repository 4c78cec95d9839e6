//! Public library modules for the CLI crate
pub mod fs_store;
pub mod scene;
