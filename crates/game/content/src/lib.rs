//! Bundled creature data and configuration loaders.
//!
//! This crate turns data files into core types:
//! - The offline creature dataset (JSON in the upstream creature-API shape),
//!   exposed as a [`pocket_core::RecordSource`]
//! - Conversion and roster rules (`PocketConfig`) from TOML
//!
//! Content is consumed by the runtime and client and never appears in roster state.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    BundledDataset, ConfigLoader, ContentFactory, LoadResult, RawCreature, RecordLoader,
};
