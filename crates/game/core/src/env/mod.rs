//! Ports to the outside world that the core consumes: record sources and the
//! random oracle. Both are traits so the runtime and tests can inject their own.
mod error;
mod rng;
mod source;

pub use error::SourceError;
pub use rng::{FixedRng, PcgRng, RngOracle, compute_seed, draw};
pub use source::{RecordKey, RecordSource, RecordSummary, StaticSource};
