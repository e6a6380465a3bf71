//! Username generation engine
//!
//! A pure function of (options, randomness source): the composer builds one
//! candidate at a time, the batch driver enforces validation and best-effort
//! in-batch uniqueness. No state is held between calls.

mod batch;
mod composer;

pub use batch::{generate_batch, generate_batch_with_rng, validate_options};
pub use composer::NameComposer;
