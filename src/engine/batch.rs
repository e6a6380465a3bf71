//! Batch generation driver
//!
//! Validates a configuration, then drives the composer `batch_size` times
//! with best-effort in-batch uniqueness: a bounded number of retries per
//! slot, after which a duplicate is accepted rather than looping forever.

use std::collections::HashSet;

use rand::Rng;
use regex::Regex;

use super::composer::NameComposer;
use crate::catalog;
use crate::error::{Result, UsernameForgeError};
use crate::types::UsernameOptions;

/// Retries per slot before a duplicate candidate is accepted.
const MAX_ATTEMPTS_PER_NAME: usize = 8;

/// Generate a batch of usernames with a thread-local RNG
pub fn generate_batch(options: &UsernameOptions) -> Result<Vec<String>> {
    generate_batch_with_rng(options, &mut rand::thread_rng())
}

/// Generate a batch of usernames with an injected RNG.
///
/// Seeding the RNG makes the output fully reproducible: the same options and
/// the same seed yield the same batch.
pub fn generate_batch_with_rng<R: Rng>(
    options: &UsernameOptions,
    rng: &mut R,
) -> Result<Vec<String>> {
    validate_options(options)?;

    let composer = NameComposer::new(options);
    let mut seen: HashSet<String> = HashSet::with_capacity(options.batch_size);
    let mut batch = Vec::with_capacity(options.batch_size);
    let mut duplicates = 0usize;

    for _ in 0..options.batch_size {
        let mut candidate = composer.compose(rng);
        let mut attempts = 1;
        while seen.contains(&candidate) && attempts < MAX_ATTEMPTS_PER_NAME {
            candidate = composer.compose(rng);
            attempts += 1;
        }
        if seen.contains(&candidate) {
            duplicates += 1;
            tracing::debug!(
                name = %candidate,
                attempts,
                "accepting duplicate after exhausting uniqueness retries"
            );
        }
        seen.insert(candidate.clone());
        batch.push(candidate);
    }

    if duplicates > 0 {
        tracing::warn!(
            duplicates,
            batch_size = options.batch_size,
            "name space too small for a fully distinct batch"
        );
    }

    Ok(batch)
}

/// Validate a configuration, reporting the specific invalid field.
///
/// Called by `generate_batch` before any name is composed; a failure here
/// means no partial batch is produced.
pub fn validate_options(options: &UsernameOptions) -> Result<()> {
    if options.batch_size == 0 {
        return Err(UsernameForgeError::config("batch_size must be at least 1"));
    }

    if options.min_length == 0 {
        return Err(UsernameForgeError::config("min_length must be at least 1"));
    }

    if options.max_length < options.min_length {
        return Err(UsernameForgeError::config(format!(
            "max_length ({}) is smaller than min_length ({})",
            options.max_length, options.min_length
        )));
    }

    let keyword = options.keyword.trim();
    if !keyword.is_empty() {
        let valid_chars = Regex::new(r"^[A-Za-z0-9]+$")
            .map_err(|e| UsernameForgeError::internal(e.to_string()))?;
        if !valid_chars.is_match(keyword) {
            return Err(UsernameForgeError::validation(
                "keyword may only contain letters and digits",
            ));
        }
    }

    // The catalog is fixed at build time, so this should never fire.
    if catalog::words_for(options.category).is_empty() {
        return Err(UsernameForgeError::config(format!(
            "word list for category '{}' is empty",
            options.category
        )));
    }

    Ok(())
}
