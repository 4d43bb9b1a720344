//! In-line multiplication: drill specific times tables.
//!
//! The first factor is a single digit in `2..=9`. The second is drawn from
//! `2..=t` where `t` is one of the caller's tables, so asking for `{7, 8}`
//! yields problems like `6 × 7` or `3 × 5` but never `× 1`.

use rand::Rng;
use crate::drill_engine::{
    error::{DrillError, DrillResult},
    random::{choose_one, uniform_int},
};

/// Smallest factor worth drilling.
pub const MIN_FACTOR: u64 = 2;
pub const MAX_FIRST_FACTOR: u64 = 9;

/// `tables` is the caller's table set as a slice, built once per batch.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, tables: &[u64]) -> DrillResult<Vec<u64>> {
    if tables.is_empty() {
        return Err(DrillError::input("in-line multiplication needs at least one table"));
    }

    let n1 = uniform_int(rng, MIN_FACTOR, MAX_FIRST_FACTOR)?;
    let table = *choose_one(rng, tables)?;
    let n2 = uniform_int(rng, MIN_FACTOR, table)
        .map_err(|_| DrillError::input(format!("table {table} is below {MIN_FACTOR}")))?;
    Ok(vec![n1, n2])
}
