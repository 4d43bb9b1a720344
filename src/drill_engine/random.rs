use rand::Rng;
use crate::drill_engine::error::{DrillError, DrillResult};

/// Uniform integer in the closed range `[low, high]`.
pub fn uniform_int<R: Rng + ?Sized>(rng: &mut R, low: u64, high: u64) -> DrillResult<u64> {
    if high < low {
        return Err(DrillError::input(format!("empty range [{low}, {high}]")));
    }
    Ok(rng.gen_range(low..=high))
}

/// Uniformly pick one element of a nonempty slice.
pub fn choose_one<'a, R: Rng + ?Sized, T>(rng: &mut R, items: &'a [T]) -> DrillResult<&'a T> {
    if items.is_empty() {
        return Err(DrillError::input("cannot choose from an empty sequence"));
    }
    let i = rng.gen_range(0..items.len());
    Ok(&items[i])
}
