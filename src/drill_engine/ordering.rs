/// Return the pair as `(larger, smaller)`. Equal values pass through.
pub fn order_pair(a: u64, b: u64) -> (u64, u64) {
    if a >= b { (a, b) } else { (b, a) }
}
