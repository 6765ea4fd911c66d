use crate::constants::MASTER_NUMBERS;

/// Whether `n` is one of the master numbers 11, 22 or 33.
pub fn is_master(n: u32) -> bool {
    MASTER_NUMBERS.contains(&n)
}

/// Reduce an integer to a single digit or a master number.
///
/// The master check runs before every reduction step, so an intermediate
/// sum that lands exactly on 11, 22 or 33 is kept (`29 → 11`, not `2`).
/// Inputs `<= 9` are returned unchanged, which makes `0` the result for an
/// empty sum.
pub fn reduce(n: u64) -> u32 {
    let mut n = n;
    while n > 9 {
        if MASTER_NUMBERS.iter().any(|&m| u64::from(m) == n) {
            return n as u32;
        }
        n = n / 10 + n % 10;
    }
    n as u32
}
