//! Effective local moduli: products of `(q - 1)` over odd primes up to
//! `p`, starting from a base prime. The base-3 ladder at primes 11 and
//! 13 yields the two calibration scales used by the cert targets.

/// Primes covered by the ladder, enough for the 10^18 study range.
pub const PRIMES: [u64; 13] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41];

/// Base-3 ladder value at p = 11.
pub const L11_MODULUS: u64 = 480;

/// Base-3 ladder value at p = 13.
pub const L13_MODULUS: u64 = 5760;

/// Product of `(q - 1)` over supported primes q with `base <= q <= p`.
/// Primes below the base contribute nothing, so values at `p < base`
/// are 1.
pub fn eff_loc_mod(p: u64, base: u64) -> u64 {
    PRIMES
        .iter()
        .filter(|&&q| q >= base && q <= p)
        .map(|&q| q - 1)
        .product()
}

/// The full ladder for one base, as `(p, modulus)` rows.
pub fn ladder(base: u64) -> Vec<(u64, u64)> {
    PRIMES.iter().map(|&p| (p, eff_loc_mod(p, base))).collect()
}
