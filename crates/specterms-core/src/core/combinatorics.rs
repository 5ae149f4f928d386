use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CombinatoricsError {
    #[error("Cannot choose {k} items out of {n}")]
    KExceedsN { k: u32, n: u32 },
    #[error("Result for n = {n} does not fit into 64 bits")]
    Overflow { n: u32 },
}

/// Computes `n!` with checked arithmetic.
///
/// # Errors
///
/// Returns `CombinatoricsError::Overflow` once the product leaves the `u64` range
/// (`n > 20`).
pub fn factorial(n: u32) -> Result<u64, CombinatoricsError> {
    (2..=u64::from(n)).try_fold(1u64, |acc, i| {
        acc.checked_mul(i)
            .ok_or(CombinatoricsError::Overflow { n })
    })
}

/// Computes the binomial coefficient `C(k, n) = n! / (k! (n - k)!)`, the number of
/// ways to place `k` electrons into `n` spin-orbitals.
///
/// The argument order follows the electron-count-first convention used throughout
/// the engine (`binomial(electrons, capacity)`).
///
/// The product is accumulated multiplicatively, so no intermediate factorial is
/// formed and every value up to `C(31, 62)` is exact.
///
/// # Errors
///
/// Returns `CombinatoricsError::KExceedsN` if `k > n`.
pub fn binomial(k: u32, n: u32) -> Result<u64, CombinatoricsError> {
    if k > n {
        return Err(CombinatoricsError::KExceedsN { k, n });
    }
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 0..u128::from(k) {
        // C(n, i + 1) = C(n, i) * (n - i) / (i + 1) is always integral.
        result = result * (u128::from(n) - i) / (i + 1);
        if result > u128::from(u64::MAX) {
            return Err(CombinatoricsError::Overflow { n });
        }
    }
    Ok(result as u64)
}

/// Multiplies a sequence of counts, returning `None` on `u64` overflow.
pub fn checked_product<I>(values: I) -> Option<u64>
where
    I: IntoIterator<Item = u64>,
{
    values
        .into_iter()
        .try_fold(1u64, |acc, value| acc.checked_mul(value))
}
