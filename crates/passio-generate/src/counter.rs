use num_bigint::BigUint;

use passio_core::LengthRange;

/// Exact number of strings a generator over `alphabet_size` symbols yields for
/// `range`: the sum of `alphabet_size^len` over every length in the range.
///
/// Realistic inputs overflow `u64` (94 symbols at length 10 already does), so
/// the result is a `BigUint`.
pub fn count_combinations(alphabet_size: usize, range: LengthRange) -> BigUint {
    let base = BigUint::from(alphabet_size);
    let mut power = pow(&base, range.min());
    let mut total = power.clone();

    for _ in range.min()..range.max() {
        power *= &base;
        total += &power;
    }

    total
}

/// `base^exp` by repeated squaring.
fn pow(base: &BigUint, mut exp: usize) -> BigUint {
    let mut result = BigUint::from(1_u8);
    let mut square = base.clone();

    while exp > 0 {
        if exp & 1 == 1 {
            result *= &square;
        }
        exp >>= 1;
        if exp > 0 {
            square = &square * &square;
        }
    }

    result
}
