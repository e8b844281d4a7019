/// Trial division up to the integer square root of `n`.
///
/// Anything below 2 is not prime. The divisor test is written as
/// `i <= n / i` so it stays in range for bounds near `i64::MAX`.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    let mut i: i64 = 2;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// All primes in `2..=limit`, ascending.
pub fn primes_up_to(limit: i64) -> Vec<i64> {
    (2..=limit).filter(|&n| is_prime(n)).collect()
}
