//! Floored integer division.
//!
//! Rust's `/` and `%` truncate toward zero, which produces negative
//! remainders for pre-epoch day and second counts. Calendar decomposition
//! requires floored semantics so remainders stay in `[0, divisor)`.

/// Floored division: rounds the quotient toward negative infinity.
#[inline]
pub const fn floor_div(a: i64, b: i64) -> i64 {
    let q = a / b;
    if a % b != 0 && (a < 0) != (b < 0) {
        q - 1
    } else {
        q
    }
}

/// Floored modulo: the result has the sign of `b`.
///
/// For a positive divisor the result is always in `[0, b)`, regardless of
/// the sign of `a`.
#[inline]
pub const fn floor_mod(a: i64, b: i64) -> i64 {
    a - floor_div(a, b) * b
}
