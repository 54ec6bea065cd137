//! Integer equations behind intersecting periodic step sets.

use num_traits::{CheckedNeg, CheckedRem, PrimInt, Signed};

/// Solve `a*x + b*y = g` where `|g| = gcd(a, b)`, returning `(x, y, g)`.
///
/// When `b == 0` the result is `(1, 0, a)`, so `g` keeps the sign the reduction arrives at and
/// may be negative for negative inputs. Defined for every input pair; `gcd(T::MIN, 0)` itself is
/// not representable and comes back as `g = T::MIN`.
pub fn extended_euclidean<T>(a: T, b: T) -> (T, T, T)
where
    T: PrimInt + Signed,
{
    let (mut old_r, mut r) = (a, b);
    let (mut old_x, mut x) = (T::one(), T::zero());
    let (mut old_y, mut y) = (T::zero(), T::one());

    while !r.is_zero() {
        // `T::MIN / -1` overflows, but -1 divides everything
        let remainder = if r == -T::one() {
            T::zero()
        } else {
            old_r % r
        };
        if remainder.is_zero() {
            return (x, y, r);
        }

        let quotient = old_r / r;
        (old_r, r) = (r, remainder);
        (old_x, x) = (x, old_x - quotient * x);
        (old_y, y) = (y, old_y - quotient * y);
    }

    (old_x, old_y, old_r)
}

/// One axis of the integer solutions to a linear Diophantine equation: `x + k*offset` for every
/// integer `k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Root<T> {
    pub x: T,
    pub offset: T,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum DiophantineError {
    #[error("coefficients a and b are both zero")]
    DegenerateCoefficients,

    #[error("integer overflow while scaling a Bezout solution")]
    Overflow,
}

/// Solve `a*x + b*y = c` over the integers.
///
/// Returns the `x` and `y` solution families, or `None` when `c` is not a multiple of
/// `gcd(a, b)`. Solutions pair up: `(x.x + k*x.offset, y.x + k*y.offset)` solves the equation for
/// every `k`.
///
/// # Errors
///
/// Both coefficients zero is rejected as [`DiophantineError::DegenerateCoefficients`], and a
/// solution or period that does not fit in `T` is [`DiophantineError::Overflow`].
pub fn diophantine<T>(a: T, b: T, c: T) -> Result<Option<(Root<T>, Root<T>)>, DiophantineError>
where
    T: PrimInt + Signed + CheckedRem + CheckedNeg,
{
    if a.is_zero() && b.is_zero() {
        return Err(DiophantineError::DegenerateCoefficients);
    }

    let (xg, yg, g) = extended_euclidean(a, b);

    let remainder = c.checked_rem(&g).ok_or(DiophantineError::Overflow)?;
    if !remainder.is_zero() {
        return Ok(None);
    }

    let scale = c.checked_div(&g).ok_or(DiophantineError::Overflow)?;
    let x0 = xg.checked_mul(&scale).ok_or(DiophantineError::Overflow)?;
    let y0 = yg.checked_mul(&scale).ok_or(DiophantineError::Overflow)?;

    let x_offset = b.checked_div(&g).ok_or(DiophantineError::Overflow)?;
    let y_offset = a
        .checked_div(&g)
        .and_then(|quotient| quotient.checked_neg())
        .ok_or(DiophantineError::Overflow)?;

    Ok(Some((
        Root {
            x: x0,
            offset: x_offset,
        },
        Root {
            x: y0,
            offset: y_offset,
        },
    )))
}
