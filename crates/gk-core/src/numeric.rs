use crate::{GkError, GkResult};

/// Floating point type used throughout system
pub type Real = f64;

/// Cost of a path that does not exist.
///
/// This is a finite value on purpose: results keep it verbatim and report
/// writers render it as a placeholder. Never feed it to plain `+`; use
/// [`saturating_cost_add`].
pub const INFINITE_COST: Real = Real::MAX;

/// True when `cost` is the unreachable sentinel (or something past it).
#[inline]
pub fn is_infinite_cost(cost: Real) -> bool {
    cost >= INFINITE_COST || cost.is_infinite()
}

/// Add two path costs, keeping the sentinel absorbing.
#[inline]
pub fn saturating_cost_add(a: Real, b: Real) -> Real {
    if is_infinite_cost(a) || is_infinite_cost(b) {
        return INFINITE_COST;
    }
    let sum = a + b;
    if is_infinite_cost(sum) { INFINITE_COST } else { sum }
}

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-9,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> GkResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(GkError::NonFinite { what, value: v })
    }
}
