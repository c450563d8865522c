//! Element types storable in a dense matrix
//!
//! The `Element` trait connects Rust scalar types to the matrix core. It is
//! implemented for the primitive numeric types, the interleaved complex
//! types, and (behind the `f16` feature) the half-precision floats.

pub mod complex;

pub use complex::{Complex64, Complex128};

use bytemuck::{Pod, Zeroable};
use std::fmt::Debug;
use std::ops::{Add, Mul, Sub};

/// Trait for types that can be elements of a matrix
///
/// # Bounds
/// - `Copy + Send + Sync + 'static` - Basic trait requirements
/// - `Pod + Zeroable` - Safe memory reinterpretation (bytemuck)
/// - `Add + Sub + Mul` - The ring operations the kernels need (Output = Self)
/// - `PartialEq + Debug` - Structural comparison and diagnostics
///
/// Note: `Div` is NOT required; no structural operation divides elements.
pub trait Element:
    Copy
    + Send
    + Sync
    + Pod
    + Zeroable
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + PartialEq
    + Debug
{
    /// Additive identity
    fn zero() -> Self;

    /// Multiplicative identity
    fn one() -> Self;

    /// Complex conjugate; the identity for real types
    fn conj(self) -> Self;
}

impl Element for f64 {
    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn one() -> Self {
        1.0
    }

    #[inline]
    fn conj(self) -> Self {
        self
    }
}

impl Element for f32 {
    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn one() -> Self {
        1.0
    }

    #[inline]
    fn conj(self) -> Self {
        self
    }
}

impl Element for i64 {
    #[inline]
    fn zero() -> Self {
        0
    }

    #[inline]
    fn one() -> Self {
        1
    }

    #[inline]
    fn conj(self) -> Self {
        self
    }
}

impl Element for i32 {
    #[inline]
    fn zero() -> Self {
        0
    }

    #[inline]
    fn one() -> Self {
        1
    }

    #[inline]
    fn conj(self) -> Self {
        self
    }
}

// ============================================================================
// Half-precision floating point types (requires "f16" feature)
// ============================================================================

#[cfg(feature = "f16")]
impl Element for half::f16 {
    #[inline]
    fn zero() -> Self {
        half::f16::ZERO
    }

    #[inline]
    fn one() -> Self {
        half::f16::ONE
    }

    #[inline]
    fn conj(self) -> Self {
        self
    }
}

#[cfg(feature = "f16")]
impl Element for half::bf16 {
    #[inline]
    fn zero() -> Self {
        half::bf16::ZERO
    }

    #[inline]
    fn one() -> Self {
        half::bf16::ONE
    }

    #[inline]
    fn conj(self) -> Self {
        self
    }
}

// ============================================================================
// Complex types
// ============================================================================

impl Element for Complex64 {
    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    fn one() -> Self {
        Self::ONE
    }

    #[inline]
    fn conj(self) -> Self {
        self.conj()
    }
}

impl Element for Complex128 {
    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    fn one() -> Self {
        Self::ONE
    }

    #[inline]
    fn conj(self) -> Self {
        self.conj()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identities() {
        assert_eq!(f64::zero() + f64::one(), 1.0);
        assert_eq!(i64::one() * i64::one(), 1);
        assert_eq!(Complex128::zero(), Complex128::ZERO);
        assert_eq!(Complex128::one(), Complex128::ONE);
    }

    #[test]
    fn test_conj() {
        assert_eq!(Element::conj(2.5f64), 2.5);
        assert_eq!(Element::conj(-3i32), -3);
        assert_eq!(
            Element::conj(Complex128::new(1.0, 2.0)),
            Complex128::new(1.0, -2.0)
        );
    }
}
