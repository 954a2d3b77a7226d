use super::ring::Ring;
use crate::error::NttError;

/// A (commutative) field.
///
/// Extends `Ring` with multiplicative inverses for all non-zero elements.
/// The transform engine is generic over this trait.
pub trait Field: Ring {
    /// Multiplicative inverse `a⁻¹`, if it exists.
    ///
    /// - `self == ZERO`  ⇒  `None`
    /// - otherwise       ⇒  `Some(a⁻¹)`
    fn inverse(self) -> Option<Self>;

    /// Inverse without the invertibility check.
    ///
    /// The result for a non-invertible input is unspecified, but this must
    /// not panic.
    fn inverse_unchecked(self) -> Self;

    /// Inverse that reports [`NttError::NonInvertible`] instead of `None`.
    #[inline]
    fn try_inverse(self) -> Result<Self, NttError> {
        self.inverse().ok_or(NttError::NonInvertible)
    }

    /// Safe division: returns `None` on division by a non-invertible element.
    #[inline]
    fn try_div(self, rhs: Self) -> Option<Self> {
        rhs.inverse().map(|inv| self * inv)
    }
}
