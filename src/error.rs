use core::fmt;

/// Errors reported by field arithmetic and the transform engine.
///
/// Every variant is a contract violation on the caller's side; none of them
/// is transient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NttError {
    /// A transform length is not a power of two, does not match its
    /// partner sequence, or exceeds what the prime supports.
    InvalidLength { len: usize },
    /// The root of unity does not have the order the transform length needs.
    InvalidRootOrder { len: usize },
    /// A checked inverse was requested for an element that shares a factor
    /// with the modulus.
    NonInvertible,
    /// The field's modulus differs from the one recorded in the prime table.
    ModulusMismatch { expected: u128, found: u128 },
}

impl fmt::Display for NttError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NttError::InvalidLength { len } => {
                write!(f, "invalid transform length {}", len)
            }
            NttError::InvalidRootOrder { len } => {
                write!(f, "root of unity has wrong order for length {}", len)
            }
            NttError::NonInvertible => write!(f, "non-invertible element"),
            NttError::ModulusMismatch { expected, found } => {
                write!(f, "moduli don't match: expected {}, got {}", expected, found)
            }
        }
    }
}

impl std::error::Error for NttError {}
