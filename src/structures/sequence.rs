use core::fmt;
use core::ops::{Deref, DerefMut};

use crate::algebra::ring::Ring;
use crate::structures::zmod::{Modulus, Zmod};

/// Fixed-length buffer of ring elements.
///
/// The length is set at construction and never changes. Transforms borrow
/// the buffer as `&mut [F]` through `DerefMut` and permute it in place.
///
/// # Example
///
/// ```
/// use inplace_ntt::{Sequence, Zp16};
///
/// let s: Sequence<Zp16> = Sequence::from_digits(&[38u16, 0, 44, 87], 8);
/// assert_eq!(s.len(), 8);
/// assert_eq!(s.values(), vec![38, 0, 44, 87, 0, 0, 0, 0]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Sequence<F> {
    slots: Box<[F]>,
}

#[cfg(feature = "serde")]
impl<F: serde::Serialize> serde::Serialize for Sequence<F> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&*self.slots, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, F: serde::Deserialize<'de>> serde::Deserialize<'de> for Sequence<F> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let slots = <Vec<F> as serde::Deserialize<'de>>::deserialize(deserializer)?;
        Ok(Self::from(slots))
    }
}

impl<F: Ring> Sequence<F> {
    /// A sequence of `len` zeros.
    pub fn zeroed(len: usize) -> Self {
        Self {
            slots: vec![F::ZERO; len].into_boxed_slice(),
        }
    }

    /// Build a sequence of length `len` from integer digits.
    ///
    /// Slots past `digits.len()` are zero; digits past `len` are dropped.
    pub fn from_digits<D>(digits: &[D], len: usize) -> Self
    where
        D: Copy + Into<F>,
    {
        let mut seq = Self::zeroed(len);
        for (slot, &d) in seq.slots.iter_mut().zip(digits) {
            *slot = d.into();
        }
        seq
    }

    /// Overwrite `self` with the leading elements of `other`, zero-filling
    /// any remaining slots. The length of `self` is unchanged.
    pub fn copy_in(&mut self, other: &[F]) {
        let lim = self.slots.len().min(other.len());
        self.slots[..lim].copy_from_slice(&other[..lim]);
        self.slots[lim..].fill(F::ZERO);
    }
}

impl<F> Sequence<F> {
    pub fn as_slice(&self) -> &[F] {
        &self.slots
    }

    pub fn as_mut_slice(&mut self) -> &mut [F] {
        &mut self.slots
    }

    /// Consume the sequence, returning its elements.
    pub fn into_vec(self) -> Vec<F> {
        self.slots.into_vec()
    }
}

impl<M: Modulus> Sequence<Zmod<M>> {
    /// The reduced representatives of every slot.
    pub fn values(&self) -> Vec<M::Rep> {
        self.slots.iter().map(|x| x.value()).collect()
    }
}

impl<F> Deref for Sequence<F> {
    type Target = [F];

    fn deref(&self) -> &[F] {
        &self.slots
    }
}

impl<F> DerefMut for Sequence<F> {
    fn deref_mut(&mut self) -> &mut [F] {
        &mut self.slots
    }
}

impl<F> From<Vec<F>> for Sequence<F> {
    fn from(elements: Vec<F>) -> Self {
        Self {
            slots: elements.into_boxed_slice(),
        }
    }
}

impl<F> FromIterator<F> for Sequence<F> {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<F>>())
    }
}

impl<'a, F> IntoIterator for &'a Sequence<F> {
    type Item = &'a F;
    type IntoIter = core::slice::Iter<'a, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}

impl<F: fmt::Display> fmt::Debug for Sequence<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.slots.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", x)?;
        }
        write!(f, "]")
    }
}
