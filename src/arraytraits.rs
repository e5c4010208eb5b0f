use std::hash;
use std::ops::{Index, IndexMut};

use crate::{Ix, Tensor4};

#[cold]
#[inline(never)]
pub(crate) fn array_out_of_bounds() -> !
{
    panic!("tensor4: index out of bounds");
}

/// Access the element at `index`.
///
/// **Panics** if the index is out of bounds.
impl<A> Index<[Ix; 4]> for Tensor4<A>
{
    type Output = A;
    #[inline]
    fn index(&self, index: [Ix; 4]) -> &A
    {
        self.get(index).unwrap_or_else(|| array_out_of_bounds())
    }
}

/// Access the element at `index` mutably.
///
/// **Panics** if the index is out of bounds.
impl<A> IndexMut<[Ix; 4]> for Tensor4<A>
{
    #[inline]
    fn index_mut(&mut self, index: [Ix; 4]) -> &mut A
    {
        self.get_mut(index).unwrap_or_else(|| array_out_of_bounds())
    }
}

impl<A: PartialEq<B>, B> PartialEq<Tensor4<B>> for Tensor4<A>
{
    /// Return `true` if the shapes and all elements of `self` and
    /// `rhs` are equal.
    fn eq(&self, rhs: &Tensor4<B>) -> bool
    {
        self.raw_dim() == rhs.raw_dim() && self.as_slice() == rhs.as_slice()
    }
}

impl<A: Eq> Eq for Tensor4<A> {}

impl<A: hash::Hash> hash::Hash for Tensor4<A>
{
    fn hash<H: hash::Hasher>(&self, state: &mut H)
    {
        self.shape().hash(state);
        for elt in self.as_slice() {
            elt.hash(state)
        }
    }
}
