// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Shape and stride computation for rank-4 tensors.

use std::mem;
use std::ops::{Index, IndexMut};

use crate::error::{from_kind, ErrorKind, ShapeError};
use crate::Ix;

/// The shape of a rank-4 tensor: the extents of its four axes.
///
/// `Dim4` is a plain value type (it is the description of a shape, not a
/// tensor), so unlike [`Tensor4`](crate::Tensor4) it is `Copy`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Dim4([Ix; 4]);

impl Dim4
{
    /// Create a shape from four axis extents, axis 0 slowest-varying.
    #[inline]
    pub fn new(extents: [Ix; 4]) -> Dim4
    {
        Dim4(extents)
    }

    /// Borrow the extents as a slice.
    #[inline]
    pub fn slice(&self) -> &[Ix]
    {
        &self.0
    }

    /// The extents as an array.
    #[inline]
    pub fn extents(&self) -> [Ix; 4]
    {
        self.0
    }

    /// Convert the shape into a pattern matchable tuple.
    #[inline]
    pub fn into_pattern(self) -> (Ix, Ix, Ix, Ix)
    {
        let Dim4([a, b, c, d]) = self;
        (a, b, c, d)
    }

    /// Compute the number of elements: the product of the extents.
    ///
    /// A shape with a 0 extent has size 0.
    pub fn size(&self) -> usize
    {
        self.0.iter().fold(1, |s, &a| s * a)
    }

    /// Compute the number of elements, checking for overflow.
    pub fn size_checked(&self) -> Option<usize>
    {
        self.0.iter().try_fold(1_usize, |s, &a| s.checked_mul(a))
    }

    /// Compute the default (row-major, contiguous) strides.
    ///
    /// If the shape is empty, all strides are zero.
    pub fn default_strides(&self) -> [Ix; 4]
    {
        let mut strides = [0; 4];
        if self.0.iter().all(|&d| d != 0) {
            let mut cum_prod = 1;
            for (rs, d) in strides.iter_mut().rev().zip(self.0.iter().rev()) {
                *rs = cum_prod;
                cum_prod *= d;
            }
        }
        strides
    }

    /// Compute strides for reading `self`'s elements while traversing a
    /// tensor of shape `to`, broadcasting `self` where needed.
    ///
    /// Broadcasting is one-directional: along every axis, `self`'s extent
    /// must be 1 (it then contributes a stride of 0, so the same element
    /// is revisited across `to`'s extent) or exactly equal to `to`'s
    /// extent (it then contributes its row-major stride).
    ///
    /// **Errors** with [`ErrorKind::IncompatibleShape`] on any other axis
    /// extent; `to` itself is never broadcast.
    pub fn broadcast_strides(&self, to: &Dim4) -> Result<[Ix; 4], ShapeError>
    {
        let mut strides = self.default_strides();
        for (st, (&d, &td)) in strides.iter_mut().zip(self.0.iter().zip(to.0.iter())) {
            if d == 1 {
                *st = 0;
            } else if d != td {
                return Err(from_kind(ErrorKind::IncompatibleShape));
            }
        }
        Ok(strides)
    }

    /// Return the flat offset of `index` under `strides`, or `None` if
    /// any component is out of bounds.
    pub(crate) fn stride_offset_checked(&self, strides: &[Ix; 4], index: &[Ix; 4])
        -> Option<usize>
    {
        let mut offset = 0;
        for ((&d, &i), &s) in self.0.iter().zip(index.iter()).zip(strides.iter()) {
            if i >= d {
                return None;
            }
            offset += i * s;
        }
        Some(offset)
    }
}

impl From<[Ix; 4]> for Dim4
{
    #[inline]
    fn from(extents: [Ix; 4]) -> Dim4
    {
        Dim4::new(extents)
    }
}

impl Index<usize> for Dim4
{
    type Output = Ix;
    #[inline]
    fn index(&self, index: usize) -> &Ix
    {
        &self.0[index]
    }
}

impl IndexMut<usize> for Dim4
{
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Ix
    {
        &mut self.0[index]
    }
}

/// Compute the number of elements of a shape, checking that it fits in
/// `usize` and in `isize::MAX` (the maximum size of a Rust allocation).
pub fn size_of_shape_checked<D>(dim: &D) -> Result<usize, ShapeError>
where D: Copy + Into<Dim4>
{
    let dim = (*dim).into();
    let size_nonzero = dim
        .slice()
        .iter()
        .filter(|&&d| d != 0)
        .try_fold(1_usize, |acc, &d| acc.checked_mul(d))
        .ok_or_else(|| from_kind(ErrorKind::Overflow))?;
    if size_nonzero > isize::MAX as usize {
        Err(from_kind(ErrorKind::Overflow))
    } else {
        Ok(dim.size())
    }
}

/// Compute the total byte size of a buffer of `A` with the given shape:
/// `size_of::<A>()` times the product of the extents, as a checked fold.
///
/// This is a pure capacity calculation for callers; construction does not
/// use it.
///
/// ```
/// use tensor4::byte_size_of_shape;
///
/// let size = byte_size_of_shape::<f32>(&[1, 3, 224, 224]).unwrap();
/// assert_eq!(size, 602_112);
/// ```
pub fn byte_size_of_shape<A>(dim: &[Ix; 4]) -> Result<usize, ShapeError>
{
    dim.iter()
        .try_fold(mem::size_of::<A>(), |acc, &d| acc.checked_mul(d))
        .ok_or_else(|| from_kind(ErrorKind::Overflow))
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_size_and_strides()
    {
        let dim = Dim4::new([2, 3, 4, 5]);
        assert_eq!(dim.size(), 120);
        assert_eq!(dim.size_checked(), Some(120));
        assert_eq!(dim.default_strides(), [60, 20, 5, 1]);

        let empty = Dim4::new([2, 0, 4, 5]);
        assert_eq!(empty.size(), 0);
        assert_eq!(empty.default_strides(), [0, 0, 0, 0]);
    }

    #[test]
    fn test_size_overflow()
    {
        let dim = Dim4::new([usize::MAX, 2, 1, 1]);
        assert_eq!(dim.size_checked(), None);
        assert_eq!(
            size_of_shape_checked(&dim).unwrap_err().kind(),
            ErrorKind::Overflow
        );
        // a 0 extent does not mask overflow in the other extents
        let dim = Dim4::new([usize::MAX, 2, 1, 0]);
        assert_eq!(
            size_of_shape_checked(&dim).unwrap_err().kind(),
            ErrorKind::Overflow
        );
    }

    #[test]
    fn test_broadcast_strides()
    {
        let to = Dim4::new([2, 4, 2, 2]);
        let from = Dim4::new([2, 1, 2, 1]);
        assert_eq!(from.broadcast_strides(&to).unwrap(), [2, 0, 1, 0]);
        assert_eq!(to.broadcast_strides(&to).unwrap(), [16, 4, 2, 1]);

        let bad = Dim4::new([2, 3, 2, 2]);
        assert_eq!(
            bad.broadcast_strides(&to).unwrap_err().kind(),
            ErrorKind::IncompatibleShape
        );
    }

    #[test]
    fn test_byte_size()
    {
        assert_eq!(byte_size_of_shape::<f32>(&[1, 3, 224, 224]), Ok(602_112));
        assert_eq!(byte_size_of_shape::<u8>(&[2, 2, 2, 2]), Ok(16));
        assert_eq!(
            byte_size_of_shape::<u64>(&[usize::MAX, 1, 1, 1])
                .unwrap_err()
                .kind(),
            ErrorKind::Overflow
        );
    }
}
