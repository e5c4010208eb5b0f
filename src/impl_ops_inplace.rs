// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! In-place arithmetic with one-directional broadcasting.

use std::ops::AddAssign;

use crate::error::ShapeError;
use crate::Tensor4;

impl<A> Tensor4<A>
{
    /// Perform elementwise addition of `rhs` into `self`, *in place*,
    /// broadcasting `rhs` where needed.
    ///
    /// Along every axis, `rhs`'s extent must be either 1 or equal to
    /// `self`'s extent. A length-1 axis of `rhs` is repeated across the
    /// corresponding extent of `self`; `self` is never broadcast.
    ///
    /// The shape check runs before any element is modified, so on error
    /// `self` is left exactly as it was. No allocation is performed; the
    /// traversal visits each of `self`'s elements once and `rhs` is only
    /// read. Returns `&mut self` for chaining.
    ///
    /// **Errors** with [`ErrorKind::IncompatibleShape`](crate::ErrorKind)
    /// if `rhs` cannot be broadcast to `self`'s shape.
    ///
    /// ```
    /// use tensor4::Tensor4;
    ///
    /// let mut a = Tensor4::from_shape_vec([1, 1, 2, 2], vec![1, 2, 3, 4]).unwrap();
    /// let row = Tensor4::from_shape_vec([1, 1, 1, 2], vec![10, 20]).unwrap();
    /// a.accumulate(&row).unwrap();
    /// assert_eq!(a.as_slice(), &[11, 22, 13, 24]);
    /// ```
    pub fn accumulate(&mut self, rhs: &Tensor4<A>) -> Result<&mut Self, ShapeError>
    where A: Clone + AddAssign<A>
    {
        let bstrides = rhs.dim.broadcast_strides(&self.dim)?;
        // a 0 extent anywhere makes this a zero-trip traversal, and an
        // empty rhs must not be indexed
        if self.is_empty() {
            return Ok(self);
        }
        let (s0, s1, s2, s3) = self.dim.into_pattern();
        let b = &rhs.data[..];

        // `self` is contiguous row-major, so it advances linearly while
        // `rhs` is addressed through its (partly zeroed) strides.
        let mut a = 0;
        for i0 in 0..s0 {
            let off0 = i0 * bstrides[0];
            for i1 in 0..s1 {
                let off1 = off0 + i1 * bstrides[1];
                for i2 in 0..s2 {
                    let off2 = off1 + i2 * bstrides[2];
                    let run = &mut self.data[a..a + s3];
                    if bstrides[3] == 0 {
                        // innermost axis of rhs is broadcast: one scalar
                        // for the whole run
                        let x = b[off2].clone();
                        for elt in run {
                            *elt += x.clone();
                        }
                    } else {
                        for (elt, x) in run.iter_mut().zip(&b[off2..off2 + s3]) {
                            *elt += x.clone();
                        }
                    }
                    a += s3;
                }
            }
        }
        Ok(self)
    }

    /// Perform elementwise addition of `rhs` into `self`, *in place*.
    ///
    /// If their shapes disagree, `rhs` is broadcast to the shape of
    /// `self` under the one-directional rule of
    /// [`accumulate`](Tensor4::accumulate).
    ///
    /// **Panics** if broadcasting isn’t possible.
    pub fn iadd(&mut self, rhs: &Tensor4<A>)
    where A: Clone + AddAssign<A>
    {
        if self.accumulate(rhs).is_err() {
            panic!(
                "tensor4: could not broadcast tensor from shape {:?} to {:?}",
                rhs.shape(),
                self.shape()
            );
        }
    }

    /// Perform elementwise addition of the scalar `x` into `self`,
    /// *in place*.
    pub fn iadd_scalar(&mut self, x: &A)
    where A: Clone + AddAssign<A>
    {
        for elt in self.data.iter_mut() {
            *elt += x.clone();
        }
    }
}

/// Perform `self += rhs`, broadcasting `rhs` one-directionally.
///
/// **Panics** if broadcasting isn’t possible.
impl<'a, A> AddAssign<&'a Tensor4<A>> for Tensor4<A>
where A: Clone + AddAssign<A>
{
    fn add_assign(&mut self, rhs: &Tensor4<A>)
    {
        self.iadd(rhs);
    }
}
