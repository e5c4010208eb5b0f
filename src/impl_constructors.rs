// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Constructor methods for tensor4
//!

use num_traits as libnum;

use crate::dimension::{size_of_shape_checked, Dim4};
use crate::error::{self, ShapeError};
use crate::Tensor4;

macro_rules! size_checked_unwrap {
    ($dim:expr) => {
        match size_of_shape_checked(&$dim) {
            Ok(sz) => sz,
            Err(_) => panic!("tensor4: shape too large, number of elements overflows usize"),
        }
    };
}

/// Constructor methods.
///
/// Every constructor takes the shape as anything convertible to [`Dim4`],
/// usually a `[usize; 4]` literal.
impl<A> Tensor4<A>
{
    /// Create a tensor from a vector (no copying needed).
    ///
    /// The vector becomes the tensor's buffer, interpreted in row-major
    /// order.
    ///
    /// **Errors** if the length of `v` does not equal the product of the
    /// extents, or if that product overflows.
    ///
    /// ```
    /// use tensor4::Tensor4;
    ///
    /// let t = Tensor4::from_shape_vec([1, 1, 2, 3], vec![1., 2., 3., 4., 5., 6.]).unwrap();
    /// assert_eq!(t.shape(), [1, 1, 2, 3]);
    /// ```
    pub fn from_shape_vec<D>(shape: D, v: Vec<A>) -> Result<Tensor4<A>, ShapeError>
    where D: Into<Dim4>
    {
        let dim = shape.into();
        if size_of_shape_checked(&dim)? != v.len() {
            return Err(error::incompatible_shapes(&v.len(), &dim));
        }
        unsafe { Ok(Self::from_shape_vec_unchecked(dim, v)) }
    }

    /// Create a tensor by copying elements out of `data`.
    ///
    /// `data` must hold at least the product of the extents; exactly that
    /// many leading elements are duplicated into a freshly allocated
    /// buffer, so the tensor owns its storage exclusively.
    ///
    /// **Errors** if `data` is too short or if the product overflows.
    pub fn from_shape_slice<D>(shape: D, data: &[A]) -> Result<Tensor4<A>, ShapeError>
    where
        D: Into<Dim4>,
        A: Clone,
    {
        let dim = shape.into();
        let size = size_of_shape_checked(&dim)?;
        if data.len() < size {
            return Err(error::incompatible_shapes(&data.len(), &dim));
        }
        unsafe { Ok(Self::from_shape_vec_unchecked(dim, data[..size].to_vec())) }
    }

    /// Create a tensor with copies of `elem`.
    ///
    /// **Panics** if the number of elements would overflow usize.
    ///
    /// ```
    /// use tensor4::Tensor4;
    ///
    /// let t = Tensor4::from_elem([2, 1, 2, 1], 7);
    /// assert_eq!(t.len(), 4);
    /// ```
    pub fn from_elem<D>(shape: D, elem: A) -> Tensor4<A>
    where
        D: Into<Dim4>,
        A: Clone,
    {
        let dim = shape.into();
        let size = size_checked_unwrap!(dim);
        let v = vec![elem; size];
        unsafe { Self::from_shape_vec_unchecked(dim, v) }
    }

    /// Create a tensor filled with zeros.
    ///
    /// **Panics** if the number of elements would overflow usize.
    pub fn zeros<D>(shape: D) -> Tensor4<A>
    where
        D: Into<Dim4>,
        A: Clone + libnum::Zero,
    {
        Self::from_elem(shape, A::zero())
    }

    /// Create a tensor from a vector with an already validated shape.
    ///
    /// # Safety
    ///
    /// The caller must ensure `v.len()` equals the product of the extents
    /// and that the product does not overflow; only debug builds check.
    pub unsafe fn from_shape_vec_unchecked<D>(shape: D, v: Vec<A>) -> Tensor4<A>
    where D: Into<Dim4>
    {
        let dim = shape.into();
        Tensor4::new(v, dim)
    }
}
