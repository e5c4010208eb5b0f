// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
#![doc(test(attr(deny(warnings))))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! The `tensor4` crate provides a dense rank-4 tensor that owns its
//! elements and supports in-place arithmetic with one-directional
//! broadcasting.
//!
//! - [`Tensor4`] is the tensor type: four fixed extents plus an
//!   exclusively owned, contiguous buffer in row-major order (axis 0 is
//!   the slowest-varying).
//! - [`Dim4`] describes a shape and computes sizes and strides.
//!
//! ## Highlights
//!
//! - In-place accumulation with broadcasting: `a += &b` where every axis
//!   of `b` has length 1 or the matching length of `a`.
//! - Single ownership: `Tensor4` does not implement `Clone`, so exactly
//!   one owner of a buffer exists for its whole lifetime.
//! - Generic elements: any `A: Clone + AddAssign` accumulates; no
//!   numeric promotion or overflow policy beyond the element's own `+=`.
//!
//! ## Broadcasting
//!
//! Broadcasting is one-directional: only the right-hand operand is ever
//! broadcast, and only along axes where its length is exactly 1. A
//! length-1 axis contributes a stride of 0 to the traversal, so the same
//! element is revisited across the corresponding extent of the receiver.
//! A right-hand axis that is neither 1 nor equal to the receiver's is a
//! shape error, reported before any element is modified.
//!
//! ```
//! use tensor4::Tensor4;
//!
//! let mut a = Tensor4::from_elem([1, 2, 3, 4], 1.0);
//! let b = Tensor4::from_elem([1, 2, 3, 1], 2.0);
//! a += &b;
//! assert!(a.as_slice().iter().all(|&x| x == 3.0));
//! ```
//!
//! ## Crate features
//!
//! - `std`: Rust standard library (enabled by default).
//! - `approx`: implementations of the `approx` comparison traits.

pub use crate::dimension::{byte_size_of_shape, size_of_shape_checked, Dim4};
pub use crate::error::{ErrorKind, ShapeError};

mod array_approx;
mod arraytraits;
mod dimension;
mod error;
mod impl_constructors;
mod impl_methods;
mod impl_ops_inplace;

/// Array index type.
pub type Ix = usize;

/// A dense rank-4 tensor that owns its elements.
///
/// The tensor is described by four extents, `shape()[k]` being the
/// length of axis `k`, and a contiguous row-major buffer of exactly
/// `shape()[0] * shape()[1] * shape()[2] * shape()[3]` elements. Axis 0
/// is the slowest-varying; axis 3 elements are adjacent in memory.
///
/// `Tensor4` deliberately implements neither `Clone` nor `Copy`: every
/// instance is the sole owner of its buffer from construction to drop,
/// so no aliasing of the storage can ever be observed. Duplicate a
/// tensor by constructing a new one from its data, for example with
/// [`from_shape_slice`](Tensor4::from_shape_slice).
///
/// ```
/// use tensor4::Tensor4;
///
/// let t = Tensor4::from_shape_vec([2, 2, 1, 1], vec![1, 2, 3, 4]).unwrap();
/// assert_eq!(t[[1, 0, 0, 0]], 3);
/// ```
#[derive(Debug)]
pub struct Tensor4<A>
{
    /// Buffer in row-major order; `data.len() == dim.size()` always.
    data: Vec<A>,
    /// The extents of the four axes.
    dim: Dim4,
}

impl<A> Tensor4<A>
{
    #[inline]
    pub(crate) fn new(data: Vec<A>, dim: Dim4) -> Tensor4<A>
    {
        debug_assert_eq!(dim.size_checked(), Some(data.len()));
        Tensor4 { data, dim }
    }
}
