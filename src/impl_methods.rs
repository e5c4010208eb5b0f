// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Methods for tensor4

use crate::dimension::Dim4;
use crate::{Ix, Tensor4};

impl<A> Tensor4<A>
{
    /// Return the total number of elements in the tensor.
    pub fn len(&self) -> usize
    {
        self.data.len()
    }

    /// Return whether the tensor has any elements.
    pub fn is_empty(&self) -> bool
    {
        self.len() == 0
    }

    /// Return the extents of the tensor's four axes.
    pub fn shape(&self) -> [Ix; 4]
    {
        self.dim.extents()
    }

    /// Return the shape of the tensor as a `Dim4`.
    pub fn raw_dim(&self) -> Dim4
    {
        self.dim
    }

    /// Return the row-major strides of the tensor.
    pub fn strides(&self) -> [Ix; 4]
    {
        self.dim.default_strides()
    }

    /// Return the tensor's buffer as a slice, in row-major order.
    pub fn as_slice(&self) -> &[A]
    {
        &self.data
    }

    /// Return the tensor's buffer as a mutable slice, in row-major order.
    pub fn as_slice_mut(&mut self) -> &mut [A]
    {
        &mut self.data
    }

    /// Return a reference to the element at `index`, or return `None`
    /// if the index is out of bounds.
    ///
    /// Tensors also support indexing syntax: `tensor[index]`.
    ///
    /// ```
    /// use tensor4::Tensor4;
    ///
    /// let t = Tensor4::from_shape_vec([1, 1, 2, 2], vec![1., 2., 3., 4.]).unwrap();
    ///
    /// assert!(
    ///     t.get([0, 0, 1, 0]) == Some(&3.) &&
    ///     t.get([0, 0, 2, 0]) == None &&
    ///     t[[0, 0, 1, 0]] == 3.
    /// );
    /// ```
    pub fn get(&self, index: [Ix; 4]) -> Option<&A>
    {
        let offset = self.dim.stride_offset_checked(&self.strides(), &index)?;
        self.data.get(offset)
    }

    /// Return a mutable reference to the element at `index`, or return
    /// `None` if the index is out of bounds.
    pub fn get_mut(&mut self, index: [Ix; 4]) -> Option<&mut A>
    {
        let offset = self.dim.stride_offset_checked(&self.strides(), &index)?;
        self.data.get_mut(offset)
    }

    /// Fill the tensor with copies of `x`.
    pub fn fill(&mut self, x: A)
    where A: Clone
    {
        for elt in self.data.iter_mut() {
            *elt = x.clone();
        }
    }
}
