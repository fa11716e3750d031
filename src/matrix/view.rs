//! Named element access (`m.m11` .. `m.m44`) for the 3x3 and 4x4 matrices.
//!
//! Element `mRC` is found in row `R`, column `C` (both 1-based).

use std::{
    mem,
    ops::{Deref, DerefMut},
};

use crate::Matrix;

#[repr(C)]
pub struct M3<T> {
    pub m11: T,
    pub m12: T,
    pub m13: T,
    pub m21: T,
    pub m22: T,
    pub m23: T,
    pub m31: T,
    pub m32: T,
    pub m33: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct M4<T> {
    pub m11: T,
    pub m12: T,
    pub m13: T,
    pub m14: T,
    pub m21: T,
    pub m22: T,
    pub m23: T,
    pub m24: T,
    pub m31: T,
    pub m32: T,
    pub m33: T,
    pub m34: T,
    pub m41: T,
    pub m42: T,
    pub m43: T,
    pub m44: T,
    _priv: (), // prevent external construction
}

impl<T> Deref for Matrix<T, 3> {
    type Target = M3<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        unsafe { mem::transmute(self) }
    }
}

impl<T> DerefMut for Matrix<T, 3> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { mem::transmute(self) }
    }
}

impl<T> Deref for Matrix<T, 4> {
    type Target = M4<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        unsafe { mem::transmute(self) }
    }
}

impl<T> DerefMut for Matrix<T, 4> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { mem::transmute(self) }
    }
}
