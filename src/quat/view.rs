use std::{
    mem,
    ops::{Deref, DerefMut},
};

use crate::{vector::XYZW, Quat};

/// Quaternion components are accessed like those of a 4-dimensional vector, `w` being the real
/// part.
impl<T> Deref for Quat<T> {
    type Target = XYZW<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        unsafe { mem::transmute(self) }
    }
}

impl<T> DerefMut for Quat<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { mem::transmute(self) }
    }
}
