//! Named element access (`v.x`, `size.w`, ...) through [`Deref`].

use std::{
    mem,
    ops::{Deref, DerefMut},
};

use crate::Vector;

#[repr(C)]
pub struct XY<T> {
    pub x: T,
    pub y: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XYZ<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XYZW<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
    _priv: (), // prevent external construction
}

/// Width and height of a 2-dimensional vector used as a [`Size`][crate::Size].
#[repr(C)]
pub struct WH<T> {
    pub w: T,
    pub h: T,
    _priv: (), // prevent external construction
}

macro_rules! views {
    ($($from:ty => $to:ident),+ $(,)?) => {
        $(
            impl<T> Deref for $from {
                type Target = $to<T>;

                #[inline]
                fn deref(&self) -> &Self::Target {
                    unsafe { mem::transmute(self) }
                }
            }

            impl<T> DerefMut for $from {
                #[inline]
                fn deref_mut(&mut self) -> &mut Self::Target {
                    unsafe { mem::transmute(self) }
                }
            }
        )+
    };
}

views! {
    Vector<T, 2> => XY,
    Vector<T, 3> => XYZ,
    Vector<T, 4> => XYZW,
    XY<T> => WH,
}
