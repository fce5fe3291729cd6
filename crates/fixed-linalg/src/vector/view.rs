//! Named component access (`v.x`, `v.y`, ...) for small vectors.

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

macro_rules! views {
    ($($n:literal => $view:ident),+) => {
        $(
            impl<T> Deref for Vector<T, $n> {
                type Target = $view<T>;

                #[inline]
                fn deref(&self) -> &Self::Target {
                    // Safety: `$view<T>` is `repr(C)` with `$n` fields of type `T` (plus a ZST), so
                    // it has the same layout as `[T; $n]`.
                    unsafe { mem::transmute(self) }
                }
            }

            impl<T> DerefMut for Vector<T, $n> {
                #[inline]
                fn deref_mut(&mut self) -> &mut Self::Target {
                    unsafe { mem::transmute(self) }
                }
            }
        )+
    };
}

views!(2 => XY, 3 => XYZ, 4 => XYZW);
