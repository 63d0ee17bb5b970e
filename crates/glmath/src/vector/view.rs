//! Named element access (`v.x`, `v.y`, `v.z`, `v.w`) through `Deref`.

use std::{
    mem,
    ops::{Deref, DerefMut},
};

use crate::Vector;

macro_rules! views {
    ($($len:literal => $name:ident { $($field:ident),+ }),+ $(,)?) => {
        $(
            #[repr(C)]
            pub struct $name<T> {
                $( pub $field: T, )+
                _priv: (), // prevent external construction
            }

            impl<T> Deref for Vector<T, $len> {
                type Target = $name<T>;

                #[inline]
                fn deref(&self) -> &Self::Target {
                    // The view struct is `repr(C)` with `N` fields of type `T`, matching the array layout.
                    unsafe { mem::transmute(self) }
                }
            }

            impl<T> DerefMut for Vector<T, $len> {
                #[inline]
                fn deref_mut(&mut self) -> &mut Self::Target {
                    unsafe { mem::transmute(self) }
                }
            }
        )+
    };
}

views! {
    1 => X { x },
    2 => XY { x, y },
    3 => XYZ { x, y, z },
    4 => XYZW { x, y, z, w },
}
