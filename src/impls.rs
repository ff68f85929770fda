use crate::render::{Active, Backend};
use crate::Render;

macro_rules! delegate_render {
    ($ty:ty, $self_:ident, $val:expr) => {
        #[inline]
        fn render(&$self_) {
            <$ty as Render>::render($val)
        }
    };
}

#[cfg(not(feature = "no-streaming"))]
pub(crate) mod adapter;
#[cfg(feature = "alloc")]
mod alloc_;
mod primitives;

impl<T> Render for &'_ T
where
    T: Render + ?Sized,
{
    delegate_render!(T, self, self);
}

impl<T> Render for &'_ mut T
where
    T: Render + ?Sized,
{
    delegate_render!(T, self, self);
}

impl<T: ?Sized> Render for *const T {
    #[inline]
    fn render(&self) {
        Active::address(self.cast::<()>() as usize)
    }
}

impl<T: ?Sized> Render for *mut T {
    #[inline]
    fn render(&self) {
        Active::address(self.cast::<()>() as usize)
    }
}
