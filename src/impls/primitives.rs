use super::*;
use crate::render::FLOAT_DIGITS;

macro_rules! prim {
    ($ty:ty, $method:ident, $via:ty) => {
        impl Render for $ty {
            #[inline]
            fn render(&self) {
                Active::$method(<$via>::from(*self))
            }
        }
    };
}

prim!(u8, u64, u64);
prim!(u16, u64, u64);
prim!(u32, u64, u64);
prim!(u64, u64, u64);
prim!(u128, u128, u128);
prim!(i8, i64, i64);
prim!(i16, i64, i64);
prim!(i32, i64, i64);
prim!(i64, i64, i64);
prim!(i128, i128, i128);

impl Render for usize {
    #[inline]
    fn render(&self) {
        Active::u64(*self as u64)
    }
}

impl Render for isize {
    #[inline]
    fn render(&self) {
        Active::i64(*self as i64)
    }
}

impl Render for f32 {
    #[inline]
    fn render(&self) {
        Active::f64(f64::from(*self), FLOAT_DIGITS)
    }
}

impl Render for f64 {
    #[inline]
    fn render(&self) {
        Active::f64(*self, FLOAT_DIGITS)
    }
}

impl Render for bool {
    #[inline]
    fn render(&self) {
        Active::str(if *self { "true" } else { "false" })
    }
}

impl Render for char {
    #[inline]
    fn render(&self) {
        let mut buf = [0; 4];
        Active::str(self.encode_utf8(&mut buf))
    }
}

impl Render for str {
    #[inline]
    fn render(&self) {
        Active::str(self)
    }
}
