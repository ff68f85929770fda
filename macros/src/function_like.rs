pub(crate) mod dbgval;
pub(crate) mod pair;
pub(crate) mod value;
