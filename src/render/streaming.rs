use core::fmt::{self, Write as _};

use super::Backend;
use crate::export;

/// Renders through `core::fmt`, which also gives access to hex, binary and precision formatting
pub(crate) struct Streaming;

/// `core::fmt::Write` adapter over the global sink
struct SinkWriter;

impl fmt::Write for SinkWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        export::write(s.as_bytes());
        Ok(())
    }
}

impl Streaming {
    #[inline(never)]
    pub(crate) fn fmt(args: fmt::Arguments<'_>) {
        // `SinkWriter` never fails
        SinkWriter.write_fmt(args).ok();
    }
}

impl Backend for Streaming {
    #[inline]
    fn str(s: &str) {
        export::write(s.as_bytes());
    }

    fn u64(v: u64) {
        Self::fmt(format_args!("{}", v));
    }

    fn i64(v: i64) {
        Self::fmt(format_args!("{}", v));
    }

    fn u128(v: u128) {
        Self::fmt(format_args!("{}", v));
    }

    fn i128(v: i128) {
        Self::fmt(format_args!("{}", v));
    }

    fn f64(v: f64, digits: u8) {
        Self::fmt(format_args!("{:.*}", usize::from(digits), v));
    }

    fn address(addr: usize) {
        Self::fmt(format_args!("{:#x}", addr));
    }
}
