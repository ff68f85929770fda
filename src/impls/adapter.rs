use core::fmt;

use super::*;
use crate::render::Streaming;

/// Renders an integer in lowercase hexadecimal, without prefix
///
/// ```
/// # let status = 0x2cu8;
/// dbgout::dbgval!(dbgout::Hex(status)); // dbgout::Hex(status) = 2c
/// ```
///
/// Not available with the `no-streaming` feature.
#[derive(Clone, Copy)]
pub struct Hex<T: fmt::LowerHex>(pub T);

impl<T: fmt::LowerHex> Render for Hex<T> {
    fn render(&self) {
        Streaming::fmt(format_args!("{:x}", self.0))
    }
}

/// Renders an integer in binary, without prefix
///
/// Not available with the `no-streaming` feature.
#[derive(Clone, Copy)]
pub struct Bin<T: fmt::Binary>(pub T);

impl<T: fmt::Binary> Render for Bin<T> {
    fn render(&self) {
        Streaming::fmt(format_args!("{:b}", self.0))
    }
}

/// Renders a float with the given number of fractional digits instead of the default two
///
/// ```
/// dbgout::dbgln!(dbgout::Precision(1.0 / 3.0, 5)); // 0.33333
/// ```
///
/// Not available with the `no-streaming` feature.
#[derive(Clone, Copy)]
pub struct Precision(pub f64, pub u8);

impl Render for Precision {
    fn render(&self) {
        Streaming::f64(self.0, self.1)
    }
}

/// An "adapter" type to feed `Debug` values into dbgout macros, which expect `Render` values.
///
/// This pulls the `core::fmt` code into the firmware for the type in question.
///
/// # Examples
///
/// ```rust
/// # #[derive(Debug)]
/// # struct State { ready: bool }
/// # let state = State { ready: true };
/// #
/// dbgout::dbgref!(dbgout::Debug2Render(&state));
/// //                                    ˆˆˆˆˆ
/// //                                    must `#[derive(Debug)]`
/// ```
///
/// Not available with the `no-streaming` feature.
pub struct Debug2Render<'a, T: fmt::Debug + ?Sized>(pub &'a T);

impl<T: fmt::Debug + ?Sized> Render for Debug2Render<'_, T> {
    fn render(&self) {
        Streaming::fmt(format_args!("{:?}", self.0))
    }
}

/// An "adapter" type to feed `Display` values into dbgout macros, which expect `Render` values.
///
/// This pulls the `core::fmt` code into the firmware for the type in question.
///
/// # Examples
///
/// ```rust
/// # use std::net::Ipv4Addr;
/// let addr = Ipv4Addr::new(192, 168, 0, 1);
/// dbgout::dbgval!(dbgout::Display2Render(&addr)); // dbgout::Display2Render(&addr) = 192.168.0.1
/// ```
///
/// Not available with the `no-streaming` feature.
pub struct Display2Render<'a, T: fmt::Display + ?Sized>(pub &'a T);

impl<T: fmt::Display + ?Sized> Render for Display2Render<'_, T> {
    fn render(&self) {
        Streaming::fmt(format_args!("{}", self.0))
    }
}
