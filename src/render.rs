//! The two output backends and the trait that picks one of them for every value

// both backends are built for the unit tests so their output can be compared
#[cfg(any(feature = "no-streaming", test))]
mod basic;
#[cfg(any(not(feature = "no-streaming"), test))]
mod streaming;

#[cfg(any(feature = "no-streaming", test))]
pub(crate) use self::basic::Basic;
#[cfg(any(not(feature = "no-streaming"), test))]
pub(crate) use self::streaming::Streaming;

/// The backend selected by the `no-streaming` feature
#[cfg(not(feature = "no-streaming"))]
pub(crate) type Active = Streaming;

/// The backend selected by the `no-streaming` feature
#[cfg(feature = "no-streaming")]
pub(crate) type Active = Basic;

/// Fractional digits used for `f32` / `f64` values
pub(crate) const FLOAT_DIGITS: u8 = 2;

/// The minimal vocabulary every value is rendered with
///
/// Both implementations spell plain values the same way; they differ in what they cost and in
/// what extended formatting is available on top.
pub(crate) trait Backend {
    fn str(s: &str);
    fn u64(v: u64);
    fn i64(v: i64);
    fn u128(v: u128);
    fn i128(v: i128);
    /// `digits` fractional digits, rounded
    fn f64(v: f64, digits: u8);
    /// `0x` followed by lowercase hex digits
    fn address(addr: usize);
}

/// Values that instrumentation statements can print
///
/// Implemented for the primitive types, strings and references to them. The output of a plain
/// value does not depend on the `no-streaming` feature: `42` renders as `42`, `2.5` as `2.50`.
///
/// Manual implementations are built from other `Render` values:
///
/// ```
/// use dbgout::Render;
///
/// struct Celsius(i16);
///
/// impl Render for Celsius {
///     fn render(&self) {
///         self.0.render();
///         "°C".render();
///     }
/// }
///
/// let t = Celsius(21);
/// dbgout::dbgval!(t); // t = 21°C
/// ```
pub trait Render {
    /// Writes `self` to the global sink.
    fn render(&self);
}
