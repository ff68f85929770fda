//! Debug output for resource-constrained devices, like microcontrollers, that costs nothing when
//! it is switched off.
//!
//! Instrumentation statements (`dbgln!`, `dbgref!`, `dbgfunc!`, `dbgtime!`, `dbgval!`) can be
//! left in the code permanently. Without the `enabled` Cargo feature they expand to a block that
//! type-checks its arguments but never evaluates them, so the compiled program is the same as one
//! without the statements. With the feature, output goes to the `#[global_sink]`.
//!
//! ```
//! #[dbgout::global_sink]
//! struct Console;
//!
//! impl dbgout::GlobalSink for Console {
//!     fn write(bytes: &[u8]) {
//!         // hand `bytes` to the UART / USB CDC / RTT channel
//! #       let _ = bytes;
//!     }
//! }
//!
//! impl dbgout::Flush for Console {
//!     fn flush() {}
//! }
//!
//! let (a, b) = (1, 2.5);
//! dbgout::dbgref!("booted");          // [main.rs:12]:	booted
//! dbgout::dbgval!(a, b);              // a = 1, b = 2.50
//! dbgout::dbgfunc!(dbgout::pair!(a)); // [app::main @ line 14]:	a = 1
//! ```
//!
//! # Cargo features
//!
//! - `enabled`: generate instrumentation code at all.
//! - `no-streaming`: print through a small hand-written backend instead of `core::fmt`. The
//!   extended formatting adapters ([`Hex`], [`Bin`], [`Precision`], ...) are not available.
//! - `flush-always`: flush the sink after every statement. The sink must implement [`Flush`].
//! - `millis`: the platform has a millisecond counter; enables [`dbgtime!`] and [`millis!`].
//! - `crlf`: end lines with `\r\n` instead of `\n`.
//! - `alloc`: render `String`s and boxed values.

#![cfg_attr(not(feature = "unstable-test"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[doc(hidden)]
pub mod export;
mod impls;
mod render;
mod time;
#[cfg(all(test, feature = "unstable-test"))]
mod tests;
#[cfg(all(test, not(feature = "unstable-test")))]
compile_error!(
    "to run unit tests enable the `unstable-test` feature, e.g. `cargo t --features unstable-test`"
);

#[cfg(not(feature = "no-streaming"))]
pub use crate::impls::adapter::{Bin, Debug2Render, Display2Render, Hex, Precision};
pub use crate::{render::Render, time::Elapsed};

/// Prints a value followed by a newline
///
/// `dbgout::dbgln!(x)` prints `x` the way [`Render`] renders it.
pub use dbgout_macros::dbgln;

/// Prints a value prefixed with the file name and line number of the call site
///
/// `dbgout::dbgref!("msg")` on line 12 of `src/main.rs` prints `[main.rs:12]:\tmsg`. File name
/// and line number are stored in a `static`, so they live in flash rather than RAM.
pub use dbgout_macros::dbgref;

/// Prints a value prefixed with the enclosing function and the line number of the call site
///
/// `dbgout::dbgfunc!(x)` prints `[app::control::step @ line 40]:\t<x>`. The function name is
/// only known to the compiler and is recovered at run time in the calling function.
pub use dbgout_macros::dbgfunc;

/// Prints `label = value` for every expression, separated by commas
///
/// `dbgout::dbgval!(a, b, c)` prints `a = 1, b = 2, c = 3`. Accepts one to ten expressions;
/// anything else is a compile error.
pub use dbgout_macros::dbgval;

/// Builds a single `label = value` fragment that the other macros can print
///
/// `dbgout::dbgref!(dbgout::pair!(speed))` prints `[main.rs:7]:\tspeed = 12`.
pub use dbgout_macros::pair;

/// Registers a unit struct implementing [`GlobalSink`] as the destination of all output
///
/// There must be exactly one global sink in the final program when the `enabled` feature is on.
pub use dbgout_macros::global_sink;

/// Prints a value prefixed with the time elapsed since start-up
///
/// `dbgout::dbgtime!(x)` prints `[0:2:11.085]:\t<x>` with the counter registered through
/// [`millis!`].
#[cfg(feature = "millis")]
#[cfg_attr(docsrs, doc(cfg(feature = "millis")))]
pub use dbgout_macros::dbgtime;

/// Registers the platform's millisecond counter
///
/// The expression is evaluated every time [`dbgtime!`] runs and must produce a value that
/// converts into a `u64` (e.g. a `u32` tick count).
///
/// ```ignore
/// dbgout::millis!(board::millis());
/// ```
#[cfg(feature = "millis")]
#[cfg_attr(docsrs, doc(cfg(feature = "millis")))]
pub use dbgout_macros::millis;

/// The byte stream all instrumentation output is written to
///
/// Implement this on a unit struct and mark it with [`#[global_sink]`](global_sink). The sink is
/// owned and initialized by the application; `dbgout` only ever calls `write`.
///
/// `dbgout` takes no lock around `write`. Calling instrumentation statements from contexts that
/// would race on the underlying peripheral (e.g. a main loop and an interrupt handler) is the
/// caller's responsibility.
pub trait GlobalSink {
    /// Writes `bytes` to the destination.
    ///
    /// A single instrumentation statement results in several `write` calls. The operation must
    /// not fail; an implementation that can fail should drop the bytes.
    fn write(bytes: &[u8]);
}

/// A [`GlobalSink`] that can block until buffered output has been transmitted
///
/// Required by the `flush-always` feature, which flushes after every statement so that output is
/// not lost when the program crashes or disables interrupts right after printing.
#[diagnostic::on_unimplemented(
    message = "the global sink `{Self}` cannot be flushed",
    label = "`{Self}` does not implement `dbgout::Flush`",
    note = "the `flush-always` feature of `dbgout` flushes after every statement; implement `dbgout::Flush` for `{Self}` or disable the feature"
)]
pub trait Flush: GlobalSink {
    /// Blocks until all bytes handed to `write` have been transmitted.
    fn flush();
}
