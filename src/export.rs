mod context;

pub use self::context::{basename, function_name, type_name_of, Location};

#[cfg(feature = "millis")]
use crate::time::Elapsed;
use crate::Render;

const NEWLINE: &[u8] = if cfg!(feature = "crlf") {
    b"\r\n"
} else {
    b"\n"
};

#[cfg(feature = "unstable-test")]
thread_local! {
    static BYTES: core::cell::RefCell<Vec<u8>> = const { core::cell::RefCell::new(Vec::new()) };
    static FLUSHES: core::cell::Cell<usize> = const { core::cell::Cell::new(0) };
    static MILLIS: core::cell::Cell<u64> = const { core::cell::Cell::new(0) };
}

/// Get and clear the written bytes
#[cfg(feature = "unstable-test")]
pub fn fetch_bytes() -> Vec<u8> {
    BYTES.with(|b| core::mem::take(&mut *b.borrow_mut()))
}

/// Get and clear the written bytes, as text
#[cfg(feature = "unstable-test")]
pub fn fetch_string() -> String {
    String::from_utf8_lossy(&fetch_bytes()).into_owned()
}

/// Get and reset the number of flushes
#[cfg(feature = "unstable-test")]
pub fn fetch_flushes() -> usize {
    FLUSHES.with(|f| f.replace(0))
}

/// Set the value the mocked millisecond counter returns
#[cfg(feature = "unstable-test")]
pub fn set_millis(millis: u64) {
    MILLIS.with(|m| m.set(millis))
}

#[cfg(feature = "unstable-test")]
pub fn write(bytes: &[u8]) {
    BYTES.with(|b| b.borrow_mut().extend_from_slice(bytes))
}

#[cfg(all(feature = "enabled", not(feature = "unstable-test")))]
#[inline(always)]
pub fn write(bytes: &[u8]) {
    extern "Rust" {
        fn _dbgout_write(bytes: &[u8]);
    }
    unsafe { _dbgout_write(bytes) }
}

// gate closed: nothing calls this, and nothing may reference the sink symbol
#[cfg(not(feature = "enabled"))]
#[inline(always)]
pub fn write(_bytes: &[u8]) {}

#[cfg(all(feature = "flush-always", feature = "unstable-test"))]
pub fn flush() {
    FLUSHES.with(|f| f.set(f.get() + 1))
}

#[cfg(all(
    feature = "flush-always",
    feature = "enabled",
    not(feature = "unstable-test")
))]
#[inline(always)]
pub fn flush() {
    extern "Rust" {
        fn _dbgout_flush();
    }
    unsafe { _dbgout_flush() }
}

#[cfg(all(feature = "flush-always", not(feature = "enabled")))]
#[inline(always)]
pub fn flush() {}

#[cfg(all(feature = "millis", feature = "unstable-test"))]
pub fn millis() -> u64 {
    MILLIS.with(|m| m.get())
}

#[cfg(all(feature = "millis", feature = "enabled", not(feature = "unstable-test")))]
#[inline(always)]
pub fn millis() -> u64 {
    extern "Rust" {
        fn _dbgout_millis() -> u64;
    }
    unsafe { _dbgout_millis() }
}

#[cfg(all(feature = "millis", not(feature = "enabled")))]
#[inline(always)]
pub fn millis() -> u64 {
    0
}

/// Used by `millis!` to accept `u8`, `u16`, `u32` and `u64` counters alike
#[inline(always)]
pub fn into_millis(millis: impl Into<u64>) -> u64 {
    millis.into()
}

/// Type-checks a value without using it; what the macros expand to with the gate closed
#[inline(always)]
pub fn check<T: Render + ?Sized>(_value: &T) {}

/// Ends an instrumentation statement
#[inline(never)]
pub fn newline() {
    write(NEWLINE);
    #[cfg(feature = "flush-always")]
    flush();
}

/// `value`
#[inline(never)]
pub fn line<T: Render + ?Sized>(value: &T) {
    value.render();
    newline();
}

/// `[file:line]:\tvalue`
#[inline(never)]
pub fn file_line<T: Render + ?Sized>(location: &'static Location, value: &T) {
    write(b"[");
    write(location.file.as_bytes());
    write(b":");
    location.line.render();
    write(b"]:\t");
    value.render();
    newline();
}

/// `[function @ line N]:\tvalue`
#[inline(never)]
pub fn function_line<T: Render + ?Sized>(function: &str, line: &'static u32, value: &T) {
    write(b"[");
    write(function.as_bytes());
    write(b" @ line ");
    line.render();
    write(b"]:\t");
    value.render();
    newline();
}

/// `[h:m:s.ms]:\tvalue`, reading the millisecond counter once
#[cfg(feature = "millis")]
#[inline(never)]
pub fn elapsed<T: Render + ?Sized>(value: &T) {
    let now = Elapsed::from_millis(millis());
    write(b"[");
    now.render();
    write(b"]:\t");
    value.render();
    newline();
}

/// `label = value`
#[inline(never)]
pub fn pair<T: Render + ?Sized>(label: &'static str, value: &T) {
    write(label.as_bytes());
    write(b" = ");
    value.render();
}

/// Goes between two `label = value` fragments
#[inline(always)]
pub fn separator() {
    write(b", ");
}

/// What `pair!` expands to: a `label = value` fragment that is only printed when rendered
pub struct Pair<'a, T: ?Sized> {
    label: &'static str,
    value: &'a T,
}

impl<'a, T: ?Sized> Pair<'a, T> {
    #[inline(always)]
    pub const fn new(label: &'static str, value: &'a T) -> Self {
        Self { label, value }
    }
}

impl<T: Render + ?Sized> Render for Pair<'_, T> {
    fn render(&self) {
        pair(self.label, self.value)
    }
}
