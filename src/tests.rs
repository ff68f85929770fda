use crate as dbgout;
use crate::export::{self, fetch_string, Location};
use crate::render::{Backend, Basic, Streaming};
use crate::{Elapsed, Render};

fn nl() -> &'static str {
    if cfg!(feature = "crlf") {
        "\r\n"
    } else {
        "\n"
    }
}

fn capture(f: impl FnOnce()) -> String {
    fetch_string();
    f();
    fetch_string()
}

macro_rules! same_on_both_backends {
    ($method:ident($($arg:expr),*) => $expected:expr) => {{
        let basic = capture(|| Basic::$method($($arg),*));
        let streaming = capture(|| Streaming::$method($($arg),*));
        assert_eq!(basic, $expected, "basic");
        assert_eq!(streaming, $expected, "streaming");
    }};
}

#[test]
fn integers_render_identically() {
    same_on_both_backends!(u64(0) => "0");
    same_on_both_backends!(u64(42) => "42");
    same_on_both_backends!(u64(u64::MAX) => "18446744073709551615");
    same_on_both_backends!(i64(-7) => "-7");
    same_on_both_backends!(i64(i64::MIN) => "-9223372036854775808");
    same_on_both_backends!(u128(u128::MAX) => "340282366920938463463374607431768211455");
    same_on_both_backends!(i128(i128::MIN) => "-170141183460469231731687303715884105728");
    same_on_both_backends!(i128(-3) => "-3");
}

#[test]
fn floats_render_identically() {
    same_on_both_backends!(f64(3.14159, 2) => "3.14");
    same_on_both_backends!(f64(2.5, 2) => "2.50");
    same_on_both_backends!(f64(-1.75, 2) => "-1.75");
    same_on_both_backends!(f64(0.0, 2) => "0.00");
    same_on_both_backends!(f64(-0.0, 2) => "-0.00");
    same_on_both_backends!(f64(100.0, 2) => "100.00");
    same_on_both_backends!(f64(1e20, 2) => "100000000000000000000.00");
    same_on_both_backends!(f64(1234567.891, 1) => "1234567.9");
    same_on_both_backends!(f64(2.0 / 3.0, 4) => "0.6667");
    same_on_both_backends!(f64(7.6, 0) => "8");
    same_on_both_backends!(f64(f64::NAN, 2) => "NaN");
    same_on_both_backends!(f64(f64::INFINITY, 2) => "inf");
    same_on_both_backends!(f64(f64::NEG_INFINITY, 2) => "-inf");
}

#[test]
fn floats_round_half_to_even_on_the_exact_value() {
    // 0.015 is stored as 0.01499999..
    same_on_both_backends!(f64(0.015, 2) => "0.01");
    // exact ties
    same_on_both_backends!(f64(0.125, 2) => "0.12");
    same_on_both_backends!(f64(0.375, 2) => "0.38");
    same_on_both_backends!(f64(0.5, 0) => "0");
    same_on_both_backends!(f64(1.5, 0) => "2");
    same_on_both_backends!(f64(2.5, 0) => "2");
    same_on_both_backends!(f64(9.995, 2) => "9.99");
    same_on_both_backends!(f64(99.5, 0) => "100");
    same_on_both_backends!(f64(0.999, 2) => "1.00");
    // subnormals and long expansions
    same_on_both_backends!(f64(f64::from_bits(1), 2) => "0.00");
    same_on_both_backends!(f64(0.1, 30) => "0.100000000000000005551115123126");

    fetch_string();
    0.375f32.render();
    assert_eq!(fetch_string(), "0.38");
}

#[test]
fn float_sweep_matches_core_fmt() {
    let mut mismatches = vec![];
    for k in 0..100_000 {
        let v = f64::from(k) / 1000.0;
        for (v, digits) in [(v, 2), (-v, 2), (v, 1), (v / 7.0, 3)] {
            let basic = capture(|| Basic::f64(v, digits));
            let streaming = capture(|| Streaming::f64(v, digits));
            if basic != streaming {
                mismatches.push((v, digits, basic, streaming));
            }
        }
    }
    assert!(
        mismatches.is_empty(),
        "{} mismatches, first: {:?}",
        mismatches.len(),
        &mismatches[..mismatches.len().min(5)]
    );
}

#[test]
fn basic_floats_beyond_u128() {
    assert_eq!(capture(|| Basic::f64(f64::MAX, 2)), "ovf");
    assert_eq!(capture(|| Basic::f64(-1e39, 2)), "-ovf");
    assert_eq!(
        capture(|| Basic::f64(2f64.powi(127), 0)),
        "170141183460469231731687303715884105728"
    );
}

#[test]
fn addresses_render_identically() {
    same_on_both_backends!(address(0xdead_beef) => "0xdeadbeef");
    same_on_both_backends!(address(0) => "0x0");
}

#[test]
fn strings_render_identically() {
    same_on_both_backends!(str("héllo") => "héllo");
    same_on_both_backends!(str("") => "");
}

#[test]
fn primitives() {
    fetch_string();
    42u8.render();
    (-42i16).render();
    true.render();
    'ß'.render();
    "str".render();
    1.5f32.render();
    assert_eq!(fetch_string(), "42-42trueßstr1.50");
}

#[test]
fn pointers() {
    fetch_string();
    let value = 7u32;
    let ptr: *const u32 = &value;
    ptr.render();
    assert_eq!(fetch_string(), format!("{:p}", ptr));
}

#[test]
fn references_render_their_target() {
    fetch_string();
    let mut n = 5i32;
    (&&n).render();
    (&mut n).render();
    assert_eq!(fetch_string(), "55");
}

#[test]
fn elapsed_decomposition() {
    let samples = [
        0,
        1,
        999,
        1_000,
        59_999,
        60_000,
        131_085,
        3_599_999,
        3_600_000,
        86_400_000,
        u64::from(u32::MAX),
        u64::MAX,
    ];

    for t in samples {
        let e = Elapsed::from_millis(t);
        assert!(e.minutes < 60 && e.seconds < 60 && e.millis < 1000, "{}", t);
        assert_eq!(
            e.hours * 3_600_000
                + u64::from(e.minutes) * 60_000
                + u64::from(e.seconds) * 1_000
                + u64::from(e.millis),
            t
        );
        assert_eq!(e.as_millis(), t);
    }
}

#[test]
fn elapsed_format() {
    fetch_string();
    for (t, expected) in [
        (131_085, "0:2:11.085"),
        (0, "0:0:0.000"),
        (5, "0:0:0.005"),
        (60_050, "0:1:0.050"),
        (3_600_000 * 25 + 999, "25:0:0.999"),
    ] {
        let e = Elapsed::from_millis(t);
        e.render();
        assert_eq!(fetch_string(), expected);
        assert_eq!(e.to_string(), expected);
    }
}

#[test]
fn file_line_prefix() {
    fetch_string();
    static LOCATION: Location = Location::new(export::basename("sketch/Example.ino"), 12);

    export::file_line(&LOCATION, "msg");
    assert_eq!(fetch_string(), format!("[Example.ino:12]:\tmsg{}", nl()));
}

#[test]
fn function_line_prefix() {
    fetch_string();
    static LINE: u32 = 40;

    export::function_line("app::control::step", &LINE, &-1i8);
    assert_eq!(
        fetch_string(),
        format!("[app::control::step @ line 40]:\t-1{}", nl())
    );
}

#[test]
fn pairs() {
    fetch_string();
    export::pair("a", &1);
    export::separator();
    export::pair("b", &"two");
    export::newline();
    assert_eq!(fetch_string(), format!("a = 1, b = two{}", nl()));

    export::Pair::new("x + 1", &3u8).render();
    assert_eq!(fetch_string(), "x + 1 = 3");
}

#[test]
fn macros_expand_inside_the_crate() {
    fetch_string();
    let a = 1;
    dbgout::dbgln!(a);
    dbgout::dbgval!(a, a + 1);
    assert_eq!(fetch_string(), format!("1{nl}a = 1, a + 1 = 2{nl}", nl = nl()));
}

#[cfg(feature = "flush-always")]
#[test]
fn every_statement_flushes() {
    fetch_string();
    export::fetch_flushes();
    dbgout::dbgln!(1);
    dbgout::dbgref!(2);
    dbgout::dbgval!(3, 4);
    assert_eq!(export::fetch_flushes(), 3);
    fetch_string();
}

#[cfg(not(feature = "flush-always"))]
#[test]
fn statements_do_not_flush() {
    fetch_string();
    dbgout::dbgln!(1);
    assert_eq!(fetch_string(), format!("1{}", nl()));
}

#[cfg(feature = "millis")]
#[test]
fn elapsed_prefix() {
    fetch_string();
    export::set_millis(131_085);
    export::elapsed(&"tick");
    assert_eq!(fetch_string(), format!("[0:2:11.085]:\ttick{}", nl()));
}

#[cfg(feature = "alloc")]
#[test]
fn owned_strings() {
    fetch_string();
    let s = alloc::string::String::from("owned");
    s.render();
    alloc::boxed::Box::new(9u8).render();
    assert_eq!(fetch_string(), "owned9");
}

#[cfg(not(feature = "no-streaming"))]
#[test]
fn extended_formatting() {
    fetch_string();
    crate::Hex(0x2cu8).render();
    " ".render();
    crate::Bin(5u8).render();
    " ".render();
    crate::Precision(1.0 / 3.0, 5).render();
    " ".render();
    crate::Debug2Render(&Some(1)).render();
    " ".render();
    crate::Display2Render(&'x').render();
    assert_eq!(fetch_string(), "2c 101 0.33333 Some(1) x");
}
