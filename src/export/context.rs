/// File name and line number of a `dbgref!` call site
///
/// The macros place one of these in a `static` per call site; both fields are compile-time
/// constants so the whole value ends up in read-only memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Location {
    pub file: &'static str,
    pub line: u32,
}

impl Location {
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }
}

/// The part of `path` after the last `/` or `\`
///
/// `const` so that `basename(file!())` folds into the `Location` static.
pub const fn basename(path: &'static str) -> &'static str {
    let bytes = path.as_bytes();
    let mut start = bytes.len();
    while start > 0 {
        let byte = bytes[start - 1];
        if byte == b'/' || byte == b'\\' {
            break;
        }
        start -= 1;
    }

    let (_, name) = bytes.split_at(start);
    // splitting right after an ASCII separator keeps the name valid UTF-8
    match core::str::from_utf8(name) {
        Ok(name) => name,
        Err(_) => path,
    }
}

/// Name of the marker `fn` the `dbgfunc!` expansion defines
const MARKER: &str = "__dbgout_marker";

pub fn type_name_of<T>(_: T) -> &'static str {
    core::any::type_name::<T>()
}

/// Turns the type name of the call site's marker `fn` into the path of the enclosing function
///
/// `app::control::step::__dbgout_marker` becomes `app::control::step`; closures are attributed to
/// the function that defines them.
pub fn function_name(marker: &'static str) -> &'static str {
    let mut name = marker
        .strip_suffix(MARKER)
        .and_then(|name| name.strip_suffix("::"))
        .unwrap_or(marker);

    while let Some(outer) = name.strip_suffix("::{{closure}}") {
        name = outer;
    }

    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basename_strips_directories() {
        assert_eq!(basename("src/bin/Example.ino"), "Example.ino");
        assert_eq!(basename("C:\\sketches\\blink\\blink.ino"), "blink.ino");
        assert_eq!(basename("main.rs"), "main.rs");
        assert_eq!(basename("src/"), "");
    }

    #[test]
    fn basename_is_const() {
        const NAME: &str = basename("firmware/src/main.rs");
        assert_eq!(NAME, "main.rs");
    }

    #[test]
    fn function_name_trims_marker_and_closures() {
        assert_eq!(
            function_name("app::control::step::__dbgout_marker"),
            "app::control::step"
        );
        assert_eq!(
            function_name("app::main::{{closure}}::{{closure}}::__dbgout_marker"),
            "app::main"
        );
        assert_eq!(function_name("unrelated"), "unrelated");
    }
}
