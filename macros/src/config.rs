/// Code generation switches, taken from the Cargo features `dbgout` forwards to this crate
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Config {
    /// The gate: when `false` no instrumentation code is generated at all
    pub(crate) enabled: bool,
    /// The global sink must also export a flush hook
    pub(crate) flush: bool,
}

impl Config {
    pub(crate) fn from_features() -> Self {
        Self {
            enabled: cfg!(feature = "enabled"),
            flush: cfg!(feature = "flush-always"),
        }
    }

    #[cfg(test)]
    pub(crate) const OPEN: Self = Self {
        enabled: true,
        flush: false,
    };

    #[cfg(test)]
    pub(crate) const CLOSED: Self = Self {
        enabled: false,
        flush: false,
    };
}
