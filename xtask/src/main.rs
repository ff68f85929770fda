use std::sync::{Mutex, MutexGuard};

use anyhow::anyhow;
use once_cell::sync::Lazy;
use structopt::StructOpt;

mod targets;
mod utils;
mod zero_cost;

use crate::utils::run_command;

static ALL_ERRORS: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(vec![]));

/// Feature sets `test-host` runs the `dbgout` test suite with, on top of `unstable-test`
const FEATURE_MATRIX: [&str; 7] = [
    "",
    "no-streaming",
    "flush-always",
    "crlf",
    "millis",
    "alloc",
    "no-streaming,flush-always,crlf,millis,alloc",
];

#[derive(Debug, StructOpt)]
struct Options {
    #[structopt(subcommand)]
    cmd: TestCommand,
    /// Treat compiler warnings as errors (`RUSTFLAGS="--deny warnings"`)
    #[structopt(long, short)]
    deny_warnings: bool,
    /// Keep target toolchains that were installed as dependency
    #[structopt(long, short)]
    keep_targets: bool,
}

#[derive(Debug, StructOpt)]
#[allow(clippy::enum_variant_names)]
enum TestCommand {
    TestAll,
    TestCross,
    TestHost,
    TestLint,
    /// Check that call sites add nothing to the firmware while output is disabled
    TestZeroCost,
}

fn main() -> anyhow::Result<()> {
    let opt: Options = Options::from_args();
    let mut added_targets = None;

    match opt.cmd {
        TestCommand::TestHost => test_host(opt.deny_warnings),
        TestCommand::TestLint => test_lint(),

        // following tests need to install additional targets
        cmd => {
            added_targets = Some(targets::install()?);
            match cmd {
                TestCommand::TestCross => test_cross(),
                TestCommand::TestZeroCost => test_zero_cost(),
                TestCommand::TestAll => {
                    test_host(opt.deny_warnings);
                    test_cross();
                    test_zero_cost();
                    test_lint();
                }
                _ => unreachable!("get handled in outer `match`"),
            }
        }
    }

    if let Some(added_targets) = added_targets {
        if !opt.keep_targets && !added_targets.is_empty() {
            targets::uninstall(&added_targets)
        }
    }

    let all_errors = all_errors();
    if !all_errors.is_empty() {
        eprintln!();
        Err(anyhow!("😔 some tests failed: {:#?}", all_errors))
    } else {
        Ok(())
    }
}

fn all_errors() -> MutexGuard<'static, Vec<String>> {
    ALL_ERRORS.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn do_test(test: impl FnOnce() -> anyhow::Result<()>, context: &str) {
    test().unwrap_or_else(|e| all_errors().push(format!("{}: {}", context, e)));
}

fn test_host(deny_warnings: bool) {
    println!("🧪 host");

    let env = if deny_warnings {
        vec![("RUSTFLAGS", "--deny warnings")]
    } else {
        vec![]
    };

    do_test(
        || run_command("cargo", &["check", "--workspace"], None, &env),
        "host",
    );

    do_test(
        || {
            run_command(
                "cargo",
                &["check", "-p", "dbgout", "--features", "enabled"],
                None,
                &env,
            )
        },
        "host",
    );

    for features in FEATURE_MATRIX {
        let features = if features.is_empty() {
            "unstable-test".to_string()
        } else {
            format!("unstable-test,{}", features)
        };

        do_test(
            || {
                run_command(
                    "cargo",
                    &["test", "-p", "dbgout", "--features", &features],
                    None,
                    &env,
                )
            },
            "host",
        );
    }

    do_test(
        || run_command("cargo", &["test", "-p", "dbgout-macros"], None, &env),
        "host",
    );

    do_test(
        || {
            run_command(
                "cargo",
                &[
                    "test",
                    "-p",
                    "dbgout-macros",
                    "--features",
                    "enabled,flush-always",
                ],
                None,
                &env,
            )
        },
        "host",
    );
}

fn test_cross() {
    println!("🧪 cross");

    for target in targets::CROSS_TARGETS {
        for features in ["", "enabled", "enabled,no-streaming", "enabled,millis,alloc"] {
            let mut args = vec!["check", "--target", target, "-p", "dbgout"];
            if !features.is_empty() {
                args.extend_from_slice(&["--features", features]);
            }
            do_test(|| run_command("cargo", &args, None, &[]), "cross");
        }
    }

    do_test(
        || {
            run_command(
                "cargo",
                &["check", "--target", zero_cost::TARGET, "--workspace"],
                Some("firmware"),
                &[],
            )
        },
        "cross",
    );
}

fn test_zero_cost() {
    println!("🧪 zero-cost");
    do_test(zero_cost::check, "zero-cost");
}

fn test_lint() {
    println!("🧪 lint");
    do_test(|| run_command("cargo", &["clean"], None, &[]), "lint");
    do_test(
        || run_command("cargo", &["fmt", "--all", "--", "--check"], None, &[]),
        "lint",
    );

    do_test(
        || run_command("cargo", &["clippy", "--workspace"], None, &[]),
        "lint",
    );

    do_test(
        || {
            run_command(
                "cargo",
                &["clippy", "-p", "dbgout", "--features", "unstable-test,millis"],
                None,
                &[],
            )
        },
        "lint",
    );
}
