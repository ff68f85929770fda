use std::process::Command;

use anyhow::Context;

use crate::utils::{run_capturing_stdout, run_command};

/// Targets `test-cross` checks the library for; `test-zero-cost` builds for the second one
pub const CROSS_TARGETS: [&str; 3] = [
    "thumbv6m-none-eabi",
    "thumbv7em-none-eabihf",
    "riscv32imc-unknown-none-elf",
];

/// Adds the cross targets rustup does not have yet and returns them, so they can be removed again
pub fn install() -> anyhow::Result<Vec<&'static str>> {
    let installed =
        run_capturing_stdout(Command::new("rustup").args(["target", "list", "--installed"]))
            .context("listing installed targets")?;

    let missing = CROSS_TARGETS
        .into_iter()
        .filter(|target| !installed.lines().any(|line| line.trim() == *target))
        .collect::<Vec<_>>();

    if !missing.is_empty() {
        println!("⏳ installing targets");
        let mut args = vec!["target", "add"];
        args.extend_from_slice(&missing);
        run_command("rustup", &args, None, &[])?;
    }

    Ok(missing)
}

pub fn uninstall(targets: &[&str]) {
    println!("⏳ uninstalling targets");

    // a failed removal is left for the user to clean up
    let mut args = vec!["target", "remove"];
    args.extend_from_slice(targets);
    if let Err(e) = run_command("rustup", &args, None, &[]) {
        eprintln!("could not uninstall {}: {}", targets.join(" "), e);
    }
}
