use std::{fmt::Write as _, fs};

use anyhow::{anyhow, Context};
use colored::Colorize;
use object::{Object, ObjectSection};
use similar::{ChangeTag, TextDiff};

use crate::utils::run_command;

pub const TARGET: &str = "thumbv7em-none-eabihf";

const CWD: &str = "firmware";
const SECTIONS: [&str; 4] = [".text", ".rodata", ".data", ".bss"];

/// Builds the fixture with and without its call sites and compares the sections byte for byte
pub fn check() -> anyhow::Result<()> {
    let baseline = build_and_read(&[])?;
    let with_call_sites = build_and_read(&["call-sites"])?;

    let (expected, actual) = (report(&baseline), report(&with_call_sites));
    let diff = TextDiff::from_lines(&expected, &actual);

    // if anything isn't ChangeTag::Equal, print it and turn on error flag
    let mut sizes_match = true;
    for op in diff.ops() {
        for change in diff.iter_changes(op) {
            let styled_change = match change.tag() {
                ChangeTag::Delete => Some(("-".bold().red(), change.to_string().red())),
                ChangeTag::Insert => Some(("+".bold().green(), change.to_string().green())),
                ChangeTag::Equal => None,
            };
            if let Some((sign, change)) = styled_change {
                sizes_match = false;
                eprint!("{}{}", sign, change);
            }
        }
    }
    if !sizes_match {
        return Err(anyhow!("call sites changed the section sizes with output disabled"));
    }

    // same sizes can still hide different code
    let changed = baseline
        .iter()
        .zip(&with_call_sites)
        .filter(|(before, after)| before.contents != after.contents)
        .map(|(section, _)| section.name)
        .collect::<Vec<_>>();
    if !changed.is_empty() {
        return Err(anyhow!(
            "call sites changed the contents of {} with output disabled",
            changed.join(", ")
        ));
    }

    print!("{}", expected.dimmed());
    Ok(())
}

struct Section {
    name: &'static str,
    size: u64,
    /// Empty for `.bss`, which occupies no file space
    contents: Vec<u8>,
}

fn build_and_read(features: &[&str]) -> anyhow::Result<Vec<Section>> {
    let features = features.join(",");
    let mut args = vec!["build", "--release", "--target", TARGET, "-p", "zero-cost"];
    if !features.is_empty() {
        args.extend_from_slice(&["--features", &features]);
    }
    run_command("cargo", &args, Some(CWD), &[])?;

    let path = format!("{}/target/{}/release/zero-cost", CWD, TARGET);
    let elf = fs::read(&path).with_context(|| format!("reading {}", path))?;
    read_sections(&elf).with_context(|| path.clone())
}

/// The sections in [`SECTIONS`]; a missing section counts as empty
fn read_sections(elf: &[u8]) -> anyhow::Result<Vec<Section>> {
    let elf = object::File::parse(elf)?;

    SECTIONS
        .into_iter()
        .map(|name| -> anyhow::Result<Section> {
            let Some(section) = elf.section_by_name(name) else {
                return Ok(Section {
                    name,
                    size: 0,
                    contents: vec![],
                });
            };
            Ok(Section {
                name,
                size: section.size(),
                contents: section.data()?.to_vec(),
            })
        })
        .collect()
}

/// One `<section> <size>` line per section
fn report(sections: &[Section]) -> String {
    let mut report = String::new();
    for section in sections {
        // writing to a `String` cannot fail
        let _ = writeln!(report, "{:<8} {}", section.name, section.size);
    }
    report
}
