use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};

use anagram_cli::logging::redact_value;
use anagram_cli::shell::Shell;
use anagram_cli::summary::modes_table;
use anagram_core::AnagramMatcher;
use anagram_model::CheckReport;
use anagram_transform::ModeRegistry;

use crate::cli::{CheckArgs, ReportFormatArg, ShellArgs};

pub fn run_modes() -> Result<()> {
    let registry = ModeRegistry::builtin();
    println!("{}", modes_table(&registry));
    Ok(())
}

pub fn run_shell(args: &ShellArgs) -> Result<()> {
    let matcher = build_matcher(&args.modes)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(matcher, stdin.lock(), stdout.lock());
    shell.run().context("interactive session")
}

/// Compare two texts once. Returns whether they are anagrams.
pub fn run_check(args: &CheckArgs) -> Result<bool> {
    let mut matcher = build_matcher(&args.modes)?;
    let matched = matcher.check(&args.first, &args.second);
    debug!(
        first = redact_value(&args.first),
        second = redact_value(&args.second),
        matched,
        "compared texts"
    );
    let mut stdout = io::stdout().lock();
    match args.format {
        ReportFormatArg::Text => {
            let verdict = if matched { "anagrams" } else { "not anagrams" };
            writeln!(stdout, "{verdict}").context("write result")?;
        }
        ReportFormatArg::Json => {
            let report = CheckReport::new(
                args.first.as_str(),
                args.second.as_str(),
                matched,
                matcher.active_modes(),
            );
            serde_json::to_writer_pretty(&mut stdout, &report).context("write report")?;
            writeln!(stdout).context("write report")?;
        }
    }
    Ok(matched)
}

/// Matcher over the built-in modes with `modes` activated.
fn build_matcher(modes: &[String]) -> Result<AnagramMatcher> {
    let mut matcher = AnagramMatcher::new();
    for name in modes {
        let mode = matcher
            .activate_mode_by_name(name)
            .context("activate replacement mode")?;
        info!(%mode, "mode activated");
    }
    Ok(matcher)
}
