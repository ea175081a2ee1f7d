//! Interactive menu loop around an [`AnagramMatcher`].
//!
//! The shell reads one line per prompt and writes its output to any
//! [`Write`], which keeps it testable with in-memory buffers. Errors raised
//! by the matcher, and unknown menu options, are reported and the loop goes
//! on; only I/O failures end the session. End of input counts as exit, and
//! undecodable bytes are read as U+FFFD.

use std::io::{self, BufRead, Write};

use anagram_core::{AnagramError, AnagramMatcher};
use thiserror::Error;
use tracing::{Level, debug, info, info_span, trace, warn};

use crate::logging::redact_value;
use crate::messages;

#[derive(Debug, Error)]
enum ShellError {
    #[error(transparent)]
    Anagram(#[from] AnagramError),
    #[error("{}", messages::invalid_option(.0))]
    InvalidOption(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

enum Flow {
    Continue,
    Exit,
}

pub struct Shell<R, W> {
    matcher: AnagramMatcher,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(matcher: AnagramMatcher, input: R, output: W) -> Self {
        Self {
            matcher,
            input,
            output,
        }
    }

    /// Run the menu loop until the user exits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run(&mut self) -> io::Result<()> {
        let span = info_span!("shell");
        let _guard = span.enter();
        info!(
            active_modes = %messages::active_modes(&self.matcher.active_modes()),
            "session started"
        );
        self.banner()?;
        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(ShellError::Io(error)) => return Err(error),
                Err(error) => {
                    warn!(%error, "command rejected");
                    writeln!(self.output, "{}", messages::error(&error))?;
                    writeln!(self.output, "{}", messages::BACK_TO_MAIN_MENU)?;
                }
            }
        }
        let stats = self.matcher.stats();
        info!(
            groups = stats.groups,
            entries = stats.entries,
            "session finished"
        );
        self.output.flush()
    }

    /// Take back the matcher and the output sink.
    pub fn into_parts(self) -> (AnagramMatcher, W) {
        (self.matcher, self.output)
    }

    fn banner(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", messages::WELCOME)?;
        writeln!(self.output, "{}", messages::REPLACEMENTS_HEADER)?;
        let lines: Vec<String> = self
            .matcher
            .registry()
            .iter()
            .map(|mode| {
                messages::mode_rules(
                    mode.name(),
                    &anagram_transform::describe_rules(mode.replacements()),
                )
            })
            .collect();
        for line in lines {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    fn step(&mut self) -> Result<Flow, ShellError> {
        let mode_names = self.mode_names();
        writeln!(self.output)?;
        writeln!(
            self.output,
            "{}",
            messages::active_modes(&self.matcher.active_modes())
        )?;
        writeln!(self.output, "{}", messages::menu(&mode_names))?;
        writeln!(self.output, "{}", messages::CHOOSE_OPTION)?;
        self.output.flush()?;

        let Some(option) = self.read_line()? else {
            debug!("input closed");
            return Ok(Flow::Exit);
        };
        match option.trim() {
            "1" => self.compare(),
            "2" => self.lookup(),
            "3" => self.activate(&mode_names),
            "4" => self.deactivate(&mode_names),
            "5" => {
                writeln!(self.output, "{}", messages::EXITING)?;
                Ok(Flow::Exit)
            }
            other => Err(ShellError::InvalidOption(other.to_string())),
        }
    }

    fn compare(&mut self) -> Result<Flow, ShellError> {
        writeln!(self.output, "{}", messages::ENTER_TEXTS)?;
        self.output.flush()?;
        let Some(first) = self.read_line()? else {
            return Ok(Flow::Exit);
        };
        let Some(second) = self.read_line()? else {
            return Ok(Flow::Exit);
        };
        let matched = self
            .matcher
            .are_anagrams(Some(first.as_str()), Some(second.as_str()))?;
        if tracing::enabled!(Level::TRACE) {
            let first_key = self.matcher.group_key(&first);
            let second_key = self.matcher.group_key(&second);
            trace!(
                first_key = redact_value(first_key.as_str()),
                second_key = redact_value(second_key.as_str()),
                "computed group keys"
            );
        }
        debug!(
            first = redact_value(&first),
            second = redact_value(&second),
            matched,
            "compared texts"
        );
        let line = if matched {
            messages::are_anagrams(&first, &second)
        } else {
            messages::not_anagrams(&first, &second)
        };
        writeln!(self.output, "{line}")?;
        Ok(Flow::Continue)
    }

    fn lookup(&mut self) -> Result<Flow, ShellError> {
        writeln!(self.output, "{}", messages::ENTER_TEXT)?;
        self.output.flush()?;
        let Some(word) = self.read_line()? else {
            return Ok(Flow::Exit);
        };
        let anagrams = self.matcher.get_anagrams(Some(word.as_str()));
        debug!(
            word = redact_value(&word),
            found = anagrams.len(),
            "looked up anagrams"
        );
        let line = if anagrams.is_empty() {
            messages::no_anagrams(&word)
        } else {
            messages::known_anagrams(&word, &anagrams)
        };
        writeln!(self.output, "{line}")?;
        Ok(Flow::Continue)
    }

    fn activate(&mut self, mode_names: &str) -> Result<Flow, ShellError> {
        writeln!(self.output, "{}", messages::enter_mode_to_add(mode_names))?;
        self.output.flush()?;
        let Some(name) = self.read_line()? else {
            return Ok(Flow::Exit);
        };
        let mode = self.matcher.activate_mode_by_name(&name)?;
        info!(%mode, "mode activated");
        writeln!(self.output, "{}", messages::mode_activated(&mode))?;
        Ok(Flow::Continue)
    }

    fn deactivate(&mut self, mode_names: &str) -> Result<Flow, ShellError> {
        writeln!(self.output, "{}", messages::enter_mode_to_remove(mode_names))?;
        self.output.flush()?;
        let Some(name) = self.read_line()? else {
            return Ok(Flow::Exit);
        };
        let mode = self.matcher.deactivate_mode_by_name(&name)?;
        info!(%mode, "mode deactivated");
        writeln!(self.output, "{}", messages::mode_deactivated(&mode))?;
        Ok(Flow::Continue)
    }

    fn mode_names(&self) -> String {
        self.matcher
            .registry()
            .ids()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Next input line without its line terminator, or `None` at end of input.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD instead of
    /// ending the session.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}
