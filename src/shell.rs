//! Session state for the interactive shell
//!
//! The shell owns the dictionary load state, the current input text and the
//! last output. The dictionary moves from `Loading` to either `Ready` or
//! `Failed` exactly once; the transform can only be triggered when it is
//! `Ready`.

use crate::dictionary::Dictionary;
use crate::error::LoadResult;
use crate::transform::{Options, kirstify_with};
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

pub const TITLE: &str = "Kirstify";
pub const TAGLINE: &str =
    "Hold you e'er wished you could arrange together letter condemnation view Kirsty?";
pub const LOADING_MESSAGE: &str = "Preparing Kirstinesses...";
pub const PROMPT: &str = "Enter some text to Kirstify... (empty line to transform, Ctrl-D to quit)";

/// Where the dictionary load stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryState {
    Loading,
    Failed(String),
    Ready(Dictionary),
}

#[derive(Debug, Clone)]
pub struct Shell {
    state: DictionaryState,
    text: String,
    output: Option<String>,
    options: Options,
}

impl Shell {
    pub fn new(options: Options) -> Self {
        Shell {
            state: DictionaryState::Loading,
            text: String::new(),
            output: None,
            options,
        }
    }

    pub fn state(&self) -> &DictionaryState {
        &self.state
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, DictionaryState::Ready(_))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    /// Record the outcome of the dictionary load. Only the first outcome
    /// counts; later ones are ignored.
    pub fn on_loaded(&mut self, result: LoadResult<Dictionary>) -> &mut Self {
        if self.state != DictionaryState::Loading {
            warn!("dictionary already settled, ignoring load result");
            return self;
        }

        self.state = match result {
            Ok(dictionary) => {
                debug!(words = dictionary.len(), "shell ready");
                DictionaryState::Ready(dictionary)
            }
            Err(err) => DictionaryState::Failed(err.to_string()),
        };
        self
    }

    pub fn set_text(&mut self, text: &str) -> &mut Self {
        self.text = text.to_owned();
        self
    }

    /// Run the transform on the current text. Does nothing unless the
    /// dictionary is ready.
    pub fn trigger(&mut self) -> Option<&str> {
        let DictionaryState::Ready(dictionary) = &self.state else {
            debug!("trigger ignored, dictionary not ready");
            return None;
        };

        self.output = Some(kirstify_with(&self.text, dictionary, &self.options));
        self.output.as_deref()
    }

    /// Drive the shell from a line-oriented reader.
    ///
    /// Non-blank lines accumulate into the current text; a blank (or
    /// whitespace-only) line transforms it and writes the output followed by
    /// an empty line. Text still pending at EOF is transformed as well.
    /// Nothing is written while the dictionary is not ready.
    ///
    /// # Arguments
    ///
    /// * `input` - Source of lines, e.g. locked stdin
    /// * `out` - Where transformed text is written
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Once `input` is exhausted
    /// * `Err(io::Error)` - If reading or writing fails
    pub fn run_lines<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> io::Result<()> {
        let mut pending: Vec<String> = Vec::new();

        for line in input.lines() {
            let line = line?;
            if !line.trim().is_empty() {
                pending.push(line);
                continue;
            }
            if pending.is_empty() {
                continue;
            }

            self.set_text(&pending.join("\n"));
            pending.clear();
            if let Some(output) = self.trigger() {
                writeln!(out, "{}\n", output)?;
            }
            out.flush()?;
        }

        if !pending.is_empty() {
            self.set_text(&pending.join("\n"));
            if let Some(output) = self.trigger() {
                writeln!(out, "{}", output)?;
            }
            out.flush()?;
        }

        Ok(())
    }

    /// Plain-text view of the session
    pub fn render(&self) -> String {
        let mut lines = vec![TITLE.to_string(), TAGLINE.to_string()];

        match &self.state {
            DictionaryState::Loading => lines.push(LOADING_MESSAGE.to_string()),
            DictionaryState::Failed(message) => lines.push(format!("Error: {}", message)),
            DictionaryState::Ready(_) => {
                if let Some(output) = self.output.as_deref().filter(|o| !o.is_empty()) {
                    lines.push(String::new());
                    lines.push(output.to_string());
                }
            }
        }

        lines.join("\n")
    }
}
