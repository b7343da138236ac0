//! Line editor abstraction for the terminal runtime.
//!
//! This module provides a trait-based abstraction over line editing
//! libraries, allowing the REPL to use rustyline while remaining swappable.
//! The suggestion engine is wired in as a rustyline hinter: the completion
//! for the text typed so far appears dimmed after the cursor and is accepted
//! with the Right arrow, reproducing the original terminal's grey inline
//! suggestion.

use std::borrow::Cow;

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Completer as RlCompleter, Config, Context, Editor, Helper, Hinter as RlHinter};

use galleon_foundation::{Error, Result, HISTORY_CAPACITY};
use galleon_interpreter::{SuggestionTable, GRAMMAR};

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing functionality.
pub trait LineEditor {
    /// Reads a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Adds a line to the editor's recall history.
    fn add_history(&mut self, line: &str);

    /// Replaces the suggestion table used for inline hints.
    fn set_suggestions(&mut self, table: SuggestionTable);
}

/// Helper for rustyline that provides completion, hints, and highlighting.
#[derive(Helper, RlCompleter, RlHinter)]
struct GalleonHelper {
    #[rustyline(Completer)]
    completer: VerbCompleter,
    #[rustyline(Hinter)]
    hinter: SuggestionHinter,
}

// Commands are single lines; every input is complete as typed.
impl Validator for GalleonHelper {}

impl Highlighter for GalleonHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        false
    }
}

/// Completes the command word from the grammar's vocabulary.
struct VerbCompleter {
    words: Vec<String>,
}

impl VerbCompleter {
    fn new() -> Self {
        let mut words: Vec<String> = GRAMMAR
            .iter()
            .flat_map(|entry| {
                std::iter::once(entry.canonical)
                    .chain(entry.synonyms.iter().copied())
                    .map(ToString::to_string)
            })
            .collect();
        words.sort();
        Self { words }
    }
}

impl Completer for VerbCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        // Only the command word is completed here; argument completion is
        // the hinter's job, driven by the live suggestion table.
        let head = &line[..pos];
        if head.contains(char::is_whitespace) {
            return Ok((pos, Vec::new()));
        }

        let candidates = self
            .words
            .iter()
            .filter(|word| word.starts_with(head))
            .map(|word| Pair {
                display: word.clone(),
                replacement: word.clone(),
            })
            .collect();
        Ok((0, candidates))
    }
}

/// Renders the suggestion engine's completion as an inline hint.
struct SuggestionHinter {
    table: SuggestionTable,
}

impl Hinter for SuggestionHinter {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if pos < line.len() {
            return None;
        }
        let suffix = self.table.complete(line);
        if suffix.is_empty() { None } else { Some(suffix) }
    }
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<GalleonHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a new rustyline-based editor.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    ///
    /// # Panics
    ///
    /// Panics if the history size configuration is invalid (should not happen
    /// with hardcoded valid values).
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(HISTORY_CAPACITY)
            .expect("valid history size")
            .build();

        let helper = GalleonHelper {
            completer: VerbCompleter::new(),
            hinter: SuggestionHinter {
                table: SuggestionTable::default(),
            },
        };

        let mut editor =
            Editor::with_config(config).map_err(|e| Error::internal(e.to_string()))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::io(e.to_string())),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }

    fn set_suggestions(&mut self, table: SuggestionTable) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.hinter.table = table;
        }
    }
}
