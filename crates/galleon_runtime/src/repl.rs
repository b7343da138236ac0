//! The interactive terminal loop.

use galleon_foundation::{Response, Result};
use galleon_interpreter::Session;

use crate::editor::{LineEditor, ReadResult, RustylineEditor};

/// The interactive REPL: owns the line editor and the session, feeds
/// finalized lines to the interpreter, and renders tagged responses.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// The live session.
    session: Session,

    /// Whether to show the opening banner.
    show_banner: bool,

    /// Command prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a REPL over a session with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(session: Session) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, session))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a REPL with the given editor.
    pub fn with_editor(editor: E, session: Session) -> Self {
        Self {
            editor,
            session,
            show_banner: true,
            prompt: "> ".to_string(),
        }
    }

    /// Disables the opening banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Runs the interactive loop until EOF.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }
        self.editor
            .set_suggestions(self.session.suggestions().clone());

        loop {
            match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => {
                    let line = line.trim().to_string();
                    if line.is_empty() {
                        continue;
                    }
                    self.editor.add_history(&line);

                    let response = self.session.handle_line(&line);
                    print_response(&response);

                    // The world may have changed; refresh the inline hints.
                    self.editor
                        .set_suggestions(self.session.suggestions().clone());
                }
                ReadResult::Interrupted => {
                    println!();
                }
                ReadResult::Eof => break,
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    fn print_banner(&self) {
        println!("{}", self.session.world().name());
        println!("Type 'help' for commands.\n");
        println!("{}", self.session.world().player_room_info(true));
    }
}

fn print_response(response: &Response) {
    match response {
        Response::Text(text) => {
            if !text.is_empty() {
                println!("{text}");
            }
        }
        Response::Error(text) => println!("\x1b[31m{text}\x1b[0m"),
        Response::Navigate(view) => println!("\x1b[2m[switching to the {view} view]\x1b[0m"),
    }
}
