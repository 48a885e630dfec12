use notepass::error::Result;
use rustyline::error::ReadlineError;
use rustyline::history::MemHistory;
use rustyline::{Config, EditMode, Editor};
use std::io::BufRead;

/// Where session lines and prompted values come from.
///
/// `Ok(None)` means the input ended (Ctrl-D, or end of a piped script).
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Reads a value that must not be echoed or kept in history.
    fn read_secret(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Records a session command in history, if the source keeps one.
    fn remember(&mut self, _line: &str) {}
}

/// Interactive terminal: rustyline editing with in-memory history, masked
/// password entry through rpassword.
pub struct TerminalInput {
    editor: Editor<(), MemHistory>,
    mask_secrets: bool,
}

impl TerminalInput {
    pub fn new(mask_secrets: bool) -> Result<Self> {
        let config = Config::builder()
            .history_ignore_space(true)
            .auto_add_history(false)
            .edit_mode(EditMode::Emacs)
            .build();
        let editor = Editor::with_history(config, MemHistory::new())?;
        Ok(Self {
            editor,
            mask_secrets,
        })
    }
}

impl LineSource for TerminalInput {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        loop {
            match self.editor.readline(prompt) {
                Ok(line) => return Ok(Some(line)),
                // Ctrl-C clears the current input
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => return Ok(None),
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn read_secret(&mut self, prompt: &str) -> Result<Option<String>> {
        if !self.mask_secrets {
            return self.read_line(prompt);
        }
        match rpassword::prompt_password(prompt) {
            Ok(secret) => Ok(Some(secret)),
            Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn remember(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }
}

/// Non-interactive input (a pipe or a file): one value per line, prompts are
/// not shown.
pub struct PipedInput<R> {
    reader: R,
}

impl<R: BufRead> PipedInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    fn next_line(&mut self) -> Result<Option<String>> {
        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        let trimmed_len = buf.trim_end_matches(['\n', '\r']).len();
        buf.truncate(trimmed_len);
        Ok(Some(buf))
    }
}

impl<R: BufRead> LineSource for PipedInput<R> {
    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>> {
        self.next_line()
    }

    fn read_secret(&mut self, _prompt: &str) -> Result<Option<String>> {
        self.next_line()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn piped_input_yields_lines_then_end() {
        let mut input = PipedInput::new(Cursor::new("first\r\nsecond\n\nlast"));
        assert_eq!(input.read_line("> ").unwrap().as_deref(), Some("first"));
        assert_eq!(input.read_secret("pw: ").unwrap().as_deref(), Some("second"));
        assert_eq!(input.read_line("> ").unwrap().as_deref(), Some(""));
        assert_eq!(input.read_line("> ").unwrap().as_deref(), Some("last"));
        assert_eq!(input.read_line("> ").unwrap(), None);
    }

    #[test]
    fn piped_input_keeps_inner_whitespace() {
        let mut input = PipedInput::new(Cursor::new("  padded value  \n"));
        assert_eq!(
            input.read_line("").unwrap().as_deref(),
            Some("  padded value  ")
        );
    }
}
