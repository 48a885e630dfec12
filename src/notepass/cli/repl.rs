//! Interactive session loop.
//!
//! Reads one command per line, fills in missing arguments by prompting (the
//! way a dialog would), runs it through [`NotepassApi`] and prints the result.
//! Input mistakes are printed and the session goes on; only a failing input
//! source ends it early.

use super::input::LineSource;
use super::render::{print_error, print_result};
use super::setup::{session_help, SessionCommand, SessionLine};
use clap::error::ErrorKind;
use notepass::api::{CmdResult, NotepassApi};
use notepass::error::Result;
use tracing::debug;

/// What a session command asks the loop to do next.
#[derive(Debug)]
pub(super) enum Reply {
    Show(CmdResult),
    Help,
    /// A prompt was answered with end of input
    Cancelled,
    Quit,
}

pub(super) struct Session<L: LineSource> {
    api: NotepassApi,
    input: L,
    prompt: String,
}

impl<L: LineSource> Session<L> {
    pub(super) fn new(api: NotepassApi, input: L, prompt: impl Into<String>) -> Self {
        Self {
            api,
            input,
            prompt: prompt.into(),
        }
    }

    pub(super) fn run(&mut self) -> Result<()> {
        while let Some(line) = self.input.read_line(&self.prompt)? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let command = match SessionLine::parse_line(line) {
                Ok(command) => command,
                Err(e) => {
                    print_error(&describe_parse_error(line, &e));
                    continue;
                }
            };
            self.input.remember(line);

            match self.execute(command) {
                Ok(Reply::Show(result)) => print_result(&result),
                Ok(Reply::Help) => print!("{}", session_help()),
                Ok(Reply::Cancelled) => {}
                Ok(Reply::Quit) => break,
                Err(e) if e.is_user_error() => print_error(&e.to_string()),
                Err(e) => return Err(e),
            }
        }
        debug!("session ended");
        Ok(())
    }

    pub(super) fn execute(&mut self, command: SessionCommand) -> Result<Reply> {
        let reply = match command {
            SessionCommand::AddNote { text } => {
                match self.arg_or_prompt(text.join(" "), "Enter your note: ")? {
                    Some(text) => Reply::Show(self.api.add_note(&text)),
                    None => Reply::Cancelled,
                }
            }
            SessionCommand::ListNotes => Reply::Show(self.api.list_notes()),
            SessionCommand::DeleteNote { id } => {
                let id = id.unwrap_or_default();
                match self.arg_or_prompt(id, "Enter the ID of the note to delete: ")? {
                    Some(id) => Reply::Show(self.api.delete_note(&id)?),
                    None => Reply::Cancelled,
                }
            }
            SessionCommand::AddPassword { service } => {
                let Some(service) = self.arg_or_prompt(service.join(" "), "Service: ")? else {
                    return Ok(Reply::Cancelled);
                };
                match self.input.read_secret("Password: ")? {
                    Some(password) => Reply::Show(self.api.add_password(&service, &password)?),
                    None => Reply::Cancelled,
                }
            }
            SessionCommand::GetPassword { service } => {
                let prompt = "Enter service name to view password: ";
                match self.arg_or_prompt(service.join(" "), prompt)? {
                    Some(service) => Reply::Show(self.api.get_password(&service)?),
                    None => Reply::Cancelled,
                }
            }
            SessionCommand::DeletePassword { service } => {
                let prompt = "Enter service name to delete: ";
                match self.arg_or_prompt(service.join(" "), prompt)? {
                    Some(service) => Reply::Show(self.api.delete_password(&service)?),
                    None => Reply::Cancelled,
                }
            }
            SessionCommand::Services => Reply::Show(self.api.services()),
            SessionCommand::Help => Reply::Help,
            SessionCommand::Quit => Reply::Quit,
        };
        Ok(reply)
    }

    /// Uses `value` when it was given on the command line, otherwise asks.
    fn arg_or_prompt(&mut self, value: String, prompt: &str) -> Result<Option<String>> {
        if !value.is_empty() {
            return Ok(Some(value));
        }
        self.input.read_line(prompt)
    }
}

fn describe_parse_error(line: &str, e: &clap::Error) -> String {
    let word = line.split_whitespace().next().unwrap_or(line);
    match e.kind() {
        ErrorKind::InvalidSubcommand | ErrorKind::MissingSubcommand => {
            format!("Unknown command '{}'. Type 'help' for a list.", word)
        }
        _ => {
            let rendered = e.to_string();
            let first = rendered.lines().next().unwrap_or_default();
            first.trim_start_matches("error: ").to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::input::PipedInput;
    use notepass::api::MessageLevel;
    use notepass::error::NotepassError;
    use std::io::Cursor;

    fn session(script: &str) -> Session<PipedInput<Cursor<String>>> {
        Session::new(
            NotepassApi::default(),
            PipedInput::new(Cursor::new(script.to_string())),
            "> ",
        )
    }

    fn shown(reply: Reply) -> CmdResult {
        match reply {
            Reply::Show(result) => result,
            other => panic!("expected a result, got {:?}", other),
        }
    }

    #[test]
    fn add_note_prompts_for_missing_text() {
        let mut s = session("from the prompt\n");
        let result = shown(s.execute(SessionCommand::AddNote { text: vec![] }).unwrap());
        assert_eq!(result.listing.as_deref(), Some("ID: 1 | Note: from the prompt"));
    }

    #[test]
    fn add_note_cancelled_at_end_of_input() {
        let mut s = session("");
        let reply = s.execute(SessionCommand::AddNote { text: vec![] }).unwrap();
        assert!(matches!(reply, Reply::Cancelled));
        assert!(s.api.notes().is_empty());
    }

    #[test]
    fn delete_note_with_bad_id_is_user_error() {
        let mut s = session("");
        let err = s
            .execute(SessionCommand::DeleteNote {
                id: Some("x1".into()),
            })
            .unwrap_err();
        assert!(matches!(err, NotepassError::InvalidNoteId(_)));
        assert!(err.is_user_error());
    }

    #[test]
    fn add_password_reads_service_and_secret() {
        let mut s = session("Example.com \nsecret\n");
        let added = shown(s.execute(SessionCommand::AddPassword { service: vec![] }).unwrap());
        assert_eq!(added.messages[0].level, MessageLevel::Success);

        let got = shown(
            s.execute(SessionCommand::GetPassword {
                service: vec!["example.com".into()],
            })
            .unwrap(),
        );
        assert_eq!(got.revealed.unwrap().password, "secret");
    }

    #[test]
    fn add_password_with_blank_secret_is_rejected() {
        let mut s = session("   \n");
        let err = s
            .execute(SessionCommand::AddPassword {
                service: vec!["mail".into()],
            })
            .unwrap_err();
        assert!(matches!(err, NotepassError::BlankInput(_)));
        assert!(s.api.passwords().is_empty());
    }

    #[test]
    fn delete_password_prompts_for_service() {
        let mut s = session("nothing-here\n");
        let result = shown(s.execute(SessionCommand::DeletePassword { service: vec![] }).unwrap());
        assert_eq!(
            result.messages[0].content,
            "Password for 'nothing-here' not found."
        );
    }

    #[test]
    fn run_processes_script_until_quit() {
        let mut s = session("add-note one\nan two\nbogus\ndn 1\nquit\nadd-note never\n");
        s.run().unwrap();

        let ids: Vec<_> = s.api.notes().list_notes().iter().map(|n| n.id.0).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn run_keeps_going_after_user_errors() {
        let mut s = session("dn abc\nap svc\n \nadd-note still here\n");
        s.run().unwrap();
        assert_eq!(s.api.notes().len(), 1);
        assert!(s.api.passwords().is_empty());
    }

    #[test]
    fn unknown_command_message() {
        let err = SessionLine::parse_line("frobnicate now").unwrap_err();
        assert_eq!(
            describe_parse_error("frobnicate now", &err),
            "Unknown command 'frobnicate'. Type 'help' for a list."
        );
    }
}
