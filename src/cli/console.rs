use std::{
    collections::VecDeque,
    io::{self, BufRead},
};

use crate::errors::CliError;

use super::output::{self, MessageKind};

/// Terminal seam used by every screen; lets tests script a whole session.
pub trait Console {
    /// Next whitespace-delimited token, or `None` once input is exhausted.
    fn read_token(&mut self) -> Result<Option<String>, CliError>;

    /// Emits one message of the given kind.
    fn emit(&mut self, kind: MessageKind, message: &str);

    fn menu(&mut self, message: &str) {
        self.emit(MessageKind::Menu, message);
    }

    fn info(&mut self, message: &str) {
        self.emit(MessageKind::Info, message);
    }

    fn success(&mut self, message: &str) {
        self.emit(MessageKind::Success, message);
    }

    fn warning(&mut self, message: &str) {
        self.emit(MessageKind::Warning, message);
    }

    fn error(&mut self, message: &str) {
        self.emit(MessageKind::Error, message);
    }

    fn prompt(&mut self, message: &str) {
        self.emit(MessageKind::Prompt, message);
    }

    fn section(&mut self, message: &str) {
        self.emit(MessageKind::Section, message);
    }
}

/// Console over stdin/stdout with token-at-a-time reads. Blank input lines
/// are skipped, matching scanner-style token semantics.
#[derive(Default)]
pub struct StdioConsole {
    pending: VecDeque<String>,
}

impl StdioConsole {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Console for StdioConsole {
    fn read_token(&mut self) -> Result<Option<String>, CliError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if io::stdin().lock().read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    fn emit(&mut self, kind: MessageKind, message: &str) {
        output::print(kind, message);
    }
}

/// Console with queued input and a recorded transcript, for driving sessions
/// from tests.
#[derive(Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    transcript: Vec<(MessageKind, String)>,
}

impl ScriptedConsole {
    pub fn new<I>(inputs: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// Every recorded message joined with newlines.
    pub fn output(&self) -> String {
        self.transcript
            .iter()
            .map(|(_, message)| message.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Recorded messages of one kind, in emission order.
    pub fn messages_of(&self, kind: MessageKind) -> Vec<&str> {
        self.transcript
            .iter()
            .filter(|(recorded, _)| *recorded == kind)
            .map(|(_, message)| message.as_str())
            .collect()
    }

    pub fn transcript(&self) -> &[(MessageKind, String)] {
        &self.transcript
    }
}

impl Console for ScriptedConsole {
    fn read_token(&mut self) -> Result<Option<String>, CliError> {
        Ok(self.inputs.pop_front())
    }

    fn emit(&mut self, kind: MessageKind, message: &str) {
        self.transcript.push((kind, message.to_string()));
    }
}
