use colored::Colorize;
use std::fmt;

/// Message categories used by the console output helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Unstyled body text, e.g. menu entries and report rows.
    Menu,
    Info,
    Success,
    Warning,
    Error,
    Prompt,
    Section,
}

/// Applies the visual style for a message kind without printing it.
pub fn format_message(kind: MessageKind, message: impl fmt::Display) -> String {
    let text = message.to_string();
    match kind {
        MessageKind::Menu => text,
        MessageKind::Info => format!("[i] {text}"),
        MessageKind::Success => format!("[+] {text}").bright_green().to_string(),
        MessageKind::Warning => format!("[!] {text}").bright_yellow().to_string(),
        MessageKind::Error => format!("[x] {text}").bright_red().to_string(),
        MessageKind::Prompt => format!("> {text}").bright_cyan().to_string(),
        MessageKind::Section => format!("=== {} ===", text.trim()).bold().to_string(),
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    match kind {
        MessageKind::Section => println!("\n{}", format_message(kind, message)),
        _ => println!("{}", format_message(kind, message)),
    }
}
