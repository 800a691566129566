use crate::errors::CliError;

use super::{Console, ScreenId, Session, Transition};

/// First screen of every session: log in, register, or leave.
#[derive(Default)]
pub struct EntryScreen;

impl EntryScreen {
    pub fn render(&mut self, _session: &Session, console: &mut dyn Console) {
        console.section("Cashbook");
        console.menu("1. Log in");
        console.menu("2. Register");
        console.menu("3. Exit");
        console.prompt("Select an option:");
    }

    pub fn input(
        &mut self,
        session: &mut Session,
        console: &mut dyn Console,
    ) -> Result<Transition, CliError> {
        let Some(choice) = console.read_token()? else {
            return Ok(Transition::Quit);
        };
        match choice.as_str() {
            "1" => Ok(Transition::Switch(ScreenId::Login)),
            "2" => Ok(Transition::Switch(ScreenId::Register)),
            "3" => {
                if let Err(err) = session.persist() {
                    console.error(&format!("Failed to save the user database: {err}"));
                }
                Ok(Transition::Quit)
            }
            _ => {
                console.error("Input error!");
                Ok(Transition::Stay)
            }
        }
    }
}
