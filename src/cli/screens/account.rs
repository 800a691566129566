use crate::errors::CliError;

use super::{account_header, Console, ScreenId, Session, Transition};

/// Landing screen after a successful login.
#[derive(Default)]
pub struct AccountScreen;

impl AccountScreen {
    pub fn render(&mut self, session: &Session, console: &mut dyn Console) {
        account_header("Account", session, console);
        console.menu("1. Income");
        console.menu("2. Expenses");
        console.menu("3. Log out");
        console.prompt("Select an option:");
    }

    pub fn input(
        &mut self,
        _session: &mut Session,
        console: &mut dyn Console,
    ) -> Result<Transition, CliError> {
        let Some(choice) = console.read_token()? else {
            return Ok(Transition::Quit);
        };
        match choice.as_str() {
            "1" => Ok(Transition::Switch(ScreenId::Income)),
            "2" => {
                console.warning("Expense tracking is not available yet.");
                Ok(Transition::Stay)
            }
            // Logging out keeps current_user; the next login overwrites it.
            "3" => Ok(Transition::Switch(ScreenId::Entry)),
            _ => {
                console.error("Input error!");
                Ok(Transition::Stay)
            }
        }
    }
}
