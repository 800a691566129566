use crate::errors::CliError;
use crate::ledger::Account;

use super::{Console, ScreenId, Session, Transition};

/// Registration with a two-round password confirmation. A taken login loops
/// back to the login prompt; a failed confirmation returns to the entry
/// screen.
#[derive(Default)]
pub struct RegisterScreen {
    step: RegisterStep,
}

#[derive(Debug, Default)]
enum RegisterStep {
    #[default]
    EnterLogin,
    EnterPassword {
        login: String,
    },
    ConfirmPassword {
        login: String,
        password: String,
    },
}

impl RegisterScreen {
    pub fn render(&mut self, session: &Session, console: &mut dyn Console) {
        match &self.step {
            RegisterStep::EnterLogin => {
                console.section("Register");
                if !session.store_ok {
                    console.error("User database connection error!");
                    return;
                }
                console.prompt("Enter login:");
            }
            RegisterStep::EnterPassword { .. } => console.prompt("Enter password:"),
            RegisterStep::ConfirmPassword { .. } => console.prompt("Confirm password:"),
        }
    }

    pub fn input(
        &mut self,
        session: &mut Session,
        console: &mut dyn Console,
    ) -> Result<Transition, CliError> {
        if !session.store_ok {
            self.step = RegisterStep::EnterLogin;
            return Ok(Transition::Switch(ScreenId::Entry));
        }
        match std::mem::take(&mut self.step) {
            RegisterStep::EnterLogin => {
                let Some(login) = console.read_token()? else {
                    return Ok(Transition::Quit);
                };
                if session.store.is_present(&login) {
                    console.error("A user with this name already exists!");
                } else {
                    self.step = RegisterStep::EnterPassword { login };
                }
                Ok(Transition::Stay)
            }
            RegisterStep::EnterPassword { login } => {
                let Some(password) = console.read_token()? else {
                    return Ok(Transition::Quit);
                };
                self.step = RegisterStep::ConfirmPassword { login, password };
                Ok(Transition::Stay)
            }
            RegisterStep::ConfirmPassword { login, password } => {
                let Some(confirmation) = console.read_token()? else {
                    return Ok(Transition::Quit);
                };
                if confirmation != password {
                    console.error("Passwords do not match!");
                    return Ok(Transition::Switch(ScreenId::Entry));
                }
                if session.store.add(Account::new(&login, &password)) {
                    tracing::info!(%login, "user registered");
                    console.success("User registered.");
                } else {
                    console.error("A user with this name already exists!");
                }
                Ok(Transition::Switch(ScreenId::Entry))
            }
        }
    }
}
