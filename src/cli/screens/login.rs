use crate::errors::CliError;

use super::{Console, ScreenId, Session, Transition};

/// Two-step login: the screen stays active between the login and password
/// prompts, carrying the entered login in its sub-state.
#[derive(Default)]
pub struct LoginScreen {
    step: LoginStep,
}

#[derive(Debug, Default)]
enum LoginStep {
    #[default]
    EnterLogin,
    EnterPassword {
        login: String,
    },
}

impl LoginScreen {
    pub fn render(&mut self, session: &Session, console: &mut dyn Console) {
        match &self.step {
            LoginStep::EnterLogin => {
                console.section("Log in");
                if !session.store_ok {
                    console.error("User database connection error!");
                    return;
                }
                console.prompt("Enter login:");
            }
            LoginStep::EnterPassword { .. } => console.prompt("Enter password:"),
        }
    }

    pub fn input(
        &mut self,
        session: &mut Session,
        console: &mut dyn Console,
    ) -> Result<Transition, CliError> {
        if !session.store_ok {
            self.step = LoginStep::EnterLogin;
            return Ok(Transition::Switch(ScreenId::Entry));
        }
        // take() resets the step, so every exit path leaves a fresh screen.
        match std::mem::take(&mut self.step) {
            LoginStep::EnterLogin => {
                let Some(login) = console.read_token()? else {
                    return Ok(Transition::Quit);
                };
                if session.store.is_present(&login) {
                    self.step = LoginStep::EnterPassword { login };
                    Ok(Transition::Stay)
                } else {
                    console.error("User not found!");
                    Ok(Transition::Switch(ScreenId::Entry))
                }
            }
            LoginStep::EnterPassword { login } => {
                let Some(password) = console.read_token()? else {
                    return Ok(Transition::Quit);
                };
                let accepted = session
                    .store
                    .get(&login)
                    .is_some_and(|account| account.check_password(&password));
                if accepted {
                    session.authenticate(login);
                    Ok(Transition::Switch(ScreenId::Account))
                } else {
                    console.error("Password error!");
                    Ok(Transition::Switch(ScreenId::Entry))
                }
            }
        }
    }
}
