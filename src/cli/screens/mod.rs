mod account;
mod entry;
mod income;
mod login;
mod refill;
mod register;

pub use account::AccountScreen;
pub use entry::EntryScreen;
pub use income::IncomeScreen;
pub use login::LoginScreen;
pub use refill::RefillScreen;
pub use register::RegisterScreen;

use crate::errors::CliError;
use crate::ledger::money;

use super::{console::Console, session::Session};

/// Identifies each interactive screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenId {
    Entry,
    Login,
    Register,
    Account,
    Income,
    Refill,
}

/// Outcome of one input step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Re-render the same screen on the next cycle.
    Stay,
    /// Hand control to another screen.
    Switch(ScreenId),
    /// End the session.
    Quit,
}

/// One interactive screen together with its private sub-state.
pub enum Screen {
    Entry(EntryScreen),
    Login(LoginScreen),
    Register(RegisterScreen),
    Account(AccountScreen),
    Income(IncomeScreen),
    Refill(RefillScreen),
}

impl Screen {
    pub fn id(&self) -> ScreenId {
        match self {
            Screen::Entry(_) => ScreenId::Entry,
            Screen::Login(_) => ScreenId::Login,
            Screen::Register(_) => ScreenId::Register,
            Screen::Account(_) => ScreenId::Account,
            Screen::Income(_) => ScreenId::Income,
            Screen::Refill(_) => ScreenId::Refill,
        }
    }

    /// Draws the screen. May advance sub-state, e.g. a report requested on
    /// the previous cycle prints here.
    pub fn render(&mut self, session: &Session, console: &mut dyn Console) {
        match self {
            Screen::Entry(screen) => screen.render(session, console),
            Screen::Login(screen) => screen.render(session, console),
            Screen::Register(screen) => screen.render(session, console),
            Screen::Account(screen) => screen.render(session, console),
            Screen::Income(screen) => screen.render(session, console),
            Screen::Refill(screen) => screen.render(session, console),
        }
    }

    /// Reads whatever tokens the active flow needs and applies them. Invalid
    /// input reports an error and leaves the session unchanged; end of input
    /// quits without persisting.
    pub fn input(
        &mut self,
        session: &mut Session,
        console: &mut dyn Console,
    ) -> Result<Transition, CliError> {
        match self {
            Screen::Entry(screen) => screen.input(session, console),
            Screen::Login(screen) => screen.input(session, console),
            Screen::Register(screen) => screen.input(session, console),
            Screen::Account(screen) => screen.input(session, console),
            Screen::Income(screen) => screen.input(session, console),
            Screen::Refill(screen) => screen.input(session, console),
        }
    }
}

/// Header shared by every post-login screen: title, login, current balance.
fn account_header(title: &str, session: &Session, console: &mut dyn Console) {
    let account = session.active_account();
    console.section(&format!("{title}: {}", account.login()));
    console.menu(&format!(
        "Balance: {} {}",
        money::format_amount(account.balance()),
        session.config.currency
    ));
}
