use crate::errors::CliError;
use crate::ledger::money;

use super::{account_header, Console, ScreenId, Session, Transition};

/// Income overview. A requested report is flagged here and printed with the
/// next draw, one cycle later.
#[derive(Default)]
pub struct IncomeScreen {
    pending_report: bool,
}

impl IncomeScreen {
    pub fn render(&mut self, session: &Session, console: &mut dyn Console) {
        account_header("Income", session, console);
        if self.pending_report {
            self.pending_report = false;
            let account = session.active_account();
            for category in account.income() {
                if money::cents(category.value) > 0 {
                    console.menu(&format!(
                        "{}: {} {}",
                        category.name,
                        money::format_amount(category.value),
                        session.config.currency
                    ));
                }
            }
            console.menu(&format!(
                "Total income: {} {}",
                money::format_amount(account.total_income()),
                session.config.currency
            ));
        }
        console.menu("1. Income report");
        console.menu("2. Refill");
        console.menu("3. Back");
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
            "1" => {
                self.pending_report = true;
                Ok(Transition::Stay)
            }
            "2" => Ok(Transition::Switch(ScreenId::Refill)),
            "3" => Ok(Transition::Switch(ScreenId::Account)),
            _ => {
                console.error("Input error!");
                Ok(Transition::Stay)
            }
        }
    }
}
