use crate::errors::CliError;
use crate::ledger::{money, DEPOSIT, WITHDRAWAL};

use super::{account_header, Console, ScreenId, Session, Transition};

/// Category maintenance: refill an income category, add a new one, or delete
/// an erasable one. The rendered listing is captured so input indices always
/// refer to what the user saw.
#[derive(Default)]
pub struct RefillScreen {
    listing: Vec<String>,
}

impl RefillScreen {
    pub fn render(&mut self, session: &Session, console: &mut dyn Console) {
        account_header("Refill", session, console);
        let account = session.active_account();
        self.listing = account
            .income()
            .iter()
            .map(|category| category.name.clone())
            .collect();
        for (index, name) in self.listing.iter().enumerate() {
            console.menu(&format!("{}. {}", index + 1, name));
        }
        let n = self.listing.len();
        console.menu(&format!("{}. Add a category", n + 1));
        console.menu(&format!("{}. Delete a category", n + 2));
        console.menu(&format!("{}. Back", n + 3));
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
        let n = self.listing.len();
        let Ok(index) = choice.parse::<usize>() else {
            console.error("Input error!");
            return Ok(Transition::Stay);
        };
        if (1..=n).contains(&index) {
            return self.refill_category(index - 1, session, console);
        }
        if index == n + 1 {
            return add_category(session, console);
        }
        if index == n + 2 {
            return delete_category(session, console);
        }
        if index == n + 3 {
            return Ok(Transition::Switch(ScreenId::Income));
        }
        console.error("Input error!");
        Ok(Transition::Stay)
    }

    fn refill_category(
        &self,
        slot: usize,
        session: &mut Session,
        console: &mut dyn Console,
    ) -> Result<Transition, CliError> {
        let name = self.listing[slot].clone();
        console.prompt("Enter amount:");
        let Some(raw) = console.read_token()? else {
            return Ok(Transition::Quit);
        };
        let amount = match money::parse_amount(&raw) {
            Ok(value) if value >= 0.0 => value,
            _ => {
                console.error("Input error!");
                return Ok(Transition::Stay);
            }
        };
        console.menu(&format!(
            "Add {} {} to {}?",
            money::format_amount(amount),
            session.config.currency,
            name
        ));
        console.menu("1. Confirm");
        console.menu("2. Cancel");
        console.prompt("Select an option:");
        let Some(choice) = console.read_token()? else {
            return Ok(Transition::Quit);
        };
        if choice == "1" {
            session.active_account_mut().credit(&name, amount);
            console.success(&format!(
                "Refilled {} by {} {}.",
                name,
                money::format_amount(amount),
                session.config.currency
            ));
        } else {
            console.info("Refill cancelled.");
        }
        Ok(Transition::Stay)
    }
}

fn add_category(
    session: &mut Session,
    console: &mut dyn Console,
) -> Result<Transition, CliError> {
    console.prompt("Enter a category name:");
    let Some(name) = console.read_token()? else {
        return Ok(Transition::Quit);
    };
    if session.active_account_mut().add_income_category(&name) {
        console.success(&format!("Category {name} added."));
    } else {
        console.error("A category with this name already exists!");
    }
    Ok(Transition::Stay)
}

fn delete_category(
    session: &mut Session,
    console: &mut dyn Console,
) -> Result<Transition, CliError> {
    console.prompt("Enter a category name:");
    let Some(name) = console.read_token()? else {
        return Ok(Transition::Quit);
    };
    let Some(category) = session.active_account().income_category(&name) else {
        console.error("Category not found!");
        return Ok(Transition::Stay);
    };
    if !category.erasable {
        console.error("This category cannot be deleted!");
        return Ok(Transition::Stay);
    }
    let value = category.value;
    console.menu(&format!(
        "{} holds {} {}.",
        name,
        money::format_amount(value),
        session.config.currency
    ));
    console.menu("1. Move the funds to Deposit");
    console.menu("2. Move the funds to Deposit and withdraw them");
    console.prompt("Select an option:");
    let Some(choice) = console.read_token()? else {
        return Ok(Transition::Quit);
    };
    match choice.as_str() {
        "1" => {
            let account = session.active_account_mut();
            account.delete_income(&name);
            account.credit(DEPOSIT, value);
            console.success(&format!("Category {name} deleted, funds kept in Deposit."));
        }
        "2" => {
            let account = session.active_account_mut();
            account.delete_income(&name);
            account.credit(DEPOSIT, value);
            account.debit(WITHDRAWAL, value);
            console.success(&format!("Category {name} deleted, funds withdrawn."));
        }
        _ => console.info("Deletion cancelled."),
    }
    Ok(Transition::Stay)
}
