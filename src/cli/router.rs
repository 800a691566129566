use crate::errors::CliError;

use super::{
    console::Console,
    screens::{
        AccountScreen, EntryScreen, IncomeScreen, LoginScreen, RefillScreen, RegisterScreen,
        Screen, ScreenId, Transition,
    },
    session::Session,
};

/// Tells the run loop whether to keep cycling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Owns every screen and tracks which one is active.
pub struct Router {
    screens: Vec<Screen>,
    active: ScreenId,
}

impl Router {
    /// Builds the full screen set with the entry screen active.
    pub fn new() -> Self {
        Self {
            screens: vec![
                Screen::Entry(EntryScreen::default()),
                Screen::Login(LoginScreen::default()),
                Screen::Register(RegisterScreen::default()),
                Screen::Account(AccountScreen::default()),
                Screen::Income(IncomeScreen::default()),
                Screen::Refill(RefillScreen::default()),
            ],
            active: ScreenId::Entry,
        }
    }

    pub fn active(&self) -> ScreenId {
        self.active
    }

    /// Makes the screen with this id active.
    ///
    /// Panics when no such screen is registered; reaching that state is a
    /// routing bug, not a user error.
    pub fn switch_to(&mut self, id: ScreenId) {
        assert!(
            self.screens.iter().any(|screen| screen.id() == id),
            "no screen registered for {id:?}"
        );
        self.active = id;
    }

    /// Renders the active screen, runs its input step, and applies the result.
    pub fn run_cycle(
        &mut self,
        session: &mut Session,
        console: &mut dyn Console,
    ) -> Result<LoopControl, CliError> {
        let active = self.active;
        let screen = self
            .screens
            .iter_mut()
            .find(|screen| screen.id() == active)
            .unwrap_or_else(|| panic!("no screen registered for {active:?}"));
        screen.render(session, console);
        match screen.input(session, console)? {
            Transition::Stay => Ok(LoopControl::Continue),
            Transition::Switch(id) => {
                self.switch_to(id);
                Ok(LoopControl::Continue)
            }
            Transition::Quit => Ok(LoopControl::Exit),
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_the_entry_screen() {
        assert_eq!(Router::new().active(), ScreenId::Entry);
    }

    #[test]
    fn switch_to_changes_the_active_screen() {
        let mut router = Router::new();
        router.switch_to(ScreenId::Login);
        assert_eq!(router.active(), ScreenId::Login);
    }
}
