use super::category::{Category, DEPOSIT, TRANSFER, WITHDRAWAL};

/// A registered user together with their recorded cash movements.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    login: String,
    password: String,
    income: Vec<Category>,
    expense: Vec<Category>,
}

impl Account {
    /// Creates an account carrying the seeded category sets.
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
            income: vec![Category::new(DEPOSIT), Category::new(TRANSFER)],
            expense: vec![Category::new(WITHDRAWAL), Category::new(TRANSFER)],
        }
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub(crate) fn password(&self) -> &str {
        &self.password
    }

    /// Exact-match password check.
    pub fn check_password(&self, candidate: &str) -> bool {
        self.password == candidate
    }

    /// Adds to the named income category, creating it on first use.
    pub fn credit(&mut self, name: &str, amount: f64) {
        add_to(&mut self.income, name, amount);
    }

    /// Adds to the named expense category, creating it on first use.
    pub fn debit(&mut self, name: &str, amount: f64) {
        add_to(&mut self.expense, name, amount);
    }

    /// Creates an empty income category; false when the name is taken.
    pub fn add_income_category(&mut self, name: &str) -> bool {
        if self.income_category(name).is_some() {
            return false;
        }
        self.income.push(Category::new(name));
        true
    }

    /// Removes the named income category; false when absent. Erasability is
    /// enforced by the screens, not here.
    pub fn delete_income(&mut self, name: &str) -> bool {
        remove_from(&mut self.income, name)
    }

    /// Removes the named expense category; false when absent.
    pub fn delete_expense(&mut self, name: &str) -> bool {
        remove_from(&mut self.expense, name)
    }

    /// Income categories in insertion order, seeded ones first.
    pub fn income(&self) -> &[Category] {
        &self.income
    }

    pub fn expense(&self) -> &[Category] {
        &self.expense
    }

    pub fn income_category(&self, name: &str) -> Option<&Category> {
        self.income.iter().find(|category| category.name == name)
    }

    pub fn expense_category(&self, name: &str) -> Option<&Category> {
        self.expense.iter().find(|category| category.name == name)
    }

    /// Total recorded income minus total recorded spending, never cached.
    pub fn balance(&self) -> f64 {
        self.total_income() - self.expense.iter().map(|category| category.value).sum::<f64>()
    }

    /// Total recorded income across all categories.
    pub fn total_income(&self) -> f64 {
        self.income.iter().map(|category| category.value).sum()
    }
}

fn add_to(categories: &mut Vec<Category>, name: &str, amount: f64) {
    if let Some(category) = categories
        .iter_mut()
        .find(|category| category.name == name)
    {
        category.value += amount;
    } else {
        let mut category = Category::new(name);
        category.value = amount;
        categories.push(category);
    }
}

fn remove_from(categories: &mut Vec<Category>, name: &str) -> bool {
    let before = categories.len();
    categories.retain(|category| category.name != name);
    categories.len() != before
}
