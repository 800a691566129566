pub const DEPOSIT: &str = "Deposit";
pub const TRANSFER: &str = "Transfer";
pub const WITHDRAWAL: &str = "Withdrawal";

/// Category names seeded into every new account; these never become erasable.
pub const RESERVED_CATEGORIES: [&str; 3] = [DEPOSIT, TRANSFER, WITHDRAWAL];

/// A named bucket of recorded income or spending.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub name: String,
    pub value: f64,
    pub erasable: bool,
}

impl Category {
    /// Creates a category at zero; erasability follows the reserved-name rule.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let erasable = !is_reserved_name(&name);
        Self {
            name,
            value: 0.0,
            erasable,
        }
    }
}

/// True for seeded category names that must survive deletion attempts.
pub fn is_reserved_name(name: &str) -> bool {
    RESERVED_CATEGORIES.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_names_are_not_erasable() {
        assert!(!Category::new(DEPOSIT).erasable);
        assert!(!Category::new(TRANSFER).erasable);
        assert!(!Category::new(WITHDRAWAL).erasable);
        assert!(Category::new("Bonus").erasable);
    }

    #[test]
    fn new_categories_start_at_zero() {
        assert_eq!(Category::new("Bonus").value, 0.0);
    }
}
