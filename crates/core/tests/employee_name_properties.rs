//! Property-based tests for employee name normalization.

use kata_core::{Company, Employee};
use proptest::prelude::*;

/// Names that start and end with a letter and may contain interior spaces.
fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z]([A-Za-z ]{0,20}[A-Za-z])?"
}

fn padding_strategy() -> impl Strategy<Value = String> {
    "[ \t\r\n]{0,6}"
}

proptest! {
    #[test]
    fn construction_strips_surrounding_whitespace(
        name in name_strategy(),
        leading in padding_strategy(),
        trailing in padding_strategy(),
    ) {
        let employee = Employee::new("001", format!("{leading}{name}{trailing}"), 1.0);
        prop_assert_eq!(employee.name(), name.as_str());
    }

    #[test]
    fn rename_through_lookup_strips_surrounding_whitespace(
        name in name_strategy(),
        leading in padding_strategy(),
        trailing in padding_strategy(),
    ) {
        let mut company = Company::new("Megadyne, Inc.");
        company.add_employee(Employee::new("123", "Dave", 100_000.00));

        company
            .find_employee_by_id_mut("123")
            .expect("dave exists")
            .set_name(format!("{leading}{name}{trailing}"));

        let renamed = company.find_employee_by_id("123").expect("dave exists");
        prop_assert_eq!(renamed.name(), name.as_str());
    }

    #[test]
    fn already_trimmed_names_are_unchanged(name in name_strategy()) {
        let employee = Employee::new("001", &name, 1.0);
        prop_assert_eq!(employee.name(), name.as_str());
    }
}
