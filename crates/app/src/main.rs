mod telemetry;

use tracing::{info, warn};

use kata_core::{Company, Employee, RaiseFormula};
use kata_util::{load_env_file, AppConfig};

const ORIGINAL_NAME: &str = "Megadyne, Inc.";
const RENAMED_TO: &str = "Cybertron Unlimited, Ltd.";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    load_env_file();
    let config = AppConfig::from_env()?;

    telemetry::init_tracing(&config)?;

    let mut company = Company::new(ORIGINAL_NAME);
    company.add_employee(Employee::new("123", "Dave", 100_000.00));
    company.add_employee(Employee::new("456", " Alice", 120_000.00));
    company.add_employee(Employee::new("789", "Bob  ", 110_000.00));
    info!(stage = "app", company = %company.summary(), "roster assembled");

    if config.raise_formula == RaiseFormula::Replacing {
        warn!(stage = "app", "replacing formula overwrites salaries with the fraction itself");
    }
    company.everybody_gets_raise_with(config.raise_fraction, config.raise_formula);
    for employee in company.employees() {
        info!(
            stage = "app",
            employee = %employee,
            salary = employee.salary(),
            formula = config.raise_formula.as_str(),
            "salary after raise"
        );
    }

    company.set_name(RENAMED_TO);
    info!(stage = "app", from = ORIGINAL_NAME, to = %company.name(), "company renamed");

    Ok(())
}
