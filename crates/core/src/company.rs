use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, trace};

use crate::employee::Employee;
use crate::raise::RaiseFormula;

/// A named company owning an insertion-ordered roster of employees.
///
/// Employee ids are not checked for uniqueness. Lookups return the first
/// match in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    name: String,
    employees: Vec<Employee>,
}

impl Company {
    /// Creates a company with an empty roster. The name is stored verbatim.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            employees: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Appends an employee to the end of the roster.
    pub fn add_employee(&mut self, employee: Employee) {
        debug!(
            stage = "company",
            company = %self.name,
            employee_id = %employee.id(),
            headcount = self.employees.len() + 1,
            "employee added"
        );
        self.employees.push(employee);
    }

    pub fn number_of_employees(&self) -> usize {
        self.employees.len()
    }

    /// Returns the first employee whose id equals `id`, or `None` when nobody matches.
    pub fn find_employee_by_id(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|employee| employee.id() == id)
    }

    /// Mutable counterpart of [`Company::find_employee_by_id`].
    ///
    /// The returned reference points at the stored record, so changes made
    /// through it are seen by later lookups.
    pub fn find_employee_by_id_mut(&mut self, id: &str) -> Option<&mut Employee> {
        self.employees
            .iter_mut()
            .find(|employee| employee.id() == id)
    }

    /// Raises every salary by `fraction`, so `0.1` means ten percent.
    pub fn everybody_gets_raise_by(&mut self, fraction: f64) {
        self.everybody_gets_raise_with(fraction, RaiseFormula::default());
    }

    /// Applies `formula` with `fraction` to every employee in roster order.
    pub fn everybody_gets_raise_with(&mut self, fraction: f64, formula: RaiseFormula) {
        debug!(
            stage = "company",
            company = %self.name,
            fraction,
            formula = formula.as_str(),
            headcount = self.employees.len(),
            "applying raise"
        );
        for employee in &mut self.employees {
            let previous = employee.salary();
            let updated = formula.apply(previous, fraction);
            employee.set_salary(updated);
            trace!(
                stage = "company",
                employee_id = %employee.id(),
                previous,
                updated,
                "salary updated"
            );
        }
    }

    /// Iterates the roster in insertion order.
    pub fn employees(&self) -> impl Iterator<Item = &Employee> + '_ {
        self.employees.iter()
    }

    /// Returns a log-friendly view of the company. Salaries are left out.
    pub fn summary(&self) -> Value {
        json!({
            "name": self.name,
            "headcount": self.employees.len(),
            "employee_ids": self.employees.iter().map(Employee::id).collect::<Vec<_>>(),
        })
    }
}
