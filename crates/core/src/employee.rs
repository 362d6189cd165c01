use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Mutable employee record identified by an immutable id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    id: String,
    #[serde(deserialize_with = "deserialize_trimmed")]
    name: String,
    salary: f64,
}

impl Employee {
    /// Creates a record with the name stripped of leading and trailing whitespace.
    ///
    /// Neither the id nor the salary are validated.
    pub fn new(id: impl Into<String>, name: impl AsRef<str>, salary: f64) -> Self {
        Self {
            id: id.into(),
            name: normalize_name(name.as_ref()),
            salary,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }

    /// Replaces the display name, applying the same trimming as construction.
    pub fn set_name(&mut self, name: impl AsRef<str>) {
        self.name = normalize_name(name.as_ref());
    }

    pub fn set_salary(&mut self, salary: f64) {
        self.salary = salary;
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

fn normalize_name(value: &str) -> String {
    value.trim().to_string()
}

fn deserialize_trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(normalize_name(&value))
}
