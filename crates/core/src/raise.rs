use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a bulk raise turns a fraction into a new salary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RaiseFormula {
    /// `new = old * (1 + fraction)`; a 0.1 fraction is a 10% raise.
    #[default]
    Compounding,
    /// `new = old * fraction`. Historical behaviour kept for the legacy test fixture.
    Replacing,
}

impl RaiseFormula {
    /// Computes the salary that results from applying `fraction` to `salary`.
    pub fn apply(self, salary: f64, fraction: f64) -> f64 {
        match self {
            Self::Compounding => salary * (1.0 + fraction),
            Self::Replacing => salary * fraction,
        }
    }

    /// Returns the canonical name used in configuration and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Compounding => "compounding",
            Self::Replacing => "replacing",
        }
    }
}

/// Returned when a formula name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown raise formula: {0}")]
pub struct ParseRaiseFormulaError(pub String);

impl FromStr for RaiseFormula {
    type Err = ParseRaiseFormulaError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "compounding" => Ok(Self::Compounding),
            "replacing" => Ok(Self::Replacing),
            other => Err(ParseRaiseFormulaError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_compounding() {
        assert_eq!(RaiseFormula::default(), RaiseFormula::Compounding);
    }

    #[test]
    fn compounding_adds_the_fraction() {
        let salary = RaiseFormula::Compounding.apply(120_000.00, 0.1);
        assert!((salary - 132_000.00).abs() < 0.001);
    }

    #[test]
    fn replacing_multiplies_by_the_fraction() {
        let salary = RaiseFormula::Replacing.apply(100_000.00, 0.1);
        assert!((salary - 10_000.00).abs() < 0.001);
    }

    #[test]
    fn zero_and_negative_fractions_are_accepted() {
        assert_eq!(RaiseFormula::Compounding.apply(50.0, 0.0), 50.0);
        assert_eq!(RaiseFormula::Compounding.apply(100.0, -0.5), 50.0);
    }

    #[test]
    fn parses_canonical_names() {
        for formula in [RaiseFormula::Compounding, RaiseFormula::Replacing] {
            assert_eq!(formula.as_str().parse::<RaiseFormula>(), Ok(formula));
        }
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "additive".parse::<RaiseFormula>().expect_err("unknown name");
        assert_eq!(err.to_string(), "unknown raise formula: additive");
    }
}
