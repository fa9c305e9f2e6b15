//! Configuration types for payroll.
//!
//! This module contains the strongly-typed pay scale structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Pay scale for managers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagerScale {
    /// The fixed monthly salary.
    pub monthly_salary: Decimal,
}

/// Pay scale for programmers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgrammerScale {
    /// The rate paid per hour worked.
    pub hourly_rate: Decimal,
}

/// Pay scale for salesmen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesmanScale {
    /// The base monthly salary paid regardless of sales.
    pub base_salary: Decimal,
    /// The share of sales paid as commission (0.05 is 5%).
    pub commission_rate: Decimal,
}

/// The constants behind the three salary formulas.
///
/// `PayScale::default()` holds the standard figures: a manager earns 15000
/// a month, a programmer 200 per hour, and a salesman 1800 plus 5% of sales.
/// Figures must lie between zero and [`max_scale_figure`].
///
/// # Example
///
/// ```
/// use monthly_payroll::config::PayScale;
/// use rust_decimal::Decimal;
///
/// let scale = PayScale::default();
/// assert_eq!(scale.manager.monthly_salary, Decimal::new(15000, 0));
/// assert_eq!(scale.salesman.commission_rate, Decimal::new(5, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayScale {
    /// Manager pay scale.
    pub manager: ManagerScale,
    /// Programmer pay scale.
    pub programmer: ProgrammerScale,
    /// Salesman pay scale.
    pub salesman: SalesmanScale,
}

impl Default for PayScale {
    fn default() -> Self {
        Self {
            manager: ManagerScale {
                monthly_salary: Decimal::new(15000, 0),
            },
            programmer: ProgrammerScale {
                hourly_rate: Decimal::new(200, 0),
            },
            salesman: SalesmanScale {
                base_salary: Decimal::new(1800, 0),
                commission_rate: Decimal::new(5, 2),
            },
        }
    }
}

/// The largest figure a pay scale may hold.
///
/// Together with [`max_amount`](crate::models::max_amount) this keeps every
/// salary formula exact and free of overflow.
pub fn max_scale_figure() -> Decimal {
    Decimal::new(1_000_000_000, 0)
}

impl PayScale {
    /// Describes the first figure that is negative or above
    /// [`max_scale_figure`], if any.
    pub(crate) fn out_of_range(&self) -> Option<String> {
        [
            ("manager.monthly_salary", self.manager.monthly_salary),
            ("programmer.hourly_rate", self.programmer.hourly_rate),
            ("salesman.base_salary", self.salesman.base_salary),
            ("salesman.commission_rate", self.salesman.commission_rate),
        ]
        .into_iter()
        .find_map(|(field, value)| {
            if value.is_sign_negative() && !value.is_zero() {
                Some(format!("{} must not be negative", field))
            } else if value > max_scale_figure() {
                Some(format!("{} must not exceed {}", field, max_scale_figure()))
            } else {
                None
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_scale_matches_standard_figures() {
        let scale = PayScale::default();
        assert_eq!(scale.manager.monthly_salary, dec("15000.0"));
        assert_eq!(scale.programmer.hourly_rate, dec("200.0"));
        assert_eq!(scale.salesman.base_salary, dec("1800.0"));
        assert_eq!(scale.salesman.commission_rate, dec("0.05"));
    }

    #[test]
    fn test_deserialize_scale_from_yaml() {
        let yaml = r#"
manager:
  monthly_salary: "16000.00"
programmer:
  hourly_rate: "210.50"
salesman:
  base_salary: "2000"
  commission_rate: "0.07"
"#;
        let scale: PayScale = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(scale.manager.monthly_salary, dec("16000.00"));
        assert_eq!(scale.programmer.hourly_rate, dec("210.50"));
        assert_eq!(scale.salesman.base_salary, dec("2000"));
        assert_eq!(scale.salesman.commission_rate, dec("0.07"));
    }

    #[test]
    fn test_missing_section_fails_to_deserialize() {
        let yaml = r#"
manager:
  monthly_salary: "16000.00"
"#;
        let result: Result<PayScale, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_default_scale_is_in_range() {
        assert_eq!(PayScale::default().out_of_range(), None);
    }

    #[test]
    fn test_negative_figure_is_named() {
        let mut scale = PayScale::default();
        scale.salesman.commission_rate = dec("-0.01");
        assert_eq!(
            scale.out_of_range().as_deref(),
            Some("salesman.commission_rate must not be negative")
        );
    }

    #[test]
    fn test_figure_above_max_is_named() {
        let mut scale = PayScale::default();
        scale.manager.monthly_salary = Decimal::MAX;
        assert!(
            scale
                .out_of_range()
                .unwrap()
                .starts_with("manager.monthly_salary must not exceed")
        );
    }

    #[test]
    fn test_zero_and_max_figures_are_allowed() {
        let mut scale = PayScale::default();
        scale.programmer.hourly_rate = Decimal::ZERO;
        scale.salesman.base_salary = max_scale_figure();
        assert_eq!(scale.out_of_range(), None);
    }
}
