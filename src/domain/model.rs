use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty, validate_non_negative};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry of the loaded table. Built only through [`Contract::new`],
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    id: String,
    customer: String,
    day: NaiveDate,
    amount: Option<f64>,
}

impl Contract {
    pub fn new(id: &str, customer: &str, day: NaiveDate, amount: Option<f64>) -> Result<Self> {
        let id = id.trim().to_string();
        let customer = customer.trim().to_string();
        validate_non_empty("id", &id)?;
        validate_non_empty("customer", &customer)?;
        if let Some(amount) = amount {
            validate_non_negative("amount", amount)?;
        }
        Ok(Self {
            id,
            customer,
            day,
            amount,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn day(&self) -> NaiveDate {
        self.day
    }

    pub fn amount(&self) -> Option<f64> {
        self.amount
    }

    /// Cells in canonical column order: id, customer, ISO date, amount with
    /// two decimals (empty when absent).
    pub fn to_row(&self) -> [String; 4] {
        [
            self.id.clone(),
            self.customer.clone(),
            self.day.format("%Y-%m-%d").to_string(),
            match self.amount {
                Some(amount) => format!("{:.2}", amount),
                None => String::new(),
            },
        ]
    }
}

impl fmt::Display for Contract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = match self.amount {
            Some(amount) => format!("{:.0}", amount),
            None => String::new(),
        };
        write!(
            f,
            "{} | {} | {} | {}",
            self.id,
            self.customer,
            self.day.format("%Y-%m-%d"),
            amount
        )
    }
}
