//! Bill model
//!
//! An amount a tenant owes, due on a date. Unpaid while `paid_on` is null.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::EntityId;
use super::money::Money;

/// A bill raised against a tenant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: EntityId,

    /// Amount owed
    pub amount: Money,

    pub due_date: NaiveDate,

    /// Date the bill was settled; written as `null` while unpaid
    #[serde(default)]
    pub paid_on: Option<NaiveDate>,
}

impl Bill {
    /// Create a new unpaid bill
    pub fn new(id: EntityId, amount: Money, due_date: NaiveDate) -> Self {
        Self {
            id,
            amount,
            due_date,
            paid_on: None,
        }
    }

    pub fn is_paid(&self) -> bool {
        self.paid_on.is_some()
    }

    /// Check whether the bill is unpaid past its due date
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.is_paid() && self.due_date < today
    }

    /// Record settlement of the bill
    pub fn mark_paid(&mut self, date: NaiveDate) {
        self.paid_on = Some(date);
    }
}
