//! Payment model
//!
//! Money received from a tenant, either rent or a utility contribution.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::EntityId;
use super::money::Money;

/// What a payment was for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    #[default]
    Rent,
    Utility,
}

impl PaymentType {
    /// Parse payment type from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "rent" => Some(Self::Rent),
            "utility" | "utilities" => Some(Self::Utility),
            _ => None,
        }
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rent => write!(f, "Rent"),
            Self::Utility => write!(f, "Utility"),
        }
    }
}

/// A payment received from a tenant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: EntityId,

    pub amount: Money,

    /// Date the money was received
    pub date: NaiveDate,

    #[serde(rename = "type")]
    pub payment_type: PaymentType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Payment {
    pub fn new(id: EntityId, amount: Money, date: NaiveDate, payment_type: PaymentType) -> Self {
        Self {
            id,
            amount,
            date,
            payment_type,
            notes: None,
        }
    }

    /// Attach a note; blank notes are dropped
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        let notes = notes.into();
        self.notes = if notes.trim().is_empty() {
            None
        } else {
            Some(notes)
        };
        self
    }
}
