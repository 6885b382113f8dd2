//! Ledger service
//!
//! Bills and payments belong to exactly one tenant. Bills are appended and
//! can be marked paid; payments are appended and can be removed once the
//! user has confirmed.

use chrono::NaiveDate;

use crate::error::{RentlogError, RentlogResult};
use crate::models::{Bill, Document, EntityId, Money, Payment, PaymentType, Tenant};

/// Service for a tenant's bills and payments
pub struct LedgerService<'a> {
    document: &'a mut Document,
}

impl<'a> LedgerService<'a> {
    /// Create a new ledger service
    pub fn new(document: &'a mut Document) -> Self {
        Self { document }
    }

    fn next_id(&self) -> EntityId {
        self.document.id_generator().next_id()
    }

    fn tenant_mut(&mut self, tenant_id: EntityId) -> RentlogResult<&mut Tenant> {
        self.document
            .tenant_mut(tenant_id)
            .ok_or_else(|| RentlogError::tenant_not_found(tenant_id.to_string()))
    }

    /// Raise a bill against a tenant
    pub fn add_bill(
        &mut self,
        tenant_id: EntityId,
        amount: Money,
        due_date: NaiveDate,
    ) -> RentlogResult<Bill> {
        require_positive(amount, "Bill amount")?;

        let id = self.next_id();
        let tenant = self.tenant_mut(tenant_id)?;
        let bill = Bill::new(id, amount, due_date);
        tenant.bills.push(bill.clone());

        tracing::debug!(tenant = %tenant_id, bill = %id, "bill added");
        Ok(bill)
    }

    /// Record that a bill was paid
    pub fn mark_bill_paid(
        &mut self,
        tenant_id: EntityId,
        bill_id: EntityId,
        paid_on: NaiveDate,
    ) -> RentlogResult<Bill> {
        let tenant = self.tenant_mut(tenant_id)?;
        let bill = tenant
            .bill_mut(bill_id)
            .ok_or_else(|| RentlogError::bill_not_found(bill_id.to_string()))?;

        if let Some(date) = bill.paid_on {
            return Err(RentlogError::Validation(format!(
                "Bill {} was already paid on {}",
                bill_id, date
            )));
        }

        bill.mark_paid(paid_on);
        Ok(bill.clone())
    }

    /// Record a payment from a tenant
    pub fn add_payment(
        &mut self,
        tenant_id: EntityId,
        amount: Money,
        date: NaiveDate,
        payment_type: PaymentType,
        notes: Option<&str>,
    ) -> RentlogResult<Payment> {
        require_positive(amount, "Payment amount")?;

        let id = self.next_id();
        let tenant = self.tenant_mut(tenant_id)?;
        let mut payment = Payment::new(id, amount, date, payment_type);
        if let Some(notes) = notes {
            payment = payment.with_notes(notes);
        }
        tenant.payments.push(payment.clone());

        tracing::debug!(tenant = %tenant_id, payment = %id, "payment added");
        Ok(payment)
    }

    /// Remove a payment the user has confirmed should go
    pub fn remove_payment(
        &mut self,
        tenant_id: EntityId,
        payment_id: EntityId,
    ) -> RentlogResult<Payment> {
        let removed = self
            .tenant_mut(tenant_id)?
            .remove_payment(payment_id)
            .ok_or_else(|| RentlogError::payment_not_found(payment_id.to_string()))?;

        tracing::debug!(tenant = %tenant_id, payment = %payment_id, "payment removed");
        Ok(removed)
    }

    /// Get a tenant's bills
    pub fn bills(&self, tenant_id: EntityId) -> RentlogResult<&[Bill]> {
        self.document
            .tenant(tenant_id)
            .map(|t| t.bills.as_slice())
            .ok_or_else(|| RentlogError::tenant_not_found(tenant_id.to_string()))
    }

    /// Get a tenant's payments
    pub fn payments(&self, tenant_id: EntityId) -> RentlogResult<&[Payment]> {
        self.document
            .tenant(tenant_id)
            .map(|t| t.payments.as_slice())
            .ok_or_else(|| RentlogError::tenant_not_found(tenant_id.to_string()))
    }
}

fn require_positive(amount: Money, what: &str) -> RentlogResult<()> {
    if amount.is_positive() {
        Ok(())
    } else {
        Err(RentlogError::Validation(format!(
            "{} must be greater than zero",
            what
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::TenantService;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn doc_with_tenant() -> (Document, EntityId) {
        let mut doc = Document::starter();
        let property_id = doc.properties[0].id;
        let tenant = TenantService::new(&mut doc)
            .create(property_id, "Asha", Money::from_units(5000), Some(date("2024-01-01")))
            .unwrap();
        (doc, tenant.id)
    }

    #[test]
    fn test_add_and_pay_bill() {
        let (mut doc, tenant_id) = doc_with_tenant();
        let mut ledger = LedgerService::new(&mut doc);

        let bill = ledger
            .add_bill(tenant_id, Money::from_units(750), date("2024-02-10"))
            .unwrap();
        assert!(!bill.is_paid());

        let paid = ledger
            .mark_bill_paid(tenant_id, bill.id, date("2024-02-08"))
            .unwrap();
        assert_eq!(paid.paid_on, Some(date("2024-02-08")));

        let again = ledger.mark_bill_paid(tenant_id, bill.id, date("2024-02-09"));
        assert!(again.unwrap_err().is_validation());
        assert_eq!(ledger.bills(tenant_id).unwrap()[0].paid_on, Some(date("2024-02-08")));
    }

    #[test]
    fn test_add_and_remove_payment() {
        let (mut doc, tenant_id) = doc_with_tenant();
        let mut ledger = LedgerService::new(&mut doc);

        let payment = ledger
            .add_payment(
                tenant_id,
                Money::from_units(5000),
                date("2024-02-01"),
                PaymentType::Rent,
                Some("February rent"),
            )
            .unwrap();
        assert_eq!(ledger.payments(tenant_id).unwrap().len(), 1);

        let removed = ledger.remove_payment(tenant_id, payment.id).unwrap();
        assert_eq!(removed, payment);
        assert!(ledger.payments(tenant_id).unwrap().is_empty());
        assert!(ledger
            .remove_payment(tenant_id, payment.id)
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_amounts_must_be_positive() {
        let (mut doc, tenant_id) = doc_with_tenant();
        let mut ledger = LedgerService::new(&mut doc);

        assert!(ledger
            .add_bill(tenant_id, Money::zero(), date("2024-02-10"))
            .unwrap_err()
            .is_validation());
        assert!(ledger
            .add_payment(tenant_id, Money::from_cents(-1), date("2024-02-10"), PaymentType::Utility, None)
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn test_unknown_tenant() {
        let (mut doc, _) = doc_with_tenant();
        let mut ledger = LedgerService::new(&mut doc);

        assert!(ledger
            .add_bill(EntityId::from_raw(-1), Money::from_units(1), date("2024-02-10"))
            .unwrap_err()
            .is_not_found());
        assert!(ledger.bills(EntityId::from_raw(-1)).is_err());
    }

    #[test]
    fn test_ledger_ids_do_not_collide() {
        let (mut doc, tenant_id) = doc_with_tenant();
        let mut ledger = LedgerService::new(&mut doc);

        let bill = ledger
            .add_bill(tenant_id, Money::from_units(1), date("2024-02-10"))
            .unwrap();
        let payment = ledger
            .add_payment(tenant_id, Money::from_units(1), date("2024-02-10"), PaymentType::Rent, None)
            .unwrap();

        assert!(tenant_id < bill.id);
        assert!(bill.id < payment.id);
    }
}
