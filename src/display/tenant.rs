//! Tenant display formatting
//!
//! Formats tenants for terminal output in table and ledger views.

use chrono::NaiveDate;

use crate::models::{Bill, Payment};
use crate::services::TenantSummary;

/// Format a list of tenants as a table
pub fn format_tenant_list(summaries: &[TenantSummary], symbol: &str) -> String {
    if summaries.is_empty() {
        return "No tenants found.".to_string();
    }

    let name_width = summaries
        .iter()
        .map(|s| s.tenant.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let property_width = summaries
        .iter()
        .map(|s| s.property_name.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<15}  {:<name_width$}  {:<property_width$}  {:>14}  {:>14}\n",
        "ID",
        "Name",
        "Property",
        "Rent",
        "Outstanding",
        name_width = name_width,
        property_width = property_width,
    ));
    output.push_str(&format!(
        "{:-<15}  {:-<name_width$}  {:-<property_width$}  {:->14}  {:->14}\n",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
        property_width = property_width,
    ));

    for summary in summaries {
        output.push_str(&format!(
            "{:<15}  {:<name_width$}  {:<property_width$}  {:>14}  {:>14}\n",
            summary.tenant.id.to_string(),
            summary.tenant.name,
            summary.property_name,
            summary.tenant.rent.format_with_symbol(symbol),
            summary.outstanding.format_with_symbol(symbol),
            name_width = name_width,
            property_width = property_width,
        ));
    }

    output
}

/// Format a single tenant's details and ledger
pub fn format_tenant_details(summary: &TenantSummary, symbol: &str, today: NaiveDate) -> String {
    let tenant = &summary.tenant;
    let mut output = String::new();

    output.push_str(&format!("Tenant: {}\n", tenant.name));
    output.push_str(&format!("  ID:           {}\n", tenant.id));
    output.push_str(&format!("  Property:     {}\n", summary.property_name));
    output.push_str(&format!("  Rent:         {}\n", tenant.rent.format_with_symbol(symbol)));
    if let Some(date) = tenant.move_in_date {
        output.push_str(&format!("  Moved in:     {}\n", date));
    }
    output.push_str(&format!(
        "  Outstanding:  {}\n",
        summary.outstanding.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Total paid:   {}\n",
        summary.total_paid.format_with_symbol(symbol)
    ));

    output.push('\n');
    output.push_str(&format_bill_list(&tenant.bills, symbol, today));
    output.push('\n');
    output.push_str(&format_payment_list(&tenant.payments, symbol));

    output
}

/// Format a tenant's bills
pub fn format_bill_list(bills: &[Bill], symbol: &str, today: NaiveDate) -> String {
    if bills.is_empty() {
        return "No bills.\n".to_string();
    }

    let mut output = String::from("Bills:\n");
    output.push_str(&format!(
        "  {:<15}  {:>14}  {:<10}  {}\n",
        "ID", "Amount", "Due", "Status"
    ));

    for bill in bills {
        let status = match bill.paid_on {
            Some(date) => format!("Paid {}", date),
            None if bill.is_overdue(today) => "OVERDUE".to_string(),
            None => "Unpaid".to_string(),
        };
        output.push_str(&format!(
            "  {:<15}  {:>14}  {:<10}  {}\n",
            bill.id.to_string(),
            bill.amount.format_with_symbol(symbol),
            bill.due_date.to_string(),
            status
        ));
    }

    output
}

/// Format a tenant's payments
pub fn format_payment_list(payments: &[Payment], symbol: &str) -> String {
    if payments.is_empty() {
        return "No payments.\n".to_string();
    }

    let mut output = String::from("Payments:\n");
    output.push_str(&format!(
        "  {:<15}  {:>14}  {:<10}  {:<7}  {}\n",
        "ID", "Amount", "Date", "Type", "Notes"
    ));

    for payment in payments {
        output.push_str(&format!(
            "  {:<15}  {:>14}  {:<10}  {:<7}  {}\n",
            payment.id.to_string(),
            payment.amount.format_with_symbol(symbol),
            payment.date.to_string(),
            payment.payment_type.to_string(),
            payment.notes.as_deref().unwrap_or("")
        ));
    }

    output
}
