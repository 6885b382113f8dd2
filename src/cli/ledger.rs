//! Bill and payment CLI commands
//!
//! Both work on one tenant's ledger. Tenants are named by name or ID; bills
//! and payments by the ID shown in `bill list` / `payment list`.

use clap::Subcommand;

use super::shell::{parse_date_arg, parse_money_arg, today, Shell};
use super::tenant::tenant_id;
use crate::display::{format_bill_list, format_payment_list};
use crate::error::{RentlogError, RentlogResult};
use crate::models::{EntityId, Payment, PaymentType};
use crate::services::LedgerService;

/// Bill subcommands
#[derive(Subcommand)]
pub enum BillCommands {
    /// Raise a bill against a tenant
    Add {
        /// Tenant name or ID
        tenant: String,
        /// Amount (e.g., "750" or "750.50")
        amount: String,
        /// Due date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        due: Option<String>,
    },
    /// Mark a bill as paid
    Pay {
        /// Tenant name or ID
        tenant: String,
        /// Bill ID
        bill: EntityId,
        /// Date paid (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List a tenant's bills
    List {
        /// Tenant name or ID
        tenant: String,
    },
}

/// Payment subcommands
#[derive(Subcommand)]
pub enum PaymentCommands {
    /// Record a payment from a tenant
    Add {
        /// Tenant name or ID
        tenant: String,
        /// Amount (e.g., "5000" or "5000.00")
        amount: String,
        /// Payment type (rent, utility)
        #[arg(short = 't', long = "type", default_value = "rent")]
        payment_type: String,
        /// Payment date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Notes
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// Remove a payment
    Remove {
        /// Tenant name or ID
        tenant: String,
        /// Payment ID
        payment: EntityId,
        /// Confirm the removal
        #[arg(long)]
        yes: bool,
    },
    /// List a tenant's payments
    List {
        /// Tenant name or ID
        tenant: String,
    },
}

/// Handle a bill command
pub fn handle_bill_command(shell: &mut Shell, cmd: BillCommands) -> RentlogResult<()> {
    match cmd {
        BillCommands::Add {
            tenant,
            amount,
            due,
        } => {
            let amount = parse_money_arg(&amount)?;
            let due = parse_date_arg(due.as_deref())?;

            let added = shell.edit(|doc| {
                let id = tenant_id(doc, &tenant)?;
                LedgerService::new(doc).add_bill(id, amount, due)
            })?;

            if let Some(bill) = added {
                println!("Added bill: {} due {}", shell.money(bill.amount), bill.due_date);
                println!("  ID: {}", bill.id);
            }
        }

        BillCommands::Pay { tenant, bill, date } => {
            let paid_on = parse_date_arg(date.as_deref())?;

            let paid = shell.edit(|doc| {
                let id = tenant_id(doc, &tenant)?;
                LedgerService::new(doc).mark_bill_paid(id, bill, paid_on)
            })?;

            if let Some(bill) = paid {
                println!(
                    "Marked bill {} ({}) as paid on {}",
                    bill.id,
                    shell.money(bill.amount),
                    paid_on
                );
            }
        }

        BillCommands::List { tenant } => {
            let symbol = shell.symbol().to_string();
            let listed = shell.view(|doc| -> RentlogResult<String> {
                let id = tenant_id(doc, &tenant)?;
                let bills = doc.tenant(id).map(|t| t.bills.as_slice()).unwrap_or_default();
                Ok(format_bill_list(bills, &symbol, today()))
            })?;

            if let Some(output) = listed.transpose()? {
                print!("{}", output);
            }
        }
    }

    Ok(())
}

/// Handle a payment command
pub fn handle_payment_command(shell: &mut Shell, cmd: PaymentCommands) -> RentlogResult<()> {
    match cmd {
        PaymentCommands::Add {
            tenant,
            amount,
            payment_type,
            date,
            notes,
        } => {
            let amount = parse_money_arg(&amount)?;
            let payment_type = PaymentType::parse(&payment_type).ok_or_else(|| {
                RentlogError::Validation(format!(
                    "Invalid payment type: '{}'. Valid types: rent, utility",
                    payment_type
                ))
            })?;
            let date = parse_date_arg(date.as_deref())?;

            let added = shell.edit(|doc| {
                let id = tenant_id(doc, &tenant)?;
                LedgerService::new(doc).add_payment(id, amount, date, payment_type, notes.as_deref())
            })?;

            if let Some(payment) = added {
                println!(
                    "Recorded {} payment: {} on {}",
                    payment.payment_type,
                    shell.money(payment.amount),
                    payment.date
                );
                println!("  ID: {}", payment.id);
            }
        }

        PaymentCommands::Remove {
            tenant,
            payment,
            yes,
        } => {
            if !yes {
                let found = shell.view(|doc| -> RentlogResult<Payment> {
                    let id = tenant_id(doc, &tenant)?;
                    doc.tenant(id)
                        .and_then(|t| t.payment(payment))
                        .cloned()
                        .ok_or_else(|| RentlogError::payment_not_found(payment.to_string()))
                })?;

                if let Some(found) = found.transpose()? {
                    println!(
                        "Payment {}: {} {} on {}",
                        found.id,
                        found.payment_type,
                        shell.money(found.amount),
                        found.date
                    );
                    println!("To remove it, run again with --yes:");
                    println!("  rentlog payment remove {} {} --yes", tenant, payment);
                }
                return Ok(());
            }

            let removed = shell.edit(|doc| {
                let id = tenant_id(doc, &tenant)?;
                LedgerService::new(doc).remove_payment(id, payment)
            })?;

            if let Some(removed) = removed {
                println!(
                    "Removed payment {} ({})",
                    removed.id,
                    shell.money(removed.amount)
                );
            }
        }

        PaymentCommands::List { tenant } => {
            let symbol = shell.symbol().to_string();
            let listed = shell.view(|doc| -> RentlogResult<String> {
                let id = tenant_id(doc, &tenant)?;
                let payments = doc.tenant(id).map(|t| t.payments.as_slice()).unwrap_or_default();
                Ok(format_payment_list(payments, &symbol))
            })?;

            if let Some(output) = listed.transpose()? {
                print!("{}", output);
            }
        }
    }

    Ok(())
}
