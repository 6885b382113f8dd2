//! Dashboard display formatting

use crate::services::DashboardSummary;

/// Format the dashboard totals
pub fn format_dashboard(summary: &DashboardSummary, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str("Dashboard\n");
    output.push_str("=========\n");
    output.push_str(&format!("Total Tenants:     {}\n", summary.total_tenants));
    output.push_str(&format!("Total Properties:  {}\n", summary.total_properties));
    output.push_str(&format!(
        "Rent Expected:     {}\n",
        summary.rent_expected.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Outstanding Bills: {}",
        summary.outstanding.format_with_symbol(symbol)
    ));
    if summary.overdue_bills > 0 {
        output.push_str(&format!(" ({} overdue)", summary.overdue_bills));
    }
    output.push('\n');

    if summary.orphaned_tenants > 0 {
        output.push_str(&format!(
            "\nWarning: {} tenant(s) belong to a property that no longer exists\n",
            summary.orphaned_tenants
        ));
    }

    output
}
