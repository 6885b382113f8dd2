//! Property display formatting

use crate::models::Document;

/// Format the property list with tenant counts
pub fn format_property_list(document: &Document) -> String {
    if document.properties.is_empty() {
        return "No properties found.".to_string();
    }

    let name_width = document
        .properties
        .iter()
        .map(|p| p.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let address_width = document
        .properties
        .iter()
        .map(|p| p.address.chars().count())
        .max()
        .unwrap_or(7)
        .max(7);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<15}  {:<name_width$}  {:<address_width$}  {:>7}\n",
        "ID",
        "Name",
        "Address",
        "Tenants",
        name_width = name_width,
        address_width = address_width,
    ));
    output.push_str(&format!(
        "{:-<15}  {:-<name_width$}  {:-<address_width$}  {:->7}\n",
        "",
        "",
        "",
        "",
        name_width = name_width,
        address_width = address_width,
    ));

    for property in &document.properties {
        output.push_str(&format!(
            "{:<15}  {:<name_width$}  {:<address_width$}  {:>7}\n",
            property.id.to_string(),
            property.name,
            property.address,
            document.tenants_of(property.id).count(),
            name_width = name_width,
            address_width = address_width,
        ));
    }

    output
}
