//! Lead data model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Label reported when no platform keyword matches.
pub const UNKNOWN_SOURCE: &str = "Unknown";

/// One structured record extracted from one listing screenshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    /// Contact person, best-effort guess.
    pub name: Option<String>,

    /// Up to a few joined location fragments.
    pub location: Option<String>,

    /// Normalized flat size, e.g. "2BHK".
    pub flat_type: Option<String>,

    /// Budget as it appears in the listing, e.g. "₹15,000".
    pub budget: Option<String>,

    /// Numeric value of the budget.
    pub budget_amount: Option<Decimal>,

    /// Normalized 10-digit mobile number.
    pub contact_number: Option<String>,

    /// Listing platform label or "Unknown".
    pub source: String,

    /// Age of the listing in days.
    pub lead_age_days: Option<u32>,

    /// Which derivation produced `lead_age_days`.
    pub age_basis: Option<AgeBasis>,

    /// Originating file name.
    pub file: Option<String>,
}

impl Default for Lead {
    fn default() -> Self {
        Self {
            name: None,
            location: None,
            flat_type: None,
            budget: None,
            budget_amount: None,
            contact_number: None,
            source: UNKNOWN_SOURCE.to_string(),
            lead_age_days: None,
            age_basis: None,
            file: None,
        }
    }
}

impl Lead {
    /// A lead is actionable only when a contact number was found.
    pub fn is_actionable(&self) -> bool {
        self.contact_number.is_some()
    }

    /// Text value of a column, empty when the field is absent.
    pub fn cell(&self, column: Column) -> String {
        match column {
            Column::Name => self.name.clone().unwrap_or_default(),
            Column::Location => self.location.clone().unwrap_or_default(),
            Column::FlatType => self.flat_type.clone().unwrap_or_default(),
            Column::Budget => self.budget.clone().unwrap_or_default(),
            Column::ContactNumber => self.contact_number.clone().unwrap_or_default(),
            Column::Source => self.source.clone(),
            Column::LeadAgeDays => self
                .lead_age_days
                .map(|d| d.to_string())
                .unwrap_or_default(),
        }
    }
}

/// How the lead age was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeBasis {
    /// Relative phrase in the listing text ("2 days ago").
    PostedText,
    /// Capture date embedded in the file name.
    FileDate,
}

/// Spreadsheet column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    #[serde(rename = "Name")]
    Name,
    #[serde(rename = "Location")]
    Location,
    #[serde(rename = "Flat Type")]
    FlatType,
    #[serde(rename = "Budget")]
    Budget,
    #[serde(rename = "Contact Number")]
    ContactNumber,
    #[serde(rename = "Source")]
    Source,
    #[serde(rename = "Lead Age (days)")]
    LeadAgeDays,
}

impl Column {
    /// Every column in the default order.
    pub const ALL: [Column; 7] = [
        Column::Name,
        Column::Location,
        Column::FlatType,
        Column::Budget,
        Column::ContactNumber,
        Column::Source,
        Column::LeadAgeDays,
    ];

    /// Header text.
    pub fn header(&self) -> &'static str {
        match self {
            Column::Name => "Name",
            Column::Location => "Location",
            Column::FlatType => "Flat Type",
            Column::Budget => "Budget",
            Column::ContactNumber => "Contact Number",
            Column::Source => "Source",
            Column::LeadAgeDays => "Lead Age (days)",
        }
    }

    /// Parse a column from its header or a short alias ("flat_type", "age").
    pub fn from_str(s: &str) -> Option<Self> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();

        match key.as_str() {
            "name" => Some(Column::Name),
            "location" => Some(Column::Location),
            "flattype" | "flat" => Some(Column::FlatType),
            "budget" => Some(Column::Budget),
            "contactnumber" | "contact" | "phone" => Some(Column::ContactNumber),
            "source" => Some(Column::Source),
            "leadagedays" | "leadage" | "age" => Some(Column::LeadAgeDays),
            _ => None,
        }
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.header())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_from_str() {
        assert_eq!(Column::from_str("Flat Type"), Some(Column::FlatType));
        assert_eq!(Column::from_str("flat_type"), Some(Column::FlatType));
        assert_eq!(Column::from_str("Lead Age (days)"), Some(Column::LeadAgeDays));
        assert_eq!(Column::from_str("phone"), Some(Column::ContactNumber));
        assert_eq!(Column::from_str("rent"), None);
    }

    #[test]
    fn test_column_serde_uses_headers() {
        let json = serde_json::to_string(&Column::ALL).unwrap();
        assert_eq!(
            json,
            r#"["Name","Location","Flat Type","Budget","Contact Number","Source","Lead Age (days)"]"#
        );
    }

    #[test]
    fn test_absent_fields_render_empty() {
        let lead = Lead {
            contact_number: Some("9876543210".to_string()),
            ..Lead::default()
        };

        assert_eq!(lead.cell(Column::Name), "");
        assert_eq!(lead.cell(Column::LeadAgeDays), "");
        assert_eq!(lead.cell(Column::Source), "Unknown");
        assert_eq!(lead.cell(Column::ContactNumber), "9876543210");
    }
}
