//! Contact-number deduplication.

use std::collections::HashSet;

use tracing::debug;

use crate::models::lead::Lead;

/// Keep the first lead for each contact number, in input order.
///
/// Leads without a contact number are dropped.
pub fn dedup_by_contact(leads: Vec<Lead>) -> Vec<Lead> {
    let mut seen: HashSet<String> = HashSet::new();

    leads
        .into_iter()
        .filter(|lead| match &lead.contact_number {
            Some(number) if !number.is_empty() => {
                let first = seen.insert(number.clone());
                if !first {
                    debug!(
                        "Dropping duplicate contact {} from {}",
                        number,
                        lead.file.as_deref().unwrap_or("<text>")
                    );
                }
                first
            }
            _ => false,
        })
        .collect()
}
