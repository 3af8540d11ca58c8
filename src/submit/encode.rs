use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use serde_json::{Value, json};

use crate::domain::{FieldNaming, ProductTag};
use crate::form::RosterState;

/// Checkbox convention: only a checked box submits, with this value.
pub const DELETE_ON: &str = "on";

pub const TOTAL_FORMS: &str = "TOTAL_FORMS";
pub const INITIAL_FORMS: &str = "INITIAL_FORMS";

/// Build the submission pairs the form backend consumes, in display order:
/// the management pair first (indexed naming only), then each row's fields.
/// Soft-deleted rows are included; that is how the backend learns about the
/// deletion. Detached rows no longer exist and leave only an index gap.
pub fn submission_pairs(roster: &RosterState) -> Vec<(String, String)> {
    let naming = &roster.profile().naming;
    let mut pairs = Vec::new();

    if let Some(field) = naming.management_field(TOTAL_FORMS) {
        pairs.push((field, roster.total_forms().to_string()));
    }
    if let Some(field) = naming.management_field(INITIAL_FORMS) {
        pairs.push((field, roster.initial_forms().to_string()));
    }

    for row in roster.rows() {
        match naming {
            FieldNaming::Indexed { address_field, .. } => {
                pairs.push((
                    naming.row_field(row.index, address_field.as_str()),
                    row.address.text().to_string(),
                ));
                for tag in row.tags.selected_tags() {
                    pairs.push((naming.row_field(row.index, "tags"), tag.slug().to_string()));
                }
                if row.deleted {
                    pairs.push((naming.row_field(row.index, "DELETE"), DELETE_ON.to_string()));
                }
                pairs.push((
                    naming.row_field(row.index, "id"),
                    row.persisted_id
                        .map(|id| id.to_string())
                        .unwrap_or_default(),
                ));
            }
            FieldNaming::Plain {
                address_key,
                tags_key,
            } => {
                pairs.push((address_key.clone(), row.address.text().to_string()));
                let tags = row
                    .tags
                    .selected_tags()
                    .into_iter()
                    .map(ProductTag::slug)
                    .collect::<Vec<_>>()
                    .join(",");
                pairs.push((tags_key.clone(), tags));
            }
        }
    }

    pairs
}

/// `application/x-www-form-urlencoded` rendering of the submission pairs.
pub fn urlencoded_body(roster: &RosterState) -> String {
    submission_pairs(roster)
        .into_iter()
        .map(|(key, value)| format!("{}={}", form_escape(&key), form_escape(&value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// JSON projection of the roster, used for inspection and as the CLI's seed
/// file format.
pub fn roster_json(roster: &RosterState) -> Value {
    let rows = roster
        .rows()
        .iter()
        .map(|row| {
            json!({
                "index": row.index,
                "address": row.address.text(),
                "tags": row
                    .tags
                    .selected_tags()
                    .into_iter()
                    .map(ProductTag::slug)
                    .collect::<Vec<_>>(),
                "id": row.persisted_id,
                "deleted": row.deleted,
            })
        })
        .collect::<Vec<_>>();
    json!({
        "total_forms": roster.total_forms(),
        "initial_forms": roster.initial_forms(),
        "rows": rows,
    })
}

fn form_escape(raw: &str) -> String {
    utf8_percent_encode(raw, FORM_COMPONENT).to_string()
}

// Unreserved characters of the form-urlencoded convention stay literal.
const FORM_COMPONENT: &percent_encoding::AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'*');
