use indexmap::IndexMap;
use percent_encoding::percent_decode_str;
use serde_json::Value;

use crate::domain::{FieldNaming, ProductTag, RosterProfile};
use crate::form::{RosterState, RowState};

use super::encode::{DELETE_ON, INITIAL_FORMS, TOTAL_FORMS};
use super::error::BindError;

#[derive(Debug, Default)]
struct BoundRow {
    address: String,
    tags: Vec<ProductTag>,
    persisted_id: Option<i64>,
    deleted: bool,
}

/// Reconstruct a roster from submission pairs, e.g. the fields a hosting
/// page pre-renders for persisted rows. Index gaps are preserved, unknown
/// keys and management fields other than the counter pair are ignored.
pub fn bind_pairs(
    profile: RosterProfile,
    pairs: &[(String, String)],
) -> Result<RosterState, BindError> {
    match profile.naming.clone() {
        FieldNaming::Indexed { prefix, .. } => bind_indexed(profile, &prefix, pairs),
        FieldNaming::Plain {
            address_key,
            tags_key,
        } => bind_plain(profile, &address_key, &tags_key, pairs),
    }
}

fn bind_indexed(
    profile: RosterProfile,
    prefix: &str,
    pairs: &[(String, String)],
) -> Result<RosterState, BindError> {
    let address_field = profile.naming.address_field().to_string();
    let mut total_forms: Option<usize> = None;
    let mut initial_forms: Option<usize> = None;
    let mut bound: IndexMap<usize, BoundRow> = IndexMap::new();

    for (key, value) in pairs {
        let Some(rest) = key.strip_prefix(prefix).and_then(|s| s.strip_prefix('-')) else {
            continue;
        };
        if rest == TOTAL_FORMS {
            total_forms = Some(parse_count(key, value)?);
            continue;
        }
        if rest == INITIAL_FORMS {
            initial_forms = Some(parse_count(key, value)?);
            continue;
        }
        let Some((index_part, field)) = rest.split_once('-') else {
            // Some other management field; the counter pair is all we track.
            continue;
        };
        let Ok(index) = index_part.parse::<usize>() else {
            continue;
        };
        let row = bound.entry(index).or_default();
        if field == address_field {
            row.address = value.clone();
        } else if field == "tags" {
            let tag = ProductTag::from_slug(value)
                .ok_or_else(|| BindError::new(key.clone(), format!("unknown tag '{value}'")))?;
            row.tags.push(tag);
        } else if field == "DELETE" {
            row.deleted = value == DELETE_ON;
        } else if field == "id" {
            if !value.is_empty() {
                let id = value.parse::<i64>().map_err(|_| {
                    BindError::new(key.clone(), format!("invalid persisted id '{value}'"))
                })?;
                row.persisted_id = Some(id);
            }
        }
    }

    bound.sort_keys();
    let max_index = bound.keys().next_back().map(|index| index + 1).unwrap_or(0);
    let persisted = bound
        .values()
        .filter(|row| row.persisted_id.is_some())
        .count();

    let vocabulary = profile.vocabulary.clone();
    let rows = bound
        .into_iter()
        .map(|(index, row)| {
            let mut state = RowState::seeded(
                index,
                vocabulary.clone(),
                row.address,
                &row.tags,
                row.persisted_id,
            );
            if row.deleted {
                state.mark_deleted();
            }
            state
        })
        .collect::<Vec<_>>();

    let total = total_forms.unwrap_or(max_index).max(max_index);
    let initial = initial_forms.unwrap_or(persisted);
    Ok(RosterState::from_bound_rows(profile, rows, total, initial))
}

fn bind_plain(
    profile: RosterProfile,
    address_key: &str,
    tags_key: &str,
    pairs: &[(String, String)],
) -> Result<RosterState, BindError> {
    let vocabulary = profile.vocabulary.clone();
    let mut rows: Vec<RowState> = Vec::new();

    for (key, value) in pairs {
        if key == address_key {
            let index = rows.len();
            rows.push(RowState::seeded(
                index,
                vocabulary.clone(),
                value.as_str(),
                &[],
                None,
            ));
        } else if key == tags_key {
            let row = rows
                .last_mut()
                .ok_or_else(|| BindError::new(key.clone(), "tags before any address"))?;
            for slug in value.split(',') {
                let slug = slug.trim();
                if slug.is_empty() {
                    continue;
                }
                let tag = ProductTag::from_slug(slug).ok_or_else(|| {
                    BindError::new(key.clone(), format!("unknown tag '{slug}'"))
                })?;
                row.tags.set_selected(tag, true);
            }
        }
    }

    let count = rows.len();
    Ok(RosterState::from_bound_rows(profile, rows, count, count))
}

/// Split and percent-decode an `application/x-www-form-urlencoded` body.
pub fn parse_urlencoded_body(body: &str) -> Result<Vec<(String, String)>, BindError> {
    let mut pairs = Vec::new();
    for segment in body.split('&') {
        if segment.is_empty() {
            continue;
        }
        let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
        pairs.push((form_unescape(key)?, form_unescape(value)?));
    }
    Ok(pairs)
}

/// Seed a roster from the JSON projection shape produced by
/// [`roster_json`](super::encode::roster_json).
pub fn seed_json(profile: RosterProfile, value: &Value) -> Result<RosterState, BindError> {
    let vocabulary = profile.vocabulary.clone();
    let row_values = value
        .get("rows")
        .and_then(Value::as_array)
        .ok_or_else(|| BindError::new("rows", "missing or not an array"))?;

    let mut rows = Vec::with_capacity(row_values.len());
    for (position, row_value) in row_values.iter().enumerate() {
        let index = row_value
            .get("index")
            .and_then(Value::as_u64)
            .map(|index| index as usize)
            .unwrap_or(position);
        let address = row_value
            .get("address")
            .and_then(Value::as_str)
            .ok_or_else(|| BindError::new(format!("rows[{position}].address"), "missing"))?;
        let mut tags = Vec::new();
        if let Some(items) = row_value.get("tags").and_then(Value::as_array) {
            for item in items {
                let slug = item.as_str().ok_or_else(|| {
                    BindError::new(format!("rows[{position}].tags"), "tag is not a string")
                })?;
                let tag = ProductTag::from_slug(slug).ok_or_else(|| {
                    BindError::new(format!("rows[{position}].tags"), format!("unknown tag '{slug}'"))
                })?;
                tags.push(tag);
            }
        }
        let persisted_id = row_value.get("id").and_then(Value::as_i64);
        let mut row = RowState::seeded(index, vocabulary.clone(), address, &tags, persisted_id);
        if row_value
            .get("deleted")
            .and_then(Value::as_bool)
            .unwrap_or(false)
        {
            row.mark_deleted();
        }
        rows.push(row);
    }

    rows.sort_by_key(|row| row.index);
    let max_index = rows.last().map(|row| row.index + 1).unwrap_or(0);
    let persisted = rows.iter().filter(|row| row.is_persisted()).count();
    let total = value
        .get("total_forms")
        .and_then(Value::as_u64)
        .map(|count| count as usize)
        .unwrap_or(max_index)
        .max(max_index);
    let initial = value
        .get("initial_forms")
        .and_then(Value::as_u64)
        .map(|count| count as usize)
        .unwrap_or(persisted);
    Ok(RosterState::from_bound_rows(profile, rows, total, initial))
}

fn parse_count(key: &str, value: &str) -> Result<usize, BindError> {
    value
        .parse::<usize>()
        .map_err(|_| BindError::new(key.to_string(), format!("invalid count '{value}'")))
}

fn form_unescape(raw: &str) -> Result<String, BindError> {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .map(|cow| cow.into_owned())
        .map_err(|_| BindError::new(raw.to_string(), "invalid percent-encoding"))
}
