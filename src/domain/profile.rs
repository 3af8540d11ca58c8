use super::tags::TagVocabulary;

/// What happens when a row is removed from the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovePolicy {
    /// Drop the row outright. Its index is never reused.
    Detach,
    /// Keep the row, flag it for deletion and hide it, so a persisted record
    /// can be reconciled downstream.
    MarkDeleted,
}

/// Wire name of a row's address field. Two of the shipped page variants
/// disagree on this and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressFieldName {
    Address,
    Email,
}

impl AddressFieldName {
    pub fn as_str(self) -> &'static str {
        match self {
            AddressFieldName::Address => "address",
            AddressFieldName::Email => "email",
        }
    }
}

/// How submission fields are named.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldNaming {
    /// `<prefix>-<index>-<field>` per row, plus the `<prefix>-TOTAL_FORMS` /
    /// `<prefix>-INITIAL_FORMS` management pair.
    Indexed {
        prefix: String,
        address_field: AddressFieldName,
    },
    /// One repeated address key and one free-text tags key per row. No
    /// management pair, no identity fields.
    Plain {
        address_key: String,
        tags_key: String,
    },
}

impl FieldNaming {
    pub fn indexed(prefix: impl Into<String>, address_field: AddressFieldName) -> Self {
        FieldNaming::Indexed {
            prefix: prefix.into(),
            address_field,
        }
    }

    pub fn plain(address_key: impl Into<String>, tags_key: impl Into<String>) -> Self {
        FieldNaming::Plain {
            address_key: address_key.into(),
            tags_key: tags_key.into(),
        }
    }

    pub fn is_indexed(&self) -> bool {
        matches!(self, FieldNaming::Indexed { .. })
    }

    /// Name of a per-row field under this scheme, e.g. `form-3-address`.
    pub fn row_field(&self, index: usize, field: &str) -> String {
        match self {
            FieldNaming::Indexed { prefix, .. } => format!("{prefix}-{index}-{field}"),
            FieldNaming::Plain {
                address_key,
                tags_key,
            } => {
                if field == "tags" {
                    tags_key.clone()
                } else {
                    address_key.clone()
                }
            }
        }
    }

    pub fn address_field(&self) -> &str {
        match self {
            FieldNaming::Indexed { address_field, .. } => address_field.as_str(),
            FieldNaming::Plain { address_key, .. } => address_key,
        }
    }

    pub fn management_field(&self, field: &str) -> Option<String> {
        match self {
            FieldNaming::Indexed { prefix, .. } => Some(format!("{prefix}-{field}")),
            FieldNaming::Plain { .. } => None,
        }
    }
}

/// Everything that distinguishes one roster variant from another: field
/// naming, tag vocabulary and removal semantics.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterProfile {
    pub naming: FieldNaming,
    pub vocabulary: TagVocabulary,
    pub remove_policy: RemovePolicy,
}

impl RosterProfile {
    /// Indexed naming with soft deletion; rows may carry persisted ids.
    /// The vocabulary includes the catch-all `any` option.
    pub fn soft_delete() -> Self {
        Self {
            naming: FieldNaming::indexed("form", AddressFieldName::Address),
            vocabulary: TagVocabulary::with_any(),
            remove_policy: RemovePolicy::MarkDeleted,
        }
    }

    /// Indexed naming (`email` address field) with hard removal.
    pub fn hard_delete() -> Self {
        Self {
            naming: FieldNaming::indexed("form", AddressFieldName::Email),
            vocabulary: TagVocabulary::standard(),
            remove_policy: RemovePolicy::Detach,
        }
    }

    /// Plain repeated keys (`email_list` / `tag_list`) with hard removal.
    pub fn plain_list() -> Self {
        Self {
            naming: FieldNaming::plain("email_list", "tag_list"),
            vocabulary: TagVocabulary::standard(),
            remove_policy: RemovePolicy::Detach,
        }
    }

    pub fn with_naming(mut self, naming: FieldNaming) -> Self {
        self.naming = naming;
        self
    }

    pub fn with_vocabulary(mut self, vocabulary: TagVocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    pub fn with_remove_policy(mut self, policy: RemovePolicy) -> Self {
        self.remove_policy = policy;
        self
    }

    /// Soft deletion only makes sense when rows can name a persisted record,
    /// which requires indexed fields.
    pub fn supports_identity(&self) -> bool {
        self.naming.is_indexed()
    }
}
