// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize};

use crate::ScopeDimension;

/// Opaque identifier assigned by the backend on the first successful save. The client
/// never makes one up, it only echoes back what the backend returned.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct AckKey(String);

impl AckKey {
    #[must_use]
    pub fn new(arg: impl Into<String>) -> Self { Self(arg.into()) }

    #[must_use]
    pub fn as_str(&self) -> &str { &self.0 }

    /// The save endpoint answers with the key as its whole response body. Some servers
    /// write it as a JSON string, others as plain text, so surrounding whitespace and
    /// one pair of double quotes are stripped. Returns [None] for an empty body.
    #[must_use]
    pub fn try_from_response_body(body: &str) -> Option<Self> {
        let trimmed = body.trim();
        let unquoted = trimmed
            .strip_prefix('"')
            .and_then(|it| it.strip_suffix('"'))
            .unwrap_or(trimmed);
        if unquoted.is_empty() {
            None
        } else {
            Some(Self::new(unquoted))
        }
    }
}

impl Display for AckKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.0) }
}

impl From<&str> for AckKey {
    fn from(value: &str) -> Self { Self::new(value) }
}

/// The persisted entity. A record without a [`key`](Self::key) is a draft.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AcknowledgmentRecord {
    #[serde(default)]
    pub key: Option<AckKey>,
    pub test_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub branches: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub devices: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub test_case_names: Vec<String>,
    #[serde(default)]
    pub note: Option<String>,
}

/// Older dashboard payloads send `null` instead of `[]` for unrestricted dimensions.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl AcknowledgmentRecord {
    /// New draft for `test_name`, unrestricted in every dimension.
    #[must_use]
    pub fn new_draft(test_name: impl Into<String>) -> Self {
        Self {
            test_name: test_name.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn is_draft(&self) -> bool { self.key.is_none() }

    #[must_use]
    pub fn values(&self, dimension: ScopeDimension) -> &[String] {
        match dimension {
            ScopeDimension::Branches => &self.branches,
            ScopeDimension::Devices => &self.devices,
            ScopeDimension::TestCases => &self.test_case_names,
        }
    }

    pub fn values_mut(&mut self, dimension: ScopeDimension) -> &mut Vec<String> {
        match dimension {
            ScopeDimension::Branches => &mut self.branches,
            ScopeDimension::Devices => &mut self.devices,
            ScopeDimension::TestCases => &mut self.test_case_names,
        }
    }

    #[must_use]
    pub fn note_or_empty(&self) -> &str { self.note.as_deref().unwrap_or_default() }

    /// Sorts every dimension lexicographically and drops duplicates, so that two records
    /// with the same scope encode to the same bytes.
    #[must_use]
    pub fn into_canonical(mut self) -> Self {
        for dimension in ScopeDimension::ALL {
            let values = self.values_mut(dimension);
            values.sort();
            values.dedup();
        }
        self
    }

    #[must_use]
    pub fn with_key(mut self, key: AckKey) -> Self {
        self.key = Some(key);
        self
    }
}
