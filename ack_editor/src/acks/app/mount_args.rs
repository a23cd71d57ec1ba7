// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};
use test_ack_schema::AcknowledgmentRecord;

/// The three mount time inputs, as the dashboard page embeds them. A page that leaves
/// out `readOnly` gets a read-only mount.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MountArgs {
    #[serde(default)]
    pub all_test_names: Vec<String>,
    #[serde(default)]
    pub existing_acknowledgments: Vec<AcknowledgmentRecord>,
    #[serde(default = "read_only_by_default")]
    pub read_only: bool,
}

fn read_only_by_default() -> bool { true }

impl Default for MountArgs {
    fn default() -> Self {
        Self {
            all_test_names: vec![],
            existing_acknowledgments: vec![],
            read_only: read_only_by_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn parse_page_inputs() {
        let json = r#"{
            "allTestNames": ["A", "B"],
            "existingAcknowledgments": [
                {"key": "k1", "testName": "A", "branches": ["main"], "note": null}
            ],
            "readOnly": true
        }"#;
        let args: MountArgs = serde_json::from_str(json).unwrap();
        assert_eq2!(args.all_test_names, vec!["A", "B"]);
        assert_eq2!(args.existing_acknowledgments.len(), 1);
        assert_eq2!(args.existing_acknowledgments[0].branches, vec!["main"]);
        assert!(args.read_only);
    }

    #[test]
    fn missing_fields_default_to_read_only_and_empty() {
        let args: MountArgs = serde_json::from_str("{}").unwrap();
        assert_eq2!(args, MountArgs::default());
        assert!(args.read_only);
    }
}
