// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

/// One of the three multi-value fields of an [`crate::AcknowledgmentRecord`]. An empty
/// dimension is unrestricted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScopeDimension {
    Branches,
    Devices,
    TestCases,
}

impl ScopeDimension {
    /// Display order used everywhere: branches, devices, test cases.
    pub const ALL: [ScopeDimension; 3] = [
        ScopeDimension::Branches,
        ScopeDimension::Devices,
        ScopeDimension::TestCases,
    ];

    /// Name of the JSON field that carries this dimension.
    #[must_use]
    pub fn field_name(self) -> &'static str {
        match self {
            ScopeDimension::Branches => "branches",
            ScopeDimension::Devices => "devices",
            ScopeDimension::TestCases => "testCaseNames",
        }
    }
}

impl Display for ScopeDimension {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        #[rustfmt::skip]
        let label = match self {
            ScopeDimension::Branches =>   "Branches",
            ScopeDimension::Devices =>    "Devices",
            ScopeDimension::TestCases =>  "Test Cases",
        };
        write!(f, "{label}")
    }
}
