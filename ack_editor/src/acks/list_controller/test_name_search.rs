// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Affordance, Icon, NodeKind, ViewNode, ui_str};

/// The search field used to start a new acknowledgment. Suggestions come from the
/// test names given at mount, but the field accepts any name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TestNameSearch {
    all_test_names: Vec<String>,
    pub query: String,
    pub is_menu_open: bool,
}

impl TestNameSearch {
    #[must_use]
    pub fn new(all_test_names: Vec<String>) -> Self {
        Self {
            all_test_names,
            ..Default::default()
        }
    }

    pub fn set_query(&mut self, query: String) {
        self.is_menu_open = !query.is_empty();
        self.query = query;
    }

    /// Picking a suggestion fills the field and closes the menu.
    pub fn pick(&mut self, test_name: String) {
        self.query = test_name;
        self.is_menu_open = false;
    }

    /// Test names containing the query, ignoring case, in the order given at mount. An
    /// empty query suggests nothing.
    #[must_use]
    pub fn suggestions(&self) -> Vec<&str> {
        if self.query.is_empty() {
            return vec![];
        }
        let needle = self.query.to_lowercase();
        self.all_test_names
            .iter()
            .filter(|name| name.to_lowercase().contains(&needle))
            .map(String::as_str)
            .collect()
    }

    #[must_use]
    pub fn render(&self) -> ViewNode {
        let suggestions = self.suggestions();
        let menu = ViewNode::new(NodeKind::Suggestions)
            .class("card autocomplete-dropdown")
            .hidden(!self.is_menu_open || suggestions.is_empty())
            .children(suggestions.into_iter().map(|name| {
                ViewNode::new(NodeKind::Text)
                    .text(name)
                    .affordance(Affordance::PickSuggestion(name.into()))
            }));

        let input_field = ViewNode::new(NodeKind::Container)
            .class("input-field")
            .child(
                ViewNode::new(NodeKind::TextField)
                    .text(self.query.as_str())
                    .affordance(Affordance::SearchField),
            )
            .child(ViewNode::new(NodeKind::Label).text(ui_str::SEARCH_LABEL))
            .child(menu);

        ViewNode::new(NodeKind::Container)
            .class("search-row")
            .child(input_field)
            .child(
                ViewNode::new(NodeKind::Button)
                    .class("btn-floating")
                    .affordance(Affordance::AddFromSearch)
                    .child(ViewNode::new(NodeKind::Icon(Icon::Add))),
            )
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    fn search() -> TestNameSearch {
        TestNameSearch::new(vec![
            "CtsNetTestCases".into(),
            "VtsHalBluetooth".into(),
            "vts_kernel_net".into(),
        ])
    }

    #[test_case("", &[] ; "empty query")]
    #[test_case("net", &["CtsNetTestCases", "vts_kernel_net"] ; "source order")]
    #[test_case("VTS", &["VtsHalBluetooth", "vts_kernel_net"] ; "ignores case")]
    #[test_case("zzz", &[] ; "no match")]
    fn suggestions(query: &str, expected: &[&str]) {
        let mut search = search();
        search.set_query(query.into());
        assert_eq2!(search.suggestions(), expected.to_vec());
    }

    #[test]
    fn menu_closes_on_pick() {
        let mut search = search();
        search.set_query("net".into());
        let node = search.render();
        assert!(!node.find_by_class("card autocomplete-dropdown")[0].is_hidden);

        search.pick("vts_kernel_net".into());
        let node = search.render();
        assert!(node.find_by_class("card autocomplete-dropdown")[0].is_hidden);
        assert_eq2!(node.text_entries()[0].text, "vts_kernel_net");
    }
}
