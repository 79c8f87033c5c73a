// search filtering and reparenting
use std::collections::{HashMap, HashSet};

use regex::Regex;
use tracing::{debug, warn};

use crate::core::error::MenuError;
use crate::core::menu::FloatMenu;
use crate::core::node::MenuNode;
use crate::core::types::MenuId;

/// How search matches are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Every match reparented under the synthetic search root, one level deep.
    Flat,
    /// Matches plus all their ancestors, original hierarchy kept.
    Tree,
}

impl From<bool> for SearchMode {
    fn from(result_to_tree: bool) -> Self {
        if result_to_tree {
            SearchMode::Tree
        } else {
            SearchMode::Flat
        }
    }
}

/// Data set and root a search leaves the menu with.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub data: Vec<MenuNode>,
    pub root: MenuId,
}

pub fn compile_pattern(text: &str) -> Result<Regex, MenuError> {
    Regex::new(text).map_err(|e| MenuError::InvalidPattern {
        pattern: text.to_string(),
        reason: e.to_string(),
    })
}

/// Nodes of `data` whose title matches and which have no children of their own.
pub fn matching_leaves<'a>(data: &'a [MenuNode], pattern: &Regex) -> Vec<&'a MenuNode> {
    let parents: HashSet<&MenuId> = data.iter().map(|n| &n.parent_id).collect();
    data.iter()
        .filter(|n| !parents.contains(&n.id) && pattern.is_match(&n.title))
        .collect()
}

/// Every ancestor of `matches` found in `origin`, nearest first per chain.
///
/// Walks each `parent_id` chain iteratively. A node is collected once; a chain
/// stops at the first id that is unknown or already collected, so cyclic data
/// terminates.
pub fn collect_ancestors(origin: &[MenuNode], matches: &[MenuNode]) -> Vec<MenuNode> {
    let mut by_id: HashMap<&MenuId, &MenuNode> = HashMap::with_capacity(origin.len());
    for n in origin {
        //first record wins for duplicated ids
        by_id.entry(&n.id).or_insert(n);
    }

    let mut visited: HashSet<&MenuId> = matches.iter().map(|n| &n.id).collect();
    let mut walked_from: HashSet<&MenuId> = HashSet::new();
    let mut out = Vec::new();

    for m in matches {
        //siblings share the whole chain, walk it once
        if !walked_from.insert(&m.parent_id) {
            continue;
        }

        let mut cursor = &m.parent_id;
        while let Some(parent) = by_id.get(cursor) {
            if !visited.insert(&parent.id) {
                break;
            }
            out.push((*parent).clone());
            cursor = &parent.parent_id;
        }
    }
    out
}

/// Filter `origin` down to the nodes a search for `text` should show.
///
/// Empty text gives back the original data and root untouched.
pub fn filter_menu_data(
    origin: &[MenuNode],
    origin_root: &MenuId,
    text: &str,
    mode: SearchMode,
) -> Result<SearchResult, MenuError> {
    if text.is_empty() {
        return Ok(SearchResult {
            data: origin.to_vec(),
            root: origin_root.clone(),
        });
    }

    let pattern = compile_pattern(text)?;
    let matches = matching_leaves(origin, &pattern);

    let result = match mode {
        SearchMode::Flat => {
            let root = MenuId::search_root();
            let data = matches
                .into_iter()
                .map(|n| MenuNode {
                    parent_id: root.clone(),
                    ..n.clone()
                })
                .collect();
            SearchResult { data, root }
        }
        SearchMode::Tree => {
            let mut data: Vec<MenuNode> = matches.into_iter().cloned().collect();
            let ancestors = collect_ancestors(origin, &data);
            data.extend(ancestors);
            SearchResult {
                data,
                root: origin_root.clone(),
            }
        }
    };
    Ok(result)
}

impl FloatMenu {
    /// Filter the menu by `text` and render it again.
    ///
    /// The text is a regular expression tested against node titles. An empty
    /// text restores the full menu. On an invalid pattern nothing changes.
    pub fn search(&mut self, text: &str) -> Result<(), MenuError> {
        let mode = SearchMode::from(self.search_result_to_tree);
        let result = match filter_menu_data(&self.origin_data, &self.origin_root, text, mode) {
            Ok(r) => r,
            Err(e) => {
                warn!(pattern = text, error = %e, "menu search rejected");
                return Err(e);
            }
        };

        debug!(
            pattern = text,
            ?mode,
            matched = result.data.len(),
            root = %result.root,
            "menu search applied"
        );

        self.search_text = text.to_string();
        self.active_data = result.data;
        self.active_root = result.root;
        self.rebuild();
        Ok(())
    }

    pub fn clear_search(&mut self) {
        self.search_text.clear();
        self.active_data = self.origin_data.clone();
        self.active_root = self.origin_root.clone();
        self.rebuild();
    }
}
