// tree assembly over the flat node list
use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::core::menu::FloatMenu;
use crate::core::node::MenuNode;
use crate::core::types::{ItemKind, MenuId};

/// One rendered entry of the menu tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItem {
    pub node: MenuNode,
    pub kind: ItemKind,
    /// 1-based depth below the menu root.
    pub level: usize,
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    pub fn is_leaf(&self) -> bool {
        self.kind.is_leaf()
    }

    pub fn id(&self) -> &MenuId {
        &self.node.id
    }

    /// Class level of the `<ul>` holding this item's children.
    pub fn submenu_level(&self) -> usize {
        self.level + 1
    }
}

/// Direct children of `parent`, sorted ascending by `order_num`.
///
/// The sort is stable, so ties keep their position in `data`.
pub fn children_of<'a>(data: &'a [MenuNode], parent: &MenuId) -> Vec<&'a MenuNode> {
    let mut out: Vec<&MenuNode> = data.iter().filter(|n| &n.parent_id == parent).collect();
    out.sort_by(|a, b| a.order_num.total_cmp(&b.order_num));
    out
}

/// Build the nested item tree hanging below `root`.
///
/// `level` is the depth assigned to the first generation. A node whose subtree
/// comes out empty is a leaf, everything else is a branch.
pub fn build_items(data: &[MenuNode], root: &MenuId, level: usize) -> Vec<MenuItem> {
    let mut path = HashSet::new();
    path.insert(root.clone());
    build_level(data, root, level, &mut path)
}

fn build_level(
    data: &[MenuNode],
    parent: &MenuId,
    level: usize,
    path: &mut HashSet<MenuId>,
) -> Vec<MenuItem> {
    let siblings = children_of(data, parent);
    trace!(parent = %parent, level, count = siblings.len(), "building menu level");

    let mut items = Vec::with_capacity(siblings.len());
    for node in siblings {
        //a node already on the path means the data loops back on itself
        if !path.insert(node.id.clone()) {
            warn!(id = %node.id, parent = %parent, "skipping menu node that closes a cycle");
            continue;
        }

        let children = build_level(data, &node.id, level + 1, path);
        path.remove(&node.id);

        let kind = if children.is_empty() {
            ItemKind::Leaf
        } else {
            ItemKind::Branch
        };

        items.push(MenuItem {
            node: node.clone(),
            kind,
            level,
            children,
        });
    }
    items
}

/// Depth-first lookup of a rendered item together with its parent item.
pub fn find_item<'a>(
    items: &'a [MenuItem],
    id: &MenuId,
) -> Option<(&'a MenuItem, Option<&'a MenuItem>)> {
    fn walk<'a>(
        items: &'a [MenuItem],
        parent: Option<&'a MenuItem>,
        id: &MenuId,
    ) -> Option<(&'a MenuItem, Option<&'a MenuItem>)> {
        for item in items {
            if item.id() == id {
                return Some((item, parent));
            }
            if let Some(found) = walk(&item.children, Some(item), id) {
                return Some(found);
            }
        }
        None
    }
    walk(items, None, id)
}

impl FloatMenu {
    /// Throw away the rendered tree and assemble it again from the active data.
    pub fn rebuild(&mut self) {
        self.hover.clear();
        self.items = build_items(&self.active_data, &self.active_root, self.start_index);
        debug!(
            root = %self.active_root,
            nodes = self.active_data.len(),
            top_level = self.items.len(),
            "menu rebuilt"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn mk_node(id: i32, parent: i32, title: &str, order: f64) -> MenuNode {
        MenuNode::new(id, parent, title, order)
    }

    fn titles(items: &[MenuItem]) -> Vec<&str> {
        items.iter().map(|i| i.node.title.as_str()).collect()
    }

    #[test]
    fn siblings_render_by_ascending_order_num() {
        let data = vec![mk_node(1, 0, "A", 2.0), mk_node(2, 0, "B", 1.0)];

        let items = build_items(&data, &MenuId::from(0), 1);

        assert_eq!(titles(&items), vec!["B", "A"]);
    }

    #[test]
    fn ties_keep_original_order() {
        let data = vec![
            mk_node(1, 0, "first", 1.0),
            mk_node(2, 0, "second", 1.0),
            mk_node(3, 0, "zero", 0.0),
        ];

        let items = build_items(&data, &MenuId::from(0), 1);

        assert_eq!(titles(&items), vec!["zero", "first", "second"]);
    }

    #[test]
    fn classifies_leaves_and_branches_with_levels() {
        let data = vec![
            mk_node(1, 0, "System", 1.0),
            mk_node(2, 1, "Users", 1.0),
            mk_node(3, 2, "Create user", 1.0),
            mk_node(4, 0, "Help", 2.0),
        ];

        let items = build_items(&data, &MenuId::from(0), 1);

        assert_eq!(items.len(), 2);
        let system = &items[0];
        assert_eq!(system.kind, ItemKind::Branch);
        assert_eq!(system.level, 1);
        assert_eq!(system.submenu_level(), 2);

        let users = &system.children[0];
        assert_eq!(users.kind, ItemKind::Branch);
        assert_eq!(users.level, 2);

        let create = &users.children[0];
        assert_eq!(create.kind, ItemKind::Leaf);
        assert_eq!(create.level, 3);

        assert_eq!(items[1].kind, ItemKind::Leaf);
    }

    #[test]
    fn orphans_and_unknown_roots_render_nothing() {
        let data = vec![mk_node(1, 99, "orphan", 1.0)];

        assert!(build_items(&data, &MenuId::from(0), 1).is_empty());
        assert!(build_items(&[], &MenuId::from(0), 1).is_empty());
    }

    #[test]
    fn cyclic_data_terminates_with_partial_tree() {
        //1 -> 2 -> 3 -> 1 hanging below root 0 via 1
        let data = vec![
            mk_node(1, 0, "a", 1.0),
            mk_node(2, 1, "b", 1.0),
            mk_node(3, 2, "c", 1.0),
            mk_node(1, 3, "a again", 1.0),
        ];

        let items = build_items(&data, &MenuId::from(0), 1);

        assert_eq!(titles(&items), vec!["a"]);
        let c = &items[0].children[0].children[0];
        assert_eq!(c.node.title, "c");
        assert!(c.is_leaf());
    }

    #[test]
    fn find_item_reports_parent() {
        let data = vec![mk_node(1, 0, "root item", 1.0), mk_node(2, 1, "child", 1.0)];
        let items = build_items(&data, &MenuId::from(0), 1);

        let (child, parent) = find_item(&items, &MenuId::from(2)).unwrap();
        assert_eq!(child.node.title, "child");
        assert_eq!(parent.unwrap().node.title, "root item");

        let (top, parent) = find_item(&items, &MenuId::from(1)).unwrap();
        assert_eq!(top.level, 1);
        assert!(parent.is_none());

        assert!(find_item(&items, &MenuId::from(42)).is_none());
    }

    fn assert_sorted(items: &[MenuItem]) {
        for pair in items.windows(2) {
            assert!(pair[0].node.order_num <= pair[1].node.order_num);
        }
        for item in items {
            assert_sorted(&item.children);
        }
    }

    proptest! {
        #[test]
        fn every_level_is_sorted_by_order_num(
            raw in prop::collection::vec((0i32..6, -50i32..50), 0..40)
        ) {
            //node i+1 points at a parent in 0..6, so ids 1..6 can carry children
            let data: Vec<MenuNode> = raw
                .iter()
                .enumerate()
                .map(|(i, (parent, order))| {
                    MenuNode::new(i as i32 + 1, *parent, format!("n{i}"), f64::from(*order))
                })
                .collect();

            let items = build_items(&data, &MenuId::from(0), 1);
            assert_sorted(&items);
        }
    }
}
