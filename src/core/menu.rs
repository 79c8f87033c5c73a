// the menu instance and its configuration
use serde::{Deserialize, Serialize};

use crate::core::click::OnClickMenu;
use crate::core::hover::HoverState;
use crate::core::node::MenuNode;
use crate::core::tree::MenuItem;
use crate::core::types::{DEFAULT_HEADER, MENU_START_INDEX, MenuId};

/// Caller supplied configuration of a menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuOptions {
    #[serde(default)]
    pub menu_data: Vec<MenuNode>,
    #[serde(default)]
    pub menu_root_id: MenuId,
    /// Show search results as a pruned tree instead of one flat level.
    #[serde(default)]
    pub search_result_to_tree: bool,
    #[serde(default = "default_header")]
    pub header: String,
}

fn default_header() -> String {
    DEFAULT_HEADER.to_string()
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self {
            menu_data: Vec::new(),
            menu_root_id: MenuId::default(),
            search_result_to_tree: false,
            header: default_header(),
        }
    }
}

impl MenuOptions {
    pub fn new(menu_data: Vec<MenuNode>, menu_root_id: impl Into<MenuId>) -> Self {
        Self {
            menu_data,
            menu_root_id: menu_root_id.into(),
            ..Self::default()
        }
    }

    pub fn search_result_to_tree(mut self, enabled: bool) -> Self {
        self.search_result_to_tree = enabled;
        self
    }

    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }
}

/// A floating nested menu.
///
/// Each instance owns its data, its active search state and its rendered
/// tree, so any number of menus can live side by side.
pub struct FloatMenu {
    //as configured, never modified
    pub(crate) origin_data: Vec<MenuNode>,
    pub(crate) origin_root: MenuId,

    //what the rendered tree is currently built from
    pub(crate) active_data: Vec<MenuNode>,
    pub(crate) active_root: MenuId,

    pub(crate) search_text: String,
    pub(crate) search_result_to_tree: bool,
    pub(crate) header: String,
    pub(crate) start_index: usize,

    pub(crate) items: Vec<MenuItem>,
    pub(crate) hover: HoverState,
    pub(crate) on_click: Option<Box<dyn OnClickMenu>>,
}

impl FloatMenu {
    pub fn new(options: MenuOptions) -> Self {
        let mut menu = Self {
            active_data: options.menu_data.clone(),
            active_root: options.menu_root_id.clone(),
            origin_data: options.menu_data,
            origin_root: options.menu_root_id,
            search_text: String::new(),
            search_result_to_tree: options.search_result_to_tree,
            header: options.header,
            start_index: MENU_START_INDEX,
            items: Vec::new(),
            hover: HoverState::default(),
            on_click: None,
        };
        menu.rebuild();
        menu
    }

    /// Attach the click callback, replacing any previous one.
    pub fn on_click(mut self, handler: impl OnClickMenu + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    pub fn set_on_click(&mut self, handler: impl OnClickMenu + 'static) {
        self.on_click = Some(Box::new(handler));
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn active_data(&self) -> &[MenuNode] {
        &self.active_data
    }

    pub fn active_root_id(&self) -> &MenuId {
        &self.active_root
    }

    pub fn origin_data(&self) -> &[MenuNode] {
        &self.origin_data
    }

    pub fn origin_root_id(&self) -> &MenuId {
        &self.origin_root
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn hover_state(&self) -> &HoverState {
        &self.hover
    }

    /// Level of the outermost list and of the items placed directly in it.
    pub fn start_index(&self) -> usize {
        self.start_index
    }
}

impl std::fmt::Debug for FloatMenu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FloatMenu")
            .field("active_root", &self.active_root)
            .field("active_nodes", &self.active_data.len())
            .field("search_text", &self.search_text)
            .field("search_result_to_tree", &self.search_result_to_tree)
            .field("has_on_click", &self.on_click.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_deserialize_with_widget_defaults() {
        let opts: MenuOptions = serde_json::from_str(
            r#"{"menuData": [{"id": 1, "parentId": 0, "title": "A", "orderNum": 1}], "menuRootId": 0}"#,
        )
        .unwrap();

        assert_eq!(opts.menu_data.len(), 1);
        assert_eq!(opts.menu_root_id, MenuId::from(0));
        assert!(!opts.search_result_to_tree);
        assert_eq!(opts.header, DEFAULT_HEADER);
    }

    #[test]
    fn new_menu_builds_from_configured_root() {
        let menu = FloatMenu::new(MenuOptions::new(
            vec![
                MenuNode::new(1, 0, "A", 2.0),
                MenuNode::new(2, 0, "B", 1.0),
            ],
            0,
        ));

        let titles: Vec<_> = menu.items().iter().map(|i| i.node.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "A"]);
        assert_eq!(menu.active_root_id(), &MenuId::from(0));
        assert_eq!(menu.items()[0].level, 1);
    }

    #[test]
    fn independent_instances_do_not_share_state() {
        let mut a = FloatMenu::new(MenuOptions::new(vec![MenuNode::new(1, 0, "Alpha", 1.0)], 0));
        let b = FloatMenu::new(MenuOptions::new(vec![MenuNode::new(1, 0, "Beta", 1.0)], 0));

        a.search("zzz").unwrap();

        assert!(a.items().is_empty());
        assert_eq!(b.items().len(), 1);
        assert_eq!(b.search_text(), "");
    }
}
