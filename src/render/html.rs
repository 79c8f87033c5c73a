// markup for a rendered menu
use std::fmt::Write as _;

use crate::core::hover::HoverState;
use crate::core::menu::FloatMenu;
use crate::core::node::Icon;
use crate::core::tree::MenuItem;

const BRANCH_HREF: &str = "javascript:void(0)";

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn class_attr(classes: &[&str]) -> String {
    let joined = classes
        .iter()
        .filter(|c| !c.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    if joined.is_empty() {
        String::new()
    } else {
        format!(" class=\"{}\"", escape(&joined))
    }
}

/// Render the whole menu: root list, header row, then every item.
pub fn render_menu(menu: &FloatMenu) -> String {
    let mut out = String::new();
    let root_level = format!("treeview-level-{}", menu.start_index());
    let _ = write!(
        out,
        "<ul{}><li class=\"header\">{}</li>",
        class_attr(&["menu-root", root_level.as_str()]),
        escape(menu.header())
    );
    for item in menu.items() {
        render_item(&mut out, item, menu.hover_state());
    }
    out.push_str("</ul>");
    out
}

fn render_item(out: &mut String, item: &MenuItem, hover: &HoverState) {
    let id = item.id();
    let node = &item.node;

    let li_classes = [
        "treeview",
        if item.is_leaf() { "direct-menu" } else { "" },
        if hover.is_on(id) { "on" } else { "" },
    ];
    let _ = write!(out, "<li{}>", class_attr(&li_classes));

    let icon = node.icon();
    let href = if item.is_leaf() {
        node.url.as_deref().filter(|u| !u.is_empty()).unwrap_or("#")
    } else {
        BRANCH_HREF
    };
    //only an explicitly empty url drops the item class
    let item_class = item.is_leaf() && node.url.as_deref() != Some("");
    let a_classes = [
        if item_class { "menu-item" } else { "" },
        if matches!(icon, Icon::None) { "no-icon" } else { "" },
        if hover.is_selected(id) { "selected" } else { "" },
    ];
    let _ = write!(
        out,
        "<a href=\"{}\" menuId=\"{}\"{}>",
        escape(href),
        escape(id.as_str()),
        class_attr(&a_classes)
    );

    match icon {
        Icon::Image(src) => {
            let _ = write!(out, "<img src=\"{}\" class=\"menu-icon\">", escape(src));
        }
        Icon::FontClass(class) => {
            let _ = write!(out, "<i class=\"fa {}\"></i>", escape(class));
        }
        Icon::None => {}
    }
    let _ = write!(out, "<span class=\"menu-text\">{}</span>", escape(&node.title));

    if !item.is_leaf() {
        out.push_str("<span class=\"arrow fold\"></span>");
    }
    out.push_str("</a>");

    if !item.children.is_empty() {
        let level = format!("treeview-level-{}", item.submenu_level());
        let side = hover.placement(id).map_or("", |p| p.class_name());
        let _ = write!(out, "<ul{}>", class_attr(&["treeview-menu", level.as_str(), side]));
        for child in &item.children {
            render_item(out, child, hover);
        }
        out.push_str("</ul>");
    }

    out.push_str("</li>");
}
