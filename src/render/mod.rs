pub mod html;

use tracing::trace;

use crate::core::menu::FloatMenu;

/// Host element a menu is drawn into; owned by the caller.
pub trait MenuContainer {
    /// Drop whatever was rendered before.
    fn clear(&mut self);

    fn mount(&mut self, menu: &FloatMenu);
}

/// Container keeping the rendered markup as a string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlContainer {
    html: String,
}

impl HtmlContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn into_html(self) -> String {
        self.html
    }
}

impl MenuContainer for HtmlContainer {
    fn clear(&mut self) {
        self.html.clear();
    }

    fn mount(&mut self, menu: &FloatMenu) {
        self.html = html::render_menu(menu);
    }
}

impl FloatMenu {
    /// Clear `container` and draw the current tree into it.
    ///
    /// A missing container is not an error, nothing happens.
    pub fn render_into(&self, container: Option<&mut dyn MenuContainer>) {
        let Some(container) = container else {
            trace!("no menu container, skipping render");
            return;
        };
        container.clear();
        container.mount(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::menu::MenuOptions;
    use crate::core::node::MenuNode;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<&'static str>,
        mounted_items: usize,
    }

    impl MenuContainer for Recorder {
        fn clear(&mut self) {
            self.calls.push("clear");
        }

        fn mount(&mut self, menu: &FloatMenu) {
            self.calls.push("mount");
            self.mounted_items = menu.items().len();
        }
    }

    fn menu() -> FloatMenu {
        FloatMenu::new(MenuOptions::new(
            vec![MenuNode::new(1, 0, "Home", 1.0), MenuNode::new(2, 0, "Docs", 2.0)],
            0,
        ))
    }

    #[test]
    fn render_clears_before_mounting() {
        let mut rec = Recorder::default();

        menu().render_into(Some(&mut rec));

        assert_eq!(rec.calls, vec!["clear", "mount"]);
        assert_eq!(rec.mounted_items, 2);
    }

    #[test]
    fn missing_container_is_a_no_op() {
        menu().render_into(None);
    }

    #[test]
    fn re_render_after_search_replaces_markup() {
        let mut m = menu();
        let mut out = HtmlContainer::new();
        m.render_into(Some(&mut out));
        assert!(out.html().contains("Home"));

        m.search("Docs").unwrap();
        m.render_into(Some(&mut out));

        assert!(!out.html().contains("Home"));
        assert!(out.html().contains("Docs"));
    }
}
