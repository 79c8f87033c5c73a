// click dispatch for leaf and branch items
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::error::MenuError;
use crate::core::menu::FloatMenu;
use crate::core::node::MenuNode;
use crate::core::tree::find_item;
use crate::core::types::MenuId;

/// The host event that triggered a click.
///
/// Dispatch consumes it: the returned copy is marked default-prevented and
/// propagation-stopped so the host does not follow the anchor or bubble the
/// click into enclosing items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub x: f64,
    pub y: f64,
    pub default_prevented: bool,
    pub propagation_stopped: bool,
}

impl PointerEvent {
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }
}

/// Payload handed to the click callback.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuClick {
    /// `true` for leaves, `false` for items that open a submenu.
    pub direct: bool,
    /// 1-based depth of the clicked item.
    pub level: usize,
    pub data: MenuNode,
    pub original_event: PointerEvent,
}

/// Receiver of menu clicks.
pub trait OnClickMenu {
    fn on_click_menu(&mut self, click: &MenuClick);
}

impl<F> OnClickMenu for F
where
    F: FnMut(&MenuClick),
{
    fn on_click_menu(&mut self, click: &MenuClick) {
        self(click)
    }
}

impl FloatMenu {
    /// Dispatch a click on the rendered item `id`.
    ///
    /// The callback, when one is attached, sees the same payload that is
    /// returned.
    pub fn click(&mut self, id: &MenuId, event: PointerEvent) -> Result<MenuClick, MenuError> {
        let (item, _) =
            find_item(&self.items, id).ok_or_else(|| MenuError::NodeNotFound(id.clone()))?;

        let mut original_event = event;
        original_event.prevent_default();
        original_event.stop_propagation();

        let click = MenuClick {
            direct: item.is_leaf(),
            level: item.level,
            data: item.node.clone(),
            original_event,
        };
        debug!(id = %id, direct = click.direct, level = click.level, "menu item clicked");

        if let Some(handler) = self.on_click.as_mut() {
            handler.on_click_menu(&click);
        }
        Ok(click)
    }
}
