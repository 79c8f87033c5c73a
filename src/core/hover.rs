// hover highlighting and submenu placement state
use std::collections::{HashMap, HashSet};

use tracing::trace;

use crate::core::error::MenuError;
use crate::core::menu::FloatMenu;
use crate::core::placement::{SubmenuRect, Viewport, choose_placement};
use crate::core::tree::{MenuItem, find_item};
use crate::core::types::{MenuId, Placement};

/// Presentation state driven by pointer hover.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HoverState {
    //items under the pointer ("on")
    on: HashSet<MenuId>,
    //branch anchors whose submenu holds a hovered item ("selected"), counted per hovered child
    selected: HashMap<MenuId, usize>,
    //placement of each open submenu, keyed by the item owning it
    placements: HashMap<MenuId, Placement>,
}

impl HoverState {
    pub fn is_on(&self, id: &MenuId) -> bool {
        self.on.contains(id)
    }

    pub fn is_selected(&self, id: &MenuId) -> bool {
        self.selected.contains_key(id)
    }

    pub fn placement(&self, id: &MenuId) -> Option<Placement> {
        self.placements.get(id).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.on.is_empty() && self.selected.is_empty() && self.placements.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.on.clear();
        self.selected.clear();
        self.placements.clear();
    }
}

fn collect_subtree_ids(item: &MenuItem, out: &mut Vec<MenuId>) {
    out.push(item.id().clone());
    for child in &item.children {
        collect_subtree_ids(child, out);
    }
}

impl FloatMenu {
    /// Pointer entered item `id`.
    ///
    /// `submenu` is the measured box of the item's child list, when the host
    /// could measure one. Returns the placement chosen for it, if any.
    pub fn hover_enter(
        &mut self,
        id: &MenuId,
        submenu: Option<SubmenuRect>,
        viewport: Viewport,
    ) -> Result<Option<Placement>, MenuError> {
        let (item, parent) =
            find_item(&self.items, id).ok_or_else(|| MenuError::NodeNotFound(id.clone()))?;

        let has_submenu = !item.children.is_empty();
        let parent_id = parent.map(|p| p.id().clone());

        if self.hover.on.insert(id.clone()) {
            if let Some(pid) = parent_id {
                *self.hover.selected.entry(pid).or_insert(0) += 1;
            }
        }

        //a submenu starts at the top and only flips once measured
        let placement = if has_submenu {
            let p = submenu.map_or(Placement::Top, |rect| choose_placement(rect, viewport));
            self.hover.placements.insert(id.clone(), p);
            Some(p)
        } else {
            None
        };

        trace!(id = %id, ?placement, "menu hover enter");
        Ok(placement)
    }

    /// Pointer left item `id`: drop its highlight and every placement below it.
    pub fn hover_exit(&mut self, id: &MenuId) -> Result<(), MenuError> {
        let (item, parent) =
            find_item(&self.items, id).ok_or_else(|| MenuError::NodeNotFound(id.clone()))?;

        let mut subtree = Vec::new();
        collect_subtree_ids(item, &mut subtree);
        let parent_id = parent.map(|p| p.id().clone());

        for sid in &subtree {
            self.hover.placements.remove(sid);
        }

        if self.hover.on.remove(id) {
            if let Some(pid) = parent_id {
                if let Some(count) = self.hover.selected.get_mut(&pid) {
                    *count -= 1;
                    if *count == 0 {
                        self.hover.selected.remove(&pid);
                    }
                }
            }
        }

        trace!(id = %id, "menu hover exit");
        Ok(())
    }
}
