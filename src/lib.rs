//! Floating nested navigation menu built from flat, parent-referencing data.
//!
//! ```
//! use float_menu::{FloatMenu, MenuClick, MenuId, MenuNode, MenuOptions, PointerEvent};
//!
//! let mut menu = FloatMenu::new(MenuOptions::new(
//!     vec![
//!         MenuNode::new(1, 0, "Reports", 2.0),
//!         MenuNode::new(2, 0, "Dashboard", 1.0).with_url("/dashboard"),
//!         MenuNode::new(3, 1, "Monthly", 1.0),
//!     ],
//!     0,
//! ))
//! .on_click(|c: &MenuClick| println!("{} direct={}", c.data.title, c.direct));
//!
//! assert_eq!(menu.items()[0].node.title, "Dashboard");
//!
//! let click = menu.click(&MenuId::from(1), PointerEvent::default()).unwrap();
//! assert!(!click.direct);
//!
//! menu.search("Month").unwrap();
//! assert_eq!(menu.items().len(), 1);
//! ```

pub mod core;
pub mod data;
pub mod logging;
pub mod render;

pub use crate::core::click::{MenuClick, OnClickMenu, PointerEvent};
pub use crate::core::error::MenuError;
pub use crate::core::hover::HoverState;
pub use crate::core::menu::{FloatMenu, MenuOptions};
pub use crate::core::node::{Icon, MenuNode};
pub use crate::core::placement::{SubmenuRect, Viewport, choose_placement};
pub use crate::core::search::{SearchMode, SearchResult, filter_menu_data};
pub use crate::core::tree::{MenuItem, build_items};
pub use crate::core::types::{ItemKind, MenuId, Placement, SEARCH_ROOT_ID};
pub use crate::render::{HtmlContainer, MenuContainer};
