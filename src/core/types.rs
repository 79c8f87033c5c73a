use std::fmt;

use serde::{Deserialize, Serialize};

/// Parent id the search filter reparents flat-mode matches to.
pub const SEARCH_ROOT_ID: &str = "search-root";

/// Level of the outermost `<ul>` and of the items directly under the root.
pub const MENU_START_INDEX: usize = 1;

/// Caption of the header row when the options don't carry one.
pub const DEFAULT_HEADER: &str = "Main Menu";

/// Identifier of a menu node.
///
/// Menu data usually comes from JSON or TOON where ids are either numbers or
/// strings, so both forms are accepted and normalized to text: `1` and `"1"`
/// name the same node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawId", into = "String")]
pub struct MenuId(String);

impl MenuId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn search_root() -> Self {
        Self(SEARCH_ROOT_ID.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    //the empty id is the default root marker
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MenuId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for MenuId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

macro_rules! menu_id_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for MenuId {
            fn from(n: $t) -> Self {
                Self(n.to_string())
            }
        })*
    };
}

menu_id_from_int!(i32, i64, u32, u64, usize);

impl From<MenuId> for String {
    fn from(id: MenuId) -> Self {
        id.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<RawId> for MenuId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Int(n) => MenuId(n.to_string()),
            RawId::Float(f) => MenuId(f.to_string()),
            RawId::Text(s) => MenuId(s),
        }
    }
}

/// Whether a rendered item opens a submenu or is a direct entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Leaf,
    Branch,
}

impl ItemKind {
    pub fn is_leaf(self) -> bool {
        matches!(self, ItemKind::Leaf)
    }
}

/// Vertical side a submenu opens towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    Top,
    Bottom,
}

impl Placement {
    pub fn class_name(self) -> &'static str {
        match self {
            Placement::Top => "top",
            Placement::Bottom => "bottom",
        }
    }
}
