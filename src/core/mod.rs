pub mod click;
pub mod error;
pub mod hover;
pub mod menu;
pub mod node;
pub mod placement;
pub mod search;
pub mod tree;
pub mod types;
