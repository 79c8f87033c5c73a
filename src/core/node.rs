// menu records as the caller supplies them
use std::fmt;

use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::{Deserialize, Serialize};

use crate::core::types::MenuId;

/// One record of the flat menu data.
///
/// The hierarchy is implicit: `parent_id` names another node's id, or the
/// root marker the menu is built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuNode {
    pub id: MenuId,
    #[serde(default)]
    pub parent_id: MenuId,
    #[serde(default, deserialize_with = "scalar_text")]
    pub title: String,
    #[serde(
        default,
        deserialize_with = "opt_scalar_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub icon_src: Option<String>,
    #[serde(
        default,
        deserialize_with = "opt_scalar_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub icon_class: Option<String>,
    #[serde(
        default,
        deserialize_with = "opt_scalar_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "order_num")]
    pub order_num: f64,
}

//unquoted TOON cells such as `2024` or `true` decode as numbers and bools
#[derive(Deserialize)]
#[serde(untagged)]
enum RawText {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl From<RawText> for String {
    fn from(raw: RawText) -> Self {
        match raw {
            RawText::Text(s) => s,
            RawText::Int(n) => n.to_string(),
            RawText::Float(f) => f.to_string(),
            RawText::Bool(b) => b.to_string(),
        }
    }
}

fn scalar_text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    RawText::deserialize(d).map(String::from)
}

fn opt_scalar_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<RawText>::deserialize(d)?.map(String::from))
}

struct OrderNumVisitor;

impl Visitor<'_> for OrderNumVisitor {
    type Value = f64;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a number for orderNum")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
        Ok(v)
    }

    //numeric strings sort by their value
    fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
        v.trim()
            .parse()
            .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
    }

    fn visit_unit<E: de::Error>(self) -> Result<f64, E> {
        Ok(0.0)
    }
}

fn order_num<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    d.deserialize_any(OrderNumVisitor)
}

/// Icon shown in front of the title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon<'a> {
    Image(&'a str),
    FontClass(&'a str),
    None,
}

impl MenuNode {
    pub fn new(
        id: impl Into<MenuId>,
        parent_id: impl Into<MenuId>,
        title: impl Into<String>,
        order_num: f64,
    ) -> Self {
        Self {
            id: id.into(),
            parent_id: parent_id.into(),
            title: title.into(),
            icon_src: None,
            icon_class: None,
            url: None,
            order_num,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_icon_src(mut self, src: impl Into<String>) -> Self {
        self.icon_src = Some(src.into());
        self
    }

    pub fn with_icon_class(mut self, class: impl Into<String>) -> Self {
        self.icon_class = Some(class.into());
        self
    }

    //an image wins over a font class, empty strings count as absent
    pub fn icon(&self) -> Icon<'_> {
        if let Some(src) = non_empty(&self.icon_src) {
            Icon::Image(src)
        } else if let Some(class) = non_empty(&self.icon_class) {
            Icon::FontClass(class)
        } else {
            Icon::None
        }
    }
}

fn non_empty(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_prefers_image_over_font_class() {
        let n = MenuNode::new(1, 0, "Users", 1.0)
            .with_icon_src("users.png")
            .with_icon_class("fa-user");
        assert_eq!(n.icon(), Icon::Image("users.png"));

        let n = MenuNode::new(1, 0, "Users", 1.0)
            .with_icon_src("")
            .with_icon_class("fa-user");
        assert_eq!(n.icon(), Icon::FontClass("fa-user"));

        assert_eq!(MenuNode::new(1, 0, "Users", 1.0).icon(), Icon::None);
    }

    #[test]
    fn deserializes_camel_case_records_with_defaults() {
        let n: MenuNode = serde_json::from_str(
            r#"{"id": 3, "parentId": 1, "title": "Roles", "iconClass": "fa-key", "orderNum": 2}"#,
        )
        .unwrap();

        assert_eq!(n.id, MenuId::from(3));
        assert_eq!(n.parent_id, MenuId::from(1));
        assert_eq!(n.icon_class.as_deref(), Some("fa-key"));
        assert_eq!(n.url, None);
        assert_eq!(n.order_num, 2.0);

        let bare: MenuNode = serde_json::from_str(r#"{"id": "x"}"#).unwrap();
        assert!(bare.parent_id.is_empty());
        assert_eq!(bare.order_num, 0.0);
    }

    #[test]
    fn scalar_text_fields_read_as_strings() {
        let n: MenuNode = serde_json::from_value(serde_json::json!({
            "id": 1,
            "title": 2024,
            "url": true,
            "iconClass": 1.5,
            "iconSrc": null,
            "orderNum": "3"
        }))
        .unwrap();

        assert_eq!(n.title, "2024");
        assert_eq!(n.url.as_deref(), Some("true"));
        assert_eq!(n.icon_class.as_deref(), Some("1.5"));
        assert_eq!(n.icon_src, None);
        assert_eq!(n.order_num, 3.0);
    }

    #[test]
    fn bad_order_num_names_the_field() {
        let err = serde_json::from_str::<MenuNode>(r#"{"id": 1, "orderNum": "x"}"#).unwrap_err();
        assert!(err.to_string().contains("orderNum"), "{err}");
    }
}
