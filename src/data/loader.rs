/*
Menu data inputs:

    *.toon  menu options or a bare node list in TOON
    *.json  the same shapes in JSON

An options document carries menuData, menuRootId, searchResultToTree and an
optional header. A bare node list is menuData alone, built from the empty root.
*/
use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::core::error::MenuError;
use crate::core::menu::MenuOptions;
use crate::core::node::MenuNode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Toon,
}

impl Format {
    pub fn from_path(path: &Path) -> Result<Self, MenuError> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Format::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toon") => Ok(Format::Toon),
            _ => Err(MenuError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

fn to_value(text: &str, format: Format) -> Result<Value, MenuError> {
    match format {
        Format::Json => Ok(serde_json::from_str(text)?),
        Format::Toon => {
            toon_format::decode_default(text).map_err(|e| MenuError::Toon(e.to_string()))
        }
    }
}

fn parse_records(records: Vec<Value>) -> Result<Vec<MenuNode>, MenuError> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            serde_json::from_value(record).map_err(|source| MenuError::Record { index, source })
        })
        .collect()
}

/// Parse menu options, accepting a bare node list as well.
pub fn parse_options(text: &str, format: Format) -> Result<MenuOptions, MenuError> {
    match to_value(text, format)? {
        Value::Array(records) => Ok(MenuOptions::new(parse_records(records)?, "")),
        Value::Object(mut doc) => {
            //records are decoded one by one so an error can name its index
            let records = doc.remove("menuData");
            let mut opts: MenuOptions = serde_json::from_value(Value::Object(doc))?;
            opts.menu_data = match records {
                Some(Value::Array(records)) => parse_records(records)?,
                Some(other) => serde_json::from_value(other)?,
                None => Vec::new(),
            };
            Ok(opts)
        }
        other => Ok(serde_json::from_value(other)?),
    }
}

pub fn parse_nodes(text: &str, format: Format) -> Result<Vec<MenuNode>, MenuError> {
    Ok(parse_options(text, format)?.menu_data)
}

pub fn load_options(path: impl AsRef<Path>) -> Result<MenuOptions, MenuError> {
    let path = path.as_ref();
    let format = Format::from_path(path)?;
    let text = fs::read_to_string(path).map_err(|source| MenuError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let opts = parse_options(&text, format)?;
    debug!(
        path = %path.display(),
        ?format,
        nodes = opts.menu_data.len(),
        root = %opts.menu_root_id,
        "menu data loaded"
    );
    Ok(opts)
}

/// Encode a node list as TOON, e.g. to save a search result.
pub fn encode_nodes_toon(nodes: &[MenuNode]) -> Result<String, MenuError> {
    let value = serde_json::to_value(nodes)?;
    toon_format::encode_default(&value).map_err(|e| MenuError::Toon(e.to_string()))
}
