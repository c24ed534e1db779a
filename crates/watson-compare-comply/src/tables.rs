//! Table structure returned by table extraction and element classification.

use serde::{Deserialize, Serialize};

use crate::elements::{Attribute, Location, TextSpan};

/// One table found in a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tables {
    pub location: Option<Location>,
    pub text: Option<String>,
    pub section_title: Option<TextSpan>,
    pub title: Option<TextSpan>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub table_headers: Vec<TableHeader>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub row_headers: Vec<HeaderCell>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub column_headers: Vec<HeaderCell>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub body_cells: Vec<BodyCell>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub contexts: Vec<TextSpan>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub key_value_pairs: Vec<KeyValuePair>,
}

/// Position of a cell in the table grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellSpan {
    pub row_index_begin: i64,
    pub row_index_end: i64,
    pub column_index_begin: i64,
    pub column_index_end: i64,
}

/// A header spanning the whole table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableHeader {
    pub cell_id: Option<String>,
    pub location: Option<Location>,
    pub text: Option<String>,
    #[serde(flatten)]
    pub span: CellSpan,
}

/// A row or column header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderCell {
    pub cell_id: Option<String>,
    pub location: Option<Location>,
    pub text: Option<String>,
    pub text_normalized: Option<String>,
    #[serde(flatten)]
    pub span: CellSpan,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub attributes: Vec<Attribute>,
}

/// A cell that is not a header, with the headers that apply to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyCell {
    pub cell_id: Option<String>,
    pub location: Option<Location>,
    pub text: Option<String>,
    #[serde(flatten)]
    pub span: CellSpan,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub row_header_ids: Vec<String>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub row_header_texts: Vec<String>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub row_header_texts_normalized: Vec<String>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub column_header_ids: Vec<String>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub column_header_texts: Vec<String>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub column_header_texts_normalized: Vec<String>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub attributes: Vec<Attribute>,
}

/// Key and values of a key-value pair found in a table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyValuePair {
    pub key: Option<CellText>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub value: Vec<CellText>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellText {
    pub cell_id: Option<String>,
    pub location: Option<Location>,
    pub text: Option<String>,
}
