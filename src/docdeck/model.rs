use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// HTTP method of a documented endpoint. Used for display styling only;
/// docdeck never performs requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    /// Free-text type label (e.g. "date", "string"); not enforced.
    #[serde(rename = "type")]
    pub kind: String,
    pub required: bool,
    pub description: String,
}

impl Parameter {
    pub fn new(name: &str, kind: &str, required: bool, description: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: kind.to_string(),
            required,
            description: description.to_string(),
        }
    }
}

/// One documented API operation within a section.
///
/// `examples` maps a language key (e.g. "python", "curl") to literal source
/// text. Coverage is uneven: not every endpoint defines every language.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Endpoint {
    pub method: Method,
    pub url: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub examples: BTreeMap<String, String>,
}

/// One navigable unit of documentation.
///
/// A section carries endpoints, free-form markdown `content`, or both.
/// The id doubles as the anchor key and never changes after catalog load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub endpoints: Vec<Endpoint>,
    #[serde(default)]
    pub content: Option<String>,
}

impl Section {
    pub fn has_body(&self) -> bool {
        !self.endpoints.is_empty() || self.content.is_some()
    }
}
