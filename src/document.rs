//! OpenAPI document model.
//!
//! A deliberately small, read-only subset of OpenAPI 3.x: only the parts the
//! style rules look at are modelled, everything else is ignored while
//! deserializing. Maps keep document order so violations come out in the
//! order a reader sees the source.

use std::fmt;
use std::path::Path;

use indexmap::IndexMap;
use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

use crate::error::{OasError, Result};

/// Root of a parsed specification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenApi {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openapi: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<Info>,
    #[serde(default)]
    pub servers: Vec<Server>,
    /// Path items keyed by template; `x-` extension entries are dropped.
    #[serde(default, deserialize_with = "deserialize_paths")]
    pub paths: IndexMap<String, PathItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Components>,
}

impl OpenApi {
    /// Parse a YAML document. JSON is valid YAML, so this accepts both.
    pub fn from_yaml_str(raw: &str) -> Result<Self> {
        serde_yaml::from_str(raw).map_err(|err| OasError::Parse(format!("yaml: {err}")))
    }

    /// Parse a JSON document.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|err| OasError::Parse(format!("json: {err}")))
    }

    /// Load a document from disk; `.json` files use the JSON parser, anything
    /// else goes through YAML.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(OasError::NotFound(format!(
                "specification file {}",
                path.display()
            )));
        }

        let raw = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let parsed = if is_json {
            Self::from_json_str(&raw)
        } else {
            Self::from_yaml_str(&raw)
        };
        parsed.map_err(|err| match err {
            OasError::Parse(msg) => OasError::Parse(format!("{}: {msg}", path.display())),
            other => other,
        })
    }

    /// Named schemas under `components.schemas`, in document order.
    pub fn schemas(&self) -> impl Iterator<Item = (&str, &Schema)> {
        self.components
            .iter()
            .flat_map(|components| components.schemas.iter())
            .map(|(name, schema)| (name.as_str(), schema))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Info {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub variables: IndexMap<String, ServerVariable>,
}

impl Server {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_variable(mut self, name: impl Into<String>, default: impl Into<String>) -> Self {
        self.variables.insert(
            name.into(),
            ServerVariable {
                default: default.into(),
                ..ServerVariable::default()
            },
        );
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerVariable {
    #[serde(default)]
    pub default: String,
    #[serde(default, rename = "enum", skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// HTTP methods an OpenAPI path item can carry, in traversal order.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Put,
    Post,
    Delete,
    Options,
    Head,
    Patch,
    Trace,
}

impl HttpMethod {
    pub const ALL: [Self; 8] = [
        Self::Get,
        Self::Put,
        Self::Post,
        Self::Delete,
        Self::Options,
        Self::Head,
        Self::Patch,
        Self::Trace,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Put => "PUT",
            Self::Post => "POST",
            Self::Delete => "DELETE",
            Self::Options => "OPTIONS",
            Self::Head => "HEAD",
            Self::Patch => "PATCH",
            Self::Trace => "TRACE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Prefix of specification extension keys.
pub const EXTENSION_PREFIX: &str = "x-";

/// Deserialize the Paths object, skipping extension entries whatever their value.
fn deserialize_paths<'de, D>(
    deserializer: D,
) -> std::result::Result<IndexMap<String, PathItem>, D::Error>
where
    D: Deserializer<'de>,
{
    struct PathsVisitor;

    impl<'de> Visitor<'de> for PathsVisitor {
        type Value = IndexMap<String, PathItem>;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a map of path templates to path items")
        }

        fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut paths = IndexMap::with_capacity(map.size_hint().unwrap_or(0));

            while let Some(key) = map.next_key::<String>()? {
                if key.starts_with(EXTENSION_PREFIX) {
                    map.next_value::<IgnoredAny>()?;
                    continue;
                }
                let item = map.next_value::<PathItem>()?;
                if paths.insert(key.clone(), item).is_some() {
                    return Err(de::Error::custom(format!("duplicate path '{key}'")));
                }
            }

            Ok(paths)
        }

        fn visit_unit<E>(self) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(IndexMap::new())
        }
    }

    deserializer.deserialize_map(PathsVisitor)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub put: Option<Operation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete: Option<Operation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Operation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head: Option<Operation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch: Option<Operation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace: Option<Operation>,
}

impl PathItem {
    #[must_use]
    pub const fn operation(&self, method: HttpMethod) -> Option<&Operation> {
        match method {
            HttpMethod::Get => self.get.as_ref(),
            HttpMethod::Put => self.put.as_ref(),
            HttpMethod::Post => self.post.as_ref(),
            HttpMethod::Delete => self.delete.as_ref(),
            HttpMethod::Options => self.options.as_ref(),
            HttpMethod::Head => self.head.as_ref(),
            HttpMethod::Patch => self.patch.as_ref(),
            HttpMethod::Trace => self.trace.as_ref(),
        }
    }

    pub fn set_operation(&mut self, method: HttpMethod, operation: Operation) {
        let slot = match method {
            HttpMethod::Get => &mut self.get,
            HttpMethod::Put => &mut self.put,
            HttpMethod::Post => &mut self.post,
            HttpMethod::Delete => &mut self.delete,
            HttpMethod::Options => &mut self.options,
            HttpMethod::Head => &mut self.head,
            HttpMethod::Patch => &mut self.patch,
            HttpMethod::Trace => &mut self.trace,
        };
        *slot = Some(operation);
    }

    /// Declared operations in [`HttpMethod::ALL`] order.
    pub fn operations(&self) -> impl Iterator<Item = (HttpMethod, &Operation)> {
        HttpMethod::ALL
            .into_iter()
            .filter_map(|method| self.operation(method).map(|op| (method, op)))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Query,
    Header,
    Path,
    Cookie,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, rename = "in", skip_serializing_if = "Option::is_none")]
    pub location: Option<ParameterLocation>,
    #[serde(default, rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, location: ParameterLocation) -> Self {
        Self {
            name: Some(name.into()),
            location: Some(location),
            reference: None,
        }
    }

    pub fn reference(target: impl Into<String>) -> Self {
        Self {
            name: None,
            location: None,
            reference: Some(target.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Components {
    #[serde(default)]
    pub schemas: IndexMap<String, Schema>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(default, rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, Schema>,
}

impl Schema {
    #[must_use]
    pub const fn is_reference(&self) -> bool {
        self.reference.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PETSTORE: &str = r##"
openapi: 3.0.3
info:
  title: Petstore
  version: "1.0"
  license:
    name: MIT
servers:
  - url: "https://{region}.api.example.com"
    variables:
      region:
        default: us
        enum: [us, eu]
paths:
  /pets:
    post:
      operationId: createPet
    get:
      operationId: listPets
      tags: [pets]
      parameters:
        - name: limit
          in: query
        - $ref: "#/components/parameters/Trace"
      responses:
        "200":
          description: ok
  /pets/{petId}:
    delete:
      operationId: deletePet
components:
  schemas:
    Pet:
      type: object
      properties:
        name:
          type: string
          example: Rex
        owner:
          $ref: "#/components/schemas/Owner"
"##;

    #[test]
    fn test_parse_yaml_subset() {
        let doc = OpenApi::from_yaml_str(PETSTORE).unwrap();
        let info = doc.info.as_ref().unwrap();
        assert_eq!(info.title.as_deref(), Some("Petstore"));
        assert_eq!(info.license.as_ref().unwrap().name.as_deref(), Some("MIT"));
        assert!(info.contact.is_none());

        assert_eq!(doc.servers.len(), 1);
        let region = &doc.servers[0].variables["region"];
        assert_eq!(region.default, "us");
        assert_eq!(region.enum_values, vec!["us", "eu"]);
    }

    #[test]
    fn test_paths_keep_document_order() {
        let doc = OpenApi::from_yaml_str(PETSTORE).unwrap();
        let keys: Vec<&str> = doc.paths.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["/pets", "/pets/{petId}"]);
    }

    #[test]
    fn test_operations_follow_method_order() {
        let doc = OpenApi::from_yaml_str(PETSTORE).unwrap();
        let methods: Vec<HttpMethod> = doc.paths["/pets"].operations().map(|(m, _)| m).collect();
        // POST is declared first in the file but GET comes first in traversal.
        assert_eq!(methods, vec![HttpMethod::Get, HttpMethod::Post]);
    }

    #[test]
    fn test_parameters_and_references() {
        let doc = OpenApi::from_yaml_str(PETSTORE).unwrap();
        let get = doc.paths["/pets"].get.as_ref().unwrap();
        assert_eq!(get.parameters.len(), 2);
        assert_eq!(get.parameters[0].location, Some(ParameterLocation::Query));
        assert!(get.parameters[1].reference.is_some());
        assert!(get.parameters[1].name.is_none());
    }

    #[test]
    fn test_schema_properties() {
        let doc = OpenApi::from_yaml_str(PETSTORE).unwrap();
        let (name, pet) = doc.schemas().next().unwrap();
        assert_eq!(name, "Pet");
        assert_eq!(pet.properties["name"].example, Some(serde_json::json!("Rex")));
        assert!(pet.properties["owner"].is_reference());
    }

    #[test]
    fn test_path_extensions_are_dropped() {
        let doc = OpenApi::from_yaml_str(
            "info: {}\npaths:\n  x-internal: true\n  x-owner:\n    get:\n      operationId: hidden\n  /pets:\n    get:\n      operationId: listPets\n",
        )
        .unwrap();
        let keys: Vec<&str> = doc.paths.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["/pets"]);

        let doc = OpenApi::from_json_str(r#"{"info":{},"paths":{"x-internal":[1,2],"/a":{}}}"#).unwrap();
        assert_eq!(doc.paths.len(), 1);
        assert!(doc.paths.contains_key("/a"));
    }

    #[test]
    fn test_path_item_extensions_are_ignored() {
        let doc = OpenApi::from_yaml_str(
            "info: {}\npaths:\n  /a:\n    x-rate-limit: 10\n    get:\n      operationId: a\n",
        )
        .unwrap();
        assert_eq!(doc.paths["/a"].operations().count(), 1);
    }

    #[test]
    fn test_missing_info_still_parses() {
        let doc = OpenApi::from_yaml_str("openapi: 3.0.0\npaths: {}\n").unwrap();
        assert!(doc.info.is_none());
        assert!(doc.paths.is_empty());
    }

    #[test]
    fn test_json_input() {
        let doc = OpenApi::from_json_str(
            r#"{"openapi":"3.1.0","info":{"title":"t","version":"1"},"paths":{"/a":{"get":{"operationId":"a"}}}}"#,
        )
        .unwrap();
        assert_eq!(doc.paths.len(), 1);
    }

    #[test]
    fn test_unknown_parameter_location() {
        let doc = OpenApi::from_yaml_str(
            "paths:\n  /a:\n    get:\n      parameters:\n        - name: q\n          in: querystring\n",
        )
        .unwrap();
        let param = &doc.paths["/a"].get.as_ref().unwrap().parameters[0];
        assert_eq!(param.location, Some(ParameterLocation::Other));
    }

    #[test]
    fn test_malformed_yaml_is_parse_error() {
        let err = OpenApi::from_yaml_str("info: [unterminated").unwrap_err();
        assert!(matches!(err, OasError::Parse(_)));
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = OpenApi::from_path(Path::new("/no/such/openapi.yaml")).unwrap_err();
        assert!(matches!(err, OasError::NotFound(_)));
    }
}
