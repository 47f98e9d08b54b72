//! Response schemas in the dialect `generateContent` accepts under
//! `generationConfig.responseSchema`.
//!
//! Only the subset the service declares is modelled: objects, arrays and
//! strings, with `required` lists and an optional description. Properties keep
//! their insertion order and are echoed in `propertyOrdering`, which the model
//! honours when laying out its JSON.

use serde::ser::{Serialize, SerializeMap, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaType {
    Object,
    Array,
    String,
}

impl SchemaType {
    fn as_str(self) -> &'static str {
        match self {
            SchemaType::Object => "OBJECT",
            SchemaType::Array => "ARRAY",
            SchemaType::String => "STRING",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    kind: SchemaType,
    description: Option<String>,
    items: Option<Box<Schema>>,
    properties: Vec<(String, Schema)>,
    required: Vec<String>,
}

impl Schema {
    fn of(kind: SchemaType) -> Self {
        Self {
            kind,
            description: None,
            items: None,
            properties: Vec::new(),
            required: Vec::new(),
        }
    }

    pub fn string() -> Self {
        Self::of(SchemaType::String)
    }

    pub fn array(items: Schema) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::of(SchemaType::Array)
        }
    }

    pub fn string_array() -> Self {
        Self::array(Self::string())
    }

    pub fn object() -> Self {
        Self::of(SchemaType::Object)
    }

    /// Adds a required property. Re-adding a name replaces the earlier schema
    /// in place.
    pub fn field(mut self, name: &str, schema: Schema) -> Self {
        match self.properties.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = schema,
            None => self.properties.push((name.to_string(), schema)),
        }
        if !self.required.iter().any(|r| r == name) {
            self.required.push(name.to_string());
        }
        self
    }

    pub fn describe(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

#[cfg(test)]
impl Schema {
    pub fn kind(&self) -> SchemaType {
        self.kind
    }

    pub fn property(&self, name: &str) -> Option<&Schema> {
        self.properties
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, schema)| schema)
    }

    pub fn items(&self) -> Option<&Schema> {
        self.items.as_deref()
    }

    pub fn required(&self) -> &[String] {
        &self.required
    }
}

struct Properties<'a>(&'a [(String, Schema)]);

impl Serialize for Properties<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, schema) in self.0 {
            map.serialize_entry(name, schema)?;
        }
        map.end()
    }
}

impl Serialize for Schema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", self.kind.as_str())?;
        if let Some(description) = &self.description {
            map.serialize_entry("description", description)?;
        }
        if let Some(items) = &self.items {
            map.serialize_entry("items", items)?;
        }
        if !self.properties.is_empty() {
            let ordering: Vec<&str> = self.properties.iter().map(|(n, _)| n.as_str()).collect();
            map.serialize_entry("properties", &Properties(&self.properties))?;
            map.serialize_entry("propertyOrdering", &ordering)?;
        }
        if !self.required.is_empty() {
            map.serialize_entry("required", &self.required)?;
        }
        map.end()
    }
}
