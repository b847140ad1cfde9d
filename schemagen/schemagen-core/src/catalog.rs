//! Immutable lookup structure over all message and enum schemas.
//!
//! A [`Catalog`] is built once and borrowed read-only by every renderer.
//! [`Catalog::new`] only indexes schemas (rejecting duplicate names and names
//! shared by a message and an enum);
//! [`Catalog::validate`] checks the cross-schema invariants and
//! [`Catalog::from_json`] does both.

use std::collections::{BTreeMap, HashSet};

use serde::Deserialize;

use crate::{
    error::{CatalogError, RenderError},
    schema::{EnumSchema, FieldType, MessageSchema, SchemaKind, SchemaRef},
};

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    messages: BTreeMap<String, MessageSchema>,
    enums: BTreeMap<String, EnumSchema>,
}

#[derive(Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    enums: Vec<EnumSchema>,
    #[serde(default)]
    messages: Vec<MessageSchema>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum VisitState {
    InProgress,
    Done,
}

impl Catalog {
    /// Index schemas by name. Cross-schema consistency is not checked.
    pub fn new(
        messages: impl IntoIterator<Item = MessageSchema>,
        enums: impl IntoIterator<Item = EnumSchema>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::default();
        for message in messages {
            if catalog.messages.contains_key(&message.name) {
                return Err(CatalogError::DuplicateMessage { name: message.name });
            }
            catalog.messages.insert(message.name.clone(), message);
        }
        for enum_schema in enums {
            if catalog.enums.contains_key(&enum_schema.name) {
                return Err(CatalogError::DuplicateEnum {
                    name: enum_schema.name,
                });
            }
            if catalog.messages.contains_key(&enum_schema.name) {
                return Err(CatalogError::NameClash {
                    name: enum_schema.name,
                });
            }
            catalog.enums.insert(enum_schema.name.clone(), enum_schema);
        }
        Ok(catalog)
    }

    /// Parse a catalog document and validate it.
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument = serde_json::from_str(text)?;
        let catalog = Self::new(doc.messages, doc.enums)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn get_message(&self, name: &str) -> Option<&MessageSchema> {
        self.messages.get(name)
    }

    pub fn get_enum(&self, name: &str) -> Option<&EnumSchema> {
        self.enums.get(name)
    }

    /// Look up a message, failing with [`RenderError::UnknownMessage`].
    pub fn message(&self, name: &str) -> Result<&MessageSchema, RenderError> {
        self.get_message(name)
            .ok_or_else(|| RenderError::UnknownMessage {
                name: name.to_string(),
            })
    }

    /// Look up an enum, failing with [`RenderError::UnknownEnum`].
    pub fn enum_schema(&self, name: &str) -> Result<&EnumSchema, RenderError> {
        self.get_enum(name).ok_or_else(|| RenderError::UnknownEnum {
            name: name.to_string(),
        })
    }

    /// Find a message or enum by name.
    pub fn schema(&self, name: &str) -> Option<SchemaRef<'_>> {
        self.get_message(name)
            .map(SchemaRef::Message)
            .or_else(|| self.get_enum(name).map(SchemaRef::Enum))
    }

    /// Messages sorted by name.
    pub fn messages(&self) -> impl Iterator<Item = &MessageSchema> {
        self.messages.values()
    }

    /// Enums sorted by name.
    pub fn enums(&self) -> impl Iterator<Item = &EnumSchema> {
        self.enums.values()
    }

    /// All messages followed by all enums.
    pub fn schemas(&self) -> impl Iterator<Item = SchemaRef<'_>> {
        self.messages()
            .map(SchemaRef::Message)
            .chain(self.enums().map(SchemaRef::Enum))
    }

    /// Enums whose `parent_schema` is `parent`, sorted by name.
    pub fn enums_of<'a>(&'a self, parent: &'a str) -> impl Iterator<Item = &'a EnumSchema> {
        self.enums().filter(move |e| e.parent_schema == parent)
    }

    pub fn len(&self) -> usize {
        self.messages.len() + self.enums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty() && self.enums.is_empty()
    }

    /// Check every cross-schema invariant.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for enum_schema in self.enums() {
            validate_enum(enum_schema)?;
            if !self.messages.contains_key(&enum_schema.parent_schema) {
                return Err(CatalogError::UnknownParent {
                    enum_name: enum_schema.name.clone(),
                    parent: enum_schema.parent_schema.clone(),
                });
            }
        }

        for message in self.messages() {
            self.validate_message(message)?;
        }

        let mut states = BTreeMap::new();
        for message in self.messages() {
            let mut path = Vec::new();
            self.check_acyclic(message, &mut states, &mut path)?;
        }
        Ok(())
    }

    fn validate_message(&self, message: &MessageSchema) -> Result<(), CatalogError> {
        require_single_line(&message.name, &message.description)?;

        let mut seen = HashSet::new();
        for field in &message.fields {
            if !seen.insert(field.name.as_str()) {
                return Err(CatalogError::DuplicateField {
                    schema: message.name.clone(),
                    field: field.name.clone(),
                });
            }
            if field.description.contains("*/") {
                return Err(CatalogError::InvalidDescription {
                    name: format!("{}.{}", message.name, field.name),
                });
            }
            if field.array.and_then(|a| a.fixed_len()) == Some(0) {
                return Err(CatalogError::InvalidArrayLength {
                    schema: message.name.clone(),
                    field: field.name.clone(),
                });
            }

            let (kind, name, known) = match &field.ty {
                FieldType::Primitive(_) => continue,
                FieldType::Enum(name) => (SchemaKind::Enum, name, self.enums.contains_key(name)),
                FieldType::Nested(name) => (
                    SchemaKind::Message,
                    name,
                    self.messages.contains_key(name),
                ),
            };
            if !known {
                return Err(CatalogError::UnknownReference {
                    schema: message.name.clone(),
                    field: field.name.clone(),
                    kind,
                    name: name.clone(),
                });
            }
        }
        Ok(())
    }

    fn check_acyclic<'a>(
        &'a self,
        message: &'a MessageSchema,
        states: &mut BTreeMap<&'a str, VisitState>,
        path: &mut Vec<&'a str>,
    ) -> Result<(), CatalogError> {
        match states.get(message.name.as_str()) {
            Some(VisitState::Done) => return Ok(()),
            Some(VisitState::InProgress) => {
                let start = path
                    .iter()
                    .position(|name| *name == message.name)
                    .unwrap_or_default();
                let mut cycle: Vec<String> = path[start..].iter().map(|s| s.to_string()).collect();
                cycle.push(message.name.clone());
                return Err(CatalogError::Cycle { path: cycle });
            }
            None => {}
        }

        states.insert(&message.name, VisitState::InProgress);
        path.push(&message.name);
        for field in &message.fields {
            if let FieldType::Nested(name) = &field.ty
                && let Some(nested) = self.messages.get(name)
            {
                self.check_acyclic(nested, states, path)?;
            }
        }
        path.pop();
        states.insert(&message.name, VisitState::Done);
        Ok(())
    }
}

fn validate_enum(enum_schema: &EnumSchema) -> Result<(), CatalogError> {
    require_single_line(&enum_schema.name, &enum_schema.description)?;
    if enum_schema.values.is_empty() {
        return Err(CatalogError::EmptyEnum {
            name: enum_schema.name.clone(),
        });
    }

    let mut seen = HashSet::new();
    for value in &enum_schema.values {
        if !seen.insert(value.name.as_str()) {
            return Err(CatalogError::DuplicateEnumValue {
                enum_name: enum_schema.name.clone(),
                value: value.name.clone(),
            });
        }
        if let Some(description) = &value.description {
            require_single_line(&format!("{}.{}", enum_schema.name, value.name), description)?;
        }
    }
    Ok(())
}

fn require_single_line(name: &str, description: &str) -> Result<(), CatalogError> {
    if description.trim().contains('\n') {
        return Err(CatalogError::MultiLineDescription {
            name: name.to_string(),
        });
    }
    if description.contains("*/") {
        return Err(CatalogError::InvalidDescription {
            name: name.to_string(),
        });
    }
    Ok(())
}
