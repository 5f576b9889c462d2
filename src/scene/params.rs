use crate::foundation::error::{PathElem, ValidationError};
use serde::Serialize;

/// Kind of value a parameter accepts. Only free text exists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamKind {
    #[default]
    Text,
}

/// A named input the upstream author exposes, e.g. a prompt box.
///
/// Independent of the object graph: no [`crate::ContentObject`] refers to it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ParameterDescriptor {
    name: String,
    #[serde(rename = "type")]
    kind: ParamKind,
    placeholder: String,
}

impl ParameterDescriptor {
    /// Both `name` and `placeholder` must be non-empty.
    pub fn new(
        name: impl Into<String>,
        placeholder: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let placeholder = placeholder.into();
        if name.is_empty() {
            return Err(ValidationError::at(
                &[PathElem::Field("name")],
                "parameter name must be non-empty",
            ));
        }
        if placeholder.is_empty() {
            return Err(ValidationError::at(
                &[PathElem::Field("placeholder")],
                "parameter placeholder must be non-empty",
            ));
        }
        Ok(Self {
            name,
            kind: ParamKind::Text,
            placeholder,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ParamKind {
        self.kind
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }
}

/// Parameter document, serialized as `{"args": [...]}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ParameterSet {
    args: Vec<ParameterDescriptor>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The common case: a single text parameter.
    pub fn single(
        name: impl Into<String>,
        placeholder: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            args: vec![ParameterDescriptor::new(name, placeholder)?],
        })
    }

    pub fn push(&mut self, descriptor: ParameterDescriptor) {
        self.args.push(descriptor);
    }

    pub fn args(&self) -> &[ParameterDescriptor] {
        &self.args
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/params.rs"]
mod tests;
