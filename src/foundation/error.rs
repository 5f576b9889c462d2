use std::fmt;

/// Convenience result type used across sceneschema.
pub type SceneResult<T> = Result<T, SceneError>;

/// Top-level error taxonomy used by document-level APIs.
#[derive(thiserror::Error, Debug)]
pub enum SceneError {
    /// A scene object (or parameter descriptor) was rejected.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The input document could not be parsed as JSON.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SceneError {
    /// Build a [`SceneError::Validation`] rooted at the document itself.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(ValidationError::at(&[], msg))
    }

    /// Build a [`SceneError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

/// One step of a field path inside a JSON field bag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathElem {
    /// Object key.
    Field(&'static str),
    /// Array position.
    Index(usize),
}

/// The single rejection kind for scene objects.
///
/// Carries the path of the first violated constraint and a message that names the offending
/// value, rendered as `$.instructions[3][0].velo: ...`.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    path: Vec<PathElem>,
    message: String,
}

impl ValidationError {
    pub(crate) fn at(path: &[PathElem], message: impl Into<String>) -> Self {
        Self {
            path: path.to_vec(),
            message: message.into(),
        }
    }

    /// Re-root this error under `prefix` (e.g. the index of the object inside a batch).
    pub(crate) fn nested(mut self, prefix: &[PathElem]) -> Self {
        self.path.splice(0..0, prefix.iter().copied());
        self
    }

    /// Path of the offending field, outermost first.
    pub fn path(&self) -> &[PathElem] {
        &self.path
    }

    /// Human-readable description of the violated constraint.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The path rendered in `$.a[0].b` form.
    pub fn path_string(&self) -> String {
        format_path(&self.path)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            return write!(f, "{}", self.message);
        }
        write!(f, "{}: {}", format_path(&self.path), self.message)
    }
}

impl std::error::Error for ValidationError {}

fn format_path(path: &[PathElem]) -> String {
    let mut s = String::from("$");
    for p in path {
        match *p {
            PathElem::Field(name) => {
                s.push('.');
                s.push_str(name);
            }
            PathElem::Index(i) => {
                s.push('[');
                s.push_str(&i.to_string());
                s.push(']');
            }
        }
    }
    s
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
