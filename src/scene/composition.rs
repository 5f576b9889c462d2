use crate::foundation::error::{PathElem, SceneError, SceneResult, ValidationError};
use crate::scene::object::ContentObject;
use rayon::prelude::*;
use serde::Serialize;
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Options for batch validation.
#[derive(Clone, Debug, Default)]
pub struct ValidateOpts {
    /// Validate objects in parallel on a dedicated rayon pool.
    pub parallel: bool,
    /// Override the number of rayon worker threads. `None` uses rayon defaults.
    pub threads: Option<usize>,
}

/// Ordered, append-only collection of validated objects.
///
/// Order is render order and always equals insertion order. Serializes as
/// `{"objects": [...]}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Composition {
    objects: Vec<ContentObject>,
}

impl Composition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `object` after every object already present.
    ///
    /// Holding a [`ContentObject`] already proves it is valid, so nothing is re-checked.
    pub fn append(&mut self, object: ContentObject) {
        self.objects.push(object);
    }

    pub fn objects(&self) -> &[ContentObject] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ContentObject> {
        self.objects.iter()
    }

    /// Validate a batch of self-describing objects and compose them in submission order.
    ///
    /// With `opts.parallel`, objects are validated concurrently; results are still collected
    /// by index, so the composition order (and which failure is reported) does not depend on
    /// completion order. The error path is prefixed with the failing object's index.
    #[tracing::instrument(skip(values), fields(count = values.len()))]
    pub fn from_values(values: &[Value], opts: &ValidateOpts) -> SceneResult<Self> {
        let results: Vec<Result<ContentObject, ValidationError>> = if opts.parallel {
            let pool = build_thread_pool(opts.threads)?;
            pool.install(|| values.par_iter().map(ContentObject::from_value).collect())
        } else {
            values.iter().map(ContentObject::from_value).collect()
        };

        let mut comp = Self {
            objects: Vec::with_capacity(results.len()),
        };
        for (i, result) in results.into_iter().enumerate() {
            let object = result.map_err(|e| e.nested(&[PathElem::Index(i)]))?;
            comp.append(object);
        }
        tracing::debug!(objects = comp.len(), "composition validated");
        Ok(comp)
    }

    /// Parse and validate a JSON document.
    ///
    /// Accepts `{"objects": [...]}`, a bare array of objects, or a single object.
    pub fn from_reader<R: std::io::Read>(r: R, opts: &ValidateOpts) -> SceneResult<Self> {
        let doc: Value = serde_json::from_reader(r)
            .map_err(|e| SceneError::serde(format!("parse composition JSON: {e}")))?;
        Self::from_document(&doc, opts)
    }

    /// Parse and validate a JSON document on disk.
    pub fn from_path(path: impl AsRef<Path>, opts: &ValidateOpts) -> SceneResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            SceneError::Other(anyhow::Error::new(e).context(format!(
                "open composition JSON '{}'",
                path.display()
            )))
        })?;
        Self::from_reader(BufReader::new(f), opts)
    }

    fn from_document(doc: &Value, opts: &ValidateOpts) -> SceneResult<Self> {
        match doc {
            Value::Array(items) => Self::from_values(items, opts),
            Value::Object(map) if !map.contains_key("type") => match map.get("objects") {
                Some(Value::Array(items)) => Self::from_values(items, opts).map_err(|e| match e {
                    SceneError::Validation(v) => {
                        SceneError::Validation(v.nested(&[PathElem::Field("objects")]))
                    }
                    other => other,
                }),
                _ => Err(SceneError::validation(
                    "expected an \"objects\" array, an array of objects, or a typed object",
                )),
            },
            single => {
                let mut comp = Self::new();
                comp.append(ContentObject::from_value(single)?);
                Ok(comp)
            }
        }
    }

    /// Normalized wire form (`{"objects": [...]}`).
    pub fn to_value(&self) -> SceneResult<Value> {
        serde_json::to_value(self)
            .map_err(|e| SceneError::serde(format!("serialize composition: {e}")))
    }
}

impl<'a> IntoIterator for &'a Composition {
    type Item = &'a ContentObject;
    type IntoIter = std::slice::Iter<'a, ContentObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.iter()
    }
}

fn build_thread_pool(threads: Option<usize>) -> SceneResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(SceneError::validation(
            "validation threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| SceneError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/scene/composition.rs"]
mod tests;
