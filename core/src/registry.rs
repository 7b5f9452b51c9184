//! # Shape Registry
//!
//! A dispatch table from a kind name to a constructor. Text such as
//! `rect:10,20` or `circle:5` is turned into a boxed [`Shape`] by looking the
//! kind up here, so the set of accepted variants grows by calling
//! [`ShapeRegistry::register`] and never by editing a parser.
//!
//! Supported formats:
//! * `<kind>:<dim>` for one-dimensional variants (e.g. `circle:5`).
//! * `<kind>:<dim>,<dim>` or `<kind>:<dim>x<dim>` (e.g. `rect:10x20`).
//! * `<kind>` or `<kind>:` for variants registered without dimensions.
//!
//! Kind names and aliases are case-insensitive. A registered kind always wins
//! over an alias of the same name.

use std::collections::BTreeMap;
use std::fmt;

use solid_common::error::ShapeSpecError;
use tracing::debug;

use crate::shape::{Circle, Rectangle, Shape, Triangle};

pub type BoxedShape = Box<dyn Shape + Send + Sync>;

type Factory = Box<dyn Fn(&[f64]) -> BoxedShape + Send + Sync>;

struct Entry {
    labels: Vec<String>,
    factory: Factory,
}

/// A registered kind as reported by [`ShapeRegistry::kinds`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeKind<'a> {
    pub name: &'a str,
    pub arity: usize,
    /// One label per dimension, in the order `parse` expects them.
    pub labels: Vec<&'a str>,
    pub aliases: Vec<&'a str>,
}

/// The outcome of [`ShapeRegistry::parse`]: the constructed shape plus the
/// canonical kind, labels and dimensions it was built from.
pub struct ParsedShape {
    pub kind: String,
    pub labels: Vec<String>,
    pub dims: Vec<f64>,
    pub shape: BoxedShape,
}

impl ParsedShape {
    /// `(label, value)` for every dimension.
    pub fn labelled_dims(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.dims.iter().copied())
    }
}

impl Shape for ParsedShape {
    fn area(&self) -> f64 {
        self.shape.area()
    }
}

impl fmt::Display for ParsedShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dims: Vec<String> = self.dims.iter().map(|d| d.to_string()).collect();
        write!(f, "{}({})", self.kind, dims.join(", "))
    }
}

impl fmt::Debug for ParsedShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParsedShape")
            .field("kind", &self.kind)
            .field("labels", &self.labels)
            .field("dims", &self.dims)
            .finish_non_exhaustive()
    }
}

#[derive(Default)]
pub struct ShapeRegistry {
    entries: BTreeMap<String, Entry>,
    aliases: BTreeMap<String, String>,
}

impl ShapeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with rectangle, circle and triangle.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry
            .register("rectangle", &["Width", "Height"], |d| {
                Box::new(Rectangle::new(d[0], d[1]))
            })
            .register("circle", &["Radius"], |d| Box::new(Circle::new(d[0])))
            .register("triangle", &["Base", "Height"], |d| {
                Box::new(Triangle::new(d[0], d[1]))
            });
        registry.insert_alias("rect", "rectangle");
        registry.insert_alias("tri", "triangle");
        registry
    }

    /// Adds a kind, replacing any previous constructor or alias under the same
    /// name.
    ///
    /// The arity is `labels.len()`; `factory` is only ever called with exactly
    /// that many dimensions.
    pub fn register<F>(&mut self, kind: &str, labels: &[&str], factory: F) -> &mut Self
    where
        F: Fn(&[f64]) -> BoxedShape + Send + Sync + 'static,
    {
        let kind = kind.to_ascii_lowercase();
        debug!(kind = %kind, arity = labels.len(), "registering shape kind");
        self.aliases.remove(&kind);
        self.entries.insert(
            kind,
            Entry {
                labels: labels.iter().map(|l| l.to_string()).collect(),
                factory: Box::new(factory),
            },
        );
        self
    }

    /// Adds an alternate name for a registered kind.
    ///
    /// # Errors
    /// * [`ShapeSpecError::UnknownKind`] if `kind` is not registered.
    /// * [`ShapeSpecError::AliasConflict`] if `alias` is itself a registered kind.
    pub fn alias(&mut self, alias: &str, kind: &str) -> Result<&mut Self, ShapeSpecError> {
        let alias = alias.to_ascii_lowercase();
        let kind = kind.to_ascii_lowercase();

        if self.entries.contains_key(&alias) {
            return Err(ShapeSpecError::AliasConflict(alias));
        }
        if !self.entries.contains_key(&kind) {
            return Err(ShapeSpecError::UnknownKind(kind));
        }

        self.insert_alias(&alias, &kind);
        Ok(self)
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.resolve(&kind.to_ascii_lowercase()).is_some()
    }

    /// Registered kinds sorted by name.
    pub fn kinds(&self) -> Vec<ShapeKind<'_>> {
        self.entries
            .iter()
            .map(|(name, entry)| ShapeKind {
                name: name.as_str(),
                arity: entry.labels.len(),
                labels: entry.labels.iter().map(String::as_str).collect(),
                aliases: self
                    .aliases
                    .iter()
                    .filter(|(_, target)| *target == name)
                    .map(|(alias, _)| alias.as_str())
                    .collect(),
            })
            .collect()
    }

    pub fn parse(&self, text: &str) -> Result<ParsedShape, ShapeSpecError> {
        let (kind, dims) = match text.split_once(':') {
            Some((kind, dims)) => (kind, dims.trim()),
            None => (text, ""),
        };

        let kind = kind.trim().to_ascii_lowercase();
        let (name, entry) = self
            .resolve(&kind)
            .ok_or_else(|| ShapeSpecError::UnknownKind(kind.clone()))?;
        let arity = entry.labels.len();

        let dims = if dims.is_empty() {
            if arity > 0 {
                return Err(ShapeSpecError::MissingDimensions(text.to_string()));
            }
            Vec::new()
        } else {
            parse_dims(dims)?
        };

        if dims.len() != arity {
            return Err(ShapeSpecError::WrongArity {
                kind: name.to_string(),
                expected: arity,
                found: dims.len(),
            });
        }

        Ok(ParsedShape {
            kind: name.to_string(),
            labels: entry.labels.clone(),
            shape: (entry.factory)(&dims),
            dims,
        })
    }

    /// Parses every description, stopping at the first failure.
    pub fn parse_all<I, T>(&self, texts: I) -> Result<Vec<ParsedShape>, ShapeSpecError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        texts.into_iter().map(|t| self.parse(t.as_ref())).collect()
    }

    fn insert_alias(&mut self, alias: &str, kind: &str) {
        self.aliases.insert(alias.to_string(), kind.to_string());
    }

    fn resolve(&self, kind: &str) -> Option<(&str, &Entry)> {
        let canonical = if self.entries.contains_key(kind) {
            kind
        } else {
            self.aliases.get(kind)?.as_str()
        };
        self.entries
            .get_key_value(canonical)
            .map(|(name, entry)| (name.as_str(), entry))
    }
}

fn parse_dims(dims: &str) -> Result<Vec<f64>, ShapeSpecError> {
    dims.split([',', 'x', 'X'])
        .map(str::trim)
        .map(|part| {
            part.parse::<f64>()
                .map_err(|_| ShapeSpecError::InvalidNumber(part.to_string()))
        })
        .collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
