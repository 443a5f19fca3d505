//! Maps file extensions to `TypeDescriptor`s.
//!
//! The registry is an explicit value: build one with [`TypeRegistry::new`] and
//! pass it by reference to whatever needs type resolution. Registration takes
//! `&mut self`, so a registry shared across worker threads is read-only for the
//! duration of a batch.

use crate::core_types::{ProcessingPath, SubFormat, TypeDescriptor};
use log::debug;
use std::collections::{BTreeSet, HashMap};

mod builtin;

/// Lookup table from lowercase, dot-prefixed extensions to descriptors.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    types: HashMap<String, TypeDescriptor>,
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// Creates a registry populated with the built-in table.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for &(ext, name, icon, highlight, path, mime, description) in builtin::rows() {
            registry.register(
                ext,
                TypeDescriptor::new(name, icon, highlight, path)
                    .with_mime_type(mime)
                    .with_description(description),
            );
        }
        debug!("Type registry initialized with {} types", registry.len());
        registry
    }

    /// Creates a registry with no entries. Every lookup falls back to plain text.
    pub fn empty() -> Self {
        Self {
            types: HashMap::new(),
        }
    }

    /// Registers a descriptor, replacing any previous one for the extension.
    ///
    /// The extension may be given with or without its leading dot and in any case.
    ///
    /// # Examples
    ///
    /// ```
    /// use docpage::core_types::{ProcessingPath, TypeDescriptor};
    /// use docpage::registry::TypeRegistry;
    ///
    /// let mut registry = TypeRegistry::new();
    /// registry.register(
    ///     "SLP",
    ///     TypeDescriptor::new("SnapLogic Pipeline", "🔀", "json", ProcessingPath::Structured),
    /// );
    /// assert_eq!(registry.resolve(".slp", None).name, "SnapLogic Pipeline");
    /// ```
    pub fn register(&mut self, extension: &str, descriptor: TypeDescriptor) {
        let key = normalize_extension(extension).to_lowercase();
        if self.types.insert(key.clone(), descriptor).is_some() {
            debug!("Replaced registered type for '{}'", key);
        }
    }

    /// Resolves the descriptor for an extension, honoring an optional format override.
    ///
    /// This never fails: unknown extensions resolve to a plain-text descriptor on
    /// the code path. When the override names a registered type, a new descriptor
    /// is synthesized from it whose name and description mention both the
    /// override and the original extension. An override that names nothing is
    /// ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use docpage::core_types::ProcessingPath;
    /// use docpage::registry::TypeRegistry;
    ///
    /// let registry = TypeRegistry::new();
    ///
    /// let plain = registry.resolve(".slp", None);
    /// assert_eq!(plain.highlight, "text");
    ///
    /// let overridden = registry.resolve(".slp", Some("json"));
    /// assert_eq!(overridden.name, "JSON (.slp)");
    /// assert_eq!(overridden.path, ProcessingPath::Structured);
    /// ```
    pub fn resolve(&self, extension: &str, format_override: Option<&str>) -> TypeDescriptor {
        let extension = normalize_extension(extension);

        if let Some((token, base)) = self.override_target(format_override) {
            debug!("Format override '{}' applied to '{}'", token, extension);
            let description = match &base.description {
                Some(description) => format!("{} (format override)", description),
                None => format!("{} (format override)", base.name),
            };
            return TypeDescriptor {
                name: format!("{} ({})", base.name, extension),
                icon: base.icon.clone(),
                highlight: base.highlight.clone(),
                path: base.path,
                mime_type: base.mime_type.clone(),
                description: Some(description),
            };
        }

        match self.types.get(&extension.to_lowercase()) {
            Some(descriptor) => descriptor.clone(),
            None => fallback_descriptor(&extension),
        }
    }

    /// The extension that processing should act on: the override token when it
    /// names a registered type, otherwise the file's own extension. Always
    /// lowercase with a leading dot.
    pub fn effective_extension(&self, extension: &str, format_override: Option<&str>) -> String {
        match self.override_target(format_override) {
            Some((token, _)) => token,
            None => normalize_extension(extension).to_lowercase(),
        }
    }

    /// Resolves which structured grammar applies to an extension.
    ///
    /// A matching override decides the grammar; otherwise the extension does.
    pub fn sub_format(&self, extension: &str, format_override: Option<&str>) -> SubFormat {
        SubFormat::from_extension(&self.effective_extension(extension, format_override))
    }

    /// All registered extensions, sorted.
    pub fn supported_extensions(&self) -> Vec<String> {
        let mut extensions: Vec<String> = self.types.keys().cloned().collect();
        extensions.sort();
        extensions
    }

    /// The distinct processing paths used by registered types.
    pub fn processing_paths(&self) -> Vec<ProcessingPath> {
        self.types
            .values()
            .map(|descriptor| descriptor.path)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Registered types whose display name contains `name`, ignoring case.
    pub fn search_by_name(&self, name: &str) -> Vec<(String, TypeDescriptor)> {
        let needle = name.to_lowercase();
        let mut matches: Vec<(String, TypeDescriptor)> = self
            .types
            .iter()
            .filter(|(_, descriptor)| descriptor.name.to_lowercase().contains(&needle))
            .map(|(ext, descriptor)| (ext.clone(), descriptor.clone()))
            .collect();
        matches.sort_by(|a, b| a.0.cmp(&b.0));
        matches
    }

    /// Iterates over `(extension, descriptor)` pairs in extension order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypeDescriptor)> {
        let mut entries: Vec<(&str, &TypeDescriptor)> = self
            .types
            .iter()
            .map(|(ext, descriptor)| (ext.as_str(), descriptor))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries.into_iter()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Returns the normalized override token and its descriptor, if registered.
    fn override_target(&self, format_override: Option<&str>) -> Option<(String, &TypeDescriptor)> {
        let token = format_override.map(str::trim).filter(|t| !t.is_empty())?;
        let token = normalize_extension(token).to_lowercase();
        let descriptor = self.types.get(&token)?;
        Some((token, descriptor))
    }
}

/// Ensures a leading dot. Case is preserved for display.
fn normalize_extension(extension: &str) -> String {
    if extension.starts_with('.') {
        extension.to_string()
    } else {
        format!(".{}", extension)
    }
}

fn fallback_descriptor(extension: &str) -> TypeDescriptor {
    TypeDescriptor::new("Text File", "📄", "text", ProcessingPath::Code)
        .with_mime_type("text/plain")
        .with_description(format!("Plain text file ({})", extension))
}
