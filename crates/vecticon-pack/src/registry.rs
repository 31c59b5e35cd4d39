//! Runtime icon registry.
//!
//! The [`IconRegistry`] holds icons loaded from manifests or registered in
//! code, and falls back to the built-in catalog for every other name.

use std::collections::HashMap;
use std::fmt;
use std::ops::Deref;
use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use vecticon_graphics::{validate, ValidationOptions, VectorIcon};

use crate::catalog::{icon, IconId};
use crate::config::RegistryConfig;
use crate::error::{PackError, PackResult};
use crate::logging::targets;
use crate::manifest::{Manifest, ManifestFormat};

/// A cheap reference to a built-in or loaded icon.
#[derive(Clone)]
pub enum IconHandle {
    /// A built-in icon living in its catalog slot.
    Builtin(IconId, &'static VectorIcon),
    /// An icon loaded at runtime.
    Loaded(Arc<VectorIcon>),
}

impl IconHandle {
    /// Returns true if this handle refers to a built-in icon.
    pub fn is_builtin(&self) -> bool {
        matches!(self, Self::Builtin(..))
    }

    /// The built-in id, if this is a built-in icon.
    pub fn builtin_id(&self) -> Option<IconId> {
        match self {
            Self::Builtin(id, _) => Some(*id),
            Self::Loaded(_) => None,
        }
    }
}

impl Deref for IconHandle {
    type Target = VectorIcon;

    fn deref(&self) -> &VectorIcon {
        match self {
            Self::Builtin(_, icon) => icon,
            Self::Loaded(icon) => icon,
        }
    }
}

impl AsRef<VectorIcon> for IconHandle {
    fn as_ref(&self) -> &VectorIcon {
        self
    }
}

impl fmt::Debug for IconHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IconHandle")
            .field("name", &self.name())
            .field("builtin", &self.is_builtin())
            .finish()
    }
}

/// Thread-safe registry of icons, layered over the built-in catalog.
///
/// Lookups take a read lock; loads take the write lock once per manifest, so
/// a manifest is registered completely or not at all.
///
/// # Example
///
/// ```
/// use vecticon_pack::{IconRegistry, ManifestFormat};
///
/// let registry = IconRegistry::new();
/// registry.load_manifest_str(r##"
/// [[icon]]
/// name = "Square"
/// width = 24.0
/// height = 24.0
///
/// [[icon.path]]
/// data = "M2,2H22V22H2Z"
/// fill = "#FFFFFFFF"
/// "##, ManifestFormat::Toml)?;
///
/// assert!(!registry.get("Square").unwrap().is_builtin());
/// assert!(registry.get("AddAccount").unwrap().is_builtin());
/// # Ok::<(), vecticon_pack::PackError>(())
/// ```
pub struct IconRegistry {
    icons: RwLock<HashMap<String, Arc<VectorIcon>>>,
    override_builtin: bool,
    lint: ValidationOptions,
}

static_assertions::assert_impl_all!(IconRegistry: Send, Sync);

impl IconRegistry {
    /// Creates an empty registry that rejects names taken by built-ins.
    pub fn new() -> Self {
        Self {
            icons: RwLock::new(HashMap::new()),
            override_builtin: false,
            lint: ValidationOptions::default(),
        }
    }

    /// Allow registered icons to shadow built-ins of the same name.
    pub fn with_override_builtin(mut self, enabled: bool) -> Self {
        self.override_builtin = enabled;
        self
    }

    /// Options used to check icons as they are loaded.
    pub fn with_lint_options(mut self, options: ValidationOptions) -> Self {
        self.lint = options;
        self
    }

    /// Creates a registry and loads every manifest the configuration lists.
    pub fn from_config(config: &RegistryConfig, lint: ValidationOptions) -> PackResult<Self> {
        let registry = Self::new()
            .with_override_builtin(config.override_builtin)
            .with_lint_options(lint);
        for path in &config.manifests {
            registry.load_manifest(path)?;
        }
        Ok(registry)
    }

    /// Load a manifest file. Returns the number of icons added.
    pub fn load_manifest(&self, path: impl AsRef<Path>) -> PackResult<usize> {
        let path = path.as_ref();
        let manifest = Manifest::load(path)?;
        let count = self.register_manifest(manifest)?;
        tracing::info!(
            target: targets::REGISTRY,
            path = %path.display(),
            icons = count,
            "loaded manifest"
        );
        Ok(count)
    }

    /// Load manifest text. Returns the number of icons added.
    pub fn load_manifest_str(&self, text: &str, format: ManifestFormat) -> PackResult<usize> {
        let count = self.register_manifest(Manifest::parse(text, format)?)?;
        tracing::info!(target: targets::REGISTRY, ?format, icons = count, "loaded manifest");
        Ok(count)
    }

    fn register_manifest(&self, manifest: Manifest) -> PackResult<usize> {
        let icons = manifest.into_icons()?;
        for icon in &icons {
            self.report_issues(icon);
        }

        let mut map = self.icons.write();
        let mut keys: Vec<String> = Vec::with_capacity(icons.len());
        for icon in &icons {
            let key = self.check_name(&map, icon.name())?;
            if keys.iter().any(|k| k == key) {
                return Err(PackError::DuplicateIcon(icon.name().to_string()));
            }
            keys.push(key.to_string());
        }

        let count = icons.len();
        for (key, icon) in keys.into_iter().zip(icons) {
            map.insert(key, Arc::new(icon));
        }
        Ok(count)
    }

    /// Register a single icon.
    pub fn register(&self, icon: VectorIcon) -> PackResult<IconHandle> {
        self.report_issues(&icon);
        let mut map = self.icons.write();
        let key = self.check_name(&map, icon.name())?.to_string();
        let icon = Arc::new(icon);
        map.insert(key, Arc::clone(&icon));
        tracing::debug!(target: targets::REGISTRY, icon = icon.name(), "registered icon");
        Ok(IconHandle::Loaded(icon))
    }

    // Returns the key the icon will be stored under.
    fn check_name<'a>(
        &self,
        map: &HashMap<String, Arc<VectorIcon>>,
        name: &'a str,
    ) -> PackResult<&'a str> {
        let key = registry_key(name);
        if map.contains_key(key) {
            return Err(PackError::DuplicateIcon(name.to_string()));
        }
        if !self.override_builtin && IconId::from_name(name).is_some() {
            return Err(PackError::DuplicateIcon(name.to_string()));
        }
        Ok(key)
    }

    fn report_issues(&self, icon: &VectorIcon) {
        let report = validate(icon, &self.lint);
        for issue in &report.issues {
            tracing::warn!(target: targets::REGISTRY, icon = icon.name(), %issue, "icon check");
        }
    }

    /// Look up an icon. Registered icons win over built-ins.
    pub fn get(&self, name: &str) -> Option<IconHandle> {
        if let Some(icon) = self.icons.read().get(registry_key(name)) {
            return Some(IconHandle::Loaded(Arc::clone(icon)));
        }
        IconId::from_name(name).map(|id| IconHandle::Builtin(id, icon(id)))
    }

    /// Look up an icon, failing with [`PackError::UnknownIcon`].
    pub fn require(&self, name: &str) -> PackResult<IconHandle> {
        self.get(name)
            .ok_or_else(|| PackError::UnknownIcon(name.to_string()))
    }

    /// Returns true if the name resolves to any icon.
    pub fn contains(&self, name: &str) -> bool {
        self.icons.read().contains_key(registry_key(name)) || IconId::from_name(name).is_some()
    }

    /// Every resolvable canonical name, built-ins first, then registered
    /// icons in name order. An override of a built-in is listed once, under
    /// the built-in's name.
    pub fn names(&self) -> Vec<String> {
        let map = self.icons.read();
        let mut registered: Vec<String> = map.keys().cloned().collect();
        registered.sort();

        IconId::ALL
            .iter()
            .map(|id| id.name().to_string())
            .filter(|name| !map.contains_key(name))
            .chain(registered)
            .collect()
    }

    /// Number of icons registered at runtime.
    pub fn len(&self) -> usize {
        self.icons.read().len()
    }

    /// Returns true if nothing was registered at runtime.
    pub fn is_empty(&self) -> bool {
        self.icons.read().is_empty()
    }
}

// Names that resolve to a built-in are keyed by the built-in's name, so an
// override shadows it under every spelling.
fn registry_key(name: &str) -> &str {
    IconId::from_name(name).map_or(name, |id| id.name())
}

impl Default for IconRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for IconRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IconRegistry")
            .field("registered", &self.len())
            .field("override_builtin", &self.override_builtin)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vecticon_graphics::{Color, PathStyle};

    fn square(name: &str) -> VectorIcon {
        VectorIcon::builder(name, 24.0, 24.0, 24.0, 24.0)
            .path(PathStyle::fill(Color::WHITE), |p| {
                p.add_rect(2.0, 2.0, 22.0, 22.0);
            })
            .build()
    }

    #[test]
    fn test_register_and_get() {
        let registry = IconRegistry::new();
        assert!(registry.is_empty());

        let handle = registry.register(square("Tile")).unwrap();
        assert!(!handle.is_builtin());
        assert_eq!(handle.name(), "Tile");

        let fetched = registry.get("Tile").unwrap();
        assert_eq!(fetched.path_count(), 1);
        assert!(registry.contains("Tile"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_builtin_fallback() {
        let registry = IconRegistry::new();
        let handle = registry.get("add-account").unwrap();
        assert_eq!(handle.builtin_id(), Some(IconId::AddAccount));
        assert!(std::ptr::eq(&*handle, crate::icons::add_account()));
        assert!(registry.get("NoSuchIcon").is_none());
        assert!(matches!(
            registry.require("NoSuchIcon"),
            Err(PackError::UnknownIcon(_))
        ));
    }

    #[test]
    fn test_duplicate_rejected() {
        let registry = IconRegistry::new();
        registry.register(square("Tile")).unwrap();
        assert!(matches!(
            registry.register(square("Tile")),
            Err(PackError::DuplicateIcon(name)) if name == "Tile"
        ));
    }

    #[test]
    fn test_builtin_collision() {
        let strict = IconRegistry::new();
        assert!(matches!(
            strict.register(square("Copy")),
            Err(PackError::DuplicateIcon(_))
        ));

        let lenient = IconRegistry::new().with_override_builtin(true);
        lenient.register(square("Copy")).unwrap();
        let handle = lenient.get("Copy").unwrap();
        assert!(!handle.is_builtin());
        assert_eq!(handle.viewport_width(), 24.0);

        let names = lenient.names();
        assert_eq!(names.iter().filter(|n| *n == "Copy").count(), 1);
        assert_eq!(names.len(), IconId::COUNT);
    }

    #[test]
    fn test_override_with_loose_name_shadows_builtin() {
        let registry = IconRegistry::new().with_override_builtin(true);
        registry.register(square("add-account")).unwrap();

        for name in ["AddAccount", "add-account", "add_account"] {
            let handle = registry.get(name).unwrap();
            assert!(!handle.is_builtin(), "{name} resolved to the built-in");
            assert_eq!(handle.viewport_width(), 24.0);
        }

        let names = registry.names();
        assert_eq!(names.len(), IconId::COUNT);
        assert_eq!(names.iter().filter(|n| *n == "AddAccount").count(), 1);
        assert!(!names.iter().any(|n| n == "add-account"));

        // Another spelling of the same built-in is a duplicate
        assert!(matches!(
            registry.register(square("ADD ACCOUNT")),
            Err(PackError::DuplicateIcon(_))
        ));
    }

    #[test]
    fn test_manifest_is_all_or_nothing() {
        let registry = IconRegistry::new();
        let text = r##"
[[icon]]
name = "One"
width = 24.0
height = 24.0

[[icon]]
name = "One"
width = 24.0
height = 24.0
"##;
        assert!(matches!(
            registry.load_manifest_str(text, ManifestFormat::Toml),
            Err(PackError::DuplicateIcon(_))
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_names_order() {
        let registry = IconRegistry::new();
        registry.register(square("Zeta")).unwrap();
        registry.register(square("Alpha")).unwrap();
        let names = registry.names();
        assert_eq!(names.len(), IconId::COUNT + 2);
        assert_eq!(names[0], IconId::ALL[0].name());
        assert_eq!(&names[IconId::COUNT..], ["Alpha", "Zeta"]);
    }
}
