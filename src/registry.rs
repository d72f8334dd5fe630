//! # Type Registry
//!
//! Process-wide registry of the resource kinds this crate serves.
//!
//! Registration is an explicit startup step: call [`init`] once before any API
//! traffic for Pipeline resources. [`add_to_registry`] adds both the singular
//! kind and its list wrapper, and can also populate a caller-owned registry.

use crate::crd::Pipeline;
use crate::error::RegistryError;
use kube::core::{ApiResource, GroupVersionKind};
use kube::Resource;
use std::collections::BTreeMap;
use std::sync::OnceLock;
use tracing::{debug, info};

type KindKey = (String, String, String);

static GLOBAL_REGISTRY: OnceLock<TypeRegistry> = OnceLock::new();

/// Kinds known to this process, keyed by group/version/kind
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    kinds: BTreeMap<KindKey, String>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resource kind
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Conflict`] if the kind is already registered with another plural.
    pub fn register<K>(&mut self) -> Result<&mut Self, RegistryError>
    where
        K: Resource<DynamicType = ()>,
    {
        self.insert(
            &K::group(&()),
            &K::version(&()),
            &K::kind(&()),
            &K::plural(&()),
        )?;
        Ok(self)
    }

    /// Register the list wrapper of a resource kind, named `<Kind>List`
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Conflict`] if the list kind is already registered with another plural.
    pub fn register_list<K>(&mut self) -> Result<&mut Self, RegistryError>
    where
        K: Resource<DynamicType = ()>,
    {
        let list_kind = format!("{}List", K::kind(&()));
        self.insert(&K::group(&()), &K::version(&()), &list_kind, &K::plural(&()))?;
        Ok(self)
    }

    fn insert(
        &mut self,
        group: &str,
        version: &str,
        kind: &str,
        plural: &str,
    ) -> Result<(), RegistryError> {
        let key = (group.to_string(), version.to_string(), kind.to_string());
        match self.kinds.get(&key) {
            Some(existing) if existing == plural => {
                debug!(group, version, kind, "Kind already registered");
                Ok(())
            }
            Some(existing) => Err(RegistryError::Conflict {
                group: group.to_string(),
                version: version.to_string(),
                kind: kind.to_string(),
                existing: existing.clone(),
                requested: plural.to_string(),
            }),
            None => {
                self.kinds.insert(key, plural.to_string());
                Ok(())
            }
        }
    }

    /// Whether the given group/version/kind is registered
    pub fn is_registered(&self, gvk: &GroupVersionKind) -> bool {
        self.kinds.contains_key(&key_of(gvk))
    }

    /// API resource descriptor for a registered kind
    pub fn api_resource(&self, gvk: &GroupVersionKind) -> Option<ApiResource> {
        self.kinds
            .get(&key_of(gvk))
            .map(|plural| ApiResource::from_gvk_with_plural(gvk, plural))
    }

    /// Check that a resource kind has been registered before it is used
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotRegistered`] when the kind is unknown.
    pub fn ensure_registered<K>(&self) -> Result<(), RegistryError>
    where
        K: Resource<DynamicType = ()>,
    {
        let gvk = GroupVersionKind::gvk(&K::group(&()), &K::version(&()), &K::kind(&()));
        if self.is_registered(&gvk) {
            Ok(())
        } else {
            Err(RegistryError::NotRegistered {
                group: gvk.group,
                version: gvk.version,
                kind: gvk.kind,
            })
        }
    }

    /// Registered kinds in group/version/kind order
    pub fn kinds(&self) -> impl Iterator<Item = GroupVersionKind> + '_ {
        self.kinds
            .keys()
            .map(|(group, version, kind)| GroupVersionKind::gvk(group, version, kind))
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

fn key_of(gvk: &GroupVersionKind) -> KindKey {
    (gvk.group.clone(), gvk.version.clone(), gvk.kind.clone())
}

/// Add the Pipeline kind and its list wrapper to `registry`
///
/// # Errors
///
/// Returns [`RegistryError::Conflict`] if either kind clashes with an existing entry.
pub fn add_to_registry(registry: &mut TypeRegistry) -> Result<(), RegistryError> {
    registry.register::<Pipeline>()?.register_list::<Pipeline>()?;
    Ok(())
}

/// Build the process-wide registry on first call and return it
///
/// Later calls return the same registry.
///
/// # Errors
///
/// Returns the registration error if the built-in kinds conflict.
pub fn init() -> Result<&'static TypeRegistry, RegistryError> {
    if let Some(registry) = GLOBAL_REGISTRY.get() {
        return Ok(registry);
    }

    let mut registry = TypeRegistry::new();
    add_to_registry(&mut registry)?;
    let registry = GLOBAL_REGISTRY.get_or_init(|| registry);
    info!(kinds = registry.len(), "Type registry initialized");
    Ok(registry)
}

/// The process-wide registry, if [`init`] has run
pub fn global() -> Option<&'static TypeRegistry> {
    GLOBAL_REGISTRY.get()
}
