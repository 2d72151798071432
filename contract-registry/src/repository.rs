use crate::{
    decorator::{ContractDecorator, InterfacesProvider},
    filters::{ContractDecoratorFilters, InterfaceFilters},
    manifest::{InterfaceManifestJson, InterfaceManifestWithId, ManifestJson},
    signature::{Signature, SignatureKind},
    types::{ContractId, ContractTag, InterfaceId},
    ArtifactJson,
};
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};

/// Everything kept for a registered contract: the resolved decorator served
/// on read paths plus the source documents it was resolved from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredContract {
    pub decorator: ContractDecorator,
    pub manifest: ManifestJson,
    pub artifact: ArtifactJson,
    pub info_markdown: Option<String>,
}

/// In-memory store of resolved contract decorators, keyed by contract id.
#[derive(Debug, Default)]
pub struct ContractDecoratorRepository {
    storage: RwLock<HashMap<ContractId, StoredContract>>,
}

impl ContractDecoratorRepository {
    pub fn store(&self, contract: StoredContract) {
        tracing::info!(id = %contract.decorator.id, "storing contract decorator");
        self.storage
            .write()
            .insert(contract.decorator.id.clone(), contract);
    }

    pub fn get(&self, id: &ContractId) -> Option<ContractDecorator> {
        self.storage.read().get(id).map(|c| c.decorator.clone())
    }

    pub fn get_stored(&self, id: &ContractId) -> Option<StoredContract> {
        self.storage.read().get(id).cloned()
    }

    pub fn manifest_json(&self, id: &ContractId) -> Option<ManifestJson> {
        self.storage.read().get(id).map(|c| c.manifest.clone())
    }

    pub fn artifact_json(&self, id: &ContractId) -> Option<ArtifactJson> {
        self.storage.read().get(id).map(|c| c.artifact.clone())
    }

    pub fn info_markdown(&self, id: &ContractId) -> Option<String> {
        self.storage
            .read()
            .get(id)
            .and_then(|c| c.info_markdown.clone())
    }

    pub fn delete(&self, id: &ContractId) -> bool {
        tracing::info!(id = %id, "deleting contract decorator");
        self.storage.write().remove(id).is_some()
    }

    pub fn all(&self, filters: &ContractDecoratorFilters) -> Vec<ContractDecorator> {
        let mut decorators: Vec<ContractDecorator> = self
            .storage
            .read()
            .values()
            .filter(|c| {
                filters.tags.matches(&c.decorator.tags)
                    && filters.implements.matches(&c.decorator.implements)
            })
            .map(|c| c.decorator.clone())
            .collect();
        decorators.sort_by(|a, b| a.id.cmp(&b.id));
        decorators
    }
}

/// In-memory store of reusable decorator interfaces, keyed by interface id.
/// Doubles as the resolver's interface lookup.
#[derive(Debug, Default)]
pub struct ContractInterfacesRepository {
    storage: RwLock<HashMap<InterfaceId, InterfaceManifestJson>>,
    info_markdowns: RwLock<HashMap<InterfaceId, String>>,
}

impl ContractInterfacesRepository {
    pub fn store(&self, id: InterfaceId, manifest: InterfaceManifestJson) {
        tracing::info!(id = %id, "storing contract interface");
        self.storage.write().insert(id, manifest);
    }

    pub fn store_info_markdown(&self, id: InterfaceId, info_markdown: String) {
        self.info_markdowns.write().insert(id, info_markdown);
    }

    pub fn get(&self, id: &InterfaceId) -> Option<InterfaceManifestJson> {
        self.storage.read().get(id).cloned()
    }

    pub fn info_markdown(&self, id: &InterfaceId) -> Option<String> {
        self.info_markdowns.read().get(id).cloned()
    }

    pub fn delete(&self, id: &InterfaceId) -> bool {
        tracing::info!(id = %id, "deleting contract interface");
        self.info_markdowns.write().remove(id);
        self.storage.write().remove(id).is_some()
    }

    pub fn all(&self, filters: &InterfaceFilters) -> Vec<InterfaceManifestWithId> {
        let mut interfaces: Vec<InterfaceManifestWithId> = self
            .storage
            .read()
            .iter()
            .filter(|(_, manifest)| {
                let tags: Vec<ContractTag> = manifest
                    .tags
                    .iter()
                    .map(|t| ContractTag::from(t.as_str()))
                    .collect();
                filters.tags.matches(&tags)
            })
            .map(|(id, manifest)| InterfaceManifestWithId::new(id.clone(), manifest.clone()))
            .collect();
        interfaces.sort_by(|a, b| a.id.cmp(&b.id));
        interfaces
    }

    /// Interfaces whose decorators are all covered by the given ABI signature
    /// sets. Used to suggest interfaces a contract could declare: an
    /// interface qualifies only when every one of its function and event
    /// decorators matches something in the contract's ABI.
    pub fn all_with_partially_matching_decorators(
        &self,
        abi_function_signatures: &HashSet<String>,
        abi_event_signatures: &HashSet<String>,
    ) -> Vec<InterfaceManifestWithId> {
        let mut interfaces: Vec<InterfaceManifestWithId> = self
            .storage
            .read()
            .iter()
            .filter(|(_, manifest)| {
                signatures_covered(
                    manifest.function_decorators.iter().map(|d| &d.signature),
                    SignatureKind::Function,
                    abi_function_signatures,
                ) && signatures_covered(
                    manifest.event_decorators.iter().map(|d| &d.signature),
                    SignatureKind::Event,
                    abi_event_signatures,
                )
            })
            .map(|(id, manifest)| InterfaceManifestWithId::new(id.clone(), manifest.clone()))
            .collect();
        interfaces.sort_by(|a, b| a.id.cmp(&b.id));
        interfaces
    }
}

fn signatures_covered<'a>(
    decorator_signatures: impl Iterator<Item = &'a String>,
    kind: SignatureKind,
    abi_signatures: &HashSet<String>,
) -> bool {
    decorator_signatures
        .map(|signature| Signature::parse(kind, signature))
        .all(|parsed| {
            parsed.is_some_and(|signature| abi_signatures.contains(&signature.to_string()))
        })
}

impl InterfacesProvider for ContractInterfacesRepository {
    fn interface(&self, id: &InterfaceId) -> Option<InterfaceManifestJson> {
        self.get(id)
    }
}
