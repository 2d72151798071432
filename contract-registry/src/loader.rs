use crate::{
    decorator::ContractDecorator,
    manifest::InterfaceManifestJson,
    repository::{ContractDecoratorRepository, ContractInterfacesRepository, StoredContract},
    types::{ContractId, InterfaceId},
    ArtifactJson, ManifestJson,
};
use anyhow::Context;
use std::{
    fs,
    path::{Path, PathBuf},
};

const MANIFEST_SUFFIX: &str = ".manifest.json";
const INFO_SUFFIX: &str = ".info.md";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub contracts: usize,
    pub interfaces: usize,
    pub skipped: usize,
}

/// Loads decorator sources from a directory tree.
///
/// Each top-level directory under `root` is a contract set. Inside a set,
/// `<id>.manifest.json` files (with optional `<id>.info.md`) register
/// interfaces, while subdirectories holding `artifact.json` and
/// `manifest.json` (plus optional `info.md`) register contracts under the id
/// `<set>/<directory>`. Interfaces load first so contracts resolve against
/// them. Unparseable or incomplete entries are logged and skipped, and any
/// previously loaded entry under the same id is dropped.
pub fn load_from_dir(
    root: &Path,
    ignored_dirs: &[String],
    decorators: &ContractDecoratorRepository,
    interfaces: &ContractInterfacesRepository,
) -> anyhow::Result<LoadSummary> {
    let sets = contract_sets(root, ignored_dirs)?;
    let mut summary = LoadSummary::default();
    for set in &sets {
        load_interfaces(set, interfaces, &mut summary);
    }
    for set in &sets {
        load_contracts(set, ignored_dirs, decorators, interfaces, &mut summary);
    }
    tracing::info!(
        contracts = summary.contracts,
        interfaces = summary.interfaces,
        skipped = summary.skipped,
        "loaded contract decorators from {}",
        root.display()
    );
    Ok(summary)
}

fn contract_sets(root: &Path, ignored_dirs: &[String]) -> anyhow::Result<Vec<PathBuf>> {
    let entries = fs::read_dir(root)
        .with_context(|| format!("failed to read contracts directory {}", root.display()))?;
    let mut sets = vec![];
    for entry in entries {
        let path = entry?.path();
        if path.is_dir() && !is_ignored(&path, ignored_dirs) {
            sets.push(path);
        }
    }
    sets.sort();
    Ok(sets)
}

fn is_ignored(path: &Path, ignored_dirs: &[String]) -> bool {
    dir_name(path).map_or(true, |name| ignored_dirs.iter().any(|ignored| *ignored == name))
}

fn dir_name(path: &Path) -> Option<String> {
    path.file_name().map(|name| name.to_string_lossy().into_owned())
}

fn load_interfaces(
    set: &Path,
    interfaces: &ContractInterfacesRepository,
    summary: &mut LoadSummary,
) {
    let Some(set_name) = dir_name(set) else {
        return;
    };
    let Ok(entries) = fs::read_dir(set) else {
        return;
    };
    let mut paths: Vec<PathBuf> = entries.filter_map(|e| e.ok().map(|e| e.path())).collect();
    paths.sort();
    for path in paths {
        let Some(file_name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };
        let Some(stem) = file_name.strip_suffix(MANIFEST_SUFFIX) else {
            continue;
        };
        if !path.is_file() {
            continue;
        }
        let id = InterfaceId::new(format!("{set_name}/{stem}"));
        match parse_json::<InterfaceManifestJson>(&path) {
            Ok(manifest) => {
                interfaces.store(id.clone(), manifest);
                let info_path = set.join(format!("{stem}{INFO_SUFFIX}"));
                if let Ok(info_markdown) = fs::read_to_string(info_path) {
                    interfaces.store_info_markdown(id, info_markdown);
                }
                summary.interfaces += 1;
            }
            Err(err) => {
                tracing::warn!(id = %id, "skipping contract interface: {err:#}");
                interfaces.delete(&id);
                summary.skipped += 1;
            }
        }
    }
}

fn load_contracts(
    set: &Path,
    ignored_dirs: &[String],
    decorators: &ContractDecoratorRepository,
    interfaces: &ContractInterfacesRepository,
    summary: &mut LoadSummary,
) {
    let Some(set_name) = dir_name(set) else {
        return;
    };
    let Ok(entries) = fs::read_dir(set) else {
        return;
    };
    let mut paths: Vec<PathBuf> = entries
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|path| path.is_dir() && !is_ignored(path, ignored_dirs))
        .collect();
    paths.sort();
    for path in paths {
        let Some(contract_name) = dir_name(&path) else {
            continue;
        };
        let id = ContractId::new(format!("{set_name}/{contract_name}"));
        match load_contract(&id, &path, interfaces) {
            Ok(contract) => {
                decorators.store(contract);
                summary.contracts += 1;
            }
            Err(err) => {
                tracing::warn!(id = %id, "skipping contract decorator: {err:#}");
                decorators.delete(&id);
                summary.skipped += 1;
            }
        }
    }
}

fn load_contract(
    id: &ContractId,
    dir: &Path,
    interfaces: &ContractInterfacesRepository,
) -> anyhow::Result<StoredContract> {
    let artifact: ArtifactJson = parse_json(&dir.join("artifact.json"))?;
    let manifest: ManifestJson = parse_json(&dir.join("manifest.json"))?;
    let info_markdown = fs::read_to_string(dir.join("info.md")).ok();
    let decorator = ContractDecorator::resolve(id.clone(), &artifact, &manifest, interfaces);
    Ok(StoredContract {
        decorator,
        manifest,
        artifact,
        info_markdown,
    })
}

fn parse_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}
