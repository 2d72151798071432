use crate::{
    artifact::{AbiEntry, AbiParameter, ArtifactJson},
    manifest::{
        ConstructorDecorator, EventDecorator, FunctionDecorator, InterfaceManifestJson,
        ManifestJson, ParameterDecorator,
    },
    signature::{Signature, SignatureKind},
    types::{ContractId, ContractTag, InterfaceId},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Resolves interface identifiers declared in a contract manifest to their
/// decorator sets. Backed by whatever store the caller has; identifiers the
/// provider cannot resolve contribute no decorators and raise no error.
pub trait InterfacesProvider {
    fn interface(&self, id: &InterfaceId) -> Option<InterfaceManifestJson>;
}

impl<F> InterfacesProvider for F
where
    F: Fn(&InterfaceId) -> Option<InterfaceManifestJson>,
{
    fn interface(&self, id: &InterfaceId) -> Option<InterfaceManifestJson> {
        self(id)
    }
}

impl InterfacesProvider for HashMap<InterfaceId, InterfaceManifestJson> {
    fn interface(&self, id: &InterfaceId) -> Option<InterfaceManifestJson> {
        self.get(id).cloned()
    }
}

/// Fully resolved contract metadata: every ABI element of the artifact,
/// in declaration order, with human-readable decorators merged in from the
/// contract's own manifest and its declared interfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractDecorator {
    pub id: ContractId,
    pub name: Option<String>,
    pub description: Option<String>,
    pub binary: String,
    pub tags: Vec<ContractTag>,
    pub implements: Vec<InterfaceId>,
    pub constructors: Vec<ContractConstructor>,
    pub functions: Vec<ContractFunction>,
    pub events: Vec<ContractEvent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractParameter {
    pub name: String,
    pub description: String,
    pub solidity_name: String,
    pub solidity_type: String,
    pub recommended_types: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<ContractParameter>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractConstructor {
    pub inputs: Vec<ContractParameter>,
    pub description: String,
    pub payable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractFunction {
    pub name: String,
    pub description: String,
    pub solidity_name: String,
    pub inputs: Vec<ContractParameter>,
    pub outputs: Vec<ContractParameter>,
    pub emittable_events: Vec<String>,
    pub read_only: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractEvent {
    pub name: String,
    pub description: String,
    pub solidity_name: String,
    pub inputs: Vec<ContractParameter>,
}

impl ContractDecorator {
    /// Merges decorators from the contract's own manifest and its declared
    /// interfaces onto the artifact's ABI.
    ///
    /// Precedence per ABI element, lowest to highest: raw ABI fallback, the
    /// manifest's own decorator, then interface decorators in `implements`
    /// declaration order. The highest-priority matching decorator wins
    /// outright; decorators are never field-merged. Output order follows ABI
    /// declaration order. The function is total: unresolvable interfaces are
    /// skipped, decorators matching nothing are dropped, and undecorated ABI
    /// elements fall back to their raw parameter names and types.
    pub fn resolve(
        id: ContractId,
        artifact: &ArtifactJson,
        manifest: &ManifestJson,
        interfaces_provider: &impl InterfacesProvider,
    ) -> Self {
        let interfaces: Vec<InterfaceManifestJson> = manifest
            .implements
            .iter()
            .filter_map(|name| {
                let interface_id = InterfaceId::from(name.as_str());
                let resolved = interfaces_provider.interface(&interface_id);
                if resolved.is_none() {
                    tracing::debug!(
                        interface = name.as_str(),
                        "declared interface is not registered, skipping"
                    );
                }
                resolved
            })
            .collect();

        let tags = collect_tags(manifest, &interfaces);

        // Decorator sources ordered lowest to highest priority; lookups scan
        // them in reverse so the last declared interface wins.
        let constructor_sources = decorator_sources(
            SignatureKind::Constructor,
            &manifest.constructor_decorators,
            interfaces
                .iter()
                .map(|i| i.constructor_decorators.as_slice()),
            |decorator: &ConstructorDecorator| &decorator.signature,
        );
        let function_sources = decorator_sources(
            SignatureKind::Function,
            &manifest.function_decorators,
            interfaces.iter().map(|i| i.function_decorators.as_slice()),
            |decorator: &FunctionDecorator| &decorator.signature,
        );
        let event_sources = decorator_sources(
            SignatureKind::Event,
            &manifest.event_decorators,
            interfaces.iter().map(|i| i.event_decorators.as_slice()),
            |decorator: &EventDecorator| &decorator.signature,
        );

        let mut constructors = vec![];
        let mut functions = vec![];
        let mut events = vec![];
        for entry in &artifact.abi {
            let Some(signature) = Signature::from_abi(entry) else {
                continue;
            };
            match signature.kind() {
                SignatureKind::Constructor => constructors.push(resolve_constructor(
                    entry,
                    &signature,
                    find_decorator(&constructor_sources, &signature),
                )),
                SignatureKind::Function => functions.push(resolve_function(
                    entry,
                    find_decorator(&function_sources, &signature),
                )),
                SignatureKind::Event => events.push(resolve_event(
                    entry,
                    find_decorator(&event_sources, &signature),
                )),
            }
        }

        Self {
            id,
            name: manifest.name.clone(),
            description: manifest.description.clone(),
            binary: artifact.bytecode.clone(),
            tags,
            implements: manifest
                .implements
                .iter()
                .map(|name| InterfaceId::from(name.as_str()))
                .collect(),
            constructors,
            functions,
            events,
        }
    }
}

/// Manifest tags followed by tags of every resolved interface, first
/// occurrence wins.
fn collect_tags(manifest: &ManifestJson, interfaces: &[InterfaceManifestJson]) -> Vec<ContractTag> {
    let mut tags: Vec<ContractTag> = vec![];
    for tag in manifest
        .tags
        .iter()
        .chain(interfaces.iter().flat_map(|i| i.tags.iter()))
    {
        let tag = ContractTag::from(tag.as_str());
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

/// One signature-keyed map per decorator source, ordered lowest to highest
/// priority: the manifest's own decorators first, then each interface in
/// `implements` declaration order. Within one source the first decorator for
/// a signature wins; unparseable signatures are dropped.
fn decorator_sources<'a, T>(
    kind: SignatureKind,
    own: &'a [T],
    interfaces: impl Iterator<Item = &'a [T]>,
    signature_of: impl Fn(&T) -> &str,
) -> Vec<HashMap<Signature, &'a T>> {
    std::iter::once(own)
        .chain(interfaces)
        .map(|decorators| {
            let mut map = HashMap::new();
            for decorator in decorators {
                if let Some(signature) = Signature::parse(kind, signature_of(decorator)) {
                    map.entry(signature).or_insert(decorator);
                }
            }
            map
        })
        .collect()
}

fn find_decorator<'a, T>(
    sources: &[HashMap<Signature, &'a T>],
    signature: &Signature,
) -> Option<&'a T> {
    sources
        .iter()
        .rev()
        .find_map(|source| source.get(signature).copied())
}

fn resolve_constructor(
    entry: &AbiEntry,
    signature: &Signature,
    decorator: Option<&ConstructorDecorator>,
) -> ContractConstructor {
    ContractConstructor {
        inputs: overlay_parameters(
            &entry.inputs,
            decorator.map(|d| d.parameter_decorators.as_slice()),
        ),
        description: decorator
            .map(|d| d.description.clone())
            .unwrap_or_else(|| signature.to_string()),
        payable: entry.is_payable(),
    }
}

fn resolve_function(entry: &AbiEntry, decorator: Option<&FunctionDecorator>) -> ContractFunction {
    let solidity_name = entry.name.clone().unwrap_or_default();
    ContractFunction {
        name: decorator
            .map(|d| d.name.clone())
            .unwrap_or_else(|| solidity_name.clone()),
        description: decorator
            .map(|d| d.description.clone())
            .unwrap_or_else(|| solidity_name.clone()),
        inputs: overlay_parameters(
            &entry.inputs,
            decorator.map(|d| d.parameter_decorators.as_slice()),
        ),
        outputs: overlay_parameters(
            entry.outputs.as_deref().unwrap_or_default(),
            decorator.map(|d| d.return_decorators.as_slice()),
        ),
        emittable_events: decorator
            .map(|d| d.emittable_events.clone())
            .unwrap_or_default(),
        read_only: entry.is_read_only() || decorator.is_some_and(|d| d.read_only),
        solidity_name,
    }
}

fn resolve_event(entry: &AbiEntry, decorator: Option<&EventDecorator>) -> ContractEvent {
    let solidity_name = entry.name.clone().unwrap_or_default();
    ContractEvent {
        name: decorator
            .map(|d| d.name.clone())
            .unwrap_or_else(|| solidity_name.clone()),
        description: decorator
            .map(|d| d.description.clone())
            .unwrap_or_else(|| solidity_name.clone()),
        inputs: overlay_parameters(
            &entry.inputs,
            decorator.map(|d| d.parameter_decorators.as_slice()),
        ),
        solidity_name,
    }
}

/// Overlays positional parameter decorators onto the ABI's parameters.
/// A missing decorator at some position leaves the raw ABI name as both name
/// and description. Tuple components recurse with the decorator's nested
/// parameters when present.
fn overlay_parameters(
    abi: &[AbiParameter],
    decorators: Option<&[ParameterDecorator]>,
) -> Vec<ContractParameter> {
    let decorators = decorators.unwrap_or_default();
    abi.iter()
        .enumerate()
        .map(|(position, parameter)| {
            let decorator = decorators.get(position);
            ContractParameter {
                name: decorator
                    .map(|d| d.name.clone())
                    .unwrap_or_else(|| parameter.name.clone()),
                description: decorator
                    .map(|d| d.description.clone())
                    .unwrap_or_else(|| parameter.name.clone()),
                solidity_name: parameter.name.clone(),
                solidity_type: parameter.solidity_type.clone(),
                recommended_types: decorator
                    .map(|d| d.recommended_types.clone())
                    .unwrap_or_default(),
                parameters: (!parameter.components.is_empty()).then(|| {
                    overlay_parameters(
                        &parameter.components,
                        decorator.and_then(|d| d.parameters.as_deref()),
                    )
                }),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parameter(name: &str, solidity_type: &str) -> AbiParameter {
        AbiParameter {
            name: name.to_string(),
            solidity_type: solidity_type.to_string(),
            internal_type: None,
            indexed: None,
            components: vec![],
        }
    }

    fn constructor_abi(types: &[&str]) -> AbiEntry {
        AbiEntry {
            kind: "constructor".to_string(),
            name: None,
            inputs: types.iter().map(|t| parameter("arg1", t)).collect(),
            outputs: None,
            state_mutability: Some("nonpayable".to_string()),
            anonymous: None,
        }
    }

    fn function_abi(name: &str, types: &[&str]) -> AbiEntry {
        AbiEntry {
            kind: "function".to_string(),
            name: Some(name.to_string()),
            inputs: types.iter().map(|t| parameter("arg1", t)).collect(),
            outputs: Some(vec![]),
            state_mutability: Some("nonpayable".to_string()),
            anonymous: None,
        }
    }

    fn event_abi(name: &str, types: &[&str]) -> AbiEntry {
        AbiEntry {
            kind: "event".to_string(),
            name: Some(name.to_string()),
            inputs: types.iter().map(|t| parameter("arg1", t)).collect(),
            outputs: None,
            state_mutability: None,
            anonymous: Some(false),
        }
    }

    fn artifact(abi: Vec<AbiEntry>) -> ArtifactJson {
        ArtifactJson {
            contract_name: "Test".to_string(),
            source_name: Some("Test.sol".to_string()),
            abi,
            bytecode: "0x60".to_string(),
            deployed_bytecode: None,
        }
    }

    fn function_decorator(signature: &str, text: &str) -> FunctionDecorator {
        FunctionDecorator {
            signature: signature.to_string(),
            name: text.to_string(),
            description: text.to_string(),
            parameter_decorators: vec![ParameterDecorator {
                name: "Arg1".to_string(),
                description: "first argument".to_string(),
                recommended_types: vec![],
                parameters: None,
            }],
            return_decorators: vec![],
            emittable_events: vec![],
            read_only: false,
        }
    }

    fn event_decorator(signature: &str, text: &str) -> EventDecorator {
        EventDecorator {
            signature: signature.to_string(),
            name: text.to_string(),
            description: text.to_string(),
            parameter_decorators: vec![],
        }
    }

    fn constructor_decorator(signature: &str, text: &str) -> ConstructorDecorator {
        ConstructorDecorator {
            signature: signature.to_string(),
            description: text.to_string(),
            parameter_decorators: vec![],
        }
    }

    fn empty_manifest() -> ManifestJson {
        ManifestJson {
            name: Some("name".to_string()),
            description: Some("description".to_string()),
            tags: vec![],
            implements: vec![],
            event_decorators: vec![],
            constructor_decorators: vec![],
            function_decorators: vec![],
        }
    }

    fn interface(
        functions: Vec<FunctionDecorator>,
        events: Vec<EventDecorator>,
    ) -> InterfaceManifestJson {
        InterfaceManifestJson {
            name: None,
            description: None,
            tags: vec![],
            event_decorators: events,
            constructor_decorators: vec![],
            function_decorators: functions,
        }
    }

    fn no_interfaces(_: &InterfaceId) -> Option<InterfaceManifestJson> {
        None
    }

    #[test]
    fn later_declared_interface_overrides_earlier_one_and_own_manifest() {
        let artifact = artifact(vec![
            function_abi("fromDecorator", &["string"]),
            function_abi("fromOverride1", &["uint256"]),
        ]);
        let manifest = ManifestJson {
            implements: vec!["override-1".to_string(), "override-2".to_string()],
            function_decorators: vec![function_decorator("fromDecorator(string)", "not-overridden")],
            ..empty_manifest()
        };
        let interfaces = HashMap::from([
            (
                InterfaceId::from("override-1"),
                interface(
                    vec![function_decorator("fromOverride1(uint256)", "from-override-1")],
                    vec![],
                ),
            ),
            (
                InterfaceId::from("override-2"),
                interface(
                    vec![function_decorator("fromOverride1(uint256)", "from-override-2")],
                    vec![],
                ),
            ),
        ]);

        let resolved = ContractDecorator::resolve(
            ContractId::from("contract-id"),
            &artifact,
            &manifest,
            &interfaces,
        );

        assert_eq!(resolved.functions[0].description, "not-overridden");
        assert_eq!(resolved.functions[1].description, "from-override-2");
    }

    #[test]
    fn interface_decorator_replaces_own_manifest_decorator() {
        let artifact = artifact(vec![function_abi("fromOverride1", &["uint256"])]);
        let manifest = ManifestJson {
            implements: vec!["override-1".to_string()],
            function_decorators: vec![function_decorator("fromOverride1(uint256)", "own")],
            ..empty_manifest()
        };
        let interfaces = HashMap::from([(
            InterfaceId::from("override-1"),
            interface(
                vec![function_decorator("fromOverride1(uint256)", "interface")],
                vec![],
            ),
        )]);

        let resolved = ContractDecorator::resolve(
            ContractId::from("contract-id"),
            &artifact,
            &manifest,
            &interfaces,
        );

        assert_eq!(resolved.functions[0].description, "interface");
    }

    #[test]
    fn undecorated_abi_element_falls_back_to_raw_abi_data() {
        let artifact = artifact(vec![function_abi("extraFunction", &["bool"])]);
        let manifest = empty_manifest();

        let resolved = ContractDecorator::resolve(
            ContractId::from("contract-id"),
            &artifact,
            &manifest,
            &no_interfaces,
        );

        let function = &resolved.functions[0];
        assert_eq!(function.name, "extraFunction");
        assert_eq!(function.description, "extraFunction");
        assert_eq!(function.solidity_name, "extraFunction");
        assert_eq!(function.inputs[0].name, "arg1");
        assert_eq!(function.inputs[0].description, "arg1");
        assert_eq!(function.inputs[0].solidity_type, "bool");
    }

    #[test]
    fn unresolvable_interface_contributes_nothing() {
        let artifact = artifact(vec![function_abi("f", &["uint256"])]);
        let manifest = ManifestJson {
            implements: vec!["not-yet-registered".to_string()],
            ..empty_manifest()
        };

        let resolved = ContractDecorator::resolve(
            ContractId::from("contract-id"),
            &artifact,
            &manifest,
            &no_interfaces,
        );

        assert_eq!(resolved.implements, vec![InterfaceId::from("not-yet-registered")]);
        assert_eq!(resolved.functions.len(), 1);
        assert_eq!(resolved.functions[0].name, "f");
    }

    #[test]
    fn decorator_matching_nothing_in_abi_is_dropped() {
        let artifact = artifact(vec![function_abi("f", &["uint256"])]);
        let manifest = ManifestJson {
            function_decorators: vec![
                function_decorator("f(uint256)", "decorated"),
                function_decorator("ghost(string)", "dead"),
            ],
            ..empty_manifest()
        };

        let resolved = ContractDecorator::resolve(
            ContractId::from("contract-id"),
            &artifact,
            &manifest,
            &no_interfaces,
        );

        assert_eq!(resolved.functions.len(), 1);
        assert_eq!(resolved.functions[0].description, "decorated");
    }

    #[test]
    fn overloads_match_decorators_by_full_signature() {
        let artifact = artifact(vec![
            function_abi("f", &["uint256"]),
            function_abi("f", &["string"]),
        ]);
        let manifest = ManifestJson {
            function_decorators: vec![function_decorator("f(uint256)", "by-uint")],
            ..empty_manifest()
        };

        let resolved = ContractDecorator::resolve(
            ContractId::from("contract-id"),
            &artifact,
            &manifest,
            &no_interfaces,
        );

        assert_eq!(resolved.functions[0].description, "by-uint");
        assert_eq!(resolved.functions[1].description, "f");
    }

    #[test]
    fn output_follows_abi_declaration_order() {
        let artifact = artifact(vec![
            function_abi("b", &[]),
            function_abi("a", &[]),
            event_abi("E", &["uint256"]),
            constructor_abi(&["string"]),
        ]);
        let manifest = ManifestJson {
            function_decorators: vec![
                function_decorator("a()", "a-decorated"),
                function_decorator("b()", "b-decorated"),
            ],
            ..empty_manifest()
        };

        let resolved = ContractDecorator::resolve(
            ContractId::from("contract-id"),
            &artifact,
            &manifest,
            &no_interfaces,
        );

        let names: Vec<_> = resolved
            .functions
            .iter()
            .map(|f| f.solidity_name.as_str())
            .collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(resolved.constructors.len(), 1);
        assert_eq!(resolved.events.len(), 1);
    }

    #[test]
    fn parameter_overlay_is_positional_with_raw_fallback() {
        let mut entry = function_abi("transfer", &[]);
        entry.inputs = vec![parameter("to", "address"), parameter("amount", "uint256")];
        let artifact = artifact(vec![entry]);
        let manifest = ManifestJson {
            function_decorators: vec![FunctionDecorator {
                signature: "transfer(address,uint256)".to_string(),
                name: "Transfer".to_string(),
                description: "Transfers tokens".to_string(),
                parameter_decorators: vec![ParameterDecorator {
                    name: "Recipient".to_string(),
                    description: "Receiving address".to_string(),
                    recommended_types: vec!["traits.erc20".to_string()],
                    parameters: None,
                }],
                return_decorators: vec![],
                emittable_events: vec![],
                read_only: false,
            }],
            ..empty_manifest()
        };

        let resolved = ContractDecorator::resolve(
            ContractId::from("contract-id"),
            &artifact,
            &manifest,
            &no_interfaces,
        );

        let inputs = &resolved.functions[0].inputs;
        assert_eq!(inputs[0].name, "Recipient");
        assert_eq!(inputs[0].description, "Receiving address");
        assert_eq!(inputs[0].solidity_name, "to");
        assert_eq!(inputs[0].recommended_types, vec!["traits.erc20"]);
        // second parameter has no decorator at its position
        assert_eq!(inputs[1].name, "amount");
        assert_eq!(inputs[1].description, "amount");
        assert_eq!(inputs[1].recommended_types, Vec::<String>::new());
    }

    #[test]
    fn state_mutability_drives_read_only_and_payable() {
        let mut view_function = function_abi("balanceOf", &["address"]);
        view_function.state_mutability = Some("view".to_string());
        let mut payable_constructor = constructor_abi(&["string"]);
        payable_constructor.state_mutability = Some("payable".to_string());
        let artifact = artifact(vec![view_function, payable_constructor]);

        let resolved = ContractDecorator::resolve(
            ContractId::from("contract-id"),
            &artifact,
            &empty_manifest(),
            &no_interfaces,
        );

        assert!(resolved.functions[0].read_only);
        assert!(resolved.constructors[0].payable);
    }

    #[test]
    fn constructor_decorator_from_own_manifest_applies() {
        let artifact = artifact(vec![constructor_abi(&["string"])]);
        let manifest = ManifestJson {
            constructor_decorators: vec![constructor_decorator(
                "constructor(string)",
                "Creates the token",
            )],
            ..empty_manifest()
        };

        let resolved = ContractDecorator::resolve(
            ContractId::from("contract-id"),
            &artifact,
            &manifest,
            &no_interfaces,
        );

        assert_eq!(resolved.constructors[0].description, "Creates the token");
    }

    #[test]
    fn constructor_decorator_from_interface_overrides_own_manifest() {
        let artifact = artifact(vec![constructor_abi(&["string"]), constructor_abi(&["uint256"])]);
        let manifest = ManifestJson {
            implements: vec!["base".to_string()],
            constructor_decorators: vec![constructor_decorator("constructor(string)", "own")],
            ..empty_manifest()
        };
        let interfaces = HashMap::from([(
            InterfaceId::from("base"),
            InterfaceManifestJson {
                constructor_decorators: vec![
                    constructor_decorator("constructor(string)", "from-base"),
                    constructor_decorator("constructor(uint256)", "from-base-uint"),
                ],
                ..interface(vec![], vec![])
            },
        )]);

        let resolved = ContractDecorator::resolve(
            ContractId::from("contract-id"),
            &artifact,
            &manifest,
            &interfaces,
        );

        assert_eq!(resolved.constructors[0].description, "from-base");
        assert_eq!(resolved.constructors[1].description, "from-base-uint");
    }

    #[test]
    fn event_decorators_follow_the_same_override_chain() {
        let artifact = artifact(vec![event_abi("Transfer", &["address", "uint256"])]);
        let manifest = ManifestJson {
            implements: vec!["erc20".to_string()],
            event_decorators: vec![event_decorator("Transfer(address,uint256)", "own")],
            ..empty_manifest()
        };
        let interfaces = HashMap::from([(
            InterfaceId::from("erc20"),
            interface(
                vec![],
                vec![event_decorator("Transfer(address,uint256)", "from-erc20")],
            ),
        )]);

        let resolved = ContractDecorator::resolve(
            ContractId::from("contract-id"),
            &artifact,
            &manifest,
            &interfaces,
        );

        assert_eq!(resolved.events[0].description, "from-erc20");
        assert_eq!(resolved.events[0].solidity_name, "Transfer");
    }

    #[test]
    fn tags_union_manifest_and_interface_tags_in_order() {
        let artifact = artifact(vec![]);
        let manifest = ManifestJson {
            tags: vec!["token".to_string(), "erc20".to_string()],
            implements: vec!["erc20".to_string()],
            ..empty_manifest()
        };
        let interfaces = HashMap::from([(
            InterfaceId::from("erc20"),
            InterfaceManifestJson {
                tags: vec!["erc20".to_string(), "fungible".to_string()],
                ..interface(vec![], vec![])
            },
        )]);

        let resolved = ContractDecorator::resolve(
            ContractId::from("contract-id"),
            &artifact,
            &manifest,
            &interfaces,
        );

        assert_eq!(
            resolved.tags,
            vec![
                ContractTag::from("token"),
                ContractTag::from("erc20"),
                ContractTag::from("fungible"),
            ]
        );
    }

    #[test]
    fn resolution_is_deterministic() {
        let artifact = artifact(vec![
            constructor_abi(&["string"]),
            function_abi("f", &["uint256"]),
            event_abi("E", &["bool"]),
        ]);
        let manifest = ManifestJson {
            implements: vec!["iface".to_string()],
            function_decorators: vec![function_decorator("f(uint256)", "own")],
            ..empty_manifest()
        };
        let interfaces = HashMap::from([(
            InterfaceId::from("iface"),
            interface(vec![function_decorator("f(uint256)", "iface")], vec![]),
        )]);

        let id = ContractId::from("contract-id");
        let first = ContractDecorator::resolve(id.clone(), &artifact, &manifest, &interfaces);
        let second = ContractDecorator::resolve(id, &artifact, &manifest, &interfaces);
        assert_eq!(first, second);
    }

    #[test]
    fn every_abi_element_appears_exactly_once() {
        let artifact = artifact(vec![
            constructor_abi(&["string"]),
            function_abi("decorated", &["uint256"]),
            function_abi("plain", &["bool"]),
            event_abi("Decorated", &["uint256"]),
            event_abi("Plain", &["bool"]),
        ]);
        let manifest = ManifestJson {
            function_decorators: vec![function_decorator("decorated(uint256)", "d")],
            event_decorators: vec![event_decorator("Decorated(uint256)", "d")],
            ..empty_manifest()
        };

        let resolved = ContractDecorator::resolve(
            ContractId::from("contract-id"),
            &artifact,
            &manifest,
            &no_interfaces,
        );

        assert_eq!(resolved.constructors.len(), 1);
        assert_eq!(resolved.functions.len(), 2);
        assert_eq!(resolved.events.len(), 2);
    }
}
