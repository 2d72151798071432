use crate::types::InterfaceId;
use serde::{Deserialize, Serialize};

/// Contract's self-declared metadata: human-readable decorators for its ABI
/// elements plus the list of reusable interfaces it claims to implement.
/// Order of `implements` matters: later interfaces override earlier ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestJson {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub implements: Vec<String>,
    #[serde(default)]
    pub event_decorators: Vec<EventDecorator>,
    #[serde(default)]
    pub constructor_decorators: Vec<ConstructorDecorator>,
    #[serde(default)]
    pub function_decorators: Vec<FunctionDecorator>,
}

/// A named, reusable bundle of decorators shared between contracts
/// (e.g. `traits.erc20`). Has no ABI of its own; its decorators are matched
/// against a contract's actual ABI by signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceManifestJson {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub event_decorators: Vec<EventDecorator>,
    #[serde(default)]
    pub constructor_decorators: Vec<ConstructorDecorator>,
    #[serde(default)]
    pub function_decorators: Vec<FunctionDecorator>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceManifestWithId {
    pub id: InterfaceId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub event_decorators: Vec<EventDecorator>,
    #[serde(default)]
    pub constructor_decorators: Vec<ConstructorDecorator>,
    #[serde(default)]
    pub function_decorators: Vec<FunctionDecorator>,
}

impl InterfaceManifestWithId {
    pub fn new(id: InterfaceId, manifest: InterfaceManifestJson) -> Self {
        Self {
            id,
            name: manifest.name,
            description: manifest.description,
            tags: manifest.tags,
            event_decorators: manifest.event_decorators,
            constructor_decorators: manifest.constructor_decorators,
            function_decorators: manifest.function_decorators,
        }
    }
}

/// Per-parameter decorator. `parameters` narrows tuple members recursively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDecorator {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub recommended_types: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<ParameterDecorator>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstructorDecorator {
    /// Signature string, e.g. `constructor(address,uint256)`.
    pub signature: String,
    pub description: String,
    #[serde(default)]
    pub parameter_decorators: Vec<ParameterDecorator>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDecorator {
    /// Signature string, e.g. `transfer(address,uint256)`.
    pub signature: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub parameter_decorators: Vec<ParameterDecorator>,
    #[serde(default)]
    pub return_decorators: Vec<ParameterDecorator>,
    #[serde(default)]
    pub emittable_events: Vec<String>,
    #[serde(default)]
    pub read_only: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDecorator {
    /// Signature string, e.g. `Transfer(address,address,uint256)`.
    pub signature: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub parameter_decorators: Vec<ParameterDecorator>,
}
