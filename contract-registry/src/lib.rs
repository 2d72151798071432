mod artifact;
mod decorator;
mod filters;
mod loader;
mod manifest;
mod repository;
mod signature;
mod types;

pub use artifact::{AbiEntry, AbiParameter, ArtifactJson};
pub use decorator::{
    ContractConstructor, ContractDecorator, ContractEvent, ContractFunction, ContractParameter,
    InterfacesProvider,
};
pub use filters::{AndList, ContractDecoratorFilters, InterfaceFilters, OrList};
pub use loader::{load_from_dir, LoadSummary};
pub use manifest::{
    ConstructorDecorator, EventDecorator, FunctionDecorator, InterfaceManifestJson,
    InterfaceManifestWithId, ManifestJson, ParameterDecorator,
};
pub use repository::{ContractDecoratorRepository, ContractInterfacesRepository, StoredContract};
pub use signature::{Signature, SignatureKind};
pub use types::{ContractId, ContractTag, InterfaceId};
