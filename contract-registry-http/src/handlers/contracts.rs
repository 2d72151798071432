use crate::metrics;
use actix_web::{error, web, web::Json, HttpResponse};
use contract_registry::{
    ArtifactJson, ContractDecorator, ContractDecoratorFilters, ContractDecoratorRepository,
    ContractId, ContractInterfacesRepository, InterfaceId, InterfaceManifestWithId, ManifestJson,
    OrList, Signature, SignatureKind, StoredContract,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::instrument;

#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterContractRequest {
    pub id: ContractId,
    pub artifact: ArtifactJson,
    pub manifest: ManifestJson,
    #[serde(default)]
    pub info_markdown: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListContractsQuery {
    pub tags: Option<String>,
    pub implements: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SetInterfacesRequest {
    pub interfaces: Vec<InterfaceId>,
}

#[derive(Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInterfacesRequest {
    #[serde(default)]
    pub add: Vec<InterfaceId>,
    #[serde(default)]
    pub remove: Vec<InterfaceId>,
}

#[instrument(skip(decorators, interfaces, params), level = "debug")]
pub async fn register(
    decorators: web::Data<ContractDecoratorRepository>,
    interfaces: web::Data<ContractInterfacesRepository>,
    params: Json<RegisterContractRequest>,
) -> Result<Json<ContractDecorator>, actix_web::Error> {
    let request = params.into_inner();
    let decorator = ContractDecorator::resolve(
        request.id,
        &request.artifact,
        &request.manifest,
        interfaces.get_ref(),
    );
    decorators.store(StoredContract {
        decorator: decorator.clone(),
        manifest: request.manifest,
        artifact: request.artifact,
        info_markdown: request.info_markdown,
    });
    metrics::count_resolve_decorator("register");
    Ok(Json(decorator))
}

pub async fn list(
    decorators: web::Data<ContractDecoratorRepository>,
    query: web::Query<ListContractsQuery>,
) -> Result<Json<Vec<ContractDecorator>>, actix_web::Error> {
    let filters = ContractDecoratorFilters {
        tags: query.tags.as_deref().map(OrList::parse).unwrap_or_default(),
        implements: query
            .implements
            .as_deref()
            .map(OrList::parse)
            .unwrap_or_default(),
    };
    Ok(Json(decorators.all(&filters)))
}

pub async fn get(
    decorators: web::Data<ContractDecoratorRepository>,
    path: web::Path<String>,
) -> Result<Json<ContractDecorator>, actix_web::Error> {
    let id = ContractId::from(path.into_inner());
    decorators.get(&id).map(Json).ok_or_else(|| not_found(&id))
}

pub async fn manifest_json(
    decorators: web::Data<ContractDecoratorRepository>,
    path: web::Path<String>,
) -> Result<Json<ManifestJson>, actix_web::Error> {
    let id = ContractId::from(path.into_inner());
    decorators
        .manifest_json(&id)
        .map(Json)
        .ok_or_else(|| not_found(&id))
}

pub async fn artifact_json(
    decorators: web::Data<ContractDecoratorRepository>,
    path: web::Path<String>,
) -> Result<Json<ArtifactJson>, actix_web::Error> {
    let id = ContractId::from(path.into_inner());
    decorators
        .artifact_json(&id)
        .map(Json)
        .ok_or_else(|| not_found(&id))
}

pub async fn info_markdown(
    decorators: web::Data<ContractDecoratorRepository>,
    path: web::Path<String>,
) -> Result<HttpResponse, actix_web::Error> {
    let id = ContractId::from(path.into_inner());
    let info_markdown = decorators.info_markdown(&id).ok_or_else(|| not_found(&id))?;
    Ok(HttpResponse::Ok()
        .content_type("text/markdown")
        .body(info_markdown))
}

#[instrument(skip(decorators), level = "debug")]
pub async fn delete(
    decorators: web::Data<ContractDecoratorRepository>,
    path: web::Path<String>,
) -> Result<HttpResponse, actix_web::Error> {
    let id = ContractId::from(path.into_inner());
    if decorators.delete(&id) {
        Ok(HttpResponse::Ok().finish())
    } else {
        Err(not_found(&id))
    }
}

pub async fn suggested_interfaces(
    decorators: web::Data<ContractDecoratorRepository>,
    interfaces: web::Data<ContractInterfacesRepository>,
    path: web::Path<String>,
) -> Result<Json<Vec<InterfaceManifestWithId>>, actix_web::Error> {
    let id = ContractId::from(path.into_inner());
    let stored = decorators.get_stored(&id).ok_or_else(|| not_found(&id))?;
    let (functions, events) = abi_signatures(&stored.artifact);
    let suggestions = interfaces
        .all_with_partially_matching_decorators(&functions, &events)
        .into_iter()
        .filter(|interface| !stored.decorator.implements.contains(&interface.id))
        .collect();
    Ok(Json(suggestions))
}

#[instrument(skip(decorators, interfaces, params), level = "debug")]
pub async fn set_interfaces(
    decorators: web::Data<ContractDecoratorRepository>,
    interfaces: web::Data<ContractInterfacesRepository>,
    path: web::Path<String>,
    params: Json<SetInterfacesRequest>,
) -> Result<Json<ContractDecorator>, actix_web::Error> {
    let id = ContractId::from(path.into_inner());
    let stored = decorators.get_stored(&id).ok_or_else(|| not_found(&id))?;
    let implements = params.into_inner().interfaces;
    ensure_known(&interfaces, &implements)?;
    resolve_with_interfaces(&decorators, &interfaces, stored, implements, "set_interfaces")
}

#[instrument(skip(decorators, interfaces, params), level = "debug")]
pub async fn update_interfaces(
    decorators: web::Data<ContractDecoratorRepository>,
    interfaces: web::Data<ContractInterfacesRepository>,
    path: web::Path<String>,
    params: Json<UpdateInterfacesRequest>,
) -> Result<Json<ContractDecorator>, actix_web::Error> {
    let id = ContractId::from(path.into_inner());
    let stored = decorators.get_stored(&id).ok_or_else(|| not_found(&id))?;
    let request = params.into_inner();
    ensure_known(&interfaces, &request.add)?;

    let mut implements: Vec<InterfaceId> = stored
        .manifest
        .implements
        .iter()
        .map(|id| InterfaceId::from(id.as_str()))
        .filter(|id| !request.remove.contains(id))
        .collect();
    // Added interfaces go last, giving them the highest override priority
    for added in request.add {
        if !implements.contains(&added) {
            implements.push(added);
        }
    }
    resolve_with_interfaces(
        &decorators,
        &interfaces,
        stored,
        implements,
        "update_interfaces",
    )
}

fn resolve_with_interfaces(
    decorators: &ContractDecoratorRepository,
    interfaces: &ContractInterfacesRepository,
    mut stored: StoredContract,
    implements: Vec<InterfaceId>,
    endpoint: &str,
) -> Result<Json<ContractDecorator>, actix_web::Error> {
    stored.manifest.implements = implements
        .into_iter()
        .map(InterfaceId::into_string)
        .collect();
    let decorator = ContractDecorator::resolve(
        stored.decorator.id.clone(),
        &stored.artifact,
        &stored.manifest,
        interfaces,
    );
    stored.decorator = decorator.clone();
    decorators.store(stored);
    metrics::count_resolve_decorator(endpoint);
    Ok(Json(decorator))
}

fn ensure_known(
    interfaces: &ContractInterfacesRepository,
    ids: &[InterfaceId],
) -> Result<(), actix_web::Error> {
    match ids.iter().find(|id| interfaces.get(id).is_none()) {
        Some(unknown) => Err(error::ErrorBadRequest(format!(
            "interface {unknown} is not registered"
        ))),
        None => Ok(()),
    }
}

fn abi_signatures(artifact: &ArtifactJson) -> (HashSet<String>, HashSet<String>) {
    let mut functions = HashSet::new();
    let mut events = HashSet::new();
    for entry in &artifact.abi {
        if let Some(signature) = Signature::from_abi(entry) {
            match signature.kind() {
                SignatureKind::Function => {
                    functions.insert(signature.to_string());
                }
                SignatureKind::Event => {
                    events.insert(signature.to_string());
                }
                SignatureKind::Constructor => {}
            }
        }
    }
    (functions, events)
}

fn not_found(id: &ContractId) -> actix_web::Error {
    error::ErrorNotFound(format!("contract {id} is not registered"))
}
