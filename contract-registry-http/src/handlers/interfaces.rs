use actix_web::{error, web, web::Json, HttpResponse};
use contract_registry::{
    ContractInterfacesRepository, InterfaceFilters, InterfaceId, InterfaceManifestJson,
    InterfaceManifestWithId, OrList,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterInterfaceRequest {
    pub id: InterfaceId,
    pub manifest: InterfaceManifestJson,
    #[serde(default)]
    pub info_markdown: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListInterfacesQuery {
    pub tags: Option<String>,
}

#[instrument(skip(interfaces, params), level = "debug")]
pub async fn register(
    interfaces: web::Data<ContractInterfacesRepository>,
    params: Json<RegisterInterfaceRequest>,
) -> Result<Json<InterfaceManifestWithId>, actix_web::Error> {
    let request = params.into_inner();
    interfaces.store(request.id.clone(), request.manifest.clone());
    if let Some(info_markdown) = request.info_markdown {
        interfaces.store_info_markdown(request.id.clone(), info_markdown);
    }
    Ok(Json(InterfaceManifestWithId::new(
        request.id,
        request.manifest,
    )))
}

pub async fn list(
    interfaces: web::Data<ContractInterfacesRepository>,
    query: web::Query<ListInterfacesQuery>,
) -> Result<Json<Vec<InterfaceManifestWithId>>, actix_web::Error> {
    let filters = InterfaceFilters {
        tags: query.tags.as_deref().map(OrList::parse).unwrap_or_default(),
    };
    Ok(Json(interfaces.all(&filters)))
}

pub async fn get(
    interfaces: web::Data<ContractInterfacesRepository>,
    path: web::Path<String>,
) -> Result<Json<InterfaceManifestWithId>, actix_web::Error> {
    let id = InterfaceId::from(path.into_inner());
    let manifest = interfaces.get(&id).ok_or_else(|| not_found(&id))?;
    Ok(Json(InterfaceManifestWithId::new(id, manifest)))
}

pub async fn info_markdown(
    interfaces: web::Data<ContractInterfacesRepository>,
    path: web::Path<String>,
) -> Result<HttpResponse, actix_web::Error> {
    let id = InterfaceId::from(path.into_inner());
    let info_markdown = interfaces.info_markdown(&id).ok_or_else(|| not_found(&id))?;
    Ok(HttpResponse::Ok()
        .content_type("text/markdown")
        .body(info_markdown))
}

#[instrument(skip(interfaces), level = "debug")]
pub async fn delete(
    interfaces: web::Data<ContractInterfacesRepository>,
    path: web::Path<String>,
) -> Result<HttpResponse, actix_web::Error> {
    let id = InterfaceId::from(path.into_inner());
    if interfaces.delete(&id) {
        Ok(HttpResponse::Ok().finish())
    } else {
        Err(not_found(&id))
    }
}

fn not_found(id: &InterfaceId) -> actix_web::Error {
    error::ErrorNotFound(format!("interface {id} is not registered"))
}
