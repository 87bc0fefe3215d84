//! Resource management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use gantry_api_types::UnifiedResource;
use gantry_web::{
    extract_resource_filters,
    middleware::{require_admin, require_write},
    ApiResponse, AuthContext, QueryParams,
};
use tracing::info;

use crate::{
    context::ResourcesContext,
    errors::{RestError, RestResult},
    models::{CreateResourceRequest, UpdateResourceRequest},
    validation::{parse_resource_id, validate_description, validate_resource_name},
};

/// List resources with optional search and pagination
///
/// Supported query parameters: `page`, `limit`, `search`, `_sort`, `_order`
/// and direct field filters (`name`, `created_after`, ...).
pub async fn list_resources(
    State(ctx): State<ResourcesContext>,
    query: QueryParams,
) -> RestResult<impl IntoResponse> {
    info!("Listing resources with query: {:?}", query.0);

    let list_input = query.0.to_list_input();
    let filters = extract_resource_filters(&query.0.filters);

    let resource_repo = ctx.repositories.resource_repository();
    let list_response = resource_repo
        .find_with_list_input(filters, list_input)
        .await
        .map_err(RestError::Database)?;

    Ok(Json(ApiResponse::from(list_response)))
}

/// Get a specific resource by ID
pub async fn get_resource(
    State(ctx): State<ResourcesContext>,
    Path(resource_id): Path<String>,
) -> RestResult<impl IntoResponse> {
    info!("Getting resource with ID: {}", resource_id);

    let uuid = parse_resource_id(&resource_id)?;
    let resource_repo = ctx.repositories.resource_repository();

    let resource = resource_repo
        .find_by_uuid(uuid)
        .await
        .map_err(RestError::Database)?
        .ok_or_else(|| RestError::not_found("Resource", &resource_id))?;

    Ok(Json(ApiResponse::new(resource)))
}

/// Create a new resource
///
/// The response carries a fully formed resource with a fresh identifier and
/// current timestamps. Persistence is up to the storage backend; the stub
/// accepts the resource without storing it.
pub async fn create_resource(
    State(ctx): State<ResourcesContext>,
    Extension(auth): Extension<AuthContext>,
    Json(request): Json<CreateResourceRequest>,
) -> RestResult<impl IntoResponse> {
    info!("Creating resource: {}", request.name);

    require_write(&auth)?;
    validate_resource_name(&request.name)?;
    if let Some(ref description) = request.description {
        validate_description(description)?;
    }

    let resource = UnifiedResource::new(request.name, request.description, request.metadata);

    let resource_repo = ctx.repositories.resource_repository();
    let created = resource_repo
        .create(resource)
        .await
        .map_err(RestError::Database)?;

    Ok((StatusCode::CREATED, Json(ApiResponse::new(created))))
}

/// Update an existing resource
pub async fn update_resource(
    State(ctx): State<ResourcesContext>,
    Path(resource_id): Path<String>,
    Extension(auth): Extension<AuthContext>,
    Json(request): Json<UpdateResourceRequest>,
) -> RestResult<impl IntoResponse> {
    info!("Updating resource with ID: {}", resource_id);

    require_write(&auth)?;
    let uuid = parse_resource_id(&resource_id)?;

    if let Some(ref name) = request.name {
        validate_resource_name(name)?;
    }
    if let Some(ref description) = request.description {
        validate_description(description)?;
    }

    let resource_repo = ctx.repositories.resource_repository();

    let mut existing = resource_repo
        .find_by_uuid(uuid)
        .await
        .map_err(RestError::Database)?
        .ok_or_else(|| RestError::not_found("Resource", &resource_id))?;

    if let Some(name) = request.name {
        existing.name = name;
    }
    if let Some(description) = request.description {
        existing.description = Some(description);
    }
    if let Some(metadata) = request.metadata {
        existing.metadata = Some(metadata);
    }
    existing.updated_at = chrono::Utc::now();

    let updated = resource_repo
        .update(existing)
        .await
        .map_err(RestError::Database)?;

    Ok(Json(ApiResponse::new(updated)))
}

/// Delete a resource
pub async fn delete_resource(
    State(ctx): State<ResourcesContext>,
    Path(resource_id): Path<String>,
    Extension(auth): Extension<AuthContext>,
) -> RestResult<impl IntoResponse> {
    info!("Deleting resource with ID: {}", resource_id);

    require_admin(&auth)?;
    let uuid = parse_resource_id(&resource_id)?;
    let resource_repo = ctx.repositories.resource_repository();

    let existing = resource_repo
        .find_by_uuid(uuid)
        .await
        .map_err(RestError::Database)?;

    let existing = existing.ok_or_else(|| RestError::not_found("Resource", &resource_id))?;

    resource_repo
        .delete(&existing.id)
        .await
        .map_err(RestError::Database)?;

    Ok(StatusCode::NO_CONTENT)
}
