// handlers/public/navigation.rs - GET /api/navigation/* handlers

use axum::extract::Query;
use serde::Deserialize;

use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::navigation::{self, Crumb, RouteItem, RouteTree};

#[derive(Debug, Deserialize)]
pub struct ChildrenQuery {
    pub section: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BreadcrumbQuery {
    pub path: Option<String>,
}

/// GET /api/navigation/tree - the whole route tree
pub async fn tree() -> ApiResult<&'static RouteTree> {
    Ok(ApiResponse::success(navigation::routes()))
}

/// GET /api/navigation/children?section=/menus - entries for a section dropdown
///
/// Unknown sections and leaves return an empty list.
pub async fn children(Query(query): Query<ChildrenQuery>) -> ApiResult<&'static [RouteItem]> {
    let section = required(query.section, "section")?;
    Ok(ApiResponse::success(navigation::routes().children(&section)))
}

/// GET /api/navigation/breadcrumbs?path=/menus/categories - breadcrumb trail
///
/// Paths outside the tree return an empty list.
pub async fn breadcrumbs(Query(query): Query<BreadcrumbQuery>) -> ApiResult<Vec<Crumb>> {
    let path = required(query.path, "path")?;
    Ok(ApiResponse::success(navigation::routes().breadcrumbs(&path)))
}

fn required(value: Option<String>, name: &str) -> Result<String, ApiError> {
    value.ok_or_else(|| ApiError::bad_request(format!("Missing required query parameter '{}'", name)))
}
