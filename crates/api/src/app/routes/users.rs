//! Handlers for the user resource.
//!
//! Each handler decodes its inputs, makes exactly one store call and encodes
//! the result. Input failures, including extractor rejections, become JSON 4xx
//! responses and store failures become JSON 5xx responses; nothing here can
//! take the process down.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection},
        Extension, Path,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use userapi_core::User;
use userapi_infra::UserStore;

use crate::app::dto::{self, Envelope};
use crate::app::errors;
use crate::app::services::AppServices;

pub async fn create_user(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Bytes, BytesRejection>,
) -> axum::response::Response {
    let body = match body {
        Ok(v) => v,
        Err(rejection) => return errors::bytes_rejection_to_response(rejection),
    };
    let fields = match dto::decode_user(&body) {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.users.insert(&fields).await {
        Ok(id) => {
            tracing::info!(%id, "user created");
            (StatusCode::CREATED, Json(Envelope::created(id))).into_response()
        }
        Err(e) => errors::store_error_to_response("insert", e),
    }
}

/// Returns the zero-valued user (200) when the id has no row.
pub async fn get_user(
    Extension(services): Extension<Arc<AppServices>>,
    id: Result<Path<String>, PathRejection>,
) -> axum::response::Response {
    let Path(id) = match id {
        Ok(v) => v,
        Err(rejection) => return errors::path_rejection_to_response(rejection),
    };
    let id = match dto::parse_user_id(&id) {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.users.find_by_id(id).await {
        Ok(Some(user)) => (StatusCode::OK, Json(user)).into_response(),
        Ok(None) => {
            tracing::debug!(%id, "user not found");
            (StatusCode::OK, Json(User::empty())).into_response()
        }
        Err(e) => errors::store_error_to_response("find_by_id", e),
    }
}

pub async fn list_users(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.users.find_all().await {
        Ok(users) => (StatusCode::OK, Json(users)).into_response(),
        Err(e) => errors::store_error_to_response("find_all", e),
    }
}

pub async fn update_user(
    Extension(services): Extension<Arc<AppServices>>,
    id: Result<Path<String>, PathRejection>,
    body: Result<Bytes, BytesRejection>,
) -> axum::response::Response {
    let Path(id) = match id {
        Ok(v) => v,
        Err(rejection) => return errors::path_rejection_to_response(rejection),
    };
    let id = match dto::parse_user_id(&id) {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    let body = match body {
        Ok(v) => v,
        Err(rejection) => return errors::bytes_rejection_to_response(rejection),
    };
    let fields = match dto::decode_user(&body) {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.users.update(id, &fields).await {
        Ok(affected) => {
            tracing::info!(%id, affected, "user updated");
            (StatusCode::OK, Json(Envelope::updated(id, affected))).into_response()
        }
        Err(e) => errors::store_error_to_response("update", e),
    }
}

pub async fn delete_user(
    Extension(services): Extension<Arc<AppServices>>,
    id: Result<Path<String>, PathRejection>,
) -> axum::response::Response {
    let Path(id) = match id {
        Ok(v) => v,
        Err(rejection) => return errors::path_rejection_to_response(rejection),
    };
    let id = match dto::parse_user_id(&id) {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.users.delete(id).await {
        Ok(affected) => {
            tracing::info!(%id, affected, "user deleted");
            (StatusCode::OK, Json(Envelope::deleted(id, affected))).into_response()
        }
        Err(e) => errors::store_error_to_response("delete", e),
    }
}
