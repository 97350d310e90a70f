use crate::api::error::ApiError;
use crate::{ApiResult, ServerState};

use std::io::{self, ErrorKind};
use std::panic::Location;
use std::path::{Component, Path, PathBuf};

use axum::{
    extract::{Path as UrlPath, Request, State},
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use log::{debug, warn};
use tower::ServiceExt;
use tower_http::services::ServeFile;

/// GET /file/{*path}
pub async fn serve_file(
    State(state): State<ServerState>,
    UrlPath(requested): UrlPath<String>,
    request: Request,
) -> ApiResult<Response> {
    let resolved = resolve_under_root(&state.static_root, &requested).await?;
    debug!("Serving file {}", resolved.display());

    Ok(ServeFile::new(resolved)
        .oneshot(request)
        .await
        .into_response())
}

/// Resolve a client-supplied relative path to a regular file under `root`.
///
/// Only plain name components are accepted. The canonical result must stay
/// inside the canonical root, so a symlink cannot lead out of it.
pub async fn resolve_under_root(root: &Path, requested: &str) -> ApiResult<PathBuf> {
    let mut relative = PathBuf::new();
    for component in Path::new(requested).components() {
        match component {
            Component::Normal(part) => relative.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                warn!("Rejected file path outside the static root: {requested}");
                return Err(ApiError::invalid_file_path());
            }
        }
    }

    if relative.as_os_str().is_empty() {
        return Err(ApiError::file_not_found());
    }

    let candidate = root.join(&relative);
    let metadata = match tokio::fs::metadata(&candidate).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => return Err(ApiError::file_not_found()),
        Err(e) => return Err(resolution_failed(&candidate, e)),
    };
    if !metadata.is_file() {
        return Err(ApiError::file_not_found());
    }

    let canonical_root = tokio::fs::canonicalize(root)
        .await
        .map_err(|e| resolution_failed(root, e))?;
    let canonical = tokio::fs::canonicalize(&candidate)
        .await
        .map_err(|e| resolution_failed(&candidate, e))?;

    if !canonical.starts_with(&canonical_root) {
        warn!(
            "Rejected {} resolving outside the static root",
            candidate.display()
        );
        return Err(ApiError::invalid_file_path());
    }

    Ok(canonical)
}

#[track_caller]
fn resolution_failed(path: &Path, e: io::Error) -> ApiError {
    log::error!("Failed to resolve {}: {e}", path.display());
    ApiError::Internal {
        message: "Invalid file path".into(),
        location: ErrorLocation::from(Location::caller()),
    }
}
