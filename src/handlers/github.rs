//! GitHub proxy handlers
//!
//! HTTP surface for the framework listing and the star/unstar actions.

use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse};
use tracing::error;

use crate::error::AppError;
use crate::models::{
    sort_by_contributors, ContributorSort, RepositoryResult, RepositoryResultAuthenticated,
    TopFrameworksQuery,
};
use crate::services::github::GitHubError;
use crate::services::Auth;
use crate::AppState;

/// GET /github/top-frameworks
///
/// Lists the top Java frameworks by stars, each enriched with a contributor
/// count. With an Authorization header the results carry the viewer's star
/// state and GitHub sees the caller's token; without one the service token
/// is used and that field is omitted.
pub async fn top_frameworks(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<TopFrameworksQuery>,
) -> Result<HttpResponse, AppError> {
    let sort = ContributorSort::from_param(query.sort_by_contributors.as_deref());

    match caller_token(&req) {
        Some(token) => {
            let mut results: Vec<RepositoryResultAuthenticated> = state
                .github
                .search_frameworks(Auth::Caller(token))
                .await
                .map_err(map_github_error)?;
            sort_by_contributors(&mut results, sort);
            Ok(HttpResponse::Ok().json(results))
        }
        None => {
            let mut results: Vec<RepositoryResult> = state
                .github
                .search_frameworks(Auth::Service)
                .await
                .map_err(map_github_error)?;
            sort_by_contributors(&mut results, sort);
            Ok(HttpResponse::Ok().json(results))
        }
    }
}

/// POST /github/repository/{id}/star
///
/// Star a repository on behalf of the caller. The Authorization header is
/// required and forwarded to GitHub as-is.
pub async fn star_repository(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let token = caller_token(&req).ok_or(AppError::MissingHeader("Authorization"))?;

    state
        .github
        .star_repository(&token, &path.into_inner())
        .await
        .map_err(map_github_error)?;

    Ok(HttpResponse::Ok().finish())
}

/// DELETE /github/repository/{id}/star
///
/// Remove the caller's star from a repository.
pub async fn unstar_repository(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let token = caller_token(&req).ok_or(AppError::MissingHeader("Authorization"))?;

    state
        .github
        .unstar_repository(&token, &path.into_inner())
        .await
        .map_err(map_github_error)?;

    Ok(HttpResponse::Ok().finish())
}

/// The caller's Authorization header value, if present.
fn caller_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

/// Map outbound GitHub errors to application errors
fn map_github_error(e: GitHubError) -> AppError {
    match e {
        GitHubError::Query(msg) => {
            error!("GraphQL query failed: {msg}");
            AppError::Query(msg)
        }
        GitHubError::Upstream { status, body } => {
            error!("Error from GitHub - status {status}, body {body}");
            AppError::Upstream { status, body }
        }
        GitHubError::Transport(e) => AppError::Internal(e.to_string()),
        GitHubError::Join(e) => AppError::Internal(e.to_string()),
    }
}

/// Configure GitHub proxy routes
pub fn configure_github_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/github")
            .route("/top-frameworks", web::get().to(top_frameworks))
            .route("/repository/{id}/star", web::post().to(star_repository))
            .route("/repository/{id}/star", web::delete().to(unstar_repository)),
    );
}
