//! Route handlers and response shapes.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::Method;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};

use skillmap_core::types::SkillRef;

use crate::error::ApiError;
use crate::state::AppState;

/// Marker reported when a path was computed from start/end parameters.
const PATH_SOURCE_PARAMS: &str = "start_end_params";

/// Build the application router.
///
/// `url_prefix` (already normalized, possibly empty) is applied to the data
/// routes only; the health check always stays at the root.
pub fn router(state: Arc<AppState>, url_prefix: &str) -> Router {
    let api = Router::new()
        .route("/api/skill/{skill_id}", get(skill_details))
        .route(
            "/api/skills/{skill_name}/prerequisites",
            get(skill_prerequisites),
        )
        .route("/api/skill-path", get(skill_path));

    let app = if url_prefix.is_empty() {
        Router::new().route("/health", get(health)).merge(api)
    } else {
        Router::new()
            .route("/health", get(health))
            .nest(url_prefix, api)
    };

    app.with_state(state).layer(cors_layer())
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
}

// ── Response Shapes ──────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SkillDetailResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Not persisted; kept as an empty string for frontend compatibility.
    pub level: String,
    pub order_index: i64,
    pub prerequisites: Vec<SkillRef>,
    pub next_skills: Vec<SkillRef>,
    pub total_prerequisites: usize,
    pub total_next_skills: usize,
}

#[derive(Debug, Serialize)]
pub struct PrerequisitesResponse {
    pub skill_name: String,
    pub prerequisites: Vec<SkillRef>,
    pub total_prerequisites: usize,
}

/// An edge between consecutive path nodes, synthesized for client-side
/// highlighting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathEdge {
    pub id: String,
    pub source: String,
    pub target: String,
}

#[derive(Debug, Serialize)]
pub struct PathResponse {
    pub path: Vec<SkillRef>,
    pub edges: Vec<PathEdge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<&'static str>,
}

#[derive(Debug, Deserialize)]
pub struct PathParams {
    pub start: Option<String>,
    pub end: Option<String>,
}

// ── Handlers ─────────────────────────────────────────────────────

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        message: "Skillmap API is running",
    })
}

/// Detailed skill view: the skill itself plus both adjacency directions.
async fn skill_details(
    State(state): State<Arc<AppState>>,
    Path(skill_id): Path<String>,
) -> Result<Json<SkillDetailResponse>, ApiError> {
    let graph = state.graph()?;

    let skill = graph
        .get_skill_by_id(&skill_id)
        .await
        .map_err(|e| ApiError::store("Error getting skill details", e))?
        .ok_or(ApiError::NotFound)?;

    let prerequisites = graph
        .get_skill_prerequisites(&skill_id)
        .await
        .map_err(|e| ApiError::store("Error getting skill details", e))?;
    let next_skills = graph
        .get_skill_next_skills(&skill_id)
        .await
        .map_err(|e| ApiError::store("Error getting skill details", e))?;

    Ok(Json(SkillDetailResponse {
        id: skill.id,
        name: skill.name,
        description: skill.description,
        level: String::new(),
        order_index: skill.order_index,
        total_prerequisites: prerequisites.len(),
        total_next_skills: next_skills.len(),
        prerequisites,
        next_skills,
    }))
}

/// Name-based prerequisite list. An unresolved name is an empty list, not an
/// error; only the degraded no-store state answers 500 here.
async fn skill_prerequisites(
    State(state): State<Arc<AppState>>,
    Path(skill_name): Path<String>,
) -> Result<Json<PrerequisitesResponse>, ApiError> {
    let graph = state.graph()?;

    let prerequisites = graph.get_skill_prerequisites_by_name(&skill_name).await;

    Ok(Json(PrerequisitesResponse {
        skill_name,
        total_prerequisites: prerequisites.len(),
        prerequisites,
    }))
}

/// Shortest learning path between two skills named in the query string.
async fn skill_path(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PathParams>,
) -> Result<Json<PathResponse>, ApiError> {
    let (Some(start), Some(end)) = (params.start, params.end) else {
        return Err(ApiError::BadRequest(
            "Both start and end query parameters are required".to_string(),
        ));
    };

    let graph = state.graph()?;
    let path = graph
        .find_learning_path(&start, &end)
        .await
        .map_err(|e| ApiError::store("Error finding skill path", e))?;

    if path.is_empty() {
        return Ok(Json(PathResponse {
            path: Vec::new(),
            edges: Vec::new(),
            source: None,
        }));
    }

    let edges = path_edges(&path);
    Ok(Json(PathResponse {
        path,
        edges,
        source: Some(PATH_SOURCE_PARAMS),
    }))
}

/// Synthesize highlight edges from consecutive path nodes.
fn path_edges(path: &[SkillRef]) -> Vec<PathEdge> {
    path.windows(2)
        .map(|pair| PathEdge {
            id: format!("{}-{}", pair[0].id, pair[1].id),
            source: pair[0].id.clone(),
            target: pair[1].id.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn degraded_app(url_prefix: &str) -> Router {
        router(Arc::new(AppState::new(None)), url_prefix)
    }

    async fn body_json(resp: axum::response::Response) -> serde_json::Value {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_is_ok_without_store() {
        let resp = degraded_app("")
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(json["status"], "healthy");
        assert!(json["message"].is_string());
    }

    #[tokio::test]
    async fn test_skill_path_missing_params_is_400() {
        let resp = degraded_app("")
            .oneshot(
                Request::builder()
                    .uri("/api/skill-path?start=Rust")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json = body_json(resp).await;
        assert!(json["detail"].as_str().unwrap().contains("start and end"));
    }

    #[tokio::test]
    async fn test_data_route_degraded_is_500() {
        let resp = degraded_app("")
            .oneshot(
                Request::builder()
                    .uri("/api/skill/skill_Rust")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(resp).await;
        assert_eq!(json["detail"], "Graph manager not initialized");
    }

    #[tokio::test]
    async fn test_url_prefix_moves_api_but_not_health() {
        let app = degraded_app("/v1");

        let resp = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/v1/api/skill-path")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/skill-path")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[test]
    fn test_path_edges_synthesis() {
        let path = vec![
            SkillRef {
                id: "skill_A".to_string(),
                name: "A".to_string(),
            },
            SkillRef {
                id: "skill_B".to_string(),
                name: "B".to_string(),
            },
            SkillRef {
                id: "skill_C".to_string(),
                name: "C".to_string(),
            },
        ];

        let edges = path_edges(&path);
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].id, "skill_A-skill_B");
        assert_eq!(edges[0].source, "skill_A");
        assert_eq!(edges[0].target, "skill_B");
        assert_eq!(edges[1].id, "skill_B-skill_C");
    }

    #[test]
    fn test_single_node_path_has_no_edges() {
        let path = vec![SkillRef {
            id: "skill_A".to_string(),
            name: "A".to_string(),
        }];
        assert!(path_edges(&path).is_empty());
    }

    #[test]
    fn test_empty_path_response_omits_source() {
        let empty = PathResponse {
            path: Vec::new(),
            edges: Vec::new(),
            source: None,
        };
        let json = serde_json::to_value(&empty).unwrap();
        assert!(json.get("source").is_none());
        assert_eq!(json["path"], serde_json::json!([]));
        assert_eq!(json["edges"], serde_json::json!([]));

        let found = PathResponse {
            path: vec![SkillRef {
                id: "skill_A".to_string(),
                name: "A".to_string(),
            }],
            edges: Vec::new(),
            source: Some(PATH_SOURCE_PARAMS),
        };
        let json = serde_json::to_value(&found).unwrap();
        assert_eq!(json["source"], "start_end_params");
    }
}
