//! API Routes Module
//!
//! 모든 HTTP 엔드포인트 정의
//!
//! # Routes
//! - `/health` - 헬스 체크
//! - `{prefix}/pools/*` - Pool 관리 및 요약

pub mod health;
pub mod pool;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::{config::Config, AppState};

/// 라우터 생성
///
/// # Route Structure
///
/// ```text
/// GET  /health                           - 서버 상태 확인
///
/// GET  {prefix}/pools                    - Pool 목록
/// POST {prefix}/pools/create             - Pool 생성
/// POST {prefix}/pools/add-person         - 투자자 추가
/// POST {prefix}/pools/admin/add-shares   - 관리자 출자 추가
/// GET  {prefix}/pools/:pool_id/summary   - Pool 요약
/// ```
pub fn router(state: AppState) -> Router {
    let pools = format!("{}/pools", state.config.api_prefix);
    let cors = cors_layer(&state.config);

    Router::new()
        // Health check
        .route("/health", get(health::health_check))

        // Pools
        .route(&pools, get(pool::list_pools))
        .route(&format!("{}/create", pools), post(pool::create_pool))
        .route(&format!("{}/add-person", pools), post(pool::add_person))
        .route(&format!("{}/admin/add-shares", pools), post(pool::add_admin_shares))
        .route(&format!("{}/:pool_id/summary", pools), get(pool::get_pool_summary))

        // 미들웨어
        .layer(TraceLayer::new_for_http())
        .layer(cors)

        // 상태 주입
        .with_state(state)
}

/// CORS 설정
///
/// - 프로덕션: `ALLOWED_ORIGINS`에 지정된 도메인만 허용
/// - 개발: 로컬 대시보드(Vite dev server) 허용
fn cors_layer(config: &Config) -> CorsLayer {
    if config.is_production() {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE])
    } else {
        CorsLayer::new()
            .allow_origin([
                HeaderValue::from_static("http://localhost:5173"),
                HeaderValue::from_static("http://localhost:3000"),
                HeaderValue::from_static("http://127.0.0.1:5173"),
            ])
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
