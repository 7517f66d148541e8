pub mod health;
pub mod nf_instances;

use axum::{routing::get, Router};
use crate::db::AppState;

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/nnrf-nfm/v1/nrf-info", get(nf_instances::nrf_profile))
        .route("/nnrf-nfm/v1/nf-instances", get(nf_instances::list_nf_instances))
        .route(
            "/nnrf-nfm/v1/nf-instances/:nfInstanceId",
            get(nf_instances::get_nf_instance)
                .put(nf_instances::register_nf_instance)
                .delete(nf_instances::deregister_nf_instance),
        )
        .with_state(state)
}
