use anyhow::Result;
use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use serde::{Deserialize, Serialize};
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::{
    network::{Distance, Station, WeightedGraph},
    shortest_path::shortest_path,
};

#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    from: Station,
    to: Station,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct RouteResponse {
    from: Station,
    to: Station,
    distance: Option<Distance>,
    reachable: bool,
}

pub fn router(graph: Arc<WeightedGraph>) -> Router {
    Router::new()
        .route("/stations", get(stations))
        .route("/shortest-path", get(route))
        .layer(CorsLayer::permissive())
        .with_state(graph)
}

pub async fn serve(graph: WeightedGraph, addr: SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, stations = graph.station_count(), "serving");
    axum::serve(listener, router(Arc::new(graph))).await?;
    Ok(())
}

async fn stations(State(graph): State<Arc<WeightedGraph>>) -> Json<Vec<Station>> {
    Json(graph.stations().cloned().collect())
}

async fn route(
    State(graph): State<Arc<WeightedGraph>>,
    Query(query): Query<RouteQuery>,
) -> Json<RouteResponse> {
    let distance = shortest_path(&graph, &query.from, &query.to);
    Json(RouteResponse {
        from: query.from,
        to: query.to,
        distance,
        reachable: distance.is_some(),
    })
}
