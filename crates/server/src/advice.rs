//! Advice endpoint

use axum::{extract::State, response::Html};

use crate::{ServerError, render, server::ServerState};

pub async fn get_all(State(state): State<ServerState>) -> Result<Html<String>, ServerError> {
    let entries = state.engine.list_all().await?;
    let advice = state.advisor.advise(&entries).await?;

    Ok(Html(render::advice(&advice)))
}
