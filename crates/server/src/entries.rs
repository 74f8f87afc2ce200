//! Ledger endpoints: list, submit, delete and clear.

use api_types::entry::{EntryListResponse, EntryNew, EntryView, TotalsView};
use axum::{
    Form, Json,
    extract::{Path, State},
    response::{Html, Redirect},
};
use engine::{Entry, NewEntry, Totals, validation};

use crate::{ServerError, render, server::ServerState};

fn map_entry(entry: Entry) -> EntryView {
    EntryView {
        id: entry.id,
        income: entry.income,
        expenses: entry.expenses,
        tax_amount: entry.tax_amount,
        tax_rate: entry.tax_rate,
        description: entry.description,
    }
}

fn map_totals(totals: Totals) -> TotalsView {
    TotalsView {
        total_income: totals.total_income,
        total_expenses: totals.total_expenses,
        total_tax: totals.total_tax,
    }
}

/// Render every entry with the three totals.
pub async fn list(State(state): State<ServerState>) -> Result<Html<String>, ServerError> {
    let entries = state.engine.list_all().await?;
    let totals = Totals::from_entries(&entries);

    Ok(Html(render::home(&entries, &totals)))
}

pub async fn list_json(
    State(state): State<ServerState>,
) -> Result<Json<EntryListResponse>, ServerError> {
    let entries = state.engine.list_all().await?;
    let totals = Totals::from_entries(&entries);

    Ok(Json(EntryListResponse {
        entries: entries.into_iter().map(map_entry).collect(),
        totals: map_totals(totals),
    }))
}

/// Validate and store a submitted entry, then go back to the list.
pub async fn submit(
    State(state): State<ServerState>,
    Form(payload): Form<EntryNew>,
) -> Result<Redirect, ServerError> {
    validation::validate_income(payload.income)?;
    validation::validate_expenses(payload.expenses)?;

    let entry = state
        .engine
        .create(NewEntry {
            income: payload.income,
            expenses: payload.expenses,
            tax_rate: payload.tax_rate,
            description: payload.description,
        })
        .await?;
    tracing::info!("stored entry {} (tax {:.2})", entry.id, entry.tax_amount);

    Ok(Redirect::to("/"))
}

/// Delete one entry; an unknown id, including one outside the id range, is a no-op.
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Redirect, ServerError> {
    let Ok(id) = i32::try_from(id) else {
        tracing::debug!("entry {id} cannot exist, nothing deleted");
        return Ok(Redirect::to("/"));
    };
    if state.engine.delete(id).await? {
        tracing::info!("deleted entry {id}");
    } else {
        tracing::debug!("entry {id} not found, nothing deleted");
    }

    Ok(Redirect::to("/"))
}

pub async fn clear(State(state): State<ServerState>) -> Result<Redirect, ServerError> {
    let removed = state.engine.clear().await?;
    tracing::info!("cleared {removed} entries");

    Ok(Redirect::to("/"))
}
