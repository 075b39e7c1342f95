use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{SecondsFormat, Utc};
use log::warn;
use serde::Deserialize;

use crate::application::commands::*;
use crate::application::dtos::*;
use crate::presentation::error::CommandError;
use crate::presentation::state::SharedState;
use streak_domain::DomainError;

/// `POST /check-in`
pub async fn check_in(State(state): State<SharedState>) -> Response {
    let result = state
        .command_handlers
        .record_check_in
        .handle(RecordCheckInCommand)
        .await;

    match result {
        Ok(result) => {
            let current = result.stats.current_streak;
            let tier_message = result.tier.map(|tier| tier.message(current));
            let dto = CheckInResultDto {
                ok: true,
                message: tier_message
                    .clone()
                    .unwrap_or_else(|| format!("Checked in for {}", result.date)),
                tier: result.tier,
                tier_message,
                stats: result.stats.into(),
                next_eligible_date: None,
            };
            (StatusCode::OK, Json(dto)).into_response()
        }
        Err(
            ref err @ DomainError::AlreadyCheckedIn {
                ref stats,
                ref next_eligible_date,
                ..
            },
        ) => {
            // Unchanged stats travel with the rejection
            let dto = CheckInResultDto {
                ok: false,
                message: err.message(),
                tier: None,
                tier_message: None,
                stats: stats.clone().into(),
                next_eligible_date: Some(next_eligible_date.to_string()),
            };
            (StatusCode::BAD_REQUEST, Json(dto)).into_response()
        }
        Err(err) => CommandError::from(err).into_response(),
    }
}

/// `GET /streak`
pub async fn get_streak(State(state): State<SharedState>) -> Result<Json<StatusDto>, CommandError> {
    Ok(Json(state.queries.streak.get_status().await?))
}

/// `GET /calendar`
pub async fn get_calendar(
    State(state): State<SharedState>,
) -> Result<Json<CalendarDto>, CommandError> {
    Ok(Json(state.queries.streak.get_calendar().await?))
}

#[derive(Debug, Default, Deserialize)]
pub struct MissedDaysParams {
    pub window: Option<u32>,
}

/// `GET /missed-days?window=N`
pub async fn get_missed_days(
    State(state): State<SharedState>,
    params: Result<Query<MissedDaysParams>, QueryRejection>,
) -> Result<Json<MissedDaysDto>, CommandError> {
    let Query(params) = params.map_err(|e| CommandError::validation(e.body_text()))?;
    Ok(Json(
        state.queries.streak.get_missed_days(params.window).await?,
    ))
}

/// `GET /health`
pub async fn health() -> Json<HealthDto> {
    Json(HealthDto {
        status: "OK".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

/// `POST /test-checkin`
pub async fn simulate_check_in(
    State(state): State<SharedState>,
    payload: Result<Json<SimulateCheckInRequest>, JsonRejection>,
) -> Result<Json<SimulateCheckInDto>, CommandError> {
    let Json(request) = payload.map_err(|e| {
        warn!("[check-in] rejected test check-in body: {}", e.body_text());
        CommandError::invalid_date_format()
    })?;

    let result = state
        .command_handlers
        .simulate_check_in
        .handle(SimulateCheckInCommand { date: request.date })
        .await?;

    Ok(Json(SimulateCheckInDto {
        ok: true,
        message: format!("Test check-in added for {}", result.date),
        stats: result.stats.into(),
        check_in_dates: result
            .check_in_dates
            .iter()
            .map(|d| d.to_string())
            .collect(),
    }))
}

/// `POST /test-reset`
pub async fn reset(State(state): State<SharedState>) -> Result<Json<ResetResultDto>, CommandError> {
    let result = state
        .command_handlers
        .reset_log
        .handle(ResetLogCommand)
        .await?;

    Ok(Json(ResetResultDto {
        ok: true,
        message: "All streak data reset".to_string(),
        stats: result.stats.into(),
    }))
}
