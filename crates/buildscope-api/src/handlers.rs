//! Request handlers.
//!
//! Every endpoint answers with a uniform envelope: `{"success": true, ...}`
//! on the happy path, `{"success": false, "error": {code, message}}` with a
//! 400 otherwise. Domain failures never surface as transport faults.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use buildscope_core::{BuildAnalysis, BuildError, ParsedBuild, BUILDSCOPE_VERSION};
use serde_json::{json, Value};

use crate::AppState;

type Reply = (StatusCode, Json<Value>);

fn ok(body: Value) -> Reply {
    (StatusCode::OK, Json(body))
}

fn fail(err: BuildError) -> Reply {
    tracing::debug!(code = err.code(), "request rejected: {}", err);
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "success": false, "error": err.body() })),
    )
}

/// Unwrap the JSON body, folding extractor rejections (bad JSON, wrong
/// content type, oversized body) into the standard envelope.
fn body(payload: Result<Json<Value>, JsonRejection>) -> Result<Value, BuildError> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => Err(BuildError::MalformedStructure(rejection.body_text())),
    }
}

fn required(body: &Value, field: &str) -> Result<Value, BuildError> {
    match body.get(field) {
        Some(value) if !value.is_null() => Ok(value.clone()),
        _ => Err(BuildError::MissingRequiredField(format!(
            "request body must include `{field}`"
        ))),
    }
}

fn required_build(body: &Value) -> Result<ParsedBuild, BuildError> {
    let value = required(body, "build")?;
    serde_json::from_value(value)
        .map_err(|e| BuildError::MalformedStructure(format!("`build` is not a parsed build: {e}")))
}

pub async fn parse(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Reply {
    let result = body(payload).and_then(|body| {
        let code = match body.get("buildCode").and_then(Value::as_str) {
            Some(code) => code.to_string(),
            None => {
                return Err(BuildError::MissingRequiredField(
                    "request body must include `buildCode`".into(),
                ))
            }
        };
        state.pipeline.parse(&code)
    });
    match result {
        Ok(build) => ok(json!({ "success": true, "build": &*build })),
        Err(err) => fail(err),
    }
}

pub async fn analyze(
    State(_state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Reply {
    let result = body(payload).and_then(|body| required_build(&body));
    match result {
        Ok(build) => {
            let analysis = buildscope_analysis::analyze(&build);
            ok(json!({ "success": true, "analysis": analysis }))
        }
        Err(err) => fail(err),
    }
}

pub async fn suggest(
    State(_state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Reply {
    let result = body(payload).and_then(|body| {
        let build = required_build(&body)?;
        let analysis: BuildAnalysis =
            serde_json::from_value(required(&body, "analysis")?).map_err(|e| {
                BuildError::MalformedStructure(format!("`analysis` is not a build analysis: {e}"))
            })?;
        Ok((build, analysis))
    });
    match result {
        Ok((build, analysis)) => {
            let suggestions = buildscope_suggest::suggest(&build, &analysis);
            ok(json!({ "success": true, "suggestions": suggestions }))
        }
        Err(err) => fail(err),
    }
}

pub async fn cache_stats(State(state): State<Arc<AppState>>) -> Reply {
    ok(json!({ "success": true, "stats": state.pipeline.cache().stats() }))
}

pub async fn cache_invalidate(State(state): State<Arc<AppState>>) -> Reply {
    state.pipeline.cache().invalidate_all();
    tracing::info!("build cache invalidated");
    ok(json!({ "success": true }))
}

pub async fn health() -> Reply {
    ok(json!({
        "status": "ok",
        "service": "buildscope-api",
        "version": BUILDSCOPE_VERSION,
    }))
}
