//! Contract template endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use arc_contracts::{registry, ContractTemplate, GeneratedContract, ParamValues, ValidationResult};

use crate::error::ApiError;
use crate::router::AppState;

#[derive(Debug, Deserialize)]
pub struct TemplatesQuery {
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TemplateListResponse {
    pub templates: Vec<&'static ContractTemplate>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub success: bool,
    pub contract: GeneratedContract,
}

/// A `{ templateId, parameters }` body, checked field by field so each
/// malformed shape gets its own error code.
#[derive(Debug)]
pub struct ContractRequest {
    pub template_id: String,
    pub parameters: ParamValues,
}

impl ContractRequest {
    pub fn from_body(body: &Value) -> Result<Self, ApiError> {
        let Some(object) = body.as_object() else {
            return Err(ApiError::bad_request(
                "INVALID_REQUEST",
                "Request body must be a JSON object",
            ));
        };

        let template_id = match object.get("templateId") {
            Some(Value::String(id)) if !id.is_empty() => id.clone(),
            _ => {
                return Err(ApiError::bad_request(
                    "INVALID_TEMPLATE_ID",
                    "Template ID is required",
                ))
            }
        };

        let parameters = match object.get("parameters") {
            Some(Value::Object(map)) => map
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            _ => {
                return Err(ApiError::bad_request(
                    "INVALID_PARAMETERS",
                    "Parameters object is required",
                ))
            }
        };

        Ok(Self {
            template_id,
            parameters,
        })
    }
}

fn parse_body(payload: Result<Json<Value>, JsonRejection>) -> Result<ContractRequest, ApiError> {
    let Json(body) = payload
        .map_err(|rejection| ApiError::bad_request("INVALID_REQUEST", rejection.body_text()))?;
    ContractRequest::from_body(&body)
}

/// GET /api/contracts/templates
pub async fn list_templates(Query(query): Query<TemplatesQuery>) -> Json<TemplateListResponse> {
    let templates: Vec<_> = match query.category.as_deref() {
        Some(category) => registry::list_templates_by_category(category),
        None => registry::list_templates().iter().collect(),
    };
    Json(TemplateListResponse {
        count: templates.len(),
        templates,
    })
}

/// GET /api/contracts/templates/:id
pub async fn get_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<&'static ContractTemplate>, ApiError> {
    state
        .studio
        .template(&id)
        .map(Json)
        .map_err(|e| state.api_error(e))
}

/// GET /api/contracts/categories
pub async fn list_categories() -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: registry::categories(),
    })
}

/// POST /api/contracts/validate
pub async fn validate(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ValidationResult>, ApiError> {
    let request = parse_body(payload)?;
    state
        .studio
        .validate(&request.template_id, &request.parameters)
        .map(Json)
        .map_err(|e| state.api_error(e))
}

/// POST /api/contracts/generate
pub async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let request = parse_body(payload)?;
    let contract = state
        .studio
        .generate(&request.template_id, &request.parameters)
        .map_err(|e| state.api_error(e))?;

    info!(
        template = %contract.template_id,
        contract = %contract.contract_name,
        "served generated contract"
    );

    Ok(Json(GenerateResponse {
        success: true,
        contract,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_requires_string_template_id() {
        let err = ContractRequest::from_body(&json!({ "templateId": 7, "parameters": {} })).unwrap_err();
        assert_eq!(err.code, "INVALID_TEMPLATE_ID");

        let err = ContractRequest::from_body(&json!({ "parameters": {} })).unwrap_err();
        assert_eq!(err.code, "INVALID_TEMPLATE_ID");
    }

    #[test]
    fn request_requires_parameters_object() {
        let err = ContractRequest::from_body(&json!({ "templateId": "erc20", "parameters": [] }))
            .unwrap_err();
        assert_eq!(err.code, "INVALID_PARAMETERS");
    }

    #[test]
    fn request_rejects_non_object_body() {
        let err = ContractRequest::from_body(&json!("erc20")).unwrap_err();
        assert_eq!(err.code, "INVALID_REQUEST");
    }

    #[test]
    fn request_copies_parameters() {
        let request = ContractRequest::from_body(&json!({
            "templateId": "erc20",
            "parameters": { "name": "T", "premint": 5 }
        }))
        .unwrap();
        assert_eq!(request.template_id, "erc20");
        assert_eq!(request.parameters.get("premint"), Some(&json!(5)));
    }
}
