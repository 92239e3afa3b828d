use std::collections::HashMap;

use lambda_http::http::header::CONTENT_TYPE;
use lambda_http::http::StatusCode;
use lambda_http::{Body, Error, Request, RequestExt, Response};
use serde::Serialize;
use tracing::{error, info};

use crate::config::{ConfigError, ConnectConfig};
use crate::connect::{OutboundCallRequest, OutboundDialer};
use crate::error::HandlerError;
use crate::messages::{self, EMERGENCY_MESSAGE_ATTRIBUTE};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CallInitiated<'a> {
    message: &'a str,
    contact_id: &'a str,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

// Main Lambda handler - one outbound voice contact per successful invocation.
// Every failure is converted to a JSON error response here; nothing
// propagates past this boundary.
pub async fn function_handler<D: OutboundDialer>(
    dialer: &D,
    config: &Result<ConnectConfig, ConfigError>,
    event: Request,
) -> Result<Response<Body>, Error> {
    match handle_request(dialer, config, &event).await {
        Ok(contact_id) => json_response(
            StatusCode::OK,
            &CallInitiated {
                message: "Call initiated successfully",
                contact_id: &contact_id,
            },
        ),
        Err(err) => {
            error!(error = %err, "outbound call request failed");
            json_response(
                err.status_code(),
                &ErrorBody {
                    error: &err.to_string(),
                },
            )
        }
    }
}

async fn handle_request<D: OutboundDialer>(
    dialer: &D,
    config: &Result<ConnectConfig, ConfigError>,
    event: &Request,
) -> Result<String, HandlerError> {
    let params = event.query_string_parameters();
    let phone_number = params.first("phone_number").unwrap_or_default().trim();
    let path = event.raw_http_path();
    info!(%path, %phone_number, "received outbound call request");

    if phone_number.is_empty() {
        return Err(HandlerError::Validation(
            "Phone number is required".to_string(),
        ));
    }

    let destination = normalize_phone_number(phone_number);
    let message = messages::select_message(&path, params.first("custom_message"));
    info!(%destination, %message, "placing outbound voice contact");

    let config = config
        .as_ref()
        .map_err(|err| HandlerError::Configuration(err.to_string()))?;

    let request = OutboundCallRequest {
        instance_id: config.instance_id.clone(),
        contact_flow_id: config.contact_flow_id.clone(),
        destination_phone_number: destination,
        source_phone_number: config.source_phone_number.clone(),
        attributes: HashMap::from([(EMERGENCY_MESSAGE_ATTRIBUTE.to_string(), message)]),
    };

    dialer.start_outbound_call(&request).await
}

// Destination numbers always go out E.164-like, with a leading "+"
fn normalize_phone_number(phone_number: &str) -> String {
    if phone_number.starts_with('+') {
        phone_number.to_string()
    } else {
        format!("+{phone_number}")
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Result<Response<Body>, Error> {
    let response = Response::builder()
        .status(status)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(body)?))
        .map_err(Box::new)?;
    Ok(response)
}
