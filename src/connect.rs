//! Amazon Connect outbound dialer.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_connect::error::DisplayErrorContext;
use tracing::{error, info};

use crate::error::HandlerError;

/// One outbound voice contact, fully resolved and ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundCallRequest {
    pub instance_id: String,
    pub contact_flow_id: String,
    pub destination_phone_number: String,
    pub source_phone_number: String,
    pub attributes: HashMap<String, String>,
}

/// Seam between the handler and the contact-center service. The handler only
/// ever talks to this trait; tests substitute a mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OutboundDialer: Send + Sync {
    /// Places the call and returns the contact id assigned by the service.
    async fn start_outbound_call(
        &self,
        request: &OutboundCallRequest,
    ) -> Result<String, HandlerError>;
}

pub struct ConnectDialer {
    client: aws_sdk_connect::Client,
}

impl ConnectDialer {
    pub fn new(client: aws_sdk_connect::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OutboundDialer for ConnectDialer {
    async fn start_outbound_call(
        &self,
        request: &OutboundCallRequest,
    ) -> Result<String, HandlerError> {
        // Single blocking call, no client-side retry; throttling, bad
        // parameters and auth failures all surface here.
        let output = self
            .client
            .start_outbound_voice_contact()
            .instance_id(&request.instance_id)
            .contact_flow_id(&request.contact_flow_id)
            .destination_phone_number(&request.destination_phone_number)
            .source_phone_number(&request.source_phone_number)
            .set_attributes(
                (!request.attributes.is_empty()).then(|| request.attributes.clone()),
            )
            .send()
            .await
            .map_err(|err| {
                error!(error = %DisplayErrorContext(&err), "StartOutboundVoiceContact failed");
                HandlerError::ExternalService(DisplayErrorContext(&err).to_string())
            })?;

        let contact_id = output.contact_id().map(str::to_string).ok_or_else(|| {
            HandlerError::ExternalService("response did not include a contact id".to_string())
        })?;

        info!(%contact_id, "outbound voice contact started");
        Ok(contact_id)
    }
}
