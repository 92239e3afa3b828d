use lambda_http::{run, service_fn, tracing, Error};

mod config;
mod connect;
mod error;
mod handler;
mod messages;

use config::ConnectConfig;
use connect::ConnectDialer;
use handler::function_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    // Build the SDK client and configuration snapshot at cold start (once per
    // container lifecycle); every invocation shares them read-only.
    let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let dialer = ConnectDialer::new(aws_sdk_connect::Client::new(&sdk_config));

    let config = ConnectConfig::from_env();
    if let Err(err) = &config {
        // Keep serving: every request still gets a well-formed 500 body
        // instead of an unanswered invocation.
        tracing::error!(error = %err, "Connect configuration is incomplete");
    }

    run(service_fn(|event| function_handler(&dialer, &config, event))).await
}
