use std::io;
use std::time::Duration;

use tracing_subscriber::EnvFilter;
use twilio_sms::{MessagingClient, TransportConfig};

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let account_sid = required_env("TWILIO_ACCOUNT_SID")?;
    let auth_token = required_env("TWILIO_AUTH_TOKEN")?;
    let to = required_env("TWILIO_TO")?;
    let from = required_env("TWILIO_FROM")?;
    let message = std::env::var("TWILIO_MESSAGE")
        .unwrap_or_else(|_| "Hello from the twilio-sms demo.".to_owned());
    let verbose = std::env::var("TWILIO_VERBOSE").is_ok_and(|value| value == "1");

    twilio_sms::init(TransportConfig::default().timeout(Duration::from_secs(30)))?;

    let client = MessagingClient::new(account_sid, auth_token);
    let result = client.send_message(&to, &from, message, None, verbose);
    println!("success: {}, status: {:?}", result.success, result.status());
    if !result.diagnostic.is_empty() {
        println!("{}", result.diagnostic);
    }

    twilio_sms::shutdown();
    Ok(())
}
