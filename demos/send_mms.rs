use std::io;

use tracing_subscriber::EnvFilter;
use twilio_sms::{MessageRequest, MessagingClient, ProviderResponse, TransportConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let env = |name: &str| {
        std::env::var(name).map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{name} environment variable is required"),
            )
        })
    };
    let client = MessagingClient::new(env("TWILIO_ACCOUNT_SID")?, env("TWILIO_AUTH_TOKEN")?);
    let request = MessageRequest::new(env("TWILIO_TO")?, env("TWILIO_FROM")?, "Picture attached.")
        .with_media_url(env("TWILIO_MEDIA_URL")?);

    twilio_sms::init(TransportConfig::default())?;
    let result = client.send(&request, true);
    twilio_sms::shutdown();

    match result.provider_response() {
        Some(ProviderResponse::Message(msg)) => {
            println!("sid: {}, status: {:?}", msg.sid, msg.status);
        }
        Some(ProviderResponse::Error(err)) => {
            println!("rejected: {:?} {}", err.code, err.message);
        }
        None => println!("success: {}, {}", result.success, result.diagnostic),
    }

    result.into_result()?;
    Ok(())
}
