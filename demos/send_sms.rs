use std::io;

use jusibe::{ClientConfig, JusibeClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let to = std::env::var("JUSIBE_TO").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "JUSIBE_TO environment variable is required",
        )
    })?;
    let from = std::env::var("JUSIBE_FROM").unwrap_or_else(|_| "Jusibe".to_owned());
    let message = std::env::var("JUSIBE_MESSAGE")
        .unwrap_or_else(|_| "Hello from the jusibe example.".to_owned());

    let client = JusibeClient::new(ClientConfig::from_env())?;

    let response = client.send_sms(to, from, message).await?;
    println!(
        "http: {}, status: {}, message_id: {}, credits used: {}",
        response.status,
        response.data.status,
        response.data.message_id,
        response.data.sms_credits_used
    );

    Ok(())
}
