use jusibe::{ClientConfig, JusibeClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = JusibeClient::new(ClientConfig::from_env())?;

    let response = client.check_credits().await?;
    println!("credits: {}", response.data.sms_credits);

    Ok(())
}
