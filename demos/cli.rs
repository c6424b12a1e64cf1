//! Interactive Jusibe shell.
//!
//! Reads a command name from stdin, prompts for its arguments, runs exactly
//! one client operation and prints the result.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use jusibe::{ClientConfig, JusibeClient};
use tracing::{debug, error};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "jusibe-cli")]
#[command(about = "Interactive client for the Jusibe SMS API", long_about = None)]
struct Cli {
    /// Jusibe access token
    #[arg(long, env = "JUSIBE_ACCESS_TOKEN", hide_env_values = true)]
    access_token: String,

    /// Jusibe public key
    #[arg(long, env = "JUSIBE_PUBLIC_KEY")]
    public_key: String,

    /// Override the API root (defaults to https://jusibe.com/smsapi/)
    #[arg(long, env = "JUSIBE_API_BASE_URL")]
    base_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    GetCredits,
    SendSms,
    SendBulkSms,
    DeliveryStatus,
    BulkStatus,
    Exit,
}

impl Command {
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "get_credits" => Some(Self::GetCredits),
            "send_sms" => Some(Self::SendSms),
            "send_bulk_sms" => Some(Self::SendBulkSms),
            "delivery_status" => Some(Self::DeliveryStatus),
            "bulk_status" => Some(Self::BulkStatus),
            "exit" => Some(Self::Exit),
            _ => None,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(io::stderr)
                .with_filter(EnvFilter::from_default_env()),
        )
        .init();

    let cli = Cli::parse();
    let mut config = ClientConfig::new(cli.access_token, cli.public_key);
    config.base_url = cli.base_url;
    let client = JusibeClient::new(config).context("failed to create jusibe client")?;
    debug!(base_url = %client.base_url(), "client ready");

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        print_help();
        let Some(line) = read_line(&mut input, "Enter Command: ")? else {
            break;
        };

        match Command::parse(&line) {
            Some(Command::GetCredits) => get_credits(&client).await,
            Some(Command::SendSms) => send_sms(&client, &mut input).await?,
            Some(Command::SendBulkSms) => send_bulk_sms(&client, &mut input).await?,
            Some(Command::DeliveryStatus) => check_delivery_status(&client, &mut input).await?,
            Some(Command::BulkStatus) => check_bulk_status(&client, &mut input).await?,
            Some(Command::Exit) => break,
            None => continue,
        }
        println!();
    }

    Ok(())
}

async fn get_credits(client: &JusibeClient) {
    println!("Fetching credits...");

    match client.check_credits().await {
        Ok(response) => println!("Credits => {}", response.data.sms_credits),
        Err(err) => error!("failed to check credits: {err}"),
    }
}

async fn send_sms(client: &JusibeClient, input: &mut impl BufRead) -> Result<()> {
    let to = prompt(input, "Enter To: ")?;
    let from = prompt(input, "Enter From: ")?;
    let message = prompt(input, "Enter Message: ")?;

    println!("Sending SMS...");

    match client.send_sms(to, from, message).await {
        Ok(response) => println!("Response => {:?}", response.data),
        Err(err) => error!("failed to send SMS: {err}"),
    }
    Ok(())
}

async fn send_bulk_sms(client: &JusibeClient, input: &mut impl BufRead) -> Result<()> {
    let to = prompt(input, "Enter To (comma separated): ")?;
    let from = prompt(input, "Enter From: ")?;
    let message = prompt(input, "Enter Message: ")?;

    println!("Sending bulk SMS...");

    let recipients = to
        .split(',')
        .map(str::trim)
        .filter(|number| !number.is_empty())
        .map(str::to_owned)
        .collect::<Vec<_>>();

    match client.send_bulk_sms(recipients, from, message).await {
        Ok(response) => println!("Response => {:?}", response.data),
        Err(err) => error!("failed to send bulk SMS: {err}"),
    }
    Ok(())
}

async fn check_delivery_status(client: &JusibeClient, input: &mut impl BufRead) -> Result<()> {
    let message_id = prompt(input, "Enter MessageID: ")?;

    println!("Fetching delivery status...");

    match client.check_delivery_status(&message_id).await {
        Ok(response) => println!("Response => {:?}", response.data),
        Err(err) => error!("failed to check SMS delivery status: {err}"),
    }
    Ok(())
}

async fn check_bulk_status(client: &JusibeClient, input: &mut impl BufRead) -> Result<()> {
    let bulk_message_id = prompt(input, "Enter BulkMessageID: ")?;

    println!("Fetching bulk status...");

    match client.check_bulk_status(&bulk_message_id).await {
        Ok(response) => println!("Response => {:?}", response.data),
        Err(err) => error!("failed to check bulk SMS status: {err}"),
    }
    Ok(())
}

fn prompt(input: &mut impl BufRead, label: &str) -> Result<String> {
    read_line(input, label)?.context("stdin closed")
}

fn read_line(input: &mut impl BufRead, label: &str) -> Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
}

fn print_help() {
    println!("Enter API Method to execute:");
    println!("\tget_credits - View remaining credits");
    println!("\tsend_sms - Send SMS");
    println!("\tsend_bulk_sms - Send SMS to many recipients");
    println!("\tdelivery_status - Check SMS delivery status");
    println!("\tbulk_status - Check bulk SMS status");
    println!("Enter exit to Quit");
    println!();
}
