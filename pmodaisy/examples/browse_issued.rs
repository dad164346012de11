//! Lists the issued books of a DAISY Online account with their resources
//!
//! ```sh
//! DAISY_URL=https://daisy.example.org/service DAISY_USER=reader DAISY_PASSWORD=secret \
//!     cargo run --example browse_issued
//! ```

use anyhow::{Context, Result, bail};
use pmodaisy::{DaisyClient, DaisyConfig, ReadingSystemAttributes, content_list};
use std::env;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = match env::var("DAISY_CONFIG") {
        Ok(path) => DaisyConfig::load(path)?,
        Err(_) => DaisyConfig::new(env::var("DAISY_URL").context("DAISY_URL is not set")?),
    };
    let username = env::var("DAISY_USER").context("DAISY_USER is not set")?;
    let password = env::var("DAISY_PASSWORD").context("DAISY_PASSWORD is not set")?;

    let mut client = DaisyClient::from_config(&config)?;

    if !client.log_on(&username, &password)? {
        bail!("logOn refused for {}", username);
    }

    let service = client.get_service_attributes()?;
    if let Some(label) = service.service_provider.as_ref().and_then(|p| p.label.as_ref()) {
        println!("Service provider: {}", label.text);
    }

    let mut reading_system = ReadingSystemAttributes::default();
    reading_system.manufacturer = "PMOMusic".to_string();
    reading_system.model = "pmodaisy".to_string();
    reading_system.version = env!("CARGO_PKG_VERSION").to_string();
    reading_system.config.supports_multiple_selections = true;
    if !client.set_reading_system_attributes(&reading_system)? {
        bail!("setReadingSystemAttributes refused");
    }

    let issued = client.get_content_list(content_list::ISSUED, 0, -1)?;
    println!("{} issued item(s)", issued.total_items);

    for item in &issued.content_items {
        println!("\n{} ({})", item.label.text, item.id);
        let resources = client.get_content_resources(&item.id)?;
        for resource in &resources.resources {
            println!("  {:<40} {:>10} bytes", resource.local_uri, resource.size);
        }
    }

    if !client.log_off()? {
        eprintln!("logOff refused");
    }
    Ok(())
}
