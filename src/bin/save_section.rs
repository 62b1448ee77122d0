use anyhow::{Context, Result, anyhow};
use mandir_admin::config::AppConfig;
use mandir_admin::diff::Record;
use mandir_admin::gateway::{Gateway, HttpGateway};
use mandir_admin::records::{
    ActivitiesRecord, FooterRecord, HeroSliderRecord, NavbarRecord, ServicesRecord,
    TempleInfoRecord, TestimonialsRecord, WelcomeRecord,
};
use mandir_admin::sections::Section;
use serde::de::DeserializeOwned;
use std::env;
use std::str::FromStr;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: cargo run --bin save-section <section> <edit-file.json>");
        eprintln!(
            "Example: MANDIR_ADMIN_TOKEN=... cargo run --bin save-section navbar navbar.json"
        );
        std::process::exit(1);
    }

    let section = Section::from_str(&args[1]).context("Invalid section")?;
    let raw = std::fs::read_to_string(&args[2])
        .with_context(|| format!("Failed to read edit file {}", args[2]))?;
    let token = env::var("MANDIR_ADMIN_TOKEN")
        .context("MANDIR_ADMIN_TOKEN environment variable must be set")?;

    let config = AppConfig::from_env();
    let gateway = HttpGateway::from_config(&config);

    match section {
        Section::Navbar => submit::<NavbarRecord>(&gateway, &raw, &token).await,
        Section::HeroSlider => submit::<HeroSliderRecord>(&gateway, &raw, &token).await,
        Section::Activities => submit::<ActivitiesRecord>(&gateway, &raw, &token).await,
        Section::Welcome => submit::<WelcomeRecord>(&gateway, &raw, &token).await,
        Section::Services => submit::<ServicesRecord>(&gateway, &raw, &token).await,
        Section::Testimonials => submit::<TestimonialsRecord>(&gateway, &raw, &token).await,
        Section::TempleInfo => submit::<TempleInfoRecord>(&gateway, &raw, &token).await,
        Section::Footer => submit::<FooterRecord>(&gateway, &raw, &token).await,
    }
}

async fn submit<R: Record + DeserializeOwned>(
    gateway: &HttpGateway,
    raw: &str,
    token: &str,
) -> Result<()> {
    let record: R =
        serde_json::from_str(raw).context("Edit file does not match the section's record shape")?;

    // Same client-side cap the editor enforces; nothing oversize goes out.
    if let Some(err) = record.oversize_upload() {
        return Err(anyhow!(err));
    }

    let response = gateway.submit(R::SECTION, &record.to_payload(), token).await?;
    println!("Saved {}", R::SECTION.label());
    println!("{}", response);
    Ok(())
}
