use anyhow::{Context, Result};
use mandir_admin::config::AppConfig;
use mandir_admin::diff::Record;
use mandir_admin::gateway::{Gateway, HttpGateway};
use mandir_admin::records::{
    ActivitiesRecord, FooterRecord, HeroSliderRecord, NavbarRecord, ServicesRecord,
    TempleInfoRecord, TestimonialsRecord, WelcomeRecord,
};
use mandir_admin::sections::Section;
use serde::Serialize;
use std::env;
use std::str::FromStr;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: cargo run --bin dump-section <section>");
        eprintln!(
            "Example: MANDIR_ADMIN_TOKEN=... cargo run --bin dump-section navbar"
        );
        eprintln!("Sections: {}", section_names().join(", "));
        std::process::exit(1);
    }

    let section = Section::from_str(&args[1]).context("Invalid section")?;
    let token = env::var("MANDIR_ADMIN_TOKEN")
        .context("MANDIR_ADMIN_TOKEN environment variable must be set")?;

    let config = AppConfig::from_env();
    let gateway = HttpGateway::from_config(&config);
    let body = gateway.fetch(section, &token).await?;

    let pretty = match section {
        Section::Navbar => pretty::<NavbarRecord>(body)?,
        Section::HeroSlider => pretty::<HeroSliderRecord>(body)?,
        Section::Activities => pretty::<ActivitiesRecord>(body)?,
        Section::Welcome => pretty::<WelcomeRecord>(body)?,
        Section::Services => pretty::<ServicesRecord>(body)?,
        Section::Testimonials => pretty::<TestimonialsRecord>(body)?,
        Section::TempleInfo => pretty::<TempleInfoRecord>(body)?,
        Section::Footer => pretty::<FooterRecord>(body)?,
    };
    println!("{}", pretty);

    Ok(())
}

fn pretty<R: Record + Serialize>(body: serde_json::Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(&R::from_response(body))?)
}

fn section_names() -> Vec<&'static str> {
    Section::all().into_iter().map(|s| s.id()).collect()
}
