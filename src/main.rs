use anyhow::Result;
use chrono::Local;
use ulko_ui::{AppServices, RefreshOutcome};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize core
    ulko_core::init()?;

    let (config, _validation) = ulko_core::Config::load_validated()?;

    let services = AppServices::init(config)?;
    tracing::info!("Ulkohälytin started");

    let context = services.context();
    let model = services.weather_model();
    model.mount();

    println!("{} - {}", model.title(), model.location());

    if model.refresh().await == RefreshOutcome::Failed {
        if let Some(message) = model.error_message() {
            println!("{}", message);
        }
    }

    println!(
        "{} {}   {} {}",
        context.t(ulko_core::TranslationKey::Sunrise),
        model.sunrise(),
        context.t(ulko_core::TranslationKey::Sunset),
        model.sunset()
    );
    println!();

    for row in model.display_rows() {
        println!(
            "  {:>5}  {:>5}  {}",
            row.time,
            row.temperature_label(),
            model.slot_label(&row)
        );
    }

    let summary = model.summary_text();
    if !summary.is_empty() {
        println!("\n{}", summary);
    }

    println!();
    for (title, text) in model.period_cards(Local::now().date_naive()) {
        if !text.is_empty() {
            println!("{}: {}", title, text);
        }
    }

    // Graceful shutdown
    model.unmount();
    services.shutdown()?;

    Ok(())
}
