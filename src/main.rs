use std::io::{self, BufRead, Write};

use tracing_subscriber::EnvFilter;

use firemoto::config::AppConfig;
use firemoto::errors::AppError;
use firemoto::models::catalog;
use firemoto::services::api::http::HttpBookingApi;
use firemoto::services::notify::{Notice, NoticeLevel, Notifier};
use firemoto::services::submission::{SubmissionController, SubmitOutcome};
use firemoto::validation::Field;

struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => println!("\n[ok] {}", notice.message),
            NoticeLevel::Error => println!("\n[erro] {}", notice.message),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    if config.backend_url.is_empty() {
        tracing::warn!("BACKEND_URL is empty; submissions will go nowhere");
    }
    tracing::info!("booking backend: {}", config.backend_url);

    let api = HttpBookingApi::new(config.backend_url.clone());
    let mut controller = SubmissionController::new(Box::new(api), Box::new(TerminalNotifier));

    println!("Fire Moto — Agende seu serviço");
    println!("Campos marcados com * são obrigatórios.\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    for field in Field::ALL {
        let value = prompt_field(&mut lines, field)?;
        controller.edit(field, value);
    }

    loop {
        match controller.submit().await {
            SubmitOutcome::Accepted => {
                println!("Entraremos em contato em breve para confirmar os detalhes.");
                break;
            }
            SubmitOutcome::Rejected => {
                for (field, message) in controller.errors().iter() {
                    println!("  - {}: {}", field.label(), message);
                }
                println!();
                let offending: Vec<Field> = controller.errors().iter().map(|(f, _)| f).collect();
                for field in offending {
                    let value = prompt_field(&mut lines, field)?;
                    controller.edit(field, value);
                }
            }
            SubmitOutcome::Failed => {
                if !prompt_yes_no(&mut lines, "Tentar novamente? [s/N] ")? {
                    break;
                }
            }
            SubmitOutcome::Ignored => break,
        }
    }

    Ok(())
}

type Lines<'a> = io::Lines<io::StdinLock<'a>>;

fn prompt_field(lines: &mut Lines<'_>, field: Field) -> Result<String, AppError> {
    match field {
        Field::ServiceType => print_options("Serviços disponíveis", &catalog::SERVICES),
        Field::PreferredTime => print_options("Horários disponíveis", &catalog::TIME_SLOTS),
        Field::PreferredDate => {
            let today = chrono::Local::now().date_naive();
            println!("Formato AAAA-MM-DD, a partir de {today}");
        }
        _ => {}
    }

    let required = if field == Field::Message { "" } else { " *" };
    print!("{}{required}: ", field.label());
    io::stdout().flush()?;

    let line = lines
        .next()
        .transpose()?
        .unwrap_or_default();
    let line = line.trim().to_string();

    // Catalog fields also accept the option number.
    Ok(match field {
        Field::ServiceType => resolve_option(&line, &catalog::SERVICES),
        Field::PreferredTime => resolve_option(&line, &catalog::TIME_SLOTS),
        _ => line,
    })
}

fn print_options(title: &str, options: &[&str]) {
    println!("{title}:");
    for (i, option) in options.iter().enumerate() {
        println!("  {:2}. {option}", i + 1);
    }
}

fn resolve_option(input: &str, options: &[&str]) -> String {
    match input.parse::<usize>() {
        Ok(n) if (1..=options.len()).contains(&n) => options[n - 1].to_string(),
        _ => input.to_string(),
    }
}

fn prompt_yes_no(lines: &mut Lines<'_>, prompt: &str) -> Result<bool, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let line = lines
        .next()
        .transpose()?
        .unwrap_or_default();
    Ok(matches!(
        line.trim().to_lowercase().as_str(),
        "s" | "sim" | "y" | "yes"
    ))
}
