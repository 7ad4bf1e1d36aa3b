mod command;
mod format;
mod sink;

pub use command::{Command, HELP};
pub use format::{EMPTY_SELECTION, format_result, format_selection};
pub use sink::{TerminalNotifier, TerminalSurface};

use crate::{
    Result,
    config::Config,
    prediction::{HttpPredictionClient, SymptomCatalog},
    session::{SessionController, SessionSettings},
};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

pub async fn run(config: Config) -> Result<()> {
    let client = HttpPredictionClient::new(&config.service)?;
    info!("Using prediction service at {}", client.base_url());

    let mut controller = SessionController::new(
        Box::new(client),
        Box::new(TerminalSurface),
        Box::new(TerminalNotifier),
        SessionSettings::from(&config),
    );

    println!("AI Medical Diagnostic Assistant");
    println!("{}", HELP);
    controller.initialize().await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match Command::parse(&line) {
            Command::Add(text) => {
                controller.add_symptoms(&text);
            }
            Command::Pick(symptom) => {
                controller.pick_symptom(&symptom);
            }
            Command::Remove(symptom) => {
                controller.remove_symptom(&symptom);
            }
            Command::List => println!("{}", format_selection(controller.symptoms().list())),
            Command::Age(raw) => {
                let weight = controller.patient().weight.to_string();
                let patient = controller.read_patient_inputs(&raw, &weight);
                println!("Age: {}", patient.age);
            }
            Command::Weight(raw) => {
                let age = controller.patient().age.to_string();
                let patient = controller.read_patient_inputs(&age, &raw);
                println!("Weight: {}kg", patient.weight);
            }
            Command::Analyze => {
                // Failures were already reported through the notifier.
                if let Err(e) = controller.analyze().await {
                    debug!("Analysis ended without a result: {}", e);
                }
            }
            Command::Export => match controller.export().await {
                Ok(path) => println!("Saved {}", path.display()),
                Err(e) => debug!("Export failed: {}", e),
            },
            Command::Clear => controller.clear(),
            Command::Catalog(category) => {
                if let Ok(catalog) = controller.symptom_catalog().await {
                    println!("{}", format_catalog(&catalog, category.as_deref()));
                }
            }
            Command::Help | Command::Unknown(_) => println!("{}", HELP),
            Command::Empty => {}
            Command::Quit => break,
        }
    }

    info!("Session ended");
    Ok(())
}

fn format_catalog(catalog: &SymptomCatalog, category: Option<&str>) -> String {
    match category {
        Some(name) => match catalog.categories.get(name) {
            Some(symptoms) if !symptoms.is_empty() => format!("{}: {}", name, symptoms.join(", ")),
            Some(_) => format!("{}: (none)", name),
            None => format!(
                "Unknown category '{}'. Categories: {}",
                name,
                catalog
                    .categories
                    .keys()
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        },
        None => catalog
            .categories
            .iter()
            .map(|(name, symptoms)| format!("{} ({})", name, symptoms.len()))
            .chain(std::iter::once(format!("total: {}", catalog.total_count)))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}
