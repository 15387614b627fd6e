use std::io::Write;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use strum::{EnumMessage, IntoEnumIterator};
use tracing::warn;

use crate::classifiers::Classifier;
use crate::error::BayesError;
use crate::persistence::{ModelStore, default_model_path};
use crate::streams::DatasetSource;
use crate::tasks::{Session, prompt_case};
use crate::ui::cli::drivers::PromptDriver;

const DIM_ITALIC: &str = "\x1b[2m\x1b[3m";
const RESET: &str = "\x1b[0m";

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum_macros::EnumIter,
    strum_macros::EnumMessage,
    strum_macros::IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum MenuOption {
    #[strum(
        message = "Generate New Classifier",
        detailed_message = "Load an ARFF dataset, train on it and save the model next to it."
    )]
    GenerateClassifier,
    #[strum(
        message = "Load and Test Classifier",
        detailed_message = "Evaluate a saved model on a test dataset."
    )]
    LoadAndTest,
    #[strum(
        message = "Enter New Cases",
        detailed_message = "Classify cases typed in by hand."
    )]
    EnterNewCases,
    #[strum(message = "Quit")]
    Quit,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum_macros::EnumIter,
    strum_macros::EnumMessage,
    strum_macros::IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum CaseOption {
    #[strum(message = "Classify a New Case")]
    ClassifyCase,
    #[strum(message = "Back to Main Menu")]
    Back,
}

fn menu_items<K>() -> Vec<(K, String)>
where
    K: Copy + Into<&'static str> + EnumMessage + IntoEnumIterator,
{
    K::iter()
        .map(|k| {
            let label = k.get_message().unwrap_or_else(|| k.into());
            let desc = k
                .get_detailed_message()
                .filter(|d| *d != label)
                .unwrap_or("");
            let text = if desc.is_empty() {
                label.to_string()
            } else {
                format!("{label}  {DIM_ITALIC}{desc}{RESET}")
            };
            (k, text)
        })
        .collect()
}

fn choose<K, D>(driver: &D, title: &str) -> Result<K>
where
    K: Copy + Into<&'static str> + EnumMessage + IntoEnumIterator,
    D: PromptDriver,
{
    let items = menu_items::<K>();
    let texts: Vec<String> = items.iter().map(|(_, t)| t.clone()).collect();
    let index = driver.ask_select(title, &texts)?;
    items
        .get(index)
        .map(|(k, _)| *k)
        .ok_or_else(|| anyhow!("no menu entry at position {index}"))
}

/// Runs the main menu until the user quits. Classifier failures are
/// reported on `out` and the menu is shown again; prompt and output
/// failures end the loop.
pub fn run_menu<D: PromptDriver>(
    driver: &D,
    session: &mut Session,
    source: &dyn DatasetSource,
    store: &dyn ModelStore,
    out: &mut dyn Write,
) -> Result<()> {
    loop {
        let outcome = match choose::<MenuOption, _>(driver, "Choose an option:")? {
            MenuOption::GenerateClassifier => {
                generate_classifier(driver, session, source, store, out)
            }
            MenuOption::LoadAndTest => load_and_test(driver, session, source, store, out),
            MenuOption::EnterNewCases => enter_new_cases(driver, session, out),
            MenuOption::Quit => return Ok(()),
        };
        report(outcome, out)?;
    }
}

fn report(outcome: Result<()>, out: &mut dyn Write) -> Result<()> {
    let Err(e) = outcome else {
        return Ok(());
    };
    match e.downcast_ref::<BayesError>() {
        Some(err) => {
            warn!(error = %err, "menu operation failed");
            writeln!(out, "✗ {err}")?;
            Ok(())
        }
        None => Err(e),
    }
}

fn prompt_path<D: PromptDriver>(
    driver: &D,
    title: &str,
    default: &str,
    out: &mut dyn Write,
) -> Result<PathBuf> {
    loop {
        let answer = driver.ask_string(title, "", default)?;
        let trimmed = answer.trim();
        if trimmed.is_empty() {
            writeln!(out, "✗ Path cannot be empty")?;
            continue;
        }
        return Ok(PathBuf::from(trimmed));
    }
}

fn generate_classifier<D: PromptDriver>(
    driver: &D,
    session: &mut Session,
    source: &dyn DatasetSource,
    store: &dyn ModelStore,
    out: &mut dyn Write,
) -> Result<()> {
    let path = prompt_path(driver, "Training dataset (.arff):", "", out)?;

    let dataset = session.load_dataset(source, &path)?;
    writeln!(
        out,
        "Loaded {} instances of '{}' ({} attributes, class '{}')",
        dataset.len(),
        dataset.relation_name(),
        dataset.number_of_attributes(),
        dataset.class_name()
    )?;

    let model = session.train()?;
    writeln!(out, "Trained on classes: {}", model.class_values().join(", "))?;

    let model_path = default_model_path(&path);
    session.save_classifier(store, &model_path)?;
    writeln!(out, "Classifier information saved to {}", model_path.display())?;
    Ok(())
}

fn load_and_test<D: PromptDriver>(
    driver: &D,
    session: &mut Session,
    source: &dyn DatasetSource,
    store: &dyn ModelStore,
    out: &mut dyn Write,
) -> Result<()> {
    let model_path = prompt_path(driver, "Saved classifier (.json):", "", out)?;
    let default_test = model_path.with_extension("arff");
    let test_path = prompt_path(
        driver,
        "Test dataset (.arff):",
        &default_test.to_string_lossy(),
        out,
    )?;

    session.load_classifier(store, &model_path)?;
    session.load_dataset(source, &test_path)?;
    let matrix = session.evaluate()?;
    writeln!(out, "{matrix}")?;
    Ok(())
}

fn enter_new_cases<D: PromptDriver>(
    driver: &D,
    session: &mut Session,
    out: &mut dyn Write,
) -> Result<()> {
    if session.classifier().is_none() {
        return Err(BayesError::NothingLoaded("classifier").into());
    }

    loop {
        match choose::<CaseOption, _>(driver, "Enter new cases:")? {
            CaseOption::ClassifyCase => {
                let outcome = classify_one(driver, session, out);
                report(outcome, out)?;
            }
            CaseOption::Back => return Ok(()),
        }
    }
}

fn classify_one<D: PromptDriver>(driver: &D, session: &Session, out: &mut dyn Write) -> Result<()> {
    let model = session
        .classifier()
        .ok_or(BayesError::NothingLoaded("classifier"))?;
    let case = prompt_case(driver, model)?;
    let prediction = session.classify_case(&case)?;
    writeln!(out, "Predicted class: {prediction}")?;
    Ok(())
}
