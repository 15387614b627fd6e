use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use nbayes::classifiers::{Classifier, NaiveBayes};
use nbayes::evaluation::ConfusionMatrix;
use nbayes::persistence::{JsonModelStore, ModelFile, ModelStore, default_model_path};
use nbayes::streams::DatasetSource;
use nbayes::streams::arff::ArffFileSource;
use nbayes::tasks::{CaseRequest, Session};
use nbayes::ui::cli::args::{ClassifyArgs, Cli, Command, EvaluateArgs, TrainArgs};
use nbayes::ui::cli::drivers::InquireDriver;
use nbayes::ui::cli::menu::run_menu;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const FG_CYAN: &str = "\x1b[36m";
const FG_GREEN: &str = "\x1b[32m";
const FG_GREY: &str = "\x1b[90m";

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Command::Train(args)) => train(args),
        Some(Command::Evaluate(args)) => evaluate(args),
        Some(Command::Classify(args)) => classify(args),
        Some(Command::Schema) => {
            let schema = serde_json::to_string_pretty(&ModelFile::schema())
                .context("failed to render model schema")?;
            println!("{schema}");
            Ok(())
        }
        None => {
            print_banner("Naive Bayes Classifier");
            let mut session = Session::new();
            run_menu(
                &InquireDriver,
                &mut session,
                &ArffFileSource::default(),
                &JsonModelStore,
                &mut io::stdout(),
            )
            .context("interactive menu failed")
        }
    }
}

fn train(args: TrainArgs) -> Result<()> {
    print_banner("Train");
    let dataset = ArffFileSource::new(args.class_index)
        .load(&args.dataset)
        .with_context(|| format!("failed to load {}", args.dataset.display()))?;

    let mut model = NaiveBayes::new();
    model.train(&dataset).context("training failed")?;

    let model_path = args
        .model
        .unwrap_or_else(|| default_model_path(&args.dataset));
    JsonModelStore
        .save(&model, &model_path)
        .with_context(|| format!("failed to save model to {}", model_path.display()))?;

    println!(
        "{FG_GREEN}✓{RESET} trained on {} instances, classes: {}",
        dataset.len(),
        model.class_values().join(", ")
    );
    println!("{DIM}model saved to {}{RESET}", model_path.display());
    Ok(())
}

fn evaluate(args: EvaluateArgs) -> Result<()> {
    print_banner("Evaluate");
    let model = load_model(&args.model)?;
    let dataset = ArffFileSource::new(args.class_index)
        .load(&args.dataset)
        .with_context(|| format!("failed to load {}", args.dataset.display()))?;

    let matrix = ConfusionMatrix::evaluate(&dataset, &model).context("evaluation failed")?;
    println!("{matrix}");
    Ok(())
}

fn classify(args: ClassifyArgs) -> Result<()> {
    let model = load_model(&args.model)?;
    let case = CaseRequest::for_classifier(&model, args.values)?;
    let prediction = case.classify(&model).context("classification failed")?;
    println!("{BOLD}{prediction}{RESET}");
    for (class_val, score) in model.get_votes_for_instance(case.values())? {
        println!("{DIM}  {class_val}: {score:.6}{RESET}");
    }
    Ok(())
}

fn load_model(path: &Path) -> Result<NaiveBayes> {
    JsonModelStore
        .load(path)
        .with_context(|| format!("failed to load model from {}", path.display()))
}

fn print_banner(title: &str) {
    println!("{BOLD}{FG_CYAN}▶ {title}{RESET}  {}", timestamp_now());
    println!(
        "{FG_GREY}────────────────────────────────────────────────────────────────────────{RESET}"
    );
}

fn timestamp_now() -> String {
    use chrono::{Local, SecondsFormat};
    let now = Local::now();
    format!(
        "{DIM}{}{}",
        now.to_rfc3339_opts(SecondsFormat::Secs, true),
        RESET
    )
}
