use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint};

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Naive Bayes classifier for nominal ARFF datasets"
)]
pub struct Cli {
    /// Without a subcommand the interactive menu starts
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Train on a dataset and save the model
    Train(TrainArgs),
    /// Evaluate a saved model on a test dataset and print the confusion matrix
    Evaluate(EvaluateArgs),
    /// Classify one case with a saved model
    Classify(ClassifyArgs),
    /// Print the JSON schema of the model file
    Schema,
}

#[derive(Debug, Args)]
pub struct TrainArgs {
    /// Training dataset (.arff)
    #[arg(long, short, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub dataset: PathBuf,

    /// Where to write the model (defaults to the dataset path with a .json extension)
    #[arg(long, short, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub model: Option<PathBuf>,

    /// 0-based index of the class attribute (defaults to the last one)
    #[arg(long, value_name = "N")]
    pub class_index: Option<usize>,
}

#[derive(Debug, Args)]
pub struct EvaluateArgs {
    /// Saved model (.json)
    #[arg(long, short, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub model: PathBuf,

    /// Test dataset (.arff)
    #[arg(long, short, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub dataset: PathBuf,

    /// 0-based index of the class attribute (defaults to the last one)
    #[arg(long, value_name = "N")]
    pub class_index: Option<usize>,
}

#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Saved model (.json)
    #[arg(long, short, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub model: PathBuf,

    /// One value per model attribute, in order
    #[arg(value_name = "VALUE", num_args = 0..)]
    pub values: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_interactive() {
        let cli = Cli::try_parse_from(["nbayes"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn train_parses_optional_model_and_class_index() {
        let cli = Cli::try_parse_from(["nbayes", "train", "-d", "w.arff", "--class-index", "0"]).unwrap();
        match cli.command {
            Some(Command::Train(a)) => {
                assert_eq!(a.dataset, PathBuf::from("w.arff"));
                assert_eq!(a.model, None);
                assert_eq!(a.class_index, Some(0));
            }
            other => panic!("expected train, got {other:?}"),
        }
    }

    #[test]
    fn classify_collects_values_in_order() {
        let cli =
            Cli::try_parse_from(["nbayes", "classify", "-m", "w.json", "sunny", "hot"]).unwrap();
        match cli.command {
            Some(Command::Classify(a)) => {
                assert_eq!(a.model, PathBuf::from("w.json"));
                assert_eq!(a.values, vec!["sunny".to_string(), "hot".to_string()]);
            }
            other => panic!("expected classify, got {other:?}"),
        }
    }

    #[test]
    fn evaluate_requires_model() {
        assert!(Cli::try_parse_from(["nbayes", "evaluate", "--dataset", "t.arff"]).is_err());
    }
}
