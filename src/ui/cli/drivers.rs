use anyhow::Result;
use inquire::{Select, Text};

/// Source of interactive answers. The menu only talks to this trait so it
/// can be driven by a script in tests.
pub trait PromptDriver {
    /// Free text; an empty answer yields `default`.
    fn ask_string(&self, title: &str, help: &str, default: &str) -> Result<String>;

    /// Index of the chosen entry in `options`.
    fn ask_select(&self, title: &str, options: &[String]) -> Result<usize>;
}

pub struct InquireDriver;

impl PromptDriver for InquireDriver {
    fn ask_string(&self, title: &str, help: &str, default: &str) -> Result<String> {
        let mut prompt = Text::new(title);
        if !help.is_empty() {
            prompt = prompt.with_help_message(help);
        }
        if !default.is_empty() {
            prompt = prompt.with_default(default);
        }
        Ok(prompt.prompt()?)
    }

    fn ask_select(&self, title: &str, options: &[String]) -> Result<usize> {
        let selected = Select::new(title, options.to_vec()).raw_prompt()?;
        Ok(selected.index)
    }
}
