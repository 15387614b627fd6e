use crate::ui::cli::drivers::PromptDriver;
use anyhow::{Result, anyhow};
use std::cell::RefCell;
use std::collections::VecDeque;

enum Answer {
    Text(String),
    Choice(usize),
}

/// Replays queued answers in order and records every text prompt it saw
/// as `(title, help)`. Running out of answers is an error.
#[derive(Default)]
pub struct ScriptedDriver {
    answers: RefCell<VecDeque<Answer>>,
    asked: RefCell<Vec<(String, String)>>,
}

impl ScriptedDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(self, text: &str) -> Self {
        self.answers
            .borrow_mut()
            .push_back(Answer::Text(text.to_string()));
        self
    }

    pub fn choose(self, index: usize) -> Self {
        self.answers.borrow_mut().push_back(Answer::Choice(index));
        self
    }

    pub fn asked(&self) -> Vec<(String, String)> {
        self.asked.borrow().clone()
    }

    pub fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }
}

impl PromptDriver for ScriptedDriver {
    fn ask_string(&self, title: &str, help: &str, default: &str) -> Result<String> {
        self.asked
            .borrow_mut()
            .push((title.to_string(), help.to_string()));
        match self.answers.borrow_mut().pop_front() {
            Some(Answer::Text(t)) if t.is_empty() => Ok(default.to_string()),
            Some(Answer::Text(t)) => Ok(t),
            Some(Answer::Choice(_)) => Err(anyhow!("expected a text answer for {title}")),
            None => Err(anyhow!("script exhausted at {title}")),
        }
    }

    fn ask_select(&self, title: &str, options: &[String]) -> Result<usize> {
        match self.answers.borrow_mut().pop_front() {
            Some(Answer::Choice(i)) if i < options.len() => Ok(i),
            Some(Answer::Choice(i)) => Err(anyhow!("choice {i} out of range for {title}")),
            Some(Answer::Text(_)) => Err(anyhow!("expected a choice for {title}")),
            None => Err(anyhow!("script exhausted at {title}")),
        }
    }
}
