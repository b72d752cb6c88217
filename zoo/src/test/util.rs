//! Test doubles for the executor and the prompt.

use std::{borrow::Cow, sync::Mutex};

use async_trait::async_trait;

use crate::{
    prompt::Confirm,
    runner::{RemoteExecutor, Shell},
};

struct Rule {
    command: String,
    shell: Option<Shell>,
    stdout: String,
}

/// An executor that answers from a table of canned outputs and remembers
/// every command it was given. Unknown commands print nothing.
#[derive(Default)]
pub struct MockExecutor {
    rules: Vec<Rule>,
    calls: Mutex<Vec<(String, Shell)>>,
}

pub struct RuleBuilder<'a> {
    owner: &'a mut MockExecutor,
    rule: Rule,
}

impl<'a> RuleBuilder<'a> {
    pub fn on(mut self, shell: Shell) -> Self {
        self.rule.shell = Some(shell);
        self
    }

    pub fn stdout(mut self, stdout: impl Into<String>) -> Self {
        self.rule.stdout = stdout.into();
        self
    }

    pub fn finish(self) {
        self.owner.rules.push(self.rule);
    }
}

impl MockExecutor {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn when(&mut self, command: impl Into<String>) -> RuleBuilder<'_> {
        RuleBuilder {
            owner: self,
            rule: Rule {
                command: command.into(),
                shell: None,
                stdout: String::new(),
            },
        }
    }

    pub fn calls(&self) -> Vec<(String, Shell)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn commands(&self) -> Vec<String> {
        self.calls().into_iter().map(|(c, _)| c).collect()
    }
}

#[async_trait]
impl RemoteExecutor for MockExecutor {
    fn name(&self) -> Cow<'static, str> {
        "mock".into()
    }

    async fn run(&self, command: &str, shell: Shell) -> anyhow::Result<String> {
        self.calls.lock().unwrap().push((command.to_owned(), shell));
        let out = self
            .rules
            .iter()
            .find(|r| r.command == command && r.shell.map_or(true, |s| s == shell))
            .map(|r| r.stdout.clone())
            .unwrap_or_default();
        Ok(out)
    }
}

/// A prompt that replays scripted answers, then keeps giving the fallback.
pub struct MockConfirm {
    answers: Mutex<Vec<bool>>,
    fallback: bool,
    prompts: Mutex<Vec<String>>,
}

impl MockConfirm {
    pub fn always(answer: bool) -> Self {
        Self::scripted(vec![], answer)
    }

    pub fn scripted(answers: Vec<bool>, fallback: bool) -> Self {
        MockConfirm {
            answers: Mutex::new(answers.into_iter().rev().collect()),
            fallback,
            prompts: Mutex::new(vec![]),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Confirm for MockConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        self.prompts.lock().unwrap().push(prompt.to_owned());
        self.answers.lock().unwrap().pop().unwrap_or(self.fallback)
    }
}
