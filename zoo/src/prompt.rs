use dialoguer::Confirm as ConfirmPrompt;
use std::{
    io::{self, BufRead, Write},
    sync::Mutex,
};

/// Something that can ask the user a yes/no question.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Asks on the controlling terminal when there is one, and falls back to
/// plain stdin/stdout when input is piped.
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        if console::user_attended() {
            ConfirmPrompt::new()
                .with_prompt(prompt)
                .default(false)
                .interact()
                .unwrap_or(false)
        } else {
            let stdin = io::stdin();
            LineConfirm::new(stdin.lock(), io::stdout()).confirm(prompt)
        }
    }
}

/// Writes `<prompt> [y|n] ` and reads one line. Only `y`, in either case,
/// is a yes; end of input or a read error is a no.
pub struct LineConfirm<R, W> {
    io: Mutex<(R, W)>,
}

impl<R: BufRead, W: Write> LineConfirm<R, W> {
    pub fn new(input: R, output: W) -> Self {
        LineConfirm {
            io: Mutex::new((input, output)),
        }
    }

    pub fn into_inner(self) -> (R, W) {
        match self.io.into_inner() {
            Ok(io) => io,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<R: BufRead, W: Write> Confirm for LineConfirm<R, W> {
    fn confirm(&self, prompt: &str) -> bool {
        let mut guard = match self.io.lock() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        };
        let (input, output) = &mut *guard;
        if write!(output, "{} [y|n] ", prompt)
            .and_then(|_| output.flush())
            .is_err()
        {
            return false;
        }
        let mut answer = String::new();
        match input.read_line(&mut answer) {
            Ok(0) | Err(_) => {
                tracing::debug!("No answer on stdin, treating as no");
                false
            }
            Ok(_) => answer.trim().eq_ignore_ascii_case("y"),
        }
    }
}
