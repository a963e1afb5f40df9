use once_cell::sync::Lazy;
use std::{collections::VecDeque, env, sync::Mutex};

struct ConfirmQueue {
    enabled: bool,
    answers: VecDeque<bool>,
}

impl ConfirmQueue {
    fn from_env() -> Self {
        if let Ok(raw) = env::var("EXPENSE_CORE_TEST_CONFIRMS") {
            Self {
                enabled: true,
                answers: parse_confirms(&raw),
            }
        } else {
            Self::new()
        }
    }

    fn new() -> Self {
        Self {
            enabled: false,
            answers: VecDeque::new(),
        }
    }
}

static CONFIRMS: Lazy<Mutex<ConfirmQueue>> = Lazy::new(|| Mutex::new(ConfirmQueue::from_env()));

/// Pops the next scripted answer, or `None` when no queue is installed.
/// Panics when the queue runs dry so a test script that forgot an answer
/// fails loudly instead of hanging on a real prompt.
pub fn next_confirm(label: &str) -> Option<bool> {
    let mut guard = CONFIRMS.lock().expect("confirm queue poisoned");
    if !guard.enabled {
        return None;
    }
    Some(
        guard
            .answers
            .pop_front()
            .unwrap_or_else(|| panic!("Confirmations exhausted before `{label}` prompt")),
    )
}

fn parse_confirms(raw: &str) -> VecDeque<bool> {
    raw.split('|')
        .filter_map(|token| {
            let trimmed = token.trim();
            if trimmed.is_empty() {
                return None;
            }
            Some(matches!(
                trimmed.to_ascii_lowercase().as_str(),
                "y" | "yes" | "true" | "1"
            ))
        })
        .collect()
}

pub fn install_confirms(answers: Vec<bool>) {
    let mut guard = CONFIRMS.lock().expect("confirm queue poisoned");
    guard.enabled = true;
    guard.answers = answers.into();
}

pub fn reset_confirms() {
    let mut guard = CONFIRMS.lock().expect("confirm queue poisoned");
    guard.enabled = false;
    guard.answers.clear();
}
