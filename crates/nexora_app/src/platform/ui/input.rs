use nexora_core::InputKind;

/// Lines that control the interactive loops instead of being sent on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Reset,
    NewChat,
    History,
    Delete(String),
}

pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    let rest = line.strip_prefix(':')?;
    let mut parts = rest.split_whitespace();
    match parts.next()? {
        "q" | "quit" | "exit" => Some(Command::Quit),
        "reset" => Some(Command::Reset),
        "new" => Some(Command::NewChat),
        "history" => Some(Command::History),
        "delete" => parts.next().map(|id| Command::Delete(id.to_string())),
        _ => None,
    }
}

/// Choice steps accept the option number as a shortcut for its label.
pub fn resolve_choice(kind: InputKind, raw: &str) -> String {
    if let InputKind::Choice(options) = kind {
        if let Ok(index) = raw.trim().parse::<usize>() {
            if let Some(label) = index.checked_sub(1).and_then(|i| options.get(i)) {
                return (*label).to_string();
            }
        }
    }
    raw.to_string()
}

/// Comma separated list; blanks dropped.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}
