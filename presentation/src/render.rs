use colored::Colorize;
use domain::admin::{AdminConsole, Tab};
use domain::models::{Message, Role, NO_LOGS, PROMPT_UPDATED};

const FALLBACK_WIDTH: usize = 80;
const MAX_RULE_WIDTH: usize = 100;

fn rule_width() -> usize {
    crossterm::terminal::size()
        .map(|(cols, _)| cols as usize)
        .unwrap_or(FALLBACK_WIDTH)
        .clamp(20, MAX_RULE_WIDTH)
}

pub fn rule() -> String {
    "─".repeat(rule_width()).dimmed().to_string()
}

pub fn message(msg: &Message) -> String {
    match msg.role {
        Role::User => format!("{} {}", "You:".blue().bold(), msg.content),
        Role::Bot => format!("{}\n{}", "eCOMET:".green().bold(), msg.content),
    }
}

pub fn transcript(messages: &[Message]) -> String {
    messages
        .iter()
        .map(message)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Log viewer body, most recent exchange first.
pub fn logs(console: &AdminConsole) -> String {
    if console.logs().is_empty() {
        return NO_LOGS.dimmed().to_string();
    }
    let rule = rule();
    console
        .display_logs()
        .map(|entry| {
            format!(
                "{}\n{} {}\n{} {}\n{}",
                entry.timestamp.dimmed(),
                "User:".cyan().bold(),
                entry.user,
                "Bot:".green(),
                entry.bot,
                rule
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn prompt(console: &AdminConsole) -> String {
    let mut out = format!("{}\n{}\n{}", "System prompt".bold(), rule(), console.prompt());
    if let Some(status) = console.status() {
        out.push('\n');
        out.push_str(&status_line(status));
    }
    out
}

/// Body of whichever admin tab is selected.
pub fn active_tab(console: &AdminConsole) -> String {
    match console.tab() {
        Tab::Logs => format!("{}\n{}", "User Interactions".bold(), logs(console)),
        Tab::Prompt => prompt(console),
    }
}

fn status_line(status: &str) -> String {
    if status == PROMPT_UPDATED {
        status.green().to_string()
    } else {
        status.red().to_string()
    }
}
