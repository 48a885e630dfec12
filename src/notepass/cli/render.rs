use colored::Colorize;
use notepass::api::{CmdMessage, CmdResult, MessageLevel};
use notepass::store::notes::NO_NOTES;

pub(super) fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|message| match message.level {
            MessageLevel::Info => message.content.dimmed().to_string(),
            MessageLevel::Success => message.content.green().to_string(),
            MessageLevel::Warning => message.content.yellow().to_string(),
            MessageLevel::Error => message.content.red().to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_listing(listing: &str) -> String {
    if listing == NO_NOTES {
        return listing.dimmed().to_string();
    }
    listing.to_string()
}

/// Everything a command produced, in display order. Empty when there is
/// nothing to show.
pub(super) fn render_result(result: &CmdResult) -> String {
    let mut sections = Vec::new();

    if !result.messages.is_empty() {
        sections.push(render_messages(&result.messages));
    }
    if let Some(listing) = &result.listing {
        sections.push(render_listing(listing));
    }
    if let Some(revealed) = &result.revealed {
        sections.push(format!(
            "{}\n{}",
            format!("--- Password for '{}' ---", revealed.service).bold(),
            revealed.password
        ));
    }
    if !result.services.is_empty() {
        let names: Vec<_> = result
            .services
            .iter()
            .map(|service| format!("  {}", service))
            .collect();
        sections.push(names.join("\n"));
    }
    if let Some(config) = &result.config {
        let entries: Vec<_> = config
            .entries()
            .into_iter()
            .map(|(key, value)| format!("{} = {}", key.cyan(), value))
            .collect();
        sections.push(entries.join("\n"));
    }

    // A blank line separates a status message from the listing below it
    sections.join("\n\n")
}

pub(super) fn print_result(result: &CmdResult) {
    let output = render_result(result);
    if !output.is_empty() {
        println!("{}", output);
    }
}

pub(super) fn print_error(message: &str) {
    println!("{}", render_messages(&[CmdMessage::error(message)]));
}
