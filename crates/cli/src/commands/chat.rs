//! Assistant chat commands.
//!
//! # Usage
//!
//! ```bash
//! chouette chat send "Bonjour !"
//! chouette chat show
//! chouette chat clear --yes
//! ```

#![allow(clippy::print_stdout)]

use chouette_storefront::app::App;
use chouette_storefront::views;

use super::CliError;

/// Send a message and, unless `no_wait`, wait for the assistant's reply.
///
/// With `no_wait` the process returns before the reply timer fires, so the
/// reply never lands, exactly like closing the page mid-conversation. The
/// sent message itself is already persisted either way.
///
/// # Errors
///
/// Returns the store's rejection when the message is blank.
pub async fn send(app: &App, message: &str, no_wait: bool) -> Result<(), CliError> {
    let sent = app.send_message(message)?;
    println!("Vous : {}", message.trim());

    if no_wait {
        drop(sent.reply);
        return Ok(());
    }

    println!("L'assistant écrit…");
    if let Err(e) = sent.reply.await {
        tracing::warn!("reply task failed: {e}");
        return Ok(());
    }

    if let Some(reply) = app.chat_messages().last() {
        println!("{} : {}", reply.author.name, reply.content);
    }
    Ok(())
}

/// Print the transcript grouped by day, as the chat page shows it.
pub fn show(app: &App) {
    let messages = app.chat_messages();
    if messages.is_empty() {
        println!("Bienvenue sur le chat Chouette Learning !");
        println!("Commencez la conversation en envoyant un message.");
        return;
    }

    let today = chrono::Local::now().date_naive();
    for group in views::chat::project_transcript(&messages, today) {
        println!("--- {} ---", group.label);
        for message in &group.messages {
            println!(
                "[{}] {} {} : {}",
                message.time, message.avatar, message.author, message.content
            );
        }
    }
}

/// Wipe the transcript. Demands the `--yes` flag first.
///
/// # Errors
///
/// [`CliError::Unconfirmed`] without the flag; nothing is touched then.
pub fn clear(app: &App, yes: bool) -> Result<(), CliError> {
    if !yes {
        return Err(CliError::Unconfirmed);
    }
    app.clear_chat();
    println!("Historique du chat effacé.");
    Ok(())
}
