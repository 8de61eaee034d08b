//! Chat transcript projection and its reconciler.
//!
//! Grouping runs on local calendar days: whatever day the visitor's clock
//! says a message was sent, that is the day it files under.

use askama::Template;
use chrono::{Local, Locale, NaiveDate};

use crate::error::RenderError;
use crate::models::{ChatMessage, Direction};
use crate::views::surface::{Region, Surface};

/// One rendered bubble.
#[derive(Debug, Clone)]
pub struct MessageView {
    pub bubble_class: &'static str,
    pub avatar: String,
    pub author: String,
    pub time: String,
    pub content: String,
}

impl From<&ChatMessage> for MessageView {
    fn from(message: &ChatMessage) -> Self {
        let local = message.timestamp.with_timezone(&Local);
        Self {
            bubble_class: match message.direction {
                Direction::Outbound => "bubble-right",
                Direction::Inbound => "bubble-left",
            },
            avatar: message.author.avatar.clone(),
            author: message.author.name.clone(),
            time: local.format("%H:%M").to_string(),
            content: message.content.clone(),
        }
    }
}

/// A run of consecutive messages sharing a calendar day.
#[derive(Debug, Clone)]
pub struct DayGroup {
    pub label: String,
    pub messages: Vec<MessageView>,
}

/// Split a chronological transcript into day groups, labeled relative to
/// `today`.
#[must_use]
pub fn project_transcript(messages: &[ChatMessage], today: NaiveDate) -> Vec<DayGroup> {
    let mut groups: Vec<DayGroup> = Vec::new();
    let mut current_day: Option<NaiveDate> = None;

    for message in messages {
        let day = message.timestamp.with_timezone(&Local).date_naive();
        if current_day != Some(day) {
            current_day = Some(day);
            groups.push(DayGroup {
                label: day_label(day, today),
                messages: Vec::new(),
            });
        }
        if let Some(group) = groups.last_mut() {
            group.messages.push(MessageView::from(message));
        }
    }
    groups
}

/// "Aujourd'hui", "Hier", or the French long day ("21 août").
fn day_label(day: NaiveDate, today: NaiveDate) -> String {
    if day == today {
        "Aujourd'hui".to_owned()
    } else if today.pred_opt() == Some(day) {
        "Hier".to_owned()
    } else {
        day.format_localized("%-d %B", Locale::fr_FR).to_string()
    }
}

#[derive(Template)]
#[template(path = "chat/transcript.html")]
struct TranscriptTemplate {
    groups: Vec<DayGroup>,
}

#[derive(Template)]
#[template(path = "chat/empty.html")]
struct EmptyChatTemplate;

/// Re-render the transcript region and refresh the auto-scroll anchor.
///
/// A surface without the transcript mounted is left completely untouched,
/// anchor included.
///
/// # Errors
///
/// Returns [`RenderError`] if the template fails.
pub fn reconcile_chat(surface: &mut Surface, messages: &[ChatMessage]) -> Result<(), RenderError> {
    reconcile_chat_at(surface, messages, Local::now().date_naive())
}

/// [`reconcile_chat`] with an explicit notion of today.
///
/// # Errors
///
/// Returns [`RenderError`] if the template fails.
pub fn reconcile_chat_at(
    surface: &mut Surface,
    messages: &[ChatMessage],
    today: NaiveDate,
) -> Result<(), RenderError> {
    if !surface.is_mounted(&Region::ChatTranscript) {
        return Ok(());
    }

    let html = if messages.is_empty() {
        EmptyChatTemplate.render()?
    } else {
        TranscriptTemplate {
            groups: project_transcript(messages, today),
        }
        .render()?
    };
    surface.set(&Region::ChatTranscript, html, true);
    surface.scroll_chat_to(messages.last().map(|m| m.id));
    Ok(())
}
