//! Canned assistant replies.
//!
//! The assistant is a keyword matcher over the visitor's message, not a
//! language model. Topics are tested in a fixed priority order and the first
//! hit wins; anything unmatched draws from a small pool of generic
//! acknowledgements. Everything here is pure so reply selection can be tested
//! without a runtime; only the delay sampling touches randomness, and it
//! takes the generator as an argument.

use std::time::Duration;

use rand::Rng;

/// What the visitor's message is about, in match priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Greeting,
    Courses,
    Pricing,
    Cart,
    Help,
    Thanks,
}

/// Generic acknowledgements for messages no topic matches.
pub const FALLBACK_REPLIES: [&str; 5] = [
    "Merci pour votre message ! Un conseiller vous répondra bientôt. 📩",
    "Message bien reçu ! Comment puis-je vous aider ? 💬",
    "Intéressant ! Pouvez-vous m'en dire plus ? 🤔",
    "Je prends note de votre demande. Besoin d'autres informations ? 📝",
    "Excellente question ! Notre équipe va vous répondre rapidement. ⚡",
];

/// The once-per-empty-transcript welcome message.
pub const WELCOME: &str = "Bonjour et bienvenue sur Chouette Learning ! 👋 Je suis \
     votre assistant virtuel. N'hésitez pas à me poser des questions sur nos \
     formations, nos tarifs ou notre plateforme.";

/// Classify a message. Matching is case-insensitive; the first topic whose
/// keyword appears anywhere in the message wins.
#[must_use]
pub fn classify(content: &str) -> Option<Topic> {
    let lower = content.to_lowercase();
    let contains_any = |needles: &[&str]| needles.iter().any(|n| lower.contains(n));

    if contains_any(&["bonjour", "salut", "hello"]) {
        Some(Topic::Greeting)
    } else if contains_any(&["cours", "formation"]) {
        Some(Topic::Courses)
    } else if contains_any(&["prix", "tarif"]) {
        Some(Topic::Pricing)
    } else if contains_any(&["panier", "acheter"]) {
        Some(Topic::Cart)
    } else if contains_any(&["aide", "help", "?"]) {
        Some(Topic::Help)
    } else if contains_any(&["merci"]) {
        Some(Topic::Thanks)
    } else {
        None
    }
}

/// The reply for a classified topic.
#[must_use]
pub const fn response_for(topic: Topic) -> &'static str {
    match topic {
        Topic::Greeting => "Bonjour ! Comment puis-je vous aider aujourd'hui ? 😊",
        Topic::Courses => {
            "Nous proposons 6 formations exceptionnelles ! Consultez notre catalogue \
             pour découvrir Python, UX/UI Design, JavaScript, Agile, IA et React.js. 📚"
        }
        Topic::Pricing => {
            "Nos cours sont à partir de 29,99 €. Consultez la page Cours pour voir \
             tous les tarifs ! 💰"
        }
        Topic::Cart => {
            "Vous pouvez ajouter des cours à votre panier directement depuis la page \
             Cours avec les boutons +/- ! 🛒"
        }
        Topic::Help => {
            "Je suis là pour vous aider ! Posez-moi des questions sur nos cours, les \
             tarifs, ou la navigation sur le site. 🎓"
        }
        Topic::Thanks => "Avec plaisir ! N'hésitez pas si vous avez d'autres questions. 😊",
    }
}

/// Full reply selection: topic response, or a random fallback.
pub fn compose_reply<R: Rng + ?Sized>(content: &str, rng: &mut R) -> String {
    match classify(content) {
        Some(topic) => response_for(topic).to_owned(),
        None => {
            let index = rng.random_range(0..FALLBACK_REPLIES.len());
            FALLBACK_REPLIES.get(index).copied().unwrap_or(FALLBACK_REPLIES[0]).to_owned()
        }
    }
}

/// Sample a reply delay in `[min, max)`.
pub fn reply_delay<R: Rng + ?Sized>(rng: &mut R, min: Duration, max: Duration) -> Duration {
    let millis = rng.random_range(min.as_millis() as u64..max.as_millis() as u64);
    Duration::from_millis(millis)
}
