//! The transient confirmation toast.

use askama::Template;

use crate::error::RenderError;
use crate::views::surface::{Region, Surface};

#[derive(Template)]
#[template(path = "partials/notice.html")]
struct NoticeTemplate {
    text: String,
}

/// Flash a confirmation into the notice region, when mounted.
///
/// # Errors
///
/// Returns [`RenderError`] if the template fails.
pub fn reconcile_notice(surface: &mut Surface, text: &str) -> Result<(), RenderError> {
    let html = NoticeTemplate {
        text: text.to_owned(),
    }
    .render()?;
    surface.set(&Region::Notice, html, true);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_text_is_escaped() {
        let mut surface = Surface::new();
        surface.mount(Region::Notice);
        reconcile_notice(&mut surface, "\"Python\" ajouté au panier !").unwrap();

        let slot = surface.slot(&Region::Notice).unwrap();
        assert!(slot.visible);
        assert!(slot.html.contains("&quot;Python&quot;"));
        assert!(slot.html.contains('✓'));
    }

    #[test]
    fn test_unmounted_notice_is_dropped() {
        let mut surface = Surface::new();
        reconcile_notice(&mut surface, "peu importe").unwrap();
        assert!(surface.slot(&Region::Notice).is_none());
    }
}
