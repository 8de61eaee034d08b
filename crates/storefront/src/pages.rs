//! Page lifecycles: mounting regions, initial render, event-driven refresh.
//!
//! A [`Page`] is one live screen of the storefront. Opening it mounts the
//! regions that screen displays and renders every store's current state into
//! them; afterwards it refreshes whichever regions an incoming event touches.
//! Stores never learn which page is open, they just publish.

use tokio::sync::broadcast;
use tokio::sync::broadcast::error::TryRecvError;
use tokio::task::JoinHandle;

use crate::app::App;
use crate::catalog;
use crate::error::RenderError;
use crate::events::StoreEvent;
use crate::views::{self, Region, Surface};

/// The screens of the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Home,
    Courses,
    Cart,
    Chat,
    Profile,
    Login,
}

impl PageKind {
    /// Regions this page mounts. Every page carries the header badge, the
    /// account link and the notice toast; the rest is per page.
    fn regions(self) -> Vec<Region> {
        let mut regions = vec![Region::CartBadge, Region::AccountLink, Region::Notice];
        match self {
            Self::Home | Self::Login => {}
            Self::Courses => {
                regions.extend(
                    catalog::all()
                        .iter()
                        .map(|course| Region::CourseQuantity(course.id.clone())),
                );
            }
            Self::Cart => {
                regions.extend([
                    Region::CartItemList,
                    Region::CartSummary,
                    Region::CartEmptyState,
                ]);
            }
            Self::Chat => regions.push(Region::ChatTranscript),
            Self::Profile => regions.push(Region::Profile),
        }
        regions
    }
}

/// One live screen and its rendered surface.
pub struct Page {
    app: App,
    kind: PageKind,
    surface: Surface,
    events: broadcast::Receiver<StoreEvent>,
    welcome: Option<JoinHandle<()>>,
}

impl Page {
    /// Open a page: mount its regions and render current state into them.
    ///
    /// The page subscribes to store events before the first render, so
    /// nothing published afterwards can slip past a later [`Self::pump`].
    /// The chat page additionally schedules the welcome message when the
    /// transcript is empty.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if the initial render fails.
    pub fn open(app: App, kind: PageKind) -> Result<Self, RenderError> {
        let mut surface = Surface::new();
        surface.mount_all(kind.regions());
        let events = app.subscribe();

        let mut page = Self {
            app,
            kind,
            surface,
            events,
            welcome: None,
        };
        page.render_all()?;

        if kind == PageKind::Chat {
            page.welcome = page.app.schedule_welcome();
        }
        Ok(page)
    }

    #[must_use]
    pub const fn kind(&self) -> PageKind {
        self.kind
    }

    #[must_use]
    pub const fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Hand over the pending welcome timer, if this page scheduled one.
    pub fn take_welcome(&mut self) -> Option<JoinHandle<()>> {
        self.welcome.take()
    }

    /// Re-render every mounted region from current store state.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if a template fails.
    pub fn refresh(&mut self) -> Result<(), RenderError> {
        self.render_all()
    }

    /// Refresh the regions one store event touches.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if a template fails.
    pub fn apply(&mut self, event: &StoreEvent) -> Result<(), RenderError> {
        match event {
            StoreEvent::CartUpdated => self.render_cart(),
            StoreEvent::ChatUpdated => self.render_chat(),
            StoreEvent::SessionUpdated => self.render_account(),
            StoreEvent::NoticePosted { text } => {
                views::notice::reconcile_notice(&mut self.surface, text)
            }
        }
    }

    /// Apply every store event published since the last pump.
    ///
    /// Returns how many refreshes were applied. A lagged receiver falls back
    /// to a full re-render and keeps draining.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if a template fails.
    pub fn pump(&mut self) -> Result<usize, RenderError> {
        let mut applied = 0;
        loop {
            match self.events.try_recv() {
                Ok(event) => {
                    self.apply(&event)?;
                    applied += 1;
                }
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::debug!(skipped, "event receiver lagged, re-rendering page");
                    self.render_all()?;
                    applied += 1;
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => return Ok(applied),
            }
        }
    }

    fn render_all(&mut self) -> Result<(), RenderError> {
        self.render_cart()?;
        self.render_chat()?;
        self.render_account()
    }

    fn render_cart(&mut self) -> Result<(), RenderError> {
        let items = self.app.cart_items();
        let totals = self.app.cart_totals();
        views::cart::reconcile_cart(&mut self.surface, &items, &totals)
    }

    fn render_chat(&mut self) -> Result<(), RenderError> {
        let messages = self.app.chat_messages();
        views::chat::reconcile_chat(&mut self.surface, &messages)
    }

    fn render_account(&mut self) -> Result<(), RenderError> {
        let session = self.app.current_session();
        views::account::reconcile_account(&mut self.surface, session.as_ref())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chouette_core::{CourseId, Price};

    use crate::config::StorefrontConfig;
    use crate::models::Direction;
    use crate::storage::{MemoryBackend, Storage};
    use crate::stores::AddToCart;

    use super::*;

    fn test_app() -> App {
        App::with_storage(
            StorefrontConfig::default(),
            Storage::new(MemoryBackend::new()),
        )
    }

    fn python_request() -> AddToCart {
        AddToCart {
            id: CourseId::new("python"),
            name: "Python : les fondamentaux".to_owned(),
            price: Price::from_cents(4999),
            image: None,
            author: None,
        }
    }

    #[tokio::test]
    async fn test_cart_page_renders_existing_items() {
        let app = test_app();
        app.add_to_cart(python_request()).unwrap();

        let page = Page::open(app, PageKind::Cart).unwrap();
        let list = page.surface().slot(&Region::CartItemList).unwrap();
        assert!(list.visible);
        assert!(list.html.contains("Python : les fondamentaux"));
    }

    #[tokio::test]
    async fn test_badge_refreshes_on_cart_events() {
        let app = test_app();
        let mut page = Page::open(app.clone(), PageKind::Home).unwrap();
        assert!(!page.surface().slot(&Region::CartBadge).unwrap().visible);

        app.add_to_cart(python_request()).unwrap();
        page.apply(&StoreEvent::CartUpdated).unwrap();

        let badge = page.surface().slot(&Region::CartBadge).unwrap();
        assert!(badge.visible);
        assert_eq!(badge.html, "1");
    }

    #[tokio::test]
    async fn test_home_page_ignores_chat_events() {
        let app = test_app();
        let mut page = Page::open(app, PageKind::Home).unwrap();

        page.apply(&StoreEvent::ChatUpdated).unwrap();
        assert!(page.surface().slot(&Region::ChatTranscript).is_none());
    }

    #[tokio::test]
    async fn test_pump_applies_buffered_events() {
        let app = test_app();
        let mut page = Page::open(app.clone(), PageKind::Home).unwrap();

        app.add_to_cart(python_request()).unwrap();
        let applied = page.pump().unwrap();

        // One cart update plus the confirmation notice.
        assert_eq!(applied, 2);
        assert_eq!(page.surface().slot(&Region::CartBadge).unwrap().html, "1");
        let notice = page.surface().slot(&Region::Notice).unwrap();
        assert!(notice.html.contains("ajouté au panier !"));
    }

    #[tokio::test]
    async fn test_pump_with_nothing_pending_changes_nothing() {
        let app = test_app();
        let mut page = Page::open(app, PageKind::Home).unwrap();
        let before = page.surface().slot(&Region::CartBadge).unwrap().clone();

        assert_eq!(page.pump().unwrap(), 0);
        assert_eq!(page.surface().slot(&Region::CartBadge).unwrap(), &before);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pump_picks_up_the_delayed_reply() {
        let app = test_app();
        let mut page = Page::open(app.clone(), PageKind::Chat).unwrap();
        page.take_welcome().unwrap().abort();

        let sent = app.send_message("Bonjour").unwrap();
        sent.reply.await.unwrap();
        page.pump().unwrap();

        let transcript = page.surface().slot(&Region::ChatTranscript).unwrap();
        assert!(transcript.html.contains("bubble-right"));
        assert!(transcript.html.contains("bubble-left"));
    }

    #[tokio::test]
    async fn test_courses_page_mounts_a_quantity_per_course() {
        let app = test_app();
        app.add_to_cart(python_request()).unwrap();

        let page = Page::open(app, PageKind::Courses).unwrap();
        let python = Region::CourseQuantity(CourseId::new("python"));
        let agile = Region::CourseQuantity(CourseId::new("agile"));
        assert_eq!(page.surface().slot(&python).unwrap().html, "1");
        assert_eq!(page.surface().slot(&agile).unwrap().html, "0");
    }

    #[tokio::test(start_paused = true)]
    async fn test_chat_page_schedules_the_welcome() {
        let app = test_app();
        let mut page = Page::open(app.clone(), PageKind::Chat).unwrap();

        let welcome = page.take_welcome().unwrap();
        welcome.await.unwrap();
        page.apply(&StoreEvent::ChatUpdated).unwrap();

        let transcript = page.surface().slot(&Region::ChatTranscript).unwrap();
        assert!(transcript.html.contains("bubble-left"));
        assert_eq!(app.chat_messages()[0].direction, Direction::Inbound);
    }

    #[tokio::test]
    async fn test_only_the_chat_page_schedules_a_welcome() {
        let app = test_app();
        let mut page = Page::open(app, PageKind::Home).unwrap();
        assert!(page.take_welcome().is_none());
    }

    #[tokio::test]
    async fn test_notice_event_flashes_the_toast() {
        let app = test_app();
        let mut page = Page::open(app, PageKind::Courses).unwrap();

        page.apply(&StoreEvent::NoticePosted {
            text: "\"Python\" ajouté au panier !".to_owned(),
        })
        .unwrap();

        let notice = page.surface().slot(&Region::Notice).unwrap();
        assert!(notice.visible);
        assert!(notice.html.contains("ajouté au panier !"));
    }

    #[tokio::test]
    async fn test_profile_page_follows_login_state() {
        let app = test_app();
        let mut page = Page::open(app.clone(), PageKind::Profile).unwrap();
        assert!(!page.surface().slot(&Region::Profile).unwrap().visible);

        app.login("123", "123").unwrap();
        page.apply(&StoreEvent::SessionUpdated).unwrap();

        let profile = page.surface().slot(&Region::Profile).unwrap();
        assert!(profile.visible);
        assert!(profile.html.contains("Étudiant Chouette"));
    }
}
