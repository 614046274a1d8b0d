use clap::Parser;
use iced::widget::{scrollable, stack};
use iced::{Element, Length, Size, Subscription, Task, Theme};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod content;
mod layout;
mod net;
mod route;
mod state;
mod ui;

use content::ImageRef;
use layout::PageMetrics;
use route::{Anchor, Route};
use state::form::{ContactFormState, LeadField, SubmitStatus, SUCCESS_DISPLAY};
use state::lightbox::Lightbox;
use state::nav::NavBarState;
use state::reveal::{RevealKey, RevealTracker};

const WINDOW_WIDTH: f32 = 1280.0;
const WINDOW_HEIGHT: f32 = 800.0;

/// Native showcase and lead-capture app for the Senabel couture atelier.
#[derive(Parser, Debug)]
#[command(name = "senabel", version, about)]
struct Args {
    /// Override the lead sink endpoint
    #[arg(long)]
    endpoint: Option<String>,

    /// Initial route, e.g. "/" or "/gallery"
    #[arg(long, default_value = "/")]
    route: String,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

/// Main application state
struct Senabel {
    /// Which page composer is mounted
    route: Route,
    /// Current window size, feeding the page metrics
    window: Size,
    /// Vertical scroll offset of the mounted page
    scroll_y: f32,
    /// Navigation bar scroll/menu state
    nav: NavBarState,
    /// One-shot entrance latches for the mounted page
    reveals: RevealTracker,
    /// Enlarged-image overlay state
    lightbox: Lightbox,
    /// Contact form draft and submission lifecycle
    form: ContactFormState,
    /// Where submitted leads are POSTed
    endpoint: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Mount a different page composer
    Navigate(Route),
    /// Scroll to a named section, hopping to Home first if needed
    AnchorRequested(Anchor),
    /// Collapse/expand the navbar menu
    MenuToggled,
    /// The page scrollable moved
    PageScrolled(scrollable::Viewport),
    /// The window was resized
    WindowResized(Size),
    /// A staggered entrance finished waiting
    RevealElapsed(RevealKey),
    /// A gallery or lookbook image was clicked
    ImageSelected(ImageRef),
    /// The lightbox backdrop or close control was clicked
    LightboxDismissed,
    /// A form field keystroke
    DraftChanged(LeadField, String),
    /// The submit control was pressed
    SubmitPressed,
    /// The lead POST finished
    SubmitFinished(Result<(), net::SubmitError>),
    /// The success banner timer fired
    SuccessExpired(u64),
}

fn page_scroll_id() -> scrollable::Id {
    scrollable::Id::new("page")
}

impl Senabel {
    fn new(args: Args) -> (Self, Task<Message>) {
        let (route, anchor) = Route::parse(&args.route).unwrap_or((Route::Home, None));

        let mut app = Senabel {
            route,
            window: Size::new(WINDOW_WIDTH, WINDOW_HEIGHT),
            scroll_y: 0.0,
            nav: NavBarState::default(),
            reveals: RevealTracker::default(),
            lightbox: Lightbox::default(),
            form: ContactFormState::default(),
            endpoint: args
                .endpoint
                .unwrap_or_else(|| net::DEFAULT_ENDPOINT.to_owned()),
        };

        tracing::info!(route = route.path(), "senabel showcase ready");

        let mut tasks = vec![app.observe_reveals()];
        if let Some(anchor) = anchor {
            tasks.push(app.jump_to(anchor));
        }
        (app, Task::batch(tasks))
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(route) => self.open(route, None),

            Message::AnchorRequested(anchor) => {
                self.nav.close_menu();
                if self.route == Route::Home {
                    self.jump_to(anchor)
                } else {
                    self.open(Route::Home, Some(anchor))
                }
            }

            Message::MenuToggled => {
                self.nav.toggle_menu();
                Task::none()
            }

            Message::PageScrolled(viewport) => self.track_scroll(viewport.absolute_offset().y),

            Message::WindowResized(size) => {
                self.window = size;
                self.observe_reveals()
            }

            Message::RevealElapsed(key) => {
                self.reveals.settle(key);
                Task::none()
            }

            Message::ImageSelected(image) => {
                self.lightbox.select(image);
                Task::none()
            }

            Message::LightboxDismissed => {
                self.lightbox.dismiss();
                Task::none()
            }

            Message::DraftChanged(field, value) => {
                self.form.edit(field, value);
                Task::none()
            }

            Message::SubmitPressed => match self.form.begin_submit() {
                Some(payload) => {
                    let endpoint = self.endpoint.clone();
                    Task::perform(net::submit_lead(endpoint, payload), Message::SubmitFinished)
                }
                None => Task::none(),
            },

            Message::SubmitFinished(result) => {
                if self.form.status != SubmitStatus::Submitting {
                    // The form was remounted while the POST was in flight.
                    return Task::none();
                }
                match result {
                    Ok(()) => {
                        let epoch = self.form.record_success();
                        Task::perform(
                            async { tokio::time::sleep(SUCCESS_DISPLAY).await },
                            move |_| Message::SuccessExpired(epoch),
                        )
                    }
                    Err(error) => {
                        // Logged, never surfaced; the form just returns to
                        // idle.
                        tracing::error!(%error, "lead submission failed");
                        self.form.record_failure();
                        Task::none()
                    }
                }
            }

            Message::SuccessExpired(epoch) => {
                self.form.expire_success(epoch);
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let page = match self.route {
            Route::Home => ui::home(self),
            Route::Gallery => ui::archive(self),
        };

        let content = scrollable(page)
            .id(page_scroll_id())
            .on_scroll(Message::PageScrolled)
            .width(Length::Fill)
            .height(Length::Fill);

        let chrome = stack![content, ui::navbar::view(self.nav, self.window.width)];

        match self.lightbox.image() {
            Some(selected) => stack![chrome, ui::lightbox::view(selected, self.metrics())].into(),
            None => chrome.into(),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        iced::event::listen_with(|event, _status, _window| match event {
            iced::Event::Window(iced::window::Event::Resized(size)) => {
                Some(Message::WindowResized(size))
            }
            _ => None,
        })
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        ui::theme::senabel()
    }

    fn metrics(&self) -> PageMetrics {
        PageMetrics::new(self.window.width, self.window.height)
    }

    /// Mount a page composer, dropping all per-page state, then scroll to
    /// the top or to the requested anchor.
    fn open(&mut self, route: Route, anchor: Option<Anchor>) -> Task<Message> {
        tracing::debug!(to = route.path(), "navigating");
        self.route = route;
        self.scroll_y = 0.0;
        self.nav = NavBarState::default();
        self.reveals.reset();
        self.lightbox.dismiss();
        self.form = ContactFormState::default();

        match anchor {
            Some(anchor) => self.jump_to(anchor),
            None => Task::batch([
                scrollable::scroll_to(page_scroll_id(), scrollable::AbsoluteOffset::default()),
                self.observe_reveals(),
            ]),
        }
    }

    /// Scroll the mounted page to a named section. An anchor without a
    /// target on this page is a quiet no-op.
    fn jump_to(&mut self, anchor: Anchor) -> Task<Message> {
        let Some(offset) = self.metrics().resolve_anchor(self.route, anchor.section()) else {
            tracing::debug!(anchor = anchor.id(), "anchor has no target here");
            return Task::none();
        };

        let reveal = self.track_scroll(offset);
        Task::batch([
            scrollable::scroll_to(
                page_scroll_id(),
                scrollable::AbsoluteOffset { x: 0.0, y: offset },
            ),
            reveal,
        ])
    }

    fn track_scroll(&mut self, offset: f32) -> Task<Message> {
        self.scroll_y = offset;
        self.nav.track_scroll(offset);
        self.observe_reveals()
    }

    /// Feed the current viewport through the page metrics and arm every
    /// newly visible element; staggered elements get a timer that settles
    /// them.
    fn observe_reveals(&mut self) -> Task<Message> {
        let metrics = self.metrics();
        let keys = match self.route {
            Route::Home => metrics.visible_home_elements(self.scroll_y),
            Route::Gallery => metrics.visible_archive_elements(self.scroll_y),
        };

        let mut timers = Vec::new();
        for key in keys {
            if let Some(delay) = self.reveals.arm(key) {
                timers.push(Task::perform(
                    async move { tokio::time::sleep(delay).await },
                    move |_| Message::RevealElapsed(key),
                ));
            }
        }
        Task::batch(timers)
    }
}

fn main() -> iced::Result {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "senabel=debug"
    } else {
        "senabel=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    iced::application("Senabel", Senabel::update, Senabel::view)
        .subscription(Senabel::subscription)
        .theme(Senabel::theme)
        .window_size(Size::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .centered()
        .run_with(move || Senabel::new(args))
}

#[cfg(test)]
mod tests {
    use super::*;
    use layout::Section;
    use net::SubmitError;

    fn args(route: &str) -> Args {
        Args {
            endpoint: None,
            route: route.to_owned(),
            verbose: false,
        }
    }

    fn fill_form(app: &mut Senabel) {
        let _ = app.update(Message::DraftChanged(LeadField::FullName, "Amira".into()));
        let _ = app.update(Message::DraftChanged(
            LeadField::Email,
            "amira@example.com".into(),
        ));
        let _ = app.update(Message::DraftChanged(LeadField::City, "Casablanca".into()));
        let _ = app.update(Message::DraftChanged(LeadField::Phone, "+212 600".into()));
    }

    #[test]
    fn test_route_resolution() {
        let (app, _) = Senabel::new(args("/"));
        assert_eq!(app.route, Route::Home);

        let (app, _) = Senabel::new(args("/gallery"));
        assert_eq!(app.route, Route::Gallery);

        // Unknown paths fall back to home.
        let (app, _) = Senabel::new(args("/press"));
        assert_eq!(app.route, Route::Home);
    }

    #[test]
    fn test_both_composers_render() {
        let (mut app, _) = Senabel::new(args("/"));
        let _ = app.view();

        let _ = app.update(Message::Navigate(Route::Gallery));
        assert_eq!(app.route, Route::Gallery);
        let _ = app.view();
    }

    #[test]
    fn test_navigation_resets_page_state() {
        let (mut app, _) = Senabel::new(args("/"));
        assert!(app.reveals.is_shown(RevealKey::Section(Section::Hero)));
        let _ = app.update(Message::ImageSelected(content::LOOKS[0].image));

        let _ = app.update(Message::Navigate(Route::Gallery));

        assert!(!app.reveals.is_shown(RevealKey::Section(Section::Hero)));
        assert_eq!(app.lightbox, Lightbox::Closed);
        assert_eq!(app.scroll_y, 0.0);
    }

    #[test]
    fn test_scrolling_flips_navbar_and_arms_reveals() {
        let (mut app, _) = Senabel::new(args("/"));
        assert!(!app.nav.is_scrolled);

        let contact_offset = app.metrics().anchor_offset(Section::Contact);
        let _ = app.track_scroll(contact_offset);

        assert!(app.nav.is_scrolled);
        assert!(app.reveals.is_shown(RevealKey::Section(Section::Contact)));

        // Scrolling back up un-flips the bar but never un-reveals.
        let _ = app.track_scroll(0.0);
        assert!(!app.nav.is_scrolled);
        assert!(app.reveals.is_shown(RevealKey::Section(Section::Contact)));
    }

    #[test]
    fn test_anchor_request_closes_menu_and_scrolls() {
        let (mut app, _) = Senabel::new(args("/"));
        let _ = app.update(Message::MenuToggled);
        assert!(app.nav.is_menu_open);

        let _ = app.update(Message::AnchorRequested(Anchor::Contact));

        assert!(!app.nav.is_menu_open);
        assert_eq!(app.route, Route::Home);
        assert_eq!(
            app.scroll_y,
            app.metrics().anchor_offset(Section::Contact)
        );
    }

    #[test]
    fn test_anchor_request_from_gallery_returns_home() {
        let (mut app, _) = Senabel::new(args("/gallery"));
        let _ = app.update(Message::AnchorRequested(Anchor::Contact));

        assert_eq!(app.route, Route::Home);
        assert_eq!(
            app.scroll_y,
            app.metrics().anchor_offset(Section::Contact)
        );
    }

    #[test]
    fn test_anchor_without_target_is_a_noop() {
        // "/gallery#contact" mounts the archive, where no anchor resolves;
        // the request must change nothing.
        let (app, _) = Senabel::new(args("/gallery#contact"));
        assert_eq!(app.route, Route::Gallery);
        assert_eq!(app.scroll_y, 0.0);
    }

    #[test]
    fn test_gallery_arms_staggered_items() {
        use state::reveal::RevealPhase;

        let (mut app, _) = Senabel::new(args("/gallery"));

        // Item 0 has zero stagger and shows at once; item 1 waits.
        assert!(app.reveals.is_shown(RevealKey::ArchiveItem(0)));
        assert_eq!(
            app.reveals.phase(RevealKey::ArchiveItem(1)),
            RevealPhase::Pending
        );

        let _ = app.update(Message::RevealElapsed(RevealKey::ArchiveItem(1)));
        assert!(app.reveals.is_shown(RevealKey::ArchiveItem(1)));
    }

    #[test]
    fn test_lightbox_selection_is_exclusive() {
        let (mut app, _) = Senabel::new(args("/gallery"));
        let first = content::ARCHIVE[0].image;
        let second = content::ARCHIVE[1].image;

        let _ = app.update(Message::ImageSelected(first));
        let _ = app.update(Message::ImageSelected(second));
        assert_eq!(app.lightbox.image(), Some(second));

        let _ = app.update(Message::LightboxDismissed);
        assert_eq!(app.lightbox.image(), None);
    }

    #[test]
    fn test_submit_lifecycle_through_messages() {
        let (mut app, _) = Senabel::new(args("/"));
        fill_form(&mut app);

        let _ = app.update(Message::SubmitPressed);
        assert_eq!(app.form.status, SubmitStatus::Submitting);

        let _ = app.update(Message::SubmitFinished(Ok(())));
        assert_eq!(app.form.status, SubmitStatus::Success);
        assert!(app.form.draft.full_name.is_empty());

        let _ = app.update(Message::SuccessExpired(1));
        assert_eq!(app.form.status, SubmitStatus::Idle);
    }

    #[test]
    fn test_transport_failure_returns_to_idle_silently() {
        let (mut app, _) = Senabel::new(args("/"));
        fill_form(&mut app);

        let _ = app.update(Message::SubmitPressed);
        let _ = app.update(Message::SubmitFinished(Err(SubmitError::Transport(
            "dns failure".into(),
        ))));

        assert_eq!(app.form.status, SubmitStatus::Idle);
        assert_eq!(app.form.draft.full_name, "Amira");
    }

    #[test]
    fn test_incomplete_draft_never_submits() {
        let (mut app, _) = Senabel::new(args("/"));
        let _ = app.update(Message::DraftChanged(LeadField::FullName, "Amira".into()));

        let _ = app.update(Message::SubmitPressed);
        assert_eq!(app.form.status, SubmitStatus::Idle);
    }

    #[test]
    fn test_stale_completion_after_remount_is_ignored() {
        let (mut app, _) = Senabel::new(args("/"));
        fill_form(&mut app);
        let _ = app.update(Message::SubmitPressed);

        // The user navigates away while the POST is in flight.
        let _ = app.update(Message::Navigate(Route::Gallery));
        let _ = app.update(Message::SubmitFinished(Ok(())));

        assert_eq!(app.form.status, SubmitStatus::Idle);
    }

    #[test]
    fn test_resize_reflows_reveal_geometry() {
        let (mut app, _) = Senabel::new(args("/"));
        let look = RevealKey::Look(6);

        // At two lookbook columns the seventh look sits in the fourth row,
        // below this viewport.
        let _ = app.update(Message::WindowResized(Size::new(900.0, 800.0)));
        let scroll = app.metrics().section_top(Section::Lookbook) + 900.0;
        let _ = app.track_scroll(scroll);
        assert!(!app.reveals.is_shown(look));

        // Widening to three columns lifts it into the third row, inside the
        // same viewport.
        let _ = app.update(Message::WindowResized(Size::new(1280.0, 800.0)));
        assert!(app.reveals.is_shown(look));
    }
}
