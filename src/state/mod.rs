/// State management module
///
/// Every interactive behavior of the app lives here as an explicit state
/// machine, decoupled from the widgets that render it:
/// - Navigation bar scroll/menu state (nav.rs)
/// - Contact form draft and submission lifecycle (form.rs)
/// - One-shot reveal latches for sections and gallery items (reveal.rs)
/// - Lightbox open/closed state (lightbox.rs)

pub mod form;
pub mod lightbox;
pub mod nav;
pub mod reveal;
