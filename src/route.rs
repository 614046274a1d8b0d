use crate::layout::Section;

/// The two navigable views of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The landing view: hero, bespoke process, lookbook, muse collection,
    /// contact form.
    Home,
    /// The archive view: the full image set in a masonry wall.
    Gallery,
}

impl Route {
    /// Parse a path such as `/`, `/gallery` or `/#contact` into a route and
    /// an optional anchor to scroll to after mounting.
    ///
    /// Unknown paths resolve to `None`; the caller decides the fallback.
    pub fn parse(path: &str) -> Option<(Route, Option<Anchor>)> {
        let (path, fragment) = match path.split_once('#') {
            Some((p, f)) => (p, Some(f)),
            None => (path, None),
        };

        let route = match path.trim_end_matches('/') {
            "" => Route::Home,
            "/gallery" => Route::Gallery,
            _ => return None,
        };

        let anchor = fragment.and_then(Anchor::parse);
        Some((route, anchor))
    }

    /// The canonical path of this route.
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Gallery => "/gallery",
        }
    }
}

/// Named in-page scroll targets reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Hero,
    Bespoke,
    Collection,
    Contact,
}

impl Anchor {
    pub fn parse(id: &str) -> Option<Anchor> {
        match id {
            "hero" => Some(Anchor::Hero),
            "bespoke" => Some(Anchor::Bespoke),
            "collection" => Some(Anchor::Collection),
            "contact" => Some(Anchor::Contact),
            _ => None,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Anchor::Hero => "hero",
            Anchor::Bespoke => "bespoke",
            Anchor::Collection => "collection",
            Anchor::Contact => "contact",
        }
    }

    /// The home section this anchor points at. The `collection` anchor lands
    /// on the muse collection, not the lookbook.
    pub fn section(self) -> Section {
        match self {
            Anchor::Hero => Section::Hero,
            Anchor::Bespoke => Section::Bespoke,
            Anchor::Collection => Section::Muse,
            Anchor::Contact => Section::Contact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_home() {
        assert_eq!(Route::parse("/"), Some((Route::Home, None)));
    }

    #[test]
    fn test_parse_gallery() {
        assert_eq!(Route::parse("/gallery"), Some((Route::Gallery, None)));
        assert_eq!(Route::parse("/gallery/"), Some((Route::Gallery, None)));
    }

    #[test]
    fn test_parse_home_with_anchor() {
        assert_eq!(
            Route::parse("/#contact"),
            Some((Route::Home, Some(Anchor::Contact)))
        );
    }

    #[test]
    fn test_unknown_fragment_is_dropped() {
        assert_eq!(Route::parse("/#atelier"), Some((Route::Home, None)));
    }

    #[test]
    fn test_parse_unknown_path() {
        assert_eq!(Route::parse("/press"), None);
        assert_eq!(Route::parse("gallery"), None);
    }

    #[test]
    fn test_paths_round_trip() {
        for route in [Route::Home, Route::Gallery] {
            assert_eq!(Route::parse(route.path()), Some((route, None)));
        }
    }

    #[test]
    fn test_anchor_ids_round_trip() {
        for anchor in [
            Anchor::Hero,
            Anchor::Bespoke,
            Anchor::Collection,
            Anchor::Contact,
        ] {
            assert_eq!(Anchor::parse(anchor.id()), Some(anchor));
        }
    }
}
