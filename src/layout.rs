/// Deterministic page geometry
///
/// Navbar styling, reveal triggers and anchor targets all depend on where
/// the viewport sits over the page. Rather than asking widgets for their
/// bounds, everything is a pure function of the window size and the current
/// scroll offset, so every scroll-reactive behavior can be driven by a fake
/// signal in tests.
///
/// The views size their sections from the same constants, which keeps the
/// computed offsets and the rendered layout in agreement.
use crate::content::{ArchiveItem, ARCHIVE, LOOKS};
use crate::route::Route;
use crate::state::reveal::RevealKey;

/// Height of the navigation bar overlay.
pub const NAV_HEIGHT: f32 = 80.0;

/// Scroll offset past which the navbar switches from transparent to opaque.
pub const SCROLL_THRESHOLD: f32 = 50.0;

/// An element must protrude this far into the viewport before it counts as
/// visible for reveal purposes.
pub const REVEAL_MARGIN: f32 = 80.0;

const MIN_HERO_HEIGHT: f32 = 560.0;
const BESPOKE_HEIGHT: f32 = 640.0;
const MUSE_HEIGHT: f32 = 860.0;
const CONTACT_HEIGHT: f32 = 900.0;
pub const FOOTER_HEIGHT: f32 = 220.0;

pub const LOOKBOOK_PADDING: f32 = 96.0;
pub const LOOKBOOK_HEADER_HEIGHT: f32 = 200.0;
pub const LOOK_TILE_HEIGHT: f32 = 576.0;
pub const LOOK_ROW_GAP: f32 = 64.0;
pub const LOOKBOOK_CTA_HEIGHT: f32 = 150.0;

pub const ARCHIVE_HEADER_HEIGHT: f32 = 320.0;
pub const ARCHIVE_MAX_WIDTH: f32 = 1920.0;
pub const ARCHIVE_SIDE_PADDING: f32 = 32.0;
pub const ARCHIVE_GAP: f32 = 32.0;
pub const ARCHIVE_BOTTOM_PADDING: f32 = 128.0;

/// The content blocks of the home view, in mount order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    Hero,
    Bespoke,
    Lookbook,
    Muse,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::Bespoke,
        Section::Lookbook,
        Section::Muse,
        Section::Contact,
    ];
}

/// Archive wall column count for a window width.
pub fn archive_columns(width: f32) -> usize {
    if width < 768.0 {
        1
    } else if width < 1024.0 {
        2
    } else if width < 1440.0 {
        3
    } else {
        4
    }
}

/// Lookbook grid column count for a window width.
pub fn lookbook_columns(width: f32) -> usize {
    if width < 768.0 {
        1
    } else if width < 1024.0 {
        2
    } else {
        3
    }
}

/// A single archive item placed into a masonry column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Index into [`ARCHIVE`].
    pub index: usize,
    /// Ornamental gap rendered above the item.
    pub offset: f32,
    /// Rendered item height at the current column width.
    pub height: f32,
    /// Top edge relative to the wall, offset included.
    pub top: f32,
}

/// Flow `items` into `columns` columns, each item landing in the currently
/// shortest column. Input order is preserved within every column.
pub fn masonry(items: &[ArchiveItem], columns: usize, column_width: f32) -> Vec<Vec<Placement>> {
    let columns = columns.max(1);
    let mut wall: Vec<Vec<Placement>> = vec![Vec::new(); columns];
    let mut heights = vec![0.0f32; columns];

    for (index, item) in items.iter().enumerate() {
        // Shortest column wins; ties go to the leftmost.
        let mut shortest = 0;
        for (column, column_height) in heights.iter().enumerate() {
            if *column_height < heights[shortest] {
                shortest = column;
            }
        }

        let height = column_width / item.aspect;
        let top = heights[shortest] + item.offset;
        wall[shortest].push(Placement {
            index,
            offset: item.offset,
            height,
            top,
        });
        heights[shortest] = top + height + ARCHIVE_GAP;
    }

    wall
}

/// Pure geometry for the current window size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageMetrics {
    pub width: f32,
    pub height: f32,
}

impl PageMetrics {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The hero fills the window, with a floor for very short windows.
    pub fn hero_height(&self) -> f32 {
        self.height.max(MIN_HERO_HEIGHT)
    }

    pub fn lookbook_height(&self) -> f32 {
        let columns = lookbook_columns(self.width);
        let rows = LOOKS.len().div_ceil(columns) as f32;
        2.0 * LOOKBOOK_PADDING
            + LOOKBOOK_HEADER_HEIGHT
            + rows * LOOK_TILE_HEIGHT
            + (rows - 1.0) * LOOK_ROW_GAP
            + LOOKBOOK_CTA_HEIGHT
    }

    pub fn section_height(&self, section: Section) -> f32 {
        match section {
            Section::Hero => self.hero_height(),
            Section::Bespoke => BESPOKE_HEIGHT,
            Section::Lookbook => self.lookbook_height(),
            Section::Muse => MUSE_HEIGHT,
            Section::Contact => CONTACT_HEIGHT,
        }
    }

    /// Top edge of a home section, measured from the top of the page.
    pub fn section_top(&self, section: Section) -> f32 {
        let mut top = 0.0;
        for s in Section::ALL {
            if s == section {
                return top;
            }
            top += self.section_height(s);
        }
        top
    }

    /// Scroll offset that brings a home section to the top of the window.
    pub fn anchor_offset(&self, section: Section) -> f32 {
        self.section_top(section)
    }

    /// Resolve an anchor against the mounted route. Only the home view has
    /// section targets; everywhere else the anchor is absent.
    pub fn resolve_anchor(&self, route: Route, section: Section) -> Option<f32> {
        match route {
            Route::Home => Some(self.anchor_offset(section)),
            Route::Gallery => None,
        }
    }

    /// Usable width of the archive wall after clamping and side padding.
    pub fn archive_content_width(&self) -> f32 {
        (self.width.min(ARCHIVE_MAX_WIDTH) - 2.0 * ARCHIVE_SIDE_PADDING).max(ARCHIVE_GAP)
    }

    pub fn archive_column_width(&self) -> f32 {
        let columns = archive_columns(self.width) as f32;
        (self.archive_content_width() - (columns - 1.0) * ARCHIVE_GAP) / columns
    }

    pub fn archive_wall(&self) -> Vec<Vec<Placement>> {
        masonry(
            &ARCHIVE,
            archive_columns(self.width),
            self.archive_column_width(),
        )
    }

    /// Whether an element intersects the viewport, shrunk by the reveal
    /// margin on both edges.
    pub fn element_visible(&self, scroll_y: f32, top: f32, height: f32) -> bool {
        top < scroll_y + self.height - REVEAL_MARGIN && top + height > scroll_y + REVEAL_MARGIN
    }

    /// Every revealable element of the home view currently intersecting the
    /// viewport.
    pub fn visible_home_elements(&self, scroll_y: f32) -> Vec<RevealKey> {
        let mut keys = Vec::new();

        for section in Section::ALL {
            let top = self.section_top(section);
            if self.element_visible(scroll_y, top, self.section_height(section)) {
                keys.push(RevealKey::Section(section));
            }
        }

        let columns = lookbook_columns(self.width);
        let grid_top =
            self.section_top(Section::Lookbook) + LOOKBOOK_PADDING + LOOKBOOK_HEADER_HEIGHT;
        for index in 0..LOOKS.len() {
            let row = (index / columns) as f32;
            let top = grid_top + row * (LOOK_TILE_HEIGHT + LOOK_ROW_GAP);
            if self.element_visible(scroll_y, top, LOOK_TILE_HEIGHT) {
                keys.push(RevealKey::Look(index));
            }
        }

        keys
    }

    /// Every revealable element of the archive view currently intersecting
    /// the viewport.
    pub fn visible_archive_elements(&self, scroll_y: f32) -> Vec<RevealKey> {
        let mut keys = Vec::new();
        for column in self.archive_wall() {
            for placement in column {
                let top = ARCHIVE_HEADER_HEIGHT + placement.top;
                if self.element_visible(scroll_y, top, placement.height) {
                    keys.push(RevealKey::ArchiveItem(placement.index));
                }
            }
        }
        keys.sort();
        keys
    }
}
