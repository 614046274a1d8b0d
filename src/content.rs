/// Build-time-bound brand content
///
/// Every image reference, look and line of copy the views render lives here
/// as a fixed, ordered table. There is no dynamic asset loading and no CMS;
/// swapping the collection means editing this file.

/// A reference to a bundled image asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageRef(pub &'static str);

impl ImageRef {
    pub fn path(self) -> &'static str {
        self.0
    }
}

/// One look in the home lookbook grid.
#[derive(Debug, Clone, Copy)]
pub struct Look {
    pub title: &'static str,
    pub description: &'static str,
    pub image: ImageRef,
}

/// One image of the muse collection grid.
#[derive(Debug, Clone, Copy)]
pub struct MuseImage {
    pub caption: &'static str,
    pub image: ImageRef,
}

/// One item of the gallery archive wall.
///
/// `aspect` is width over height and drives the item's rendered height in a
/// masonry column; `offset` is the ornamental vertical displacement applied
/// before the item, so the columns drift out of step.
#[derive(Debug, Clone, Copy)]
pub struct ArchiveItem {
    pub reference: u32,
    pub image: ImageRef,
    pub aspect: f32,
    pub offset: f32,
}

/// One numbered step of the bespoke process.
#[derive(Debug, Clone, Copy)]
pub struct ProcessStep {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const BRAND: &str = "SENABEL";
pub const TAGLINE: &str = "Defining Modern Royalty";
pub const ESTABLISHED: &str = "Est. 2024";
pub const CONTACT_EMAIL: &str = "hello@senabel.com";

pub const HERO_IMAGE: ImageRef = ImageRef("assets/hero.jpg");
pub const PROCESS_IMAGE: ImageRef = ImageRef("assets/process/atelier-detail.jpg");

pub const PROCESS_STEPS: [ProcessStep; 3] = [
    ProcessStep {
        number: "01",
        title: "Consultation",
        description: "We begin with a personal dialogue to understand your \
                      vision, silhouette preferences, and the occasion.",
    },
    ProcessStep {
        number: "02",
        title: "Design & Sketch",
        description: "Our atelier creates exclusive sketches, selecting premium \
                      fabrics and intricate embellishments for your approval.",
    },
    ProcessStep {
        number: "03",
        title: "The Creation",
        description: "Master craftsmen bring the design to life, with multiple \
                      fittings to ensure a flawless, second-skin fit.",
    },
];

pub const LOOKS: [Look; 8] = [
    Look {
        title: "The Noir Statement",
        description: "Modern Indo-Western fusion",
        image: ImageRef("assets/lookbook/noir-statement.jpg"),
    },
    Look {
        title: "Gilded Elegance",
        description: "Bespoke golden embroidery",
        image: ImageRef("assets/lookbook/gilded-elegance.jpg"),
    },
    Look {
        title: "The Sovereign High-Neck",
        description: "Regal silhouette",
        image: ImageRef("assets/lookbook/sovereign-high-neck.jpg"),
    },
    Look {
        title: "Crimson Heritage",
        description: "Traditional bridal mastery",
        image: ImageRef("assets/lookbook/crimson-heritage.jpg"),
    },
    Look {
        title: "Scarlet Drama",
        description: "Evening sophistication",
        image: ImageRef("assets/lookbook/scarlet-drama.jpg"),
    },
    Look {
        title: "Emerald Mystique",
        description: "Contemporary drape",
        image: ImageRef("assets/lookbook/emerald-mystique.jpg"),
    },
    Look {
        title: "Opulent Detail",
        description: "Hand-crafted luxury",
        image: ImageRef("assets/lookbook/opulent-detail.jpg"),
    },
    Look {
        title: "Garden Couture",
        description: "Outdoor elegance",
        image: ImageRef("assets/lookbook/garden-couture.jpg"),
    },
];

pub const MUSE_IMAGES: [MuseImage; 4] = [
    MuseImage {
        caption: "Luxury Evening Gown",
        image: ImageRef("assets/muse/evening-gown.jpg"),
    },
    MuseImage {
        caption: "Bridal Couture",
        image: ImageRef("assets/muse/bridal-couture.jpg"),
    },
    MuseImage {
        caption: "Designer Collection",
        image: ImageRef("assets/muse/designer-collection.jpg"),
    },
    MuseImage {
        caption: "Haute Couture",
        image: ImageRef("assets/muse/haute-couture.jpg"),
    },
];

// Offsets echo the staggered top margins of the archive wall; the order is
// the curated order, not the shoot order.
pub const ARCHIVE: [ArchiveItem; 13] = [
    ArchiveItem {
        reference: 1,
        image: ImageRef("assets/archive/001.jpg"),
        aspect: 0.75,
        offset: 0.0,
    },
    ArchiveItem {
        reference: 2,
        image: ImageRef("assets/archive/002.jpg"),
        aspect: 0.62,
        offset: 80.0,
    },
    ArchiveItem {
        reference: 3,
        image: ImageRef("assets/archive/003.jpg"),
        aspect: 1.4,
        offset: 40.0,
    },
    ArchiveItem {
        reference: 4,
        image: ImageRef("assets/archive/004.jpg"),
        aspect: 0.8,
        offset: 128.0,
    },
    ArchiveItem {
        reference: 5,
        image: ImageRef("assets/archive/005.jpg"),
        aspect: 0.62,
        offset: 0.0,
    },
    ArchiveItem {
        reference: 6,
        image: ImageRef("assets/archive/006.jpg"),
        aspect: 1.5,
        offset: 96.0,
    },
    ArchiveItem {
        reference: 7,
        image: ImageRef("assets/archive/007.jpg"),
        aspect: 0.75,
        offset: 48.0,
    },
    ArchiveItem {
        reference: 8,
        image: ImageRef("assets/archive/008.jpg"),
        aspect: 0.8,
        offset: 160.0,
    },
    ArchiveItem {
        reference: 9,
        image: ImageRef("assets/archive/009.jpg"),
        aspect: 0.62,
        offset: 32.0,
    },
    ArchiveItem {
        reference: 10,
        image: ImageRef("assets/archive/010.jpg"),
        aspect: 0.8,
        offset: 64.0,
    },
    ArchiveItem {
        reference: 11,
        image: ImageRef("assets/archive/011.jpg"),
        aspect: 1.4,
        offset: 128.0,
    },
    ArchiveItem {
        reference: 12,
        image: ImageRef("assets/archive/012.jpg"),
        aspect: 0.8,
        offset: 0.0,
    },
    ArchiveItem {
        reference: 13,
        image: ImageRef("assets/archive/013.jpg"),
        aspect: 0.62,
        offset: 80.0,
    },
];
