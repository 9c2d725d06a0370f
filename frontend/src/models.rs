#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AspectRatio {
    Widescreen,
    Vertical,
    Portrait,
    Square,
    Cinema,
}

impl AspectRatio {
    pub fn css_value(self) -> &'static str {
        match self {
            AspectRatio::Widescreen => "16 / 9",
            AspectRatio::Vertical => "9 / 16",
            AspectRatio::Portrait => "4 / 5",
            AspectRatio::Square => "1 / 1",
            AspectRatio::Cinema => "21 / 9",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectStats {
    pub timeline: &'static str,
    pub grading: &'static str,
    pub audio: &'static str,
}

/// A portfolio entry. `category` is a free-text label matched exactly by the gallery filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub client: &'static str,
    pub category: &'static str,
    pub thumbnail: &'static str,
    pub aspect_ratio: AspectRatio,
    pub video_url: Option<&'static str>,
    pub external_link: Option<&'static str>,
    pub stats: ProjectStats,
    pub description: &'static str,
    pub tools: &'static [&'static str],
}

impl Project {
    pub fn is_video(&self) -> bool {
        self.video_url.is_some() || self.external_link.is_some()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleLink {
    pub label: &'static str,
    pub url: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PricingTier {
    pub name: &'static str,
    pub price: &'static str,
    pub best_for: &'static str,
    pub features: &'static [&'static str],
    pub samples: &'static [SampleLink],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub filter_category: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Client {
    pub name: &'static str,
    pub logo_id: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReelSource {
    Youtube,
    Gdrive,
}

/// Raw reel entry as listed by the studio: the uploaded filename plus the host-specific id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawReel {
    pub source: ReelSource,
    pub filename: &'static str,
    pub id: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reel {
    pub id: u32,
    pub name: String,
    pub source: ReelSource,
    pub thumbnail: String,
    pub embed_url: String,
    pub direct_url: Option<String>,
}
