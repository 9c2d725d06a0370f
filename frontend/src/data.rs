use crate::models::{
    AspectRatio, Client, NavItem, PricingTier, Project, ProjectStats, RawReel, ReelSource,
    SampleLink, Service,
};

pub const LONG_FORM: &str = "Long Form";
pub const SHORT_FORM: &str = "Short Form";
pub const GRAPHIC_DESIGN: &str = "Graphic Design";

pub const LOGO_URL: &str = "https://drive.google.com/thumbnail?id=1beIgmNM_HzyhDxSheN2zEMvcG5mscTNT";

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Work", href: "#services" },
    NavItem { label: "Services", href: "#pricing" },
    NavItem { label: "About", href: "#about" },
    NavItem { label: "Contact", href: "#footer" },
    NavItem { label: "Pricing", href: "#pricing" },
];

pub const NAV_CTA: NavItem = NavItem { label: "Let's Cut", href: "#contact" };

pub const SERVICES: &[Service] = &[
    Service {
        title: "Short Form",
        icon: "📱",
        description: "Retention-first reels and shorts cut for the scroll. Hooks, captions and motion graphics that keep thumbs still.",
        tags: &["Reels", "TikTok", "Shorts"],
        filter_category: SHORT_FORM,
    },
    Service {
        title: "Long Form",
        icon: "🎞️",
        description: "Podcasts, interviews, documentaries and vlogs with narrative pacing, multicam sync and clean audio.",
        tags: &["Podcast", "Documentary", "Vlog"],
        filter_category: LONG_FORM,
    },
    Service {
        title: "Graphic Design",
        icon: "🎨",
        description: "Thumbnails, posters and social creatives designed to stop the feed and carry your brand.",
        tags: &["Thumbnails", "Posters", "Branding"],
        filter_category: GRAPHIC_DESIGN,
    },
];

const NO_STATS: ProjectStats = ProjectStats {
    timeline: "N/A",
    grading: "N/A",
    audio: "N/A",
};

pub const PROJECTS: &[Project] = &[
    // Long form
    Project {
        id: 101,
        title: "Podcast / Interview",
        client: "Client Work",
        category: LONG_FORM,
        thumbnail: "https://img.youtube.com/vi/HRaB4tE0c2g/maxresdefault.jpg",
        aspect_ratio: AspectRatio::Widescreen,
        video_url: None,
        external_link: Some("https://www.youtube.com/watch?v=HRaB4tE0c2g"),
        stats: NO_STATS,
        description: "Long form content editing.",
        tools: &["Premiere Pro"],
    },
    Project {
        id: 102,
        title: "Documentary Style",
        client: "Client Work",
        category: LONG_FORM,
        thumbnail: "https://img.youtube.com/vi/6QICTiLN2rc/maxresdefault.jpg",
        aspect_ratio: AspectRatio::Widescreen,
        video_url: None,
        external_link: Some("https://www.youtube.com/watch?v=6QICTiLN2rc"),
        stats: NO_STATS,
        description: "Long form content editing.",
        tools: &["Premiere Pro"],
    },
    Project {
        id: 103,
        title: "Vlog Edit",
        client: "Client Work",
        category: LONG_FORM,
        thumbnail: "https://img.youtube.com/vi/Jryk7owJQlQ/maxresdefault.jpg",
        aspect_ratio: AspectRatio::Widescreen,
        video_url: None,
        external_link: Some("https://www.youtube.com/watch?v=Jryk7owJQlQ"),
        stats: NO_STATS,
        description: "Long form content editing.",
        tools: &["Premiere Pro"],
    },
    Project {
        id: 104,
        title: "Narrative Story",
        client: "Client Work",
        category: LONG_FORM,
        thumbnail: "https://img.youtube.com/vi/v_kOHdncOTo/maxresdefault.jpg",
        aspect_ratio: AspectRatio::Widescreen,
        video_url: None,
        external_link: Some("https://www.youtube.com/watch?v=v_kOHdncOTo"),
        stats: NO_STATS,
        description: "Long form content editing.",
        tools: &["Premiere Pro"],
    },
    Project {
        id: 105,
        title: "Event Coverage",
        client: "Client Work",
        category: LONG_FORM,
        thumbnail: "https://img.youtube.com/vi/kAZ73e8_DdU/maxresdefault.jpg",
        aspect_ratio: AspectRatio::Widescreen,
        video_url: None,
        external_link: Some("https://www.youtube.com/watch?v=kAZ73e8_DdU"),
        stats: NO_STATS,
        description: "Long form content editing.",
        tools: &["Premiere Pro"],
    },
    Project {
        id: 106,
        title: "Cinematic Reel",
        client: "Client Work",
        category: LONG_FORM,
        thumbnail: "https://img.youtube.com/vi/5AggIZz_aTA/maxresdefault.jpg",
        aspect_ratio: AspectRatio::Widescreen,
        video_url: None,
        external_link: Some("https://www.youtube.com/watch?v=5AggIZz_aTA"),
        stats: NO_STATS,
        description: "Long form content editing.",
        tools: &["Premiere Pro"],
    },
    Project {
        id: 107,
        title: "Featurette",
        client: "Client Work",
        category: LONG_FORM,
        thumbnail: "https://img.youtube.com/vi/MOTBO8--7fA/maxresdefault.jpg",
        aspect_ratio: AspectRatio::Widescreen,
        video_url: None,
        external_link: Some("https://www.youtube.com/watch?v=MOTBO8--7fA"),
        stats: NO_STATS,
        description: "Long form content editing.",
        tools: &["Premiere Pro"],
    },
    Project {
        id: 108,
        title: "Short Film",
        client: "Client Work",
        category: LONG_FORM,
        thumbnail: "https://img.youtube.com/vi/z8i2gee7kRw/maxresdefault.jpg",
        aspect_ratio: AspectRatio::Widescreen,
        video_url: None,
        external_link: Some("https://www.youtube.com/watch?v=z8i2gee7kRw"),
        stats: NO_STATS,
        description: "Long form content editing.",
        tools: &["Premiere Pro"],
    },
    Project {
        id: 109,
        title: "Travel Vlog",
        client: "Client Work",
        category: LONG_FORM,
        thumbnail: "https://img.youtube.com/vi/HSF8LtvMsdM/maxresdefault.jpg",
        aspect_ratio: AspectRatio::Widescreen,
        video_url: None,
        external_link: Some("https://www.youtube.com/watch?v=HSF8LtvMsdM"),
        stats: NO_STATS,
        description: "Long form content editing.",
        tools: &["Premiere Pro"],
    },
    // Graphic design
    Project {
        id: 201,
        title: "Creative Poster 1",
        client: "Client",
        category: GRAPHIC_DESIGN,
        thumbnail: "https://drive.google.com/thumbnail?id=1g2PTVR-wIoi3Wh_LBKcVSQ7pS-3JvJle",
        aspect_ratio: AspectRatio::Portrait,
        video_url: None,
        external_link: None,
        stats: NO_STATS,
        description: "Graphic Design Portfolio",
        tools: &["Photoshop"],
    },
    Project {
        id: 202,
        title: "Social Media Ad",
        client: "Client",
        category: GRAPHIC_DESIGN,
        thumbnail: "https://drive.google.com/thumbnail?id=1Nn4Kk-MirVv9iMIZyPzojBTHczS_BPcO",
        aspect_ratio: AspectRatio::Vertical,
        video_url: None,
        external_link: None,
        stats: NO_STATS,
        description: "Graphic Design Portfolio",
        tools: &["Photoshop"],
    },
    Project {
        id: 203,
        title: "Event Banner",
        client: "Client",
        category: GRAPHIC_DESIGN,
        thumbnail: "https://drive.google.com/thumbnail?id=1xc3cYgZlcxD3oIKMp8cDrGc_0Yl8xtpJ",
        aspect_ratio: AspectRatio::Widescreen,
        video_url: None,
        external_link: None,
        stats: NO_STATS,
        description: "Graphic Design Portfolio",
        tools: &["Photoshop"],
    },
    Project {
        id: 204,
        title: "Product Mockup",
        client: "Client",
        category: GRAPHIC_DESIGN,
        thumbnail: "https://drive.google.com/thumbnail?id=1qnGA7WGZh0MjHeyklhUwhpCKiVz8dWZ8",
        aspect_ratio: AspectRatio::Square,
        video_url: None,
        external_link: None,
        stats: NO_STATS,
        description: "Graphic Design Portfolio",
        tools: &["Photoshop"],
    },
    Project {
        id: 205,
        title: "YouTube Thumbnail",
        client: "Client",
        category: GRAPHIC_DESIGN,
        thumbnail: "https://drive.google.com/thumbnail?id=1XM9oYVp6PEd34FEOmmWi5v7KjOmaJnOD",
        aspect_ratio: AspectRatio::Widescreen,
        video_url: None,
        external_link: None,
        stats: NO_STATS,
        description: "Graphic Design Portfolio",
        tools: &["Photoshop"],
    },
    Project {
        id: 206,
        title: "Story Graphic",
        client: "Client",
        category: GRAPHIC_DESIGN,
        thumbnail: "https://drive.google.com/thumbnail?id=1N95FFS9OeI8FsLUVsQWGH9-wVaH6VNQX",
        aspect_ratio: AspectRatio::Vertical,
        video_url: None,
        external_link: None,
        stats: NO_STATS,
        description: "Graphic Design Portfolio",
        tools: &["Photoshop"],
    },
    Project {
        id: 207,
        title: "Quote Post",
        client: "Client",
        category: GRAPHIC_DESIGN,
        thumbnail: "https://drive.google.com/thumbnail?id=1kZBkqJdZQ5Xr02eR2knJzSuppiKp8JjA",
        aspect_ratio: AspectRatio::Square,
        video_url: None,
        external_link: None,
        stats: NO_STATS,
        description: "Graphic Design Portfolio",
        tools: &["Photoshop"],
    },
    Project {
        id: 208,
        title: "Promotional Flyer",
        client: "Client",
        category: GRAPHIC_DESIGN,
        thumbnail: "https://drive.google.com/thumbnail?id=1s-gZwdKU2EB1DHHvR_URUz24WW-0Sb1w",
        aspect_ratio: AspectRatio::Portrait,
        video_url: None,
        external_link: None,
        stats: NO_STATS,
        description: "Graphic Design Portfolio",
        tools: &["Photoshop"],
    },
    Project {
        id: 209,
        title: "Infographic",
        client: "Client",
        category: GRAPHIC_DESIGN,
        thumbnail: "https://drive.google.com/thumbnail?id=1ypNenAa_i-9Dh9BdFIZeDqyvuAHt9-gr",
        aspect_ratio: AspectRatio::Vertical,
        video_url: None,
        external_link: None,
        stats: NO_STATS,
        description: "Graphic Design Portfolio",
        tools: &["Photoshop"],
    },
    Project {
        id: 210,
        title: "Cover Art",
        client: "Client",
        category: GRAPHIC_DESIGN,
        thumbnail: "https://drive.google.com/thumbnail?id=1OFuneo88R7BsEVJT_xH7IGqaSaFP1SR3",
        aspect_ratio: AspectRatio::Square,
        video_url: None,
        external_link: None,
        stats: NO_STATS,
        description: "Graphic Design Portfolio",
        tools: &["Photoshop"],
    },
    Project {
        id: 211,
        title: "Web Banner Ad",
        client: "Client",
        category: GRAPHIC_DESIGN,
        thumbnail: "https://drive.google.com/thumbnail?id=1XfaiWKGCjRTjwVGs99GVGdkUNvoZ2DV2",
        aspect_ratio: AspectRatio::Cinema,
        video_url: None,
        external_link: None,
        stats: NO_STATS,
        description: "Graphic Design Portfolio",
        tools: &["Photoshop"],
    },
    Project {
        id: 212,
        title: "Ad Creative",
        client: "Client",
        category: GRAPHIC_DESIGN,
        thumbnail: "https://drive.google.com/thumbnail?id=1GYXzMe-DizulrISw9UINyqtk-MuAxUtO",
        aspect_ratio: AspectRatio::Widescreen,
        video_url: None,
        external_link: None,
        stats: NO_STATS,
        description: "Graphic Design Portfolio",
        tools: &["Photoshop"],
    },
    // Long form thumbnails, shown in the graphic design library
    Project {
        id: 301,
        title: "Thumbnail: Podcast / Interview",
        client: "Client Work",
        category: GRAPHIC_DESIGN,
        thumbnail: "https://img.youtube.com/vi/HRaB4tE0c2g/maxresdefault.jpg",
        aspect_ratio: AspectRatio::Widescreen,
        video_url: None,
        external_link: None,
        stats: NO_STATS,
        description: "YouTube Thumbnail Design",
        tools: &["Photoshop"],
    },
    Project {
        id: 302,
        title: "Thumbnail: Documentary Style",
        client: "Client Work",
        category: GRAPHIC_DESIGN,
        thumbnail: "https://img.youtube.com/vi/6QICTiLN2rc/maxresdefault.jpg",
        aspect_ratio: AspectRatio::Widescreen,
        video_url: None,
        external_link: None,
        stats: NO_STATS,
        description: "YouTube Thumbnail Design",
        tools: &["Photoshop"],
    },
    Project {
        id: 303,
        title: "Thumbnail: Vlog Edit",
        client: "Client Work",
        category: GRAPHIC_DESIGN,
        thumbnail: "https://img.youtube.com/vi/Jryk7owJQlQ/maxresdefault.jpg",
        aspect_ratio: AspectRatio::Widescreen,
        video_url: None,
        external_link: None,
        stats: NO_STATS,
        description: "YouTube Thumbnail Design",
        tools: &["Photoshop"],
    },
    Project {
        id: 304,
        title: "Thumbnail: Narrative Story",
        client: "Client Work",
        category: GRAPHIC_DESIGN,
        thumbnail: "https://img.youtube.com/vi/v_kOHdncOTo/maxresdefault.jpg",
        aspect_ratio: AspectRatio::Widescreen,
        video_url: None,
        external_link: None,
        stats: NO_STATS,
        description: "YouTube Thumbnail Design",
        tools: &["Photoshop"],
    },
    Project {
        id: 305,
        title: "Thumbnail: Event Coverage",
        client: "Client Work",
        category: GRAPHIC_DESIGN,
        thumbnail: "https://img.youtube.com/vi/kAZ73e8_DdU/maxresdefault.jpg",
        aspect_ratio: AspectRatio::Widescreen,
        video_url: None,
        external_link: None,
        stats: NO_STATS,
        description: "YouTube Thumbnail Design",
        tools: &["Photoshop"],
    },
    Project {
        id: 306,
        title: "Thumbnail: Cinematic Reel",
        client: "Client Work",
        category: GRAPHIC_DESIGN,
        thumbnail: "https://img.youtube.com/vi/5AggIZz_aTA/maxresdefault.jpg",
        aspect_ratio: AspectRatio::Widescreen,
        video_url: None,
        external_link: None,
        stats: NO_STATS,
        description: "YouTube Thumbnail Design",
        tools: &["Photoshop"],
    },
    Project {
        id: 307,
        title: "Thumbnail: Featurette",
        client: "Client Work",
        category: GRAPHIC_DESIGN,
        thumbnail: "https://img.youtube.com/vi/MOTBO8--7fA/maxresdefault.jpg",
        aspect_ratio: AspectRatio::Widescreen,
        video_url: None,
        external_link: None,
        stats: NO_STATS,
        description: "YouTube Thumbnail Design",
        tools: &["Photoshop"],
    },
    Project {
        id: 308,
        title: "Thumbnail: Short Film",
        client: "Client Work",
        category: GRAPHIC_DESIGN,
        thumbnail: "https://img.youtube.com/vi/z8i2gee7kRw/maxresdefault.jpg",
        aspect_ratio: AspectRatio::Widescreen,
        video_url: None,
        external_link: None,
        stats: NO_STATS,
        description: "YouTube Thumbnail Design",
        tools: &["Photoshop"],
    },
    Project {
        id: 309,
        title: "Thumbnail: Travel Vlog",
        client: "Client Work",
        category: GRAPHIC_DESIGN,
        thumbnail: "https://img.youtube.com/vi/HSF8LtvMsdM/maxresdefault.jpg",
        aspect_ratio: AspectRatio::Widescreen,
        video_url: None,
        external_link: None,
        stats: NO_STATS,
        description: "YouTube Thumbnail Design",
        tools: &["Photoshop"],
    },
];

pub const PRICING_TIERS: &[PricingTier] = &[
    PricingTier {
        name: "Short Form",
        price: "₹750 - ₹3,000",
        best_for: "Reels & TikTok",
        features: &[
            "Personal Branding",
            "Talking Heads",
            "Retention Reels",
            "Event Highlights",
            "Motion Graphics",
        ],
        samples: &[
            SampleLink { label: "Style 1", url: "https://drive.google.com/file/d/1A64F0T0nEpPf9V9GZA-8T-TPDoJycVZC/view" },
            SampleLink { label: "Style 2", url: "https://drive.google.com/file/d/1pBGPrZVN4mFmA_fIreumMvHri5e_wjTx/view?usp=drive_link" },
            SampleLink { label: "Style 3", url: "https://drive.google.com/file/d/1XavSXaCp_gG6UZ1IshA3yiDGrQh9AIr6/view?usp=drive_link" },
        ],
    },
    PricingTier {
        name: "Podcast",
        price: "₹400 - ₹1000",
        best_for: "Per Minute Output",
        features: &["Multicamera", "Audio syncing", "Engaging Highlights"],
        samples: &[SampleLink { label: "YouTube Sample", url: "https://www.youtube.com/watch?v=HSF8LtvMsdM" }],
    },
    PricingTier {
        name: "Interviews",
        price: "₹5000 / hr",
        best_for: "Business / Education",
        features: &["Multi cam sync", "Audio mastering", "Additional cost for extra minutes"],
        samples: &[SampleLink { label: "YouTube Sample", url: "https://www.youtube.com/watch?v=0a_lfPUWM1E" }],
    },
    PricingTier {
        name: "Documentary / Vlogs",
        price: "₹1500 / 10 mins",
        best_for: "Narrative Content",
        features: &["Cinematic Flow", "Vlogs and Commercials", "Narrative flow"],
        samples: &[SampleLink { label: "YouTube Sample", url: "https://www.youtube.com/watch?v=HRaB4tE0c2g" }],
    },
    PricingTier {
        name: "Thumbnail",
        price: "₹750 - ₹2,500",
        best_for: "YouTube",
        features: &["Movie Trailer", "Documentary style", "Vlog Style", "AI Implemented"],
        samples: &[SampleLink { label: "Sample", url: "https://drive.google.com/file/d/1DI3iesqkY0jkk1Wayq71YNrgVtZSRVwO/view?usp=drive_link" }],
    },
    PricingTier {
        name: "Graphic Design",
        price: "Starts from ₹500",
        best_for: "Branding / Social media",
        features: &[
            "Posters (Print/Social)",
            "Corporate Marketing Assets",
            "Promotional Posters",
            "Brochures & Pamphlets",
        ],
        samples: &[SampleLink { label: "View Portfolio", url: "https://drive.google.com/drive/folders/19GCKxGmesho4TfaG0K2_WZuZ6BgpaOUQ" }],
    },
];

pub const CLIENTS: &[Client] = &[
    Client { name: "Tejimandi", logo_id: "1dTW885-NnXXAf4JBuYoCxIW3rHcLMaZU" },
    Client { name: "The Media Guru", logo_id: "1ia9WgcWxIPG6B29FfLdSs5w7Y0CWgbaV" },
    Client { name: "Spotlight", logo_id: "1FFdBRjbaD8MoDwq8gtYSc4Uh95oTrO6V" },
    Client { name: "Xpertology", logo_id: "1tbUXAZxk8hEWuySUBeh8cvlP8YJWA9M0" },
    Client { name: "Arvelo Media", logo_id: "1qerOsP35k92_TKAw5PMQsZmS-5VTPWeL" },
    Client { name: "English Yaari", logo_id: "1u-VNtrl9xq5Y6cR1LQRvy_tmkj44QyxB" },
    Client { name: "AIWO", logo_id: "1LaaUYhpMqJZSiyMu-XnsdAu7vR0ga-sN" },
    Client { name: "Mysivi", logo_id: "1c0RjTsAHAVeyy3NRLr30gqhl7rtl-V8Y" },
    Client { name: "Techealer", logo_id: "1Whyi5uaubDkSnt3ax7O9ycLtMuPcJiAf" },
    Client { name: "Zam Zam Sweets", logo_id: "1RHCqY3ZeS-iTy-FiaRO_-WcQiS0Gs1bH" },
    Client { name: "Zooq Films", logo_id: "1rBK48BaOyXkBGXrp1KvxPYecH_-p7V9_" },
    Client { name: "Forza Fitness", logo_id: "1fhNIAOdQpAc7aWEFZUA0u9XSJSUqyzG5" },
    Client { name: "WIW Roofing", logo_id: "1U69elelFMNWmCmHFyo0fOPwuAQfIYhcc" },
    Client { name: "Figment", logo_id: "1A7krfXj6fPZeXvKw6oDQ-0-GRucPRv43" },
    Client { name: "Naraya Pearls", logo_id: "1JsL_HKXpLln1HEkRyIEkErTvzc7DbStW" },
    Client { name: "Therapy", logo_id: "1MS8HgI12RVlyxaLLRCsXzxdb0mcsQgT9" },
    Client { name: "Lesgo", logo_id: "1OwPXIrlpQ8pcnf62OacGSMQrcMXB9jGG" },
    Client { name: "Royal Crest", logo_id: "1V04YscdXYszkIsvs9LqTQmha8-I9GsZV" },
    Client { name: "Vigaah Study Abroad", logo_id: "1HDoeP84JYRIGyWv_Tu0Lr7_j3AxMGUhU" },
    Client { name: "Eleven Fitness Club", logo_id: "1zlp6xF8sfR7WaD99lIqYbNWLD97fjJWf" },
    Client { name: "Zhagaram", logo_id: "1kbVA1nkuTtlJTm7rtsn2Di3Zy-NULH4J" },
    Client { name: "Greensigma", logo_id: "1JzZLy8RmNq4eCNFSd8tp3fGBJH4dP55p" },
    Client { name: "Aire", logo_id: "1iiMkid3VlvTeEw_aouZYKb29cIQolvoJ" },
    Client { name: "Flancer", logo_id: "1MRVwBevTf0mpLbgtTc0QA9Eqmmx1F4UM" },
];

pub const RAW_REELS: &[RawReel] = &[
    RawReel { source: ReelSource::Gdrive, filename: "Client Reel 1.mp4", id: "1PEzds--VSWIH5T64fLjOgOuYD3O941-G" },
    RawReel { source: ReelSource::Gdrive, filename: "Client Reel 2.mp4", id: "1A64F0T0nEpPf9V9GZA-8T-TPDoJycVZC" },
    RawReel { source: ReelSource::Gdrive, filename: "Client Reel 3.mp4", id: "1pBGPrZVN4mFmA_fIreumMvHri5e_wjTx" },
    RawReel { source: ReelSource::Gdrive, filename: "Client Reel 4.mp4", id: "1bcMgRl5TROgaPsCOnzgn0uBhZzeklCmP" },
    RawReel { source: ReelSource::Gdrive, filename: "Client Reel 5.mp4", id: "1xG2izuifeTd4Lw2m5b-8ND77B2iD2nHR" },
    RawReel { source: ReelSource::Gdrive, filename: "Client Reel 6.mp4", id: "1XavSXaCp_gG6UZ1IshA3yiDGrQh9AIr6" },
    RawReel { source: ReelSource::Gdrive, filename: "Client Reel 7.mp4", id: "1uMgnqdgE6Ire7SRr1UsSpPmN5d9hB7lU" },
    RawReel { source: ReelSource::Gdrive, filename: "Client Reel 8.mp4", id: "1nGpIzXtywwU-D4wsj9xypB4AXwzz8z38" },
    RawReel { source: ReelSource::Gdrive, filename: "Client Reel 9.mp4", id: "15gut9togQF62JPpS8B1V_e52pTQR8UCQ" },
    RawReel { source: ReelSource::Gdrive, filename: "Client Reel 10.mp4", id: "1SJ4s45WKQB4PLaj6XkYQ1OrxpI5ExUC4" },
    RawReel { source: ReelSource::Youtube, filename: "Reel YT 1.mp4", id: "kKkfUabtC0k" },
    RawReel { source: ReelSource::Youtube, filename: "Reel YT 2.mp4", id: "e6umK6VXrjs" },
    RawReel { source: ReelSource::Youtube, filename: "Reel YT 3.mp4", id: "dPYBTUzM0xs" },
];

pub const PROJECT_TYPES: &[&str] = &[
    "Short Form",
    "Podcast",
    "Interviews",
    "Documentary / Vlogs",
    "Thumbnail",
    "Graphic Design",
    "Other",
];

pub const FOUNDER_NAME: &str = "Jothibasu Ramalakshmanan";
pub const FOUNDER_PORTRAIT: &str = "https://drive.google.com/thumbnail?id=1qPbCGHfvtbhXa7UtYvtAYmk7rbsgI_63";

pub const SOCIAL_LINKS: &[SampleLink] = &[
    SampleLink { label: "Instagram", url: "https://www.instagram.com/joetheamateur?igsh=MXh5cnUyNGc2cWtjaA==" },
    SampleLink { label: "LinkedIn", url: "https://www.linkedin.com/in/jothibasu-ramalakshmanan?utm_source=share_via&utm_content=profile&utm_medium=member_android" },
    SampleLink { label: "Discord", url: "https://discord.gg/p5wdTfJ5" },
];

pub fn long_form_projects() -> impl Iterator<Item = &'static Project> {
    PROJECTS.iter().filter(|p| p.category == LONG_FORM)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn project_ids_are_unique() {
        let ids: HashSet<u32> = PROJECTS.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn every_service_filter_is_a_known_category() {
        for service in SERVICES {
            assert!(
                [SHORT_FORM, LONG_FORM, GRAPHIC_DESIGN].contains(&service.filter_category),
                "unexpected category {}",
                service.filter_category
            );
        }
    }

    #[test]
    fn long_form_projects_all_link_out() {
        assert_eq!(long_form_projects().count(), 9);
        assert!(long_form_projects().all(|p| p.external_link.is_some()));
    }
}
