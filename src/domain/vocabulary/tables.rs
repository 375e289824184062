//! Built-in keyword tables.

use crate::domain::foundation::{ProductType, UsageContext};

use super::MatchKind;

/// Product keywords and recognized abbreviations.
pub(super) const PRODUCT_KEYWORDS: &[(ProductType, &str, MatchKind)] = &[
    (ProductType::Headphones, "headphones", MatchKind::Keyword),
    (ProductType::Headphones, "headphone", MatchKind::Keyword),
    (ProductType::Headphones, "over-ear headphones", MatchKind::Keyword),
    (ProductType::Headphones, "over-ear", MatchKind::Keyword),
    (ProductType::Headphones, "over ear", MatchKind::Keyword),
    (ProductType::Headphones, "on-ear", MatchKind::Keyword),
    (ProductType::Headphones, "headset", MatchKind::Keyword),
    (ProductType::Headphones, "cans", MatchKind::Abbreviation),
    (ProductType::Earbuds, "earbuds", MatchKind::Keyword),
    (ProductType::Earbuds, "earbud", MatchKind::Keyword),
    (ProductType::Earbuds, "earphones", MatchKind::Keyword),
    (ProductType::Earbuds, "in-ear", MatchKind::Keyword),
    (ProductType::Earbuds, "true wireless", MatchKind::Keyword),
    (ProductType::Earbuds, "buds", MatchKind::Abbreviation),
    (ProductType::Earbuds, "tws", MatchKind::Abbreviation),
    (ProductType::Earbuds, "airpods", MatchKind::Abbreviation),
    (ProductType::Speakers, "speakers", MatchKind::Keyword),
    (ProductType::Speakers, "speaker", MatchKind::Keyword),
    (ProductType::Speakers, "bluetooth speaker", MatchKind::Keyword),
    (ProductType::Speakers, "portable speaker", MatchKind::Keyword),
    (ProductType::Speakers, "soundbar", MatchKind::Keyword),
    (ProductType::Speakers, "bt speaker", MatchKind::Abbreviation),
    (ProductType::Microphone, "microphone", MatchKind::Keyword),
    (ProductType::Microphone, "microphones", MatchKind::Keyword),
    (ProductType::Microphone, "condenser microphone", MatchKind::Keyword),
    (ProductType::Microphone, "mic", MatchKind::Abbreviation),
    (ProductType::Microphone, "mics", MatchKind::Abbreviation),
    (ProductType::Microphone, "studio mic", MatchKind::Abbreviation),
    (ProductType::Camera, "camera", MatchKind::Keyword),
    (ProductType::Camera, "cameras", MatchKind::Keyword),
    (ProductType::Camera, "action camera", MatchKind::Keyword),
    (ProductType::Camera, "mirrorless", MatchKind::Keyword),
    (ProductType::Camera, "dslr", MatchKind::Abbreviation),
    (ProductType::Camera, "cam", MatchKind::Abbreviation),
    (ProductType::Camera, "gopro", MatchKind::Abbreviation),
    (ProductType::Laptop, "laptop", MatchKind::Keyword),
    (ProductType::Laptop, "laptops", MatchKind::Keyword),
    (ProductType::Laptop, "gaming laptop", MatchKind::Keyword),
    (ProductType::Laptop, "notebook", MatchKind::Keyword),
    (ProductType::Laptop, "macbook", MatchKind::Abbreviation),
    (ProductType::Phone, "phone", MatchKind::Keyword),
    (ProductType::Phone, "phones", MatchKind::Keyword),
    (ProductType::Phone, "smartphone", MatchKind::Keyword),
    (ProductType::Phone, "mobile phone", MatchKind::Keyword),
    (ProductType::Phone, "mobile", MatchKind::Keyword),
    (ProductType::Phone, "iphone", MatchKind::Abbreviation),
    (ProductType::Phone, "android", MatchKind::Abbreviation),
    (ProductType::Tablet, "tablet", MatchKind::Keyword),
    (ProductType::Tablet, "tablets", MatchKind::Keyword),
    (ProductType::Tablet, "ipad", MatchKind::Abbreviation),
    (ProductType::Tablet, "galaxy tab", MatchKind::Abbreviation),
    (ProductType::Tablet, "tab", MatchKind::Abbreviation),
    (ProductType::Watch, "watch", MatchKind::Keyword),
    (ProductType::Watch, "smartwatch", MatchKind::Keyword),
    (ProductType::Watch, "fitness watch", MatchKind::Keyword),
    (ProductType::Watch, "wearable", MatchKind::Keyword),
    (ProductType::Watch, "fitbit", MatchKind::Abbreviation),
];

/// Usage context keywords.
pub(super) const CONTEXT_KEYWORDS: &[(UsageContext, &str)] = &[
    (UsageContext::Gym, "gym"),
    (UsageContext::Gym, "workout"),
    (UsageContext::Gym, "workouts"),
    (UsageContext::Gym, "exercise"),
    (UsageContext::Gym, "fitness"),
    (UsageContext::Gym, "running"),
    (UsageContext::Gym, "jogging"),
    (UsageContext::Gym, "sports"),
    (UsageContext::Office, "office"),
    (UsageContext::Office, "work"),
    (UsageContext::Office, "meeting"),
    (UsageContext::Office, "meetings"),
    (UsageContext::Office, "conference"),
    (UsageContext::Office, "calls"),
    (UsageContext::Home, "home"),
    (UsageContext::Home, "house"),
    (UsageContext::Home, "living room"),
    (UsageContext::Home, "bedroom"),
    (UsageContext::Outdoor, "outdoor"),
    (UsageContext::Outdoor, "outdoors"),
    (UsageContext::Outdoor, "outside"),
    (UsageContext::Outdoor, "hiking"),
    (UsageContext::Outdoor, "camping"),
    (UsageContext::Outdoor, "trail"),
    (UsageContext::Travel, "travel"),
    (UsageContext::Travel, "travelling"),
    (UsageContext::Travel, "traveling"),
    (UsageContext::Travel, "trip"),
    (UsageContext::Travel, "commute"),
    (UsageContext::Travel, "flight"),
    (UsageContext::Travel, "flights"),
    (UsageContext::Gaming, "gaming"),
    (UsageContext::Gaming, "game"),
    (UsageContext::Gaming, "games"),
    (UsageContext::Gaming, "esports"),
    (UsageContext::Gaming, "fps"),
    (UsageContext::Professional, "professional"),
    (UsageContext::Professional, "studio"),
    (UsageContext::Professional, "recording"),
    (UsageContext::Professional, "streaming"),
    (UsageContext::Professional, "podcast"),
    (UsageContext::Professional, "podcasting"),
];

/// Canonical features and their aliases.
pub(super) const FEATURES: &[(&str, &[&str])] = &[
    ("waterproof", &["water proof", "ipx7", "ip67", "ip68"]),
    ("water-resistant", &["water resistant", "splash proof", "sweatproof", "sweat proof"]),
    ("dustproof", &["dust proof"]),
    (
        "noise-cancelling",
        &[
            "noise cancelling",
            "noise-canceling",
            "noise canceling",
            "anc",
            "active noise",
            "active noise cancellation",
        ],
    ),
    ("wireless", &["cordless"]),
    ("bluetooth", &["bt"]),
    ("wired", &["3.5mm jack", "aux"]),
    ("usb-c", &["usb c", "type-c", "type c"]),
    ("long battery life", &["long battery", "battery life", "all day battery"]),
    ("fast charging", &["fast charge", "quick charge", "quick charging"]),
    ("wireless charging", &["qi charging"]),
    ("lightweight", &["light weight", "light"]),
    ("portable", &[]),
    ("compact", &["small"]),
    ("comfortable", &["comfort", "comfy"]),
    ("ergonomic", &[]),
    ("premium sound", &["premium", "hi-fi", "hifi", "high fidelity"]),
    ("touch control", &["touch controls"]),
    ("3d audio", &["spatial audio", "surround", "surround sound", "360 audio"]),
    ("bass boost", &["extra bass", "deep bass", "bass"]),
    ("eq", &["equalizer", "equaliser"]),
    ("transparent mode", &["transparency mode", "ambient mode"]),
    ("high resolution display", &["hd display", "oled", "amoled", "retina"]),
    ("touchscreen", &["touch screen"]),
    ("fast processor", &["powerful processor", "fast cpu"]),
    ("image stabilization", &["stabilization", "ois"]),
    ("gps", &[]),
    ("heart rate monitor", &["heart rate"]),
    ("5g", &[]),
];

/// Features worth suggesting per product type.
pub(super) fn relevant_features(product: ProductType) -> &'static [&'static str] {
    match product {
        ProductType::Headphones => &[
            "noise-cancelling",
            "wireless",
            "long battery life",
            "comfortable",
            "premium sound",
            "lightweight",
            "bass boost",
            "wired",
        ],
        ProductType::Earbuds => &[
            "noise-cancelling",
            "waterproof",
            "water-resistant",
            "wireless charging",
            "long battery life",
            "transparent mode",
            "touch control",
        ],
        ProductType::Speakers => &[
            "portable",
            "waterproof",
            "long battery life",
            "bass boost",
            "bluetooth",
            "3d audio",
        ],
        ProductType::Microphone => &["usb-c", "wireless", "noise-cancelling", "compact", "wired"],
        ProductType::Camera => &[
            "image stabilization",
            "waterproof",
            "compact",
            "lightweight",
            "long battery life",
        ],
        ProductType::Laptop => &[
            "lightweight",
            "long battery life",
            "fast processor",
            "high resolution display",
            "touchscreen",
            "usb-c",
        ],
        ProductType::Phone => &[
            "fast charging",
            "long battery life",
            "high resolution display",
            "5g",
            "waterproof",
            "wireless charging",
        ],
        ProductType::Tablet => &[
            "high resolution display",
            "long battery life",
            "lightweight",
            "fast processor",
            "usb-c",
        ],
        ProductType::Watch => &[
            "heart rate monitor",
            "gps",
            "waterproof",
            "long battery life",
            "touchscreen",
        ],
    }
}
