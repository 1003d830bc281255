//! Declaration copy shown around the signing form.

pub const SIDE_LABEL: &str = "SOVEREIGNTY";
pub const HERO_TITLE: &str = "RECLAIM";
pub const HERO_SUBTITLE: &str = "Take Back Your Digital Life";
pub const DECLARATION_QUOTE: &str = "\"We gave our data to big tech. Our photos, our messages, \
our memories — stored on their servers, governed by their terms, deleted at their will. \
No more. We reclaim what is ours.\"";
pub const HERO_CALL: &str =
    "Sign the declaration. Your signature is stored on-chain — permanent, uncensorable, yours.";
pub const POWERED_BY: &str = "Powered by Arkiv";

pub const SIGN_KICKER: &str = "03 / Take Action";
pub const SIGN_TITLE: &str = "JOIN THE MOVEMENT";
pub const SIGN_FOOTNOTE: &str =
    "Your signature will be permanently recorded on Arkiv's decentralized storage.";

pub const ABOUT_KICKER: &str = "04 / About";
pub const ABOUT_TITLE: &str = "CREDITS";

pub const WHY_TITLE: &str = "WHY THIS MATTERS";
pub const WHY_PARAGRAPHS: [&str; 3] = [
    "We built the internet to connect us. Somewhere along the way, we became the product.",
    "Every photo you've uploaded, every message you've sent, every search you've made — \
stored on servers you don't control, governed by terms you didn't read, \
owned by companies that can disappear tomorrow.",
    "This declaration isn't nostalgia for a decentralized past. \
It's a commitment to a sovereign future.",
];

pub const COPYRIGHT: &str = "© 2026 Declaration of Digital Independence. Open source.";
pub const STORAGE_NOTE: &str = "Data stored on Arkiv. Immutable. Uncensorable. Yours.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Credit {
    pub label: &'static str,
    pub url: Option<&'static str>,
}

impl Credit {
    const fn text(label: &'static str) -> Self {
        Self { label, url: None }
    }

    const fn link(label: &'static str, url: &'static str) -> Self {
        Self {
            label,
            url: Some(url),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreditGroup {
    pub heading: &'static str,
    pub entries: &'static [Credit],
}

pub const CREDITS: [CreditGroup; 5] = [
    CreditGroup {
        heading: "Created By",
        entries: &[
            Credit::link("Robert Miller", "https://robertmiller.xyz"),
            Credit::text("Web3 builder since 2017"),
            Credit::text("Built at Network School"),
        ],
    },
    CreditGroup {
        heading: "Powered By",
        entries: &[
            Credit::link("Arkiv", "https://arkiv.network"),
            Credit::link("Golem Network", "https://golem.network"),
        ],
    },
    CreditGroup {
        heading: "Stack",
        entries: &[Credit::text("Rust"), Credit::text("egui")],
    },
    CreditGroup {
        heading: "Connect",
        entries: &[
            Credit::link("Twitter/X", "https://x.com/rob_miller87"),
            Credit::link("Farcaster", "https://warpcast.com/robmiller87"),
        ],
    },
    CreditGroup {
        heading: "Year",
        entries: &[Credit::text("2026"), Credit::text("Ongoing")],
    },
];
