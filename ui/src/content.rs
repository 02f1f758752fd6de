//! Build-time content: navigation entries, sponsors, branding strings.
//!
//! Pure data. Rendering keys come from here, so `Sponsor::id` uniqueness is
//! an invariant (checked by test), and `NavLink::url` doubles as the link's
//! identity when deciding the active highlight.

use crate::components::icons::Glyph;

pub const SITE_NAME: &str = "Design and Code";
pub const TAGLINE: &str = "Connect, Collaborate, Comprehend";
pub const DISCORD_INVITE: &str = "https://discord.gg/gM3bG4rAU5";
pub const BRANDING_LOGO: &str = "/assets/branding-transparent-logo.svg";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub url: &'static str,
    pub label: &'static str,
    pub icon: Glyph,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { url: "/", label: "Home", icon: Glyph::Home },
    NavLink { url: "/about", label: "About", icon: Glyph::People },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sponsor {
    pub id: &'static str,
    pub name: &'static str,
    pub logo: &'static str,
}

pub const SPONSORS: &[Sponsor] = &[
    Sponsor {
        id: "github-education",
        name: "GitHub Education",
        logo: "https://avatars.githubusercontent.com/u/15144028?s=200&v=4",
    },
    Sponsor {
        id: "digitalocean",
        name: "DigitalOcean",
        logo: "https://avatars.githubusercontent.com/u/4650108?s=200&v=4",
    },
    Sponsor {
        id: "gitbook",
        name: "GitBook",
        logo: "https://avatars.githubusercontent.com/u/7111340?s=200&v=4",
    },
    Sponsor {
        id: "vercel",
        name: "Vercel",
        logo: "https://avatars.githubusercontent.com/u/14985020?s=200&v=4",
    },
];
