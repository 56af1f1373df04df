// Landing page sections
// (c)2025 CyberMonitor

/// Release tag shown in the hero badge and the console banner (single
/// source of truth).
pub const VERSION: &str = "v1.0.0";

/// Where the "Download Now" call-to-action points.
pub const DOWNLOAD_URL: &str =
    "https://github.com/astin7/cybermonitor-project/releases/download/v1.0.0/CyberMonitor.zip";

mod features;
mod footer;
mod hero;
mod nav;

pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
