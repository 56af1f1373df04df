// Landing page routes
// (c)2025 CyberMonitor

mod contact;
mod home;

pub use contact::ContactPage;
pub use home::HomePage;
