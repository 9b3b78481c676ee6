//! Browser session management
//!
//! Launching or connecting to a Chrome/Chromium instance via the Chrome
//! DevTools Protocol, finding the active tab, and capturing the render
//! snapshot the extraction pass runs on.

mod config;
mod session;

pub use config::{ConnectionOptions, LaunchOptions};
pub use session::BrowserSession;
