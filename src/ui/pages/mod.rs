//! Application pages
//!
//! - Early access landing page (home)
//! - Not found page

mod early_access;
mod not_found;

pub use early_access::EarlyAccessPage;
pub use not_found::NotFoundPage;
