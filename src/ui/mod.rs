pub mod alert;
pub mod icon;
pub mod pages;
pub mod spinner;

pub use alert::{Alert, AlertVariant, ErrorAlert};
pub use icon::{Icon, icons};
pub use spinner::{Spinner, SpinnerSize};
