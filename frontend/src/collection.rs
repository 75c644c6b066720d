pub mod api;
pub mod components;
pub mod dependencies;
pub mod layout;
pub mod page;
pub mod progress;
