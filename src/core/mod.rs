pub mod cooldown;
pub mod kiosk;
pub mod share;
pub mod stats;
pub mod submit;
