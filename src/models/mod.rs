pub mod group;
pub mod locale;
pub mod rating;
pub mod response;
