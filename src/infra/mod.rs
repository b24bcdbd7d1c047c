pub mod email;
pub mod factory;
pub mod i18n;
pub mod markdown;
pub mod repositories;
pub mod stores;
pub mod views;
