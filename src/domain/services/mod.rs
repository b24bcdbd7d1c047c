pub mod booker_context;
pub mod calendar;
pub mod dates;
pub mod display_name;
pub mod email_dispatch;
pub mod event_details;
pub mod event_meta;
pub mod seats;
pub mod timezone_select;
pub mod translation;
