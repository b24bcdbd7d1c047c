pub mod booker;
pub mod email;
pub mod event;
pub mod feature;
