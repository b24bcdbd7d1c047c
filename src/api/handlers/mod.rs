pub mod booker;
pub mod email;
pub mod feature;
pub mod health;
