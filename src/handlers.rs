pub mod add_data;
pub mod health;
pub mod home;
pub mod predict;
pub mod submit_data;
