pub mod convert;
pub mod home;
pub mod not_found;
