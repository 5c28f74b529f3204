//! Pages
//!
//! Top-level page components for each route.

pub mod home;
pub mod login;
pub mod profile;
pub mod register;

pub use home::Home;
pub use login::Login;
pub use profile::Profile;
pub use register::Register;
