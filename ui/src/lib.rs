//! This crate contains the screens and shared UI components of the Lemmy client.

pub mod app;
pub use app::{CommunityScreen, LoginScreen, SettingsScreen};

pub mod components;
pub mod features;
pub mod services;
pub mod utils;
