// Export submodules
pub mod admin;
pub mod auth;
pub mod bookmark;
pub mod calendar;
pub mod chat;
pub mod home;
pub mod notification;
pub mod policy;
pub mod user;
