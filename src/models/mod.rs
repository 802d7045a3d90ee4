//! Data models for the welfare-assistant API.
//!
//! This module contains the request and response structures exchanged with
//! the backend. Response bodies use camelCase field names on the wire.

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
