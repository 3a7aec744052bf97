//! SharePoint list-item patch broker.
//!
//! Accepts an HTTP-triggered update, forwards the caller's bearer token, and
//! resolves embedded `"@user(name)"` mention tokens into site user IDs before
//! issuing the patch.

pub mod config;
pub mod http;
pub mod resolver;
pub mod sharepoint;
