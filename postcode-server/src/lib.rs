//! Postal code directory server.
//!
//! Validates postal codes and cross-references codes and cities for the
//! Faroe Islands (and Greenland) from a bundled dataset snapshot, and
//! serves the lookups over a small JSON API.

pub mod config;
pub mod directory;
pub mod domain;
pub mod web;
