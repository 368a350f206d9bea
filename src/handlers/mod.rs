//! HTTP request handlers
//!
//! This module organizes all API handlers into logical groups:
//! - `api` - Health check endpoint
//! - `convert` - PDF-to-speech conversion pipeline
//! - `files` - Staged file serving and artifact download
//! - `speak` - Text-to-speech snippet endpoint
//! - `voices` - Voice catalog endpoint

pub mod api;
pub mod convert;
pub mod files;
pub mod speak;
pub mod voices;
