//! Core library: classification, asset organisation, tag rules, scene tagging.

pub mod classify;
pub mod config;
pub mod organiser;
pub mod report;
pub mod rules;
pub mod scanner;
pub mod tagger;
