#![doc(html_root_url = "https://docs.rs/shower-dom/0.0.1")]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

#[cfg(doctest)]
pub mod readme {
	doc_comment::doctest!("../README.md");
}

pub mod bindings;
pub mod command;
pub mod config;
pub mod error;
pub mod fragment;
pub mod mode;
pub mod navigator;
pub mod ports;
pub mod registry;
pub mod web;

pub use crate::{config::ShowerConfig, error::ConfigurationError, mode::Mode, navigator::SlideNavigator};
