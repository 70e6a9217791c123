#![forbid(unsafe_code)]

pub mod cli;
pub mod click;
pub mod commands;
pub mod config;
pub mod controller;
pub mod dataset;
pub mod filter;
pub mod form;
pub mod formats;
pub mod html;
pub mod logging;
pub mod options;
pub mod pagination;
pub mod render;
pub mod script;
pub mod theme;
