#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

pub mod board;
pub mod config;
pub mod controller;
pub mod coord;
pub mod display;
pub mod double_buffer;
pub mod driver;
pub mod error;
pub mod event;
pub mod force;
pub mod piece;
pub mod remote;
pub mod render;
pub mod surface;
pub mod test_util;
