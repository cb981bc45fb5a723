//! XML/HTML processing utilities.

pub mod common;
pub mod image;

pub use image::first_img_src;
