//! Image decoding for the transform engine.
//!
//! The engine receives raw file bytes from the upload layer and works on
//! plain RGB8 buffers from there on. Decoding is synchronous and
//! single-pass: a file either decodes fully or fails with a single error.
//!
//! # Examples
//!
//! ```ignore
//! use pixelpress_core::decode::decode_image;
//!
//! let bytes = std::fs::read("photo.jpg").unwrap();
//! let image = decode_image(&bytes).unwrap();
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod reader;
mod types;

pub use reader::decode_image;
pub use types::{DecodeError, DecodedImage, FilterType};
