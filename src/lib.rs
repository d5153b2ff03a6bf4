//! Sprite-sheet extraction pipeline: read a coordinate manifest, crop the
//! named regions out of one sheet image, optionally flat-tint the crops, and
//! write the results as individual PNGs or one vertical strip texture.
//!
//! The stages are independent and run in order:
//!
//! ```no_run
//! use spritecut::{extract, manifest, recolor, save};
//! use std::path::Path;
//!
//! # fn main() -> spritecut::error::Result<()> {
//! let sheet = image::open("input/particles_atlas.png")?.into_rgba8();
//! let filter = manifest::NameFilter::parse(r"minecraft:glitter_[0-9]+")?;
//! let regions = manifest::read_regions(Path::new("input/particles_atlas.txt"), &filter, false)?;
//!
//! let mut images = extract::extract_regions(&sheet, &regions)?;
//! recolor::recolor_images(images.values_mut(), recolor::Tint::rgb(106, 210, 178));
//!
//! save::save_images(&images, Path::new("output"), &save::FileNaming::Slug)?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod extract;
pub mod manifest;
pub mod recolor;
pub mod save;
pub mod slug;
