use std::{fs, path::Path};

use image::{imageops, RgbaImage};
use indexmap::IndexMap;

use crate::{
    error::{Error, Result},
    slug,
};

/// How individual output files are named.
#[derive(Debug, Clone)]
pub enum FileNaming {
    /// Slugified record name. Two names that slugify identically are not
    /// deduplicated; the later one overwrites the earlier file.
    Slug,
    /// `{prefix}{index}`, with the zero-based index taken from the map's
    /// iteration order.
    Indexed { prefix: String },
}

/// Writes every image as `{out_dir}/{name}.png`, creating the directory if
/// needed, and returns the number of images written.
pub fn save_images(
    images: &IndexMap<String, RgbaImage>,
    out_dir: &Path,
    naming: &FileNaming,
) -> Result<usize> {
    fs::create_dir_all(out_dir).map_err(|source| Error::io(out_dir, source))?;

    for (index, (name, image)) in images.iter().enumerate() {
        let file_name = match naming {
            FileNaming::Slug => format!("{}.png", slug::slugify(name)),
            FileNaming::Indexed { prefix } => format!("{prefix}{index}.png"),
        };
        let path = out_dir.join(file_name);
        image.save(&path)?;
        log::trace!("wrote {}", path.display());
    }

    log::debug!("saved {} image(s) to {}", images.len(), out_dir.display());
    Ok(images.len())
}

/// Stitches the images into one vertical strip at `path`. The first image
/// sets the frame size: the canvas is `frame_w` wide and `frame_h * count`
/// tall, and image `i` is pasted at `(0, i * frame_h)`. Frame sizes are not
/// validated; an undersized image leaves a transparent gap and an oversized
/// one is clipped at the canvas edge by the paste.
pub fn compose_strip(images: &[RgbaImage], path: &Path) -> Result<()> {
    let first = images.first().ok_or(Error::EmptyStrip)?;
    let (frame_w, frame_h) = first.dimensions();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| Error::io(parent, source))?;
    }

    let mut strip = RgbaImage::new(frame_w, frame_h * images.len() as u32);
    for (index, image) in images.iter().enumerate() {
        imageops::replace(&mut strip, image, 0, i64::from(index as u32 * frame_h));
    }

    strip.save(path)?;
    log::debug!("wrote {}", path.display());
    Ok(())
}
