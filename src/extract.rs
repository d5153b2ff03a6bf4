use image::{imageops, RgbaImage};
use indexmap::IndexMap;

use crate::{
    error::{Error, Result},
    manifest::SpriteRegion,
};

/// Crops every region out of the sheet, in record order. Records sharing a
/// name overwrite the stored image but keep the map position of the name's
/// first occurrence, so downstream strip composition sees manifest order.
pub fn extract_regions(
    sheet: &RgbaImage,
    regions: &[SpriteRegion],
) -> Result<IndexMap<String, RgbaImage>> {
    let mut images = IndexMap::new();
    for region in regions {
        check_bounds(sheet, region)?;
        let sub = imageops::crop_imm(sheet, region.x, region.y, region.w, region.h).to_image();
        images.insert(region.name.clone(), sub);
    }
    Ok(images)
}

fn check_bounds(sheet: &RgbaImage, region: &SpriteRegion) -> Result<()> {
    let right = region.x.checked_add(region.w);
    let bottom = region.y.checked_add(region.h);
    if right.map_or(true, |r| r > sheet.width()) || bottom.map_or(true, |b| b > sheet.height()) {
        return Err(Error::OutOfBounds {
            name: region.name.clone(),
            x: region.x,
            y: region.y,
            w: region.w,
            h: region.h,
            sheet_w: sheet.width(),
            sheet_h: sheet.height(),
        });
    }
    Ok(())
}
