use docket_render_core::RenderError;
use image::DynamicImage;
use lopdf::{dictionary, Object, Stream};
use std::path::Path;

/// A decoded raster image waiting to be written as an image XObject.
#[derive(Debug, Clone)]
pub(crate) struct RasterImage {
    pub width: u32,
    pub height: u32,
    rgb: Vec<u8>,
}

impl RasterImage {
    pub fn open(path: &Path) -> Result<Self, RenderError> {
        Ok(Self::from_dynamic(image::open(path)?))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RenderError> {
        Ok(Self::from_dynamic(image::load_from_memory(bytes)?))
    }

    fn from_dynamic(decoded: DynamicImage) -> Self {
        let rgb = decoded.to_rgb8();
        Self {
            width: rgb.width(),
            height: rgb.height(),
            rgb: rgb.into_raw(),
        }
    }

    pub fn to_xobject(&self) -> Object {
        let dict = dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => i64::from(self.width),
            "Height" => i64::from(self.height),
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
        };
        Object::Stream(Stream::new(dict, self.rgb.clone()))
    }
}
