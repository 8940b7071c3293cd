use crate::loaders::Asset;

/// Image size in pixels
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct Extent2D {
    pub width: u32,
    pub height: u32,
}

/// Image in RGBA8 format
pub struct Image {
    /// Image name
    name: String,
    /// Image resolution
    resolution: Extent2D,
    /// Raw image data
    data: Vec<u8>,
}

impl Image {
    /// Constructs a new instance of Image
    pub fn new(name: String, resolution: Extent2D, data: Vec<u8>) -> Self {
        Self {
            name,
            resolution,
            data,
        }
    }

    /// Constructs a 1x1 white image
    pub fn placeholder(name: impl Into<String>) -> Self {
        Self::new(
            name.into(),
            Extent2D {
                width: 1,
                height: 1,
            },
            vec![0xFF; 4],
        )
    }

    /// Renames the image
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Returns image resolution
    pub fn resolution(&self) -> &Extent2D {
        &self.resolution
    }

    /// Returns image bytes
    pub fn data(&self) -> &[u8] {
        self.data.as_slice()
    }
}

impl std::fmt::Debug for Image {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Image")
            .field("name", &self.name)
            .field("resolution", &self.resolution)
            .finish()
    }
}

impl Asset for Image {
    fn name(&self) -> &str {
        self.name.as_str()
    }
}
