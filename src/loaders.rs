//! Loaders for assets from resource files
mod assets;
pub use assets::{Asset, Assets};

mod image_loader;
pub use image_loader::ImageLoader;

mod obj_loader;
pub use obj_loader::{ImportError, ObjLoader, UNTEXTURED};
