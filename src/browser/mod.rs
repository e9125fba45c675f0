// src/browser/mod.rs
// Directory browsing module

pub mod error;
pub mod listing;
pub mod thumbnail;

pub use error::{BrowseError, BrowseResult};
pub use listing::{
    DirectoryEntry, DirectoryListing, ImageEntry, IMAGE_EXTENSIONS, check_path_allowed,
    is_image_file, list_directory,
};
pub use thumbnail::placeholder_data_uri;
