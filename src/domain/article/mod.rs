pub mod entity;
pub mod image;
pub mod repository;
pub mod specifications;
pub mod value_objects;

pub use entity::Article;
pub use image::{resolve_image_url, ImageVariant, PLACEHOLDER_IMAGE};
pub use repository::ArticleCatalog;
pub use specifications::ArticleSearchSpec;
pub use value_objects::{ArticleId, ArticleTitle, Category, ReadTime};
