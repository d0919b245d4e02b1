//! Course catalog: model, loading and page parsing

pub mod loader;
pub mod model;
pub mod page;

pub use loader::{CatalogError, bundled_catalog, load_catalog};
pub use model::{Catalog, Course, Difficulty, Lesson, Quiz};
pub use page::{PageBlock, parse_page};
