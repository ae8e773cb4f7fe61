mod carousel;
mod page;

pub use carousel::ImageCarousel;
pub use page::ProjectDetailsPage;
