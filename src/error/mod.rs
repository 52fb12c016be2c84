pub mod ok_or_page;
pub mod page_error;

pub use ok_or_page::OkOrPage;
pub use page_error::PageError;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;
