pub mod error;
pub mod repository_chip;

pub use repository_chip::RepositoryChip;
