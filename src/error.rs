use thiserror::Error;

/// Things that can go wrong when taking items out of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Tried to extract or peek at an item, but the container holds none.
    #[error("container is empty")]
    EmptyContainer,
}

pub type Result<T> = std::result::Result<T, Error>;
