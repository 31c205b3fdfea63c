//! Repository traits (ports)

pub mod user_repository;
pub mod task_repository;
pub mod catalog_repository;

pub use user_repository::UserRepository;
pub use task_repository::TaskRepository;
pub use catalog_repository::CatalogRepository;

#[cfg(test)]
pub use user_repository::MockUserRepository;
#[cfg(test)]
pub use task_repository::MockTaskRepository;
#[cfg(test)]
pub use catalog_repository::MockCatalogRepository;
