//! Repository traits (ports)

pub mod property_repository;
pub mod proximity;
pub mod user_repository;

pub use property_repository::PropertyRepository;
pub use proximity::ProximitySearch;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use property_repository::MockPropertyRepository;
#[cfg(test)]
pub use proximity::MockProximitySearch;
#[cfg(test)]
pub use user_repository::MockUserRepository;
