pub mod manager;
pub(crate) mod projection;

pub use manager::CollisionManager;
