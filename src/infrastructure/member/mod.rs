//! Member infrastructure implementations

mod repository;

pub use repository::StorageMemberRepository;
