//! Domain layer - Core business logic and entities

pub mod billing;
pub mod directory;
pub mod error;
pub mod member;
pub mod storage;
pub mod team;
pub mod user;
pub mod validation;

pub use billing::{Plan, Subscription, SubscriptionResolver, SubscriptionStatus};
pub use directory::{
    DirectoryError, DirectoryPage, DirectoryUser, IdentityDirectory, ListUsersRequest,
    PaginationToken, PoolInfo, RawDirectoryPage,
};
pub use error::{AuthorizationError, DomainError, ErrorCode};
pub use member::{Member, MemberRepository, MemberRole, MemberStatus};
pub use storage::{Storage, StorageEntity, StorageKey};
pub use team::{Team, TeamId, TeamRepository};
pub use user::{GlobalRole, User, UserId, UserRepository};
pub use validation::{
    FieldError, FieldRule, ObjectSchema, RawRequest, RequestSchemas, ValidatedRequest,
    ValidationEngine, ViolationCode,
};
