pub use super::domain::Entity as Domain;
pub use super::domain_group::Entity as DomainGroup;
pub use super::server::Entity as Server;
pub use super::server_role::Entity as ServerRole;
pub use super::server_user::Entity as ServerUser;
pub use super::used_domain::Entity as UsedDomain;
