pub mod quota;
pub mod template;
pub mod user;

pub use quota::{UsageSnapshot, UsageTransition};
pub use template::{Template, TemplateRecord};
pub use user::{Tier, UsageStatus, UserRecord};
