pub mod health;
pub mod register;
pub mod subscription;
pub mod templates;
pub mod usage;
pub mod validation;
pub mod workspace;

pub use health::health_check;
pub use register::register_user;
pub use subscription::change_subscription;
pub use templates::{
    delete_template, edit_template, get_template, get_template_by_token, list_templates,
    save_template,
};
pub use usage::get_usage;
pub use workspace::grant_membership;
