mod command;
mod mailer;
mod template;

pub use command::*;
pub use mailer::*;
pub use template::{ContactHtmlTemplate, ContactPlainTemplate};
