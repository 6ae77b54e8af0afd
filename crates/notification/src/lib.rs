mod resend;
mod service;
mod smtp;

pub use resend::ResendMailer;
pub use service::*;
pub use smtp::SmtpMailer;
