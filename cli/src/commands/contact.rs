//! # Contact Form Command
//!
//! File: cli/src/commands/contact.rs
//!
//! ## Overview
//!
//! `oraco contact` fills in the site's contact form from flags and submits
//! it through the same sequence the web form uses. The outcome is printed as
//! the notification the visitor would see, followed by any field errors.
//! Any outcome other than delivery exits with status 1.
//!
//! ```bash
//! oraco contact --first-name Jane --last-name Doe \
//!     --email jane@company.com --service verification \
//!     --message "We need certificate verification for 2,000 graduates."
//! ```
//!
use crate::contact::{
    submit, ContactForm, FormField, Mailer, Notification, NotificationKind, ServiceInterest,
};
use crate::core::config::SiteConfig;
use crate::core::error::{Result, SiteError};
use clap::Parser;
use tracing::info;

/// Arguments for `oraco contact`. Every text field defaults to empty so
/// that missing values are reported by the validator, not by the parser.
#[derive(Parser, Debug, Default, Clone)]
pub struct ContactArgs {
    #[arg(long, default_value = "")]
    pub first_name: String,

    #[arg(long, default_value = "")]
    pub last_name: String,

    #[arg(long, default_value = "")]
    pub email: String,

    /// Service the enquiry is about.
    #[arg(long = "service", value_enum, default_value_t = ServiceInterest::default())]
    pub service_interest: ServiceInterest,

    #[arg(long, short, default_value = "")]
    pub message: String,
}

impl ContactArgs {
    /// Fills a fresh form the way typing into it would.
    fn into_form(self) -> ContactForm {
        let mut form = ContactForm::default();
        form.set_field(FormField::FirstName, self.first_name);
        form.set_field(FormField::LastName, self.last_name);
        form.set_field(FormField::Email, self.email);
        form.set_service_interest(self.service_interest);
        form.set_field(FormField::Message, self.message);
        form
    }
}

/// # Handle Contact Command (`handle_contact`)
///
/// ## Errors
///
/// Returns `SiteError::Submission` carrying the notification text when the
/// message was not delivered.
pub async fn handle_contact(args: ContactArgs, site: &SiteConfig) -> Result<()> {
    let mailer = Mailer::from_config(&site.email);
    let mut form = args.into_form();
    info!("Submitting contact form for {}", form.input.sender_name());

    let outcome = submit(&mut form, &mailer).await;
    let notification = Notification::show(&outcome);

    match notification.kind() {
        NotificationKind::Success => {
            println!("{}", notification);
            Ok(())
        }
        NotificationKind::Error => {
            eprintln!("{}", notification);
            for (field, message) in form.errors.iter() {
                eprintln!("  {}: {}", field, message);
            }
            Err(SiteError::Submission(notification.message().to_string()).into())
        }
    }
}
