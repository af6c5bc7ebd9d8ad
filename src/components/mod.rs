//! Page sections for Artfolio.

mod contact_details;
mod contact_form;
mod hero;
mod lightbox;
mod newsletter_form;
mod portfolio_gallery;
mod site_header;
mod success_dialog;

pub use contact_details::ContactDetails;
pub use contact_form::ContactFormPanel;
pub use hero::Hero;
pub use lightbox::Lightbox;
pub use newsletter_form::NewsletterSignup;
pub use portfolio_gallery::{gallery_pieces, PortfolioGallery};
pub use site_header::SiteHeader;
pub use success_dialog::SuccessDialog;
