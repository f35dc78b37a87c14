//! # paged-survey-html
//!
//! HTML rendering for paged-survey. Generates fillable section forms.
//!
//! [`HtmlForm`] implements the `FormRenderer` trait from `paged-survey`:
//! a section form becomes a `<form method="post">` whose field names follow
//! the identifier scheme the navigator reads back, so the markup round-trips
//! through an ordinary POST without any glue. A completed survey renders as
//! a read-only answer listing.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use paged_survey::{Posture, render_survey};
//! use paged_survey_html::{HtmlForm, HtmlOptions};
//!
//! let renderer = HtmlForm::with_options(
//!     HtmlOptions::new()
//!         .with_action("/intake")
//!         .with_class_prefix("intake"),
//! );
//!
//! let view = navigator.handle(&submission, &paged_survey::validate::accept)?;
//! let page = render_survey(&renderer, &view, Posture::detect());
//! ```

mod generator;
pub use generator::{HtmlForm, HtmlOptions, to_html, to_html_with_options};
