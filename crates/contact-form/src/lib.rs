//! # contact-form
//!
//! Client-side behavior for a marketing page contact form.
//!
//! The [`FormController`] receives discrete [`FormEvent`]s (blur, focus, input,
//! submit, timer expiry), validates with `contact-form-validation`, keeps the
//! per-field [`FieldErrorState`], and drives the page through the [`FormView`]
//! trait. Nothing is sent over the network; an accepted submission is logged
//! and echoed in the success panel.
//!
//! ```rust,ignore
//! use contact_form::{Config, FormController, FormEvent, FormSnapshot};
//!
//! let mut form = FormController::new(my_view, &Config::default());
//! form.dispatch(FormEvent::Submit(FormSnapshot::new("Jo", "jo@example.com", "1234567890", "Hello there!")));
//! ```
//!
//! Hosts: `contact-form-wasm` wires the controller to the DOM, `contact-form-cli`
//! replays scripted events in a terminal.

pub mod config;
pub mod controller;
pub mod event;
pub mod greeting;
pub mod phone;
pub mod snapshot;
pub mod state;
pub mod timer;
pub mod view;

pub use config::Config;
pub use controller::{FormController, SubmissionOutcome};
pub use event::FormEvent;
pub use greeting::{Greeter, GreetingError, GreetingState, MemoryNameStore, NameStore};
pub use phone::format_phone;
pub use snapshot::FormSnapshot;
pub use state::FieldErrorState;
pub use timer::{HideTicket, TimerQueue};
pub use view::FormView;

// Re-export the validation engine so hosts need a single dependency
pub use contact_form_validation as validation;
pub use contact_form_validation::{FieldId, ValidationError, ValidationResult};
