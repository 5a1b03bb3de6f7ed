// File: src/view.rs
// Purpose: The page surface the controller reads from and writes to

use crate::snapshot::FormSnapshot;
use crate::timer::HideTicket;
use contact_form_validation::FieldId;
use std::time::Duration;

/// Primitive UI operations the controller needs from its host.
///
/// Implemented by the DOM adapter in the browser and by terminal or recording
/// views natively. Every target element is assumed to exist; hosts check that
/// once when they are constructed.
pub trait FormView {
    /// Mark the field as errored and show `message` in its error slot
    fn show_error(&mut self, field: FieldId, message: &str);

    /// Remove the error marker and empty the error slot
    fn clear_error(&mut self, field: FieldId);

    /// Echo the submitted values and make the success panel visible
    fn show_success(&mut self, submission: &FormSnapshot);

    fn hide_success(&mut self);

    /// Reset every input of the form to its initial value
    fn reset_form(&mut self);

    /// Scroll the field into view and give it input focus
    fn focus_field(&mut self, field: FieldId);

    /// Arrange for `FormEvent::SuccessExpired { ticket }` to be dispatched after `after`
    fn schedule_success_hide(&mut self, after: Duration, ticket: HideTicket);

    /// Replace the current value of an input
    fn set_value(&mut self, _field: FieldId, _value: &str) {}

    /// Announce a message to assistive technology
    fn announce(&mut self, _message: &str) {}
}
