// File: src/event.rs
// Purpose: Discrete UI events processed by the controller

use crate::snapshot::FormSnapshot;
use crate::timer::HideTicket;
use contact_form_validation::FieldId;
use serde::{Deserialize, Serialize};

/// One user or timer event. Each is handled to completion before the next.
///
/// Serialized with an `event` tag so scripted sessions can be written as JSON
/// lines, e.g. `{"event":"blur","field":"email","value":"jo@"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum FormEvent {
    Blur { field: FieldId, value: String },
    Focus { field: FieldId },
    Input { field: FieldId, value: String },
    Submit(FormSnapshot),
    SuccessExpired { ticket: HideTicket },
}
