use std::collections::HashMap;

use course_assignment_config::{Config, UiConfig};
use http::Method;
use serde::Serialize;
use tracing::{debug, warn};

use crate::element_id::{extract_numeric_id, selector, DropTarget};
use crate::error::FormError;
use crate::page::{Page, Swap};

/// Data carried from drag start to drop.
#[derive(Debug, Clone, Default)]
pub struct DataTransfer {
    data: HashMap<String, String>,
}

impl DataTransfer {
    pub fn set_data(&mut self, key: &str, value: impl Into<String>) {
        self.data.insert(key.to_owned(), value.into());
    }

    /// Missing keys read as the empty string.
    #[must_use]
    pub fn get_data(&self, key: &str) -> &str {
        self.data.get(key).map_or("", String::as_str)
    }
}

#[derive(Debug, Clone, Default)]
pub struct DragEvent {
    pub target: String,
    /// Id of the element the handler is attached to.
    pub current_target: String,
    pub data_transfer: DataTransfer,
    default_prevented: bool,
}

impl DragEvent {
    #[must_use]
    pub fn new(target: impl Into<String>) -> Self {
        let target = target.into();
        Self {
            current_target: target.clone(),
            target,
            ..Self::default()
        }
    }

    /// Event for a handler attached to `current_target` that was dispatched
    /// to a descendant `target`.
    #[must_use]
    pub fn bubbled(target: impl Into<String>, current_target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            current_target: current_target.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_data_transfer(mut self, data_transfer: DataTransfer) -> Self {
        self.data_transfer = data_transfer;
        self
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    #[must_use]
    pub const fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Form values of an assignment change. Without a course id the participant
/// becomes unassigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignmentPayload {
    #[serde(rename = "participant-id", skip_serializing_if = "Option::is_none")]
    pub participant_id: Option<String>,
    #[serde(rename = "course-id", skip_serializing_if = "Option::is_none")]
    pub course_id: Option<String>,
}

impl AssignmentPayload {
    pub fn encode(&self) -> Result<String, FormError> {
        Ok(serde_urlencoded::to_string(self)?)
    }
}

/// A request whose response replaces the markup of `target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AjaxRequest {
    pub method: Method,
    pub path: String,
    /// `#<id>` of the region the response is swapped into.
    pub target: String,
    pub swap: Swap,
    pub values: AssignmentPayload,
}

#[derive(Debug, Clone)]
pub struct DragAssign {
    drag_data_key: String,
    drop_ready_class: String,
    unassigned_id: String,
    assignments_path: String,
}

impl DragAssign {
    #[must_use]
    pub fn new(ui: &UiConfig, assignments_path: impl Into<String>) -> Self {
        Self {
            drag_data_key: ui.drag_data_key.clone(),
            drop_ready_class: ui.drop_ready_class.clone(),
            unassigned_id: ui.unassigned_id.clone(),
            assignments_path: assignments_path.into(),
        }
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.ui, config.assignments_path.clone())
    }

    pub fn drag_start(&self, event: &mut DragEvent) {
        debug!(participant = %event.target, "drag start");
        let id = event.target.clone();
        event.data_transfer.set_data(&self.drag_data_key, id);
    }

    pub fn allow_drop(&self, page: &mut Page, event: &mut DragEvent) {
        event.prevent_default();
        page.add_class(&event.target, &self.drop_ready_class);
    }

    pub fn drag_leave(&self, page: &mut Page, event: &mut DragEvent) {
        event.prevent_default();
        page.remove_class(&event.target, &self.drop_ready_class);
    }

    pub fn drop(&self, page: &mut Page, event: &mut DragEvent) -> AjaxRequest {
        event.prevent_default();

        page.remove_class(&event.current_target, &self.drop_ready_class);
        page.remove_class(&event.target, &self.drop_ready_class);

        let participant_element_id = event.data_transfer.get_data(&self.drag_data_key);
        let participant_id = extract_numeric_id(participant_element_id);
        if participant_id.is_none() {
            warn!(
                participant = participant_element_id,
                "dragged element id has no numeric part"
            );
        }

        let target = DropTarget::classify(&event.target, &self.unassigned_id);
        if let DropTarget::Other(id) = target {
            warn!(drop_target = id, "drop target id has no numeric part");
        }

        let values = AssignmentPayload {
            participant_id: participant_id.map(str::to_owned),
            course_id: target.course_id().map(str::to_owned),
        };
        debug!(?values, "drop");

        AjaxRequest {
            method: Method::PUT,
            path: self.assignments_path.clone(),
            target: selector(participant_element_id),
            swap: Swap::InnerHtml,
            values,
        }
    }
}
