//! Command interface over the core: one synchronous call per user event,
//! replacing any event-loop coupling. The session owns the canvas and the
//! current template and tracks the build lifecycle.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::canvas::Canvas;
use crate::error::LoomError;
use crate::layout::{compute_layout, SizePreset};
use crate::template::Template;

/// Build lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// No template computed yet.
    Uninitialized,
    /// A template has been computed but not drawn.
    LaidOut,
    /// The template is drawn on the canvas.
    Rendered,
}

/// A loom-template editing session.
#[derive(Debug, Clone)]
pub struct LoomSession {
    canvas: Canvas,
    template: Option<Template>,
    state: SessionState,
    /// Label content persists across rebuilds; geometry does not generate
    /// text, it only positions it.
    label_contents: BTreeMap<String, String>,
}

impl Default for LoomSession {
    fn default() -> Self {
        Self::new()
    }
}

impl LoomSession {
    pub fn new() -> Self {
        Self {
            canvas: Canvas::new(),
            template: None,
            state: SessionState::Uninitialized,
            label_contents: BTreeMap::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn template(&self) -> Option<&Template> {
        self.template.as_ref()
    }

    /// Rebuild for a named size preset.
    pub fn select_size(&mut self, preset: SizePreset) -> Result<(), LoomError> {
        info!(?preset, "size preset selected");
        self.rebuild(preset.tooth_count())
    }

    /// Rebuild for an explicit tooth count.
    pub fn set_tooth_count(&mut self, tooth_count: i32) -> Result<(), LoomError> {
        self.rebuild(tooth_count)
    }

    /// Update one label's content in place. Touches only the matching text
    /// node; no geometry is recomputed.
    pub fn edit_label(&mut self, id: &str, content: &str) -> Result<(), LoomError> {
        let template = self
            .template
            .as_mut()
            .ok_or_else(|| LoomError::UnknownLabel { id: id.to_string() })?;
        let label = template
            .label_mut(id)
            .ok_or_else(|| LoomError::UnknownLabel { id: id.to_string() })?;
        label.content = content.to_string();
        self.canvas.set_label_text(id, content)?;
        self.label_contents
            .insert(id.to_string(), content.to_string());
        Ok(())
    }

    /// Serialize the current drawing for download.
    pub fn request_export(&self) -> anyhow::Result<Vec<u8>> {
        crate::export::export_document(&self.canvas)
    }

    /// Full clear-and-rebuild: compute the layout, restore label contents,
    /// and redraw everything.
    fn rebuild(&mut self, tooth_count: i32) -> Result<(), LoomError> {
        let mut template = compute_layout(tooth_count)?;
        self.state = SessionState::LaidOut;

        for label in &mut template.labels {
            if let Some(content) = self.label_contents.get(&label.id) {
                label.content = content.clone();
            }
        }

        self.canvas.render_template(&template)?;
        self.template = Some(template);
        self.state = SessionState::Rendered;
        Ok(())
    }
}
