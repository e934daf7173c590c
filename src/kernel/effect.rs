//! Outward commands the host must execute after a dispatch.

use crate::kernel::navigate::CursorTarget;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Move the editor surface's cursor and select the match text.
    PlaceCursor(CursorTarget),
}
