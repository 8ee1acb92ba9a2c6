//! Confirmation dialog component renderer.

use crate::ui::viewmodel::ConfirmationView;

/// Renders a pending confirmation as a modal dialog with confirm and cancel
/// buttons.
pub fn render_confirmation(confirmation: &ConfirmationView) -> String {
    format!(
        "<div class=\"modal open\" role=\"alertdialog\" aria-modal=\"true\">\
         <div class=\"modal-card confirm\"><p>{prompt}</p>\
         <div class=\"actions\">\
         <button class=\"btn\" data-action=\"confirm\">OK</button>\
         <button class=\"btn\" data-action=\"cancel\">Cancel</button>\
         </div></div></div>",
        prompt = confirmation.prompt
    )
}
