use outpost_core::DraftField;

#[derive(Debug, Clone)]
pub enum ContactCommand {
    UpdateField(DraftField, String),
    Submit,
    // View teardown
    Cancel,
}
