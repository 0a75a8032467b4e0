//! Workflows - the client's state machines.
//!
//! Each workflow orchestrates ports and domain types; none of them knows
//! about HTTP or the terminal.

mod generation;
mod picker;
mod preference_store;
mod publish;

#[cfg(test)]
pub(crate) mod test_support;

pub use generation::{
    GENERATING_MESSAGE, GenerationError, GenerationWorkflow, README_FILE_NAME, ResultActionError,
};
pub use picker::{
    LIST_FAILED_MESSAGE, PICKER_UNAVAILABLE_MESSAGE, PickerError, PickerState, RepositoryList,
    RepositoryPicker,
};
pub use preference_store::PreferenceStore;
pub use publish::{
    PUBLISHED_MESSAGE, PUBLISHING_MESSAGE, PublishControls, PublishDialog, PublishError,
    PublishOutcome, PublishWorkflow,
};
