pub mod mock;

use contracts::shared::dataset::Dataset;
use leptos::prelude::*;

/// Read-only handle to the resident dataset, shared via context.
#[derive(Clone, Copy)]
pub struct DataContext(pub &'static Dataset);

pub fn provide_dataset() {
    provide_context(DataContext(mock::dataset()));
}

pub fn use_dataset() -> &'static Dataset {
    use_context::<DataContext>()
        .expect("DataContext context not found")
        .0
}
