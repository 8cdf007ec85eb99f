//! Backend context for the UI.

use api::HttpBackend;
use dioxus::prelude::*;

/// Get the backend provided by [`BackendProvider`].
pub fn use_backend() -> HttpBackend {
    use_context::<HttpBackend>()
}

/// Provider component that resolves `API_BASE_URL` once and shares the
/// resulting [`HttpBackend`] with every descendant.
#[component]
pub fn BackendProvider(children: Element) -> Element {
    use_context_provider(|| {
        let backend = HttpBackend::from_env();
        tracing::info!("Using API at {}", backend.config().base_url());
        backend
    });

    rsx! {
        {children}
    }
}
