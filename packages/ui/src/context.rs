//! App-wide values provided once by the platform's root component.

use api::ApiClient;
use dioxus::prelude::*;
use store::ClientConfig;

/// The REST client every view talks through.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

pub fn use_config() -> ClientConfig {
    use_context::<ClientConfig>()
}

/// Provides the configuration and an [`ApiClient`] built from it.
#[component]
pub fn ClientProvider(config: ClientConfig, children: Element) -> Element {
    let base_url = config.api.base_url.clone();
    use_context_provider(|| config);
    use_context_provider(|| ApiClient::new(base_url));

    rsx! {
        {children}
    }
}
