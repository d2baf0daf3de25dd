use dioxus::prelude::*;

use crate::Icon;
use crate::icons::{FaCircleCheck, FaCircleExclamation, FaXmark};

#[derive(Clone, Debug, PartialEq)]
pub enum FlashLevel {
    Success,
    Error,
}

/// A one-off message shown above the page content, e.g. after a redirect.
#[derive(Clone, Debug, PartialEq)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Error,
            message: message.into(),
        }
    }
}

pub fn use_flash() -> Signal<Option<Flash>> {
    use_context::<Signal<Option<Flash>>>()
}

pub fn show_flash(flash: &mut Signal<Option<Flash>>, message: Flash) {
    match message.level {
        FlashLevel::Error => tracing::error!("{}", message.message),
        FlashLevel::Success => tracing::info!("{}", message.message),
    }
    flash.set(Some(message));
}

#[component]
pub fn FlashProvider(children: Element) -> Element {
    use_context_provider(|| Signal::new(None::<Flash>));

    rsx! {
        {children}
    }
}

/// Renders the pending flash message, if any, with a dismiss button.
#[component]
pub fn FlashBanner() -> Element {
    let mut flash = use_flash();
    let Some(current) = flash() else {
        return rsx! {};
    };

    let (class, icon) = match current.level {
        FlashLevel::Success => ("flash flash-success", rsx! { Icon { icon: FaCircleCheck, width: 14, height: 14 } }),
        FlashLevel::Error => ("flash flash-error", rsx! { Icon { icon: FaCircleExclamation, width: 14, height: 14 } }),
    };

    rsx! {
        div {
            class: "{class}",
            role: "status",
            {icon}
            span { class: "flash-message", "{current.message}" }
            button {
                class: "flash-close",
                title: "Dismiss",
                onclick: move |_| flash.set(None),
                Icon { icon: FaXmark, width: 12, height: 12 }
            }
        }
    }
}
