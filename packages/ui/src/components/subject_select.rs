use api::Subject;
use dioxus::prelude::*;

/// Dropdown over the fixed subject list.
///
/// With `allow_any`, an extra empty option meaning "no filter" comes first.
#[component]
pub fn SubjectSelect(
    value: String,
    onchange: EventHandler<String>,
    #[props(default)] allow_any: bool,
    #[props(default = "All subjects".to_string())] any_label: String,
) -> Element {
    rsx! {
        select {
            class: "input",
            value: "{value}",
            onchange: move |evt: FormEvent| onchange.call(evt.value()),
            if allow_any {
                option { value: "", selected: value.is_empty(), "{any_label}" }
            }
            for subject in Subject::ALL {
                option {
                    key: "{subject.label()}",
                    value: subject.label(),
                    selected: value == subject.label(),
                    "{subject}"
                }
            }
        }
    }
}
