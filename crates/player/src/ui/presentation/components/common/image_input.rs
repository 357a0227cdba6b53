//! Hidden file input that turns a picked image into a data URL.

use dioxus::prelude::*;

use crate::infrastructure::file_reader::read_as_data_url;

#[derive(Props, Clone, PartialEq)]
pub struct ImageInputProps {
    /// Element id; open the picker with `dom::click_element(id)`.
    pub id: String,
    pub on_pick: EventHandler<String>,
}

#[component]
pub fn ImageInput(props: ImageInputProps) -> Element {
    let on_pick = props.on_pick;

    rsx! {
        input {
            id: "{props.id}",
            r#type: "file",
            accept: "image/*",
            class: "hidden",
            onchange: move |evt: FormEvent| async move {
                let Some(file) = evt.files().into_iter().next() else {
                    return;
                };
                let name = file.name();
                match file.read_bytes().await {
                    Ok(bytes) => {
                        tracing::debug!(file = %name, size = bytes.len(), "Image picked");
                        on_pick.call(read_as_data_url(&name, &bytes));
                    }
                    Err(e) => tracing::warn!(file = %name, error = ?e, "Could not read picked image"),
                }
            },
        }
    }
}
