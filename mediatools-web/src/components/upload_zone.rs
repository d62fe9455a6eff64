//! Drag-and-drop / click-to-browse upload widget.
//!
//! All three input paths (zone click, drop, input change) funnel into one
//! selection handler, so nothing bypasses validation. Rejections raise a
//! blocking alert and leave the zone idle; accepted files are previewed
//! and handed to `on_accepted` exactly once per selection.

use mediatools_core::{MediaKind, validate_selection};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Clone, Debug, Default, PartialEq)]
struct Preview {
    active: bool,
    image_src: Option<AttrValue>,
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or_default]
    pub prompt: Option<AttrValue>,
    /// Passed through to the native chooser's `accept` attribute.
    #[prop_or_default]
    pub accept: Option<AttrValue>,
    pub on_accepted: Callback<web_sys::File>,
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // File sizes fit u64.
fn handle_selection(
    file: &web_sys::File,
    preview: &UseStateHandle<Preview>,
    on_accepted: &Callback<web_sys::File>,
) {
    let size = file.size() as u64;
    match validate_selection(&file.name(), &file.type_(), size) {
        Err(err) => crate::dom::alert(&err.to_string()),
        Ok(MediaKind::Image) => {
            // The zone only lights up once the read lands; acceptance is
            // not held back, since the callback gets the raw file.
            start_image_preview(file, preview);
            on_accepted.emit(file.clone());
        }
        Ok(MediaKind::Other) => {
            preview.set(Preview {
                active: true,
                image_src: None,
            });
            on_accepted.emit(file.clone());
        }
    }
}

fn start_image_preview(file: &web_sys::File, preview: &UseStateHandle<Preview>) {
    let Ok(reader) = web_sys::FileReader::new() else {
        return; // Preview is best-effort.
    };
    let preview = preview.clone();
    let reader_for_load = reader.clone();
    let onload = Closure::once(move |_event: web_sys::ProgressEvent| {
        if let Some(src) = reader_for_load.result().ok().and_then(|v| v.as_string()) {
            preview.set(Preview {
                active: true,
                image_src: Some(src.into()),
            });
        }
    });
    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();
    if let Err(err) = reader.read_as_data_url(file) {
        log::warn!(
            "preview read failed: {}",
            crate::dom::js_error_message(&err)
        );
    }
}

#[function_component(UploadZone)]
pub fn upload_zone(p: &Props) -> Html {
    let preview = use_state(Preview::default);
    let dragging = use_state(|| false);
    let input_ref = use_node_ref();

    let browse = {
        let input_ref = input_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };
    let on_drag_over = {
        let dragging = dragging.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            dragging.set(true);
        })
    };
    let on_drag_leave = {
        let dragging = dragging.clone();
        Callback::from(move |_: DragEvent| dragging.set(false))
    };
    let on_drop = {
        let dragging = dragging.clone();
        let preview = preview.clone();
        let on_accepted = p.on_accepted.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            dragging.set(false);
            if let Some(file) = e
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| files.get(0))
            {
                handle_selection(&file, &preview, &on_accepted);
            }
        })
    };
    let on_change = {
        let preview = preview.clone();
        let on_accepted = p.on_accepted.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                && let Some(file) = input.files().and_then(|files| files.get(0))
            {
                handle_selection(&file, &preview, &on_accepted);
            }
        })
    };

    let zone_class = if *dragging {
        classes!("upload-area", "dragover")
    } else {
        classes!("upload-area")
    };
    let preview_class = if preview.active {
        classes!("upload-preview", "active")
    } else {
        classes!("upload-preview")
    };
    let prompt = p
        .prompt
        .clone()
        .unwrap_or_else(|| AttrValue::from("Drag & drop a file here, or click to browse"));

    html! {
        <>
            <div
                class={zone_class}
                onclick={browse}
                ondragover={on_drag_over}
                ondragleave={on_drag_leave}
                ondrop={on_drop}
                role="button"
                aria-label="Upload a file"
            >
                <p class="upload-prompt">{ prompt }</p>
            </div>
            <input
                ref={input_ref}
                class="upload-input"
                type="file"
                accept={p.accept.clone()}
                hidden={true}
                onchange={on_change}
            />
            <div class={preview_class} aria-live="polite">
                { match &preview.image_src {
                    Some(src) => html! { <img class="preview-image" src={src.clone()} alt="Selected file preview" /> },
                    None if preview.active => html! { <p class="preview-note">{ "File selected" }</p> },
                    None => Html::default(),
                } }
            </div>
        </>
    }
}
