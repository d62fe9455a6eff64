use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::progress_bar::ProgressBar;
use crate::components::upload_zone::UploadZone;
use crate::progress::ProgressDriver;

/// Strip the extension from a filename, keeping names without one intact.
fn file_stem(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => name,
    }
}

/// The converter tool page: pick a file, choose an output format, run the
/// (simulated) conversion, then download the result. The progress driver
/// stands in for real transcoding; swapping it for genuine work only
/// changes the completion callback.
#[function_component(Convert)]
pub fn convert() -> Html {
    let selected: UseStateHandle<Option<web_sys::File>> = use_state(|| None);
    let percent = use_state(|| 0_u8);
    let running = use_state(|| false);
    let format = use_state(|| AttrValue::from("png"));
    let driver: Rc<RefCell<ProgressDriver>> = use_mut_ref(ProgressDriver::new);

    let on_accepted = {
        let selected = selected.clone();
        let percent = percent.clone();
        Callback::from(move |file: web_sys::File| {
            percent.set(0);
            selected.set(Some(file));
        })
    };
    let on_format_change = {
        let format = format.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                format.set(select.value().into());
            }
        })
    };
    let on_process = {
        let selected = selected.clone();
        let percent = percent.clone();
        let running = running.clone();
        let format = format.clone();
        let driver = driver.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(file) = (*selected).clone() else {
                return;
            };
            running.set(true);
            percent.set(0);
            let on_tick = {
                let percent = percent.clone();
                Callback::from(move |value: u8| percent.set(value))
            };
            let on_complete = {
                let running = running.clone();
                let format = (*format).clone();
                Callback::from(move |()| {
                    running.set(false);
                    let filename = format!("{}.{format}", file_stem(&file.name()));
                    if let Err(err) = crate::download::save_blob(&file, &filename) {
                        log::error!(
                            "download failed: {}",
                            crate::dom::js_error_message(&err)
                        );
                    }
                })
            };
            driver.borrow_mut().start(on_tick, on_complete);
        })
    };

    html! {
        <div class="tool-page">
            <h1>{ "File Converter" }</h1>
            <UploadZone accept="image/*,video/*,audio/*" on_accepted={on_accepted} />
            <div class="tool-options">
                <label for="output-format">{ "Output format" }</label>
                <select id="output-format" value={(*format).clone()} onchange={on_format_change}>
                    <option value="png">{ "PNG" }</option>
                    <option value="jpg">{ "JPG" }</option>
                    <option value="webp">{ "WebP" }</option>
                    <option value="mp4">{ "MP4" }</option>
                    <option value="mp3">{ "MP3" }</option>
                    <option value="wav">{ "WAV" }</option>
                </select>
            </div>
            <button
                class="btn-process"
                onclick={on_process}
                disabled={*running || selected.is_none()}
            >
                { if *running { "Processing..." } else { "Convert" } }
            </button>
            <ProgressBar percent={*percent} active={*running} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_stem_strips_only_the_last_extension() {
        assert_eq!(file_stem("photo.jpeg"), "photo");
        assert_eq!(file_stem("archive.tar.gz"), "archive.tar");
        assert_eq!(file_stem("noext"), "noext");
        assert_eq!(file_stem(".hidden"), ".hidden");
    }
}
