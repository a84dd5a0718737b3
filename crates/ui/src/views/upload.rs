use dioxus::prelude::*;
use services::{PdfUpload, UploadError};

use crate::context::AppContext;

const UPLOAD_FAILED: &str = "Error uploading textbook. Please try again.";

fn upload_success_message(chapters: u32) -> String {
    format!("Textbook uploaded successfully! {chapters} chapters processed.")
}

/// Open the native picker filtered to PDFs and read the chosen file.
async fn pick_pdf() -> Option<PdfUpload> {
    let handle = rfd::AsyncFileDialog::new()
        .set_title("Select PDF File")
        .add_filter("PDF", &["pdf"])
        .pick_file()
        .await?;
    Some(PdfUpload {
        file_name: handle.file_name(),
        bytes: handle.read().await,
    })
}

#[component]
pub fn UploadView() -> Element {
    let ctx = use_context::<AppContext>();
    let uploads = ctx.uploads();

    let mut file = use_signal(|| None::<PdfUpload>);
    let mut uploading = use_signal(|| false);
    let mut message = use_signal(|| None::<String>);
    let mut error = use_signal(|| None::<&'static str>);

    let on_pick = move |_: MouseEvent| {
        spawn(async move {
            if let Some(picked) = pick_pdf().await {
                message.set(None);
                error.set(None);
                file.set(Some(picked));
            }
        });
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if uploading() {
            return;
        }
        let uploads = uploads.clone();
        let selected = file();
        spawn(async move {
            error.set(None);
            message.set(None);
            uploading.set(true);
            match uploads.upload(selected).await {
                Ok(receipt) => {
                    message.set(Some(upload_success_message(receipt.chapters)));
                    file.set(None);
                }
                Err(UploadError::NoFile) => error.set(Some("Please select a file")),
                Err(_) => error.set(Some(UPLOAD_FAILED)),
            }
            uploading.set(false);
        });
    };

    let file_label = file
        .read()
        .as_ref()
        .map_or_else(|| "No file selected".to_string(), |f| f.file_name.clone());
    let can_submit = !uploading() && file.read().is_some();

    rsx! {
        div { class: "page upload",
            h2 { "Upload Textbook" }
            form { class: "form", onsubmit: on_submit,
                div { class: "form-group",
                    label { "Select PDF File" }
                    div { class: "file-picker",
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            disabled: uploading(),
                            onclick: on_pick,
                            "Choose PDF..."
                        }
                        span { class: "file-name", "{file_label}" }
                    }
                }
                if let Some(err) = error() {
                    p { class: "error", "{err}" }
                }
                if let Some(text) = message() {
                    p { class: "success", "{text}" }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: !can_submit,
                    if uploading() { "Uploading..." } else { "Upload Textbook" }
                }
            }
        }
    }
}
