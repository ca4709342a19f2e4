//! Document viewer desktop app: renders one text document handed over in launch params.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod blocks;

use desktop_app_contract::AppMountContext;
use leptos::*;
use serde_json::Value;

pub use blocks::{parse_blocks, Block};

/// Window type identifier the document viewer is registered under.
pub const APP_ID: &str = "system.document-viewer";

/// Reads the document text from launch params (`{ "content": "..." }` or a bare string).
pub fn document_content(launch_params: &Value) -> Option<&str> {
    launch_params
        .get("content")
        .and_then(Value::as_str)
        .or_else(|| launch_params.as_str())
}

fn render_block(block: Block) -> View {
    match block {
        Block::Heading { level: 1, text } => view! { <h1>{text}</h1> }.into_view(),
        Block::Heading { level: 2, text } => view! { <h2>{text}</h2> }.into_view(),
        Block::Heading { text, .. } => view! { <h3>{text}</h3> }.into_view(),
        Block::List(items) => view! {
            <ul>{items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}</ul>
        }
        .into_view(),
        Block::Rule => view! { <hr/> }.into_view(),
        Block::Paragraph(text) => view! { <p>{text}</p> }.into_view(),
    }
}

#[component]
/// Document viewer window contents.
pub fn DocumentViewerApp(
    /// Document text, rendered without validation.
    content: Option<String>,
) -> impl IntoView {
    let body = match content {
        Some(content) => parse_blocks(&content)
            .into_iter()
            .map(render_block)
            .collect_view(),
        None => view! { <p class="document-empty">"Nothing to display."</p> }.into_view(),
    };

    view! {
        <article class="app-shell document-viewer" tabindex="0">
            {body}
        </article>
    }
}

/// Mounts the document viewer into a window body.
pub fn mount(context: AppMountContext) -> View {
    let content = document_content(&context.launch_params).map(str::to_string);
    view! { <DocumentViewerApp content=content /> }.into_view()
}
