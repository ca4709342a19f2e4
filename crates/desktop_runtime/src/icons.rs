//! Icon catalog for the desktop shell.
//!
//! Desktop configuration and window manifests name icons with string tokens; [`IconName::from_token`]
//! maps them to the SVG catalog, falling back to a folder glyph for unknown tokens.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Glyphs drawn by the desktop: icon grid entries and titlebar controls.
pub enum IconName {
    /// Terminal window icon.
    Terminal,
    /// Document / resume icon.
    DocumentText,
    /// Source code / projects link icon.
    Code,
    /// Email link icon.
    Mail,
    /// Generic folder, used for unknown tokens.
    Folder,
        WindowMinimize,
        WindowMaximize,
        WindowRestore,
    /// Dismiss/close icon.
    Dismiss,
}

impl IconName {
    /// Resolves a configuration token such as `"terminal"` or `"description"`.
    pub fn from_token(token: &str) -> Self {
        match token {
            "terminal" => Self::Terminal,
            "description" | "document" | "document-text" => Self::DocumentText,
            "code" => Self::Code,
            "mail" | "email" => Self::Mail,
            _ => Self::Folder,
        }
    }

    /// CSS hook suffix.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Terminal => "terminal",
            Self::DocumentText => "document-text",
            Self::Code => "code",
            Self::Mail => "mail",
            Self::Folder => "folder",
            Self::WindowMinimize => "window-minimize",
            Self::WindowMaximize => "window-maximize",
            Self::WindowRestore => "window-restore",
            Self::Dismiss => "dismiss",
        }
    }

    /// Raw SVG body markup for the icon (24px viewBox).
    fn svg_body(self) -> &'static str {
        match self {
            Self::Terminal => {
                r#"<path d="M3 6.25C3 4.45 4.46 3 6.25 3h11.5C19.55 3 21 4.46 21 6.25v5.66a1.4 1.4 0 0 0-.99-.8 5.08 5.08 0 0 0-.51-.08V8.5h-15v9.25c0 .97.78 1.75 1.75 1.75h5.68l-.19.19c-.37.37-.6.83-.7 1.31H6.25A3.25 3.25 0 0 1 3 17.75V6.25Zm13 5.68-1.72-1.71a.75.75 0 1 0-1.06 1.06l1.7 1.7a5.12 5.12 0 0 1 1.07-1.05ZM4.5 7h15v-.75c0-.97-.78-1.75-1.75-1.75H6.25c-.97 0-1.75.78-1.75 1.75V7Zm6.28 4.28a.75.75 0 1 0-1.06-1.06l-3 3c-.3.3-.3.77 0 1.06l3 3a.75.75 0 1 0 1.06-1.06l-2.47-2.47 2.47-2.47Zm9.02.81c.35.08.44.51.18.77l-1.9 1.9a1.53 1.53 0 0 0 2.16 2.16l1.9-1.9c.26-.26.69-.17.77.18a4.07 4.07 0 0 1-5.57 4.62l-2.73 2.73a1.53 1.53 0 0 1-2.16-2.16l2.73-2.73a4.07 4.07 0 0 1 4.62-5.57Z"/>"#
            }
            Self::DocumentText => {
                r#"<path d="M8.75 11.5a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-6.5Zm0 2.75a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-6.5Zm0 2.75a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-6.5Zm4.84-14.41L19.4 8.4A2 2 0 0 1 20 9.83V20a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V4c0-1.1.9-2 2-2h6.17c.52 0 1.05.22 1.42.59ZM18 20.5a.5.5 0 0 0 .5-.5V10H14a2 2 0 0 1-2-2V3.5H6a.5.5 0 0 0-.5.5v16c0 .27.22.5.5.5h12Zm-.62-12L13.5 4.62V8c0 .28.22.5.5.5h3.38Z"/>"#
            }
            Self::Code => {
                r#"<path d="M8.06 6.55a.75.75 0 0 1 .19 1.04L5.3 12l2.95 4.41a.75.75 0 1 1-1.25.84l-3.23-4.83a.75.75 0 0 1 0-.84L7 6.74a.75.75 0 0 1 1.06-.19Zm7.88 0a.75.75 0 0 1 1.06.19l3.23 4.84c.17.25.17.58 0 .84L17 17.25a.75.75 0 1 1-1.25-.84L18.7 12l-2.95-4.41a.75.75 0 0 1 .19-1.04ZM13.9 4.1a.75.75 0 0 1 .5.94l-4.5 14.5a.75.75 0 1 1-1.43-.45l4.5-14.5a.75.75 0 0 1 .93-.49Z"/>"#
            }
            Self::Mail => {
                r#"<path d="M5.25 4A3.25 3.25 0 0 0 2 7.25v9.5C2 18.55 3.46 20 5.25 20h13.5c1.8 0 3.25-1.46 3.25-3.25v-9.5C22 5.45 20.54 4 18.75 4H5.25ZM3.5 7.25c0-.97.78-1.75 1.75-1.75h13.5c.97 0 1.75.78 1.75 1.75v.3L12 12.15 3.5 7.55v-.3Zm0 2.01 8.14 4.4c.22.13.5.13.72 0l8.14-4.4v7.49c0 .97-.78 1.75-1.75 1.75H5.25c-.97 0-1.75-.78-1.75-1.75V9.26Z"/>"#
            }
            Self::Folder => {
                r#"<path d="M3.5 6.25c0-.97.78-1.75 1.75-1.75h2.88c.2 0 .39.08.53.22l2.06 2.06c.14.14.33.22.53.22h5.5c.97 0 1.75.78 1.75 1.75 0 .09.01.17.04.25H8.72c-1.34 0-2.58.71-3.25 1.87L3.5 14.28V6.25ZM2 17.79A3.25 3.25 0 0 0 5.25 21h11.04c1.33 0 2.57-.72 3.24-1.88l3.03-5.25A3.25 3.25 0 0 0 19.96 9a.75.75 0 0 0 .04-.25c0-1.8-1.45-3.25-3.25-3.25h-5.19L9.72 3.66c-.42-.42-1-.66-1.6-.66H5.26A3.25 3.25 0 0 0 2 6.25V17.79Zm6.72-7.3h11.03a1.75 1.75 0 0 1 1.51 2.63l-3.03 5.25c-.4.7-1.14 1.13-1.95 1.13H5.25a1.75 1.75 0 0 1-1.51-2.63l3.03-5.25c.4-.7 1.14-1.12 1.95-1.12Z"/>"#
            }
            Self::WindowMinimize => {
                r#"<path d="M3.75 12.5h16.5a.75.75 0 0 0 0-1.5H3.75a.75.75 0 0 0 0 1.5Z"/>"#
            }
            Self::WindowMaximize => {
                r#"<path d="M3 6.25C3 4.45 4.46 3 6.25 3h11.5C19.55 3 21 4.46 21 6.25v11.5c0 1.8-1.46 3.25-3.25 3.25H6.25A3.25 3.25 0 0 1 3 17.75V6.25ZM6.25 4.5c-.97 0-1.75.78-1.75 1.75v11.5c0 .97.78 1.75 1.75 1.75h11.5c.97 0 1.75-.78 1.75-1.75V6.25c0-.97-.78-1.75-1.75-1.75H6.25Z"/>"#
            }
            Self::WindowRestore => {
                r#"<path d="M7.52 5H6c.13-1.68 1.53-3 3.24-3h8A4.75 4.75 0 0 1 22 6.75v8a3.25 3.25 0 0 1-3 3.24v-1.5c.85-.13 1.5-.86 1.5-1.74v-8c0-1.8-1.46-3.25-3.25-3.25h-8c-.88 0-1.61.65-1.73 1.5ZM5.25 6A3.25 3.25 0 0 0 2 9.25v9.5C2 20.55 3.46 22 5.25 22h9.5c1.8 0 3.25-1.46 3.25-3.25v-9.5C18 7.45 16.55 6 14.75 6h-9.5ZM3.5 9.25c0-.97.78-1.75 1.75-1.75h9.5c.97 0 1.75.78 1.75 1.75v9.5c0 .97-.78 1.75-1.75 1.75h-9.5c-.97 0-1.75-.78-1.75-1.75v-9.5Z"/>"#
            }
            Self::Dismiss => {
                r#"<path d="m4.4 4.55.07-.08a.75.75 0 0 1 .98-.07l.08.07L12 10.94l6.47-6.47a.75.75 0 1 1 1.06 1.06L13.06 12l6.47 6.47c.27.27.3.68.07.98l-.07.08a.75.75 0 0 1-.98.07l-.08-.07L12 13.06l-6.47 6.47a.75.75 0 0 1-1.06-1.06L10.94 12 4.47 5.53a.75.75 0 0 1-.07-.98l.07-.08-.07.08Z"/>"#
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Rendered glyph sizes.
pub enum IconSize {
    /// 14px, window chrome buttons.
    Xs,
    /// 16px, titlebars and the menu bar.
    #[default]
    Sm,
    /// 40px, desktop icon grid.
    Xl,
}

impl IconSize {
        pub const fn px(self) -> u16 {
        match self {
            Self::Xs => 14,
            Self::Sm => 16,
            Self::Xl => 40,
        }
    }

    /// Stable size token used for CSS hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Xl => "xl",
        }
    }
}

#[component]
/// Renders an icon SVG from the shell icon catalog.
pub fn GlyphIcon(
    /// Glyph to draw.
    icon: IconName,
    /// Square size.
    #[prop(default = IconSize::Sm)]
    size: IconSize,
) -> impl IntoView {
    let size_px = size.px().to_string();

    view! {
        <svg
            class="ui-icon"
            data-icon=icon.token()
            data-size=size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill="currentColor"
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}
