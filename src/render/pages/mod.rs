//! One module per page. Each exposes `render`, returning a [`Page`](super::Page).

pub mod about;
pub mod architecture;
pub mod audit;
pub mod dashboard;
pub mod home;
pub mod platform;

use super::markup::{Element, el};

/// Section heading used across marketing pages.
pub(crate) fn section_title(text: &str) -> Element {
    el("h2")
        .class("text-3xl font-bold text-gray-900 text-center mb-12")
        .text(text)
}

/// Bulleted list item; `highlight` renders it in the accent color.
pub(crate) fn bullet(text: &str, highlight: bool) -> Element {
    let (dot, label) = if highlight {
        ("mt-1 text-blue-600", "text-gray-900 font-medium")
    } else {
        ("mt-1 text-gray-400", "text-gray-600")
    };
    el("li")
        .class("flex items-start gap-2")
        .child(el("span").class(dot).text("•"))
        .child(el("span").class(label).text(text))
}
