use leptos::prelude::*;

/// Switch markup the theme controller binds to.
///
/// The controller owns the checked state and the click listener; this only
/// renders the control for pages whose templates don't include one.
#[component]
pub fn DarkToggle(
    /// Accessible name of the switch.
    #[prop(optional, into)]
    label: Option<String>,
) -> impl IntoView {
    let label = label.unwrap_or_else(|| "Dark mode".to_string());

    view! {
        <div class="dark-toggle" title=label.clone()>
            <input type="checkbox" aria-label=label.clone() />
            <span class="dark-toggle-slider"></span>
        </div>
    }
}

/// Render a [`DarkToggle`] as the last child of `parent` for the page's
/// lifetime.
pub fn mount_dark_toggle(parent: web_sys::HtmlElement) {
    leptos::mount::mount_to(parent, || view! { <DarkToggle /> }).forget();
}
