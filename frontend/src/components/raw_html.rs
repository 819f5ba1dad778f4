use web_sys::Element;
use yew::prelude::*;

use crate::utils::render_content;

#[derive(Properties, Clone, PartialEq)]
pub struct RichContentProps {
    /// Stored article or page body, HTML or Markdown.
    pub content: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Sanitize stored content and write it into a host element that Yew does
/// not diff.
#[function_component(RichContent)]
pub fn rich_content(props: &RichContentProps) -> Html {
    let host_ref = use_node_ref();
    let rendered = use_memo(props.content.clone(), |content| render_content(content));

    {
        let host_ref = host_ref.clone();
        use_effect_with(rendered, move |rendered| {
            if let Some(host) = host_ref.cast::<Element>() {
                host.set_inner_html(rendered.as_str());
            }
            || ()
        });
    }

    html! {
        <div ref={host_ref} class={classes!("prose", "max-w-none", props.class.clone())} />
    }
}
