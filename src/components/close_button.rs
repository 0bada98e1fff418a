use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CloseButtonProps {
    pub on_close: Callback<()>,
}

#[function_component(CloseButton)]
pub fn close_button(props: &CloseButtonProps) -> Html {
    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<button class="image-viewer-close" aria-label="Close" onclick={close_cb} style="position:absolute; top:16px; right:16px; width:40px; height:40px; padding:8px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:50%; color:#e6edf3; cursor:pointer;">
        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
            <path d="M18 6L6 18M6 6l12 12"/>
        </svg>
    </button>}
}
