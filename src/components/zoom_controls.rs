use yew::prelude::*;

use crate::model::ViewerControl;

#[derive(Properties, PartialEq, Clone)]
pub struct ZoomControlsProps {
    pub on_control: Callback<ViewerControl>,
}

#[function_component(ZoomControls)]
pub fn zoom_controls(props: &ZoomControlsProps) -> Html {
    let zo = props.on_control.reform(|_: MouseEvent| ViewerControl::ZoomOut);
    let rs = props.on_control.reform(|_: MouseEvent| ViewerControl::Reset);
    let zi = props.on_control.reform(|_: MouseEvent| ViewerControl::ZoomIn);
    html! {<div class="image-viewer-controls" style="position:absolute; left:50%; bottom:24px; transform:translateX(-50%); background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; display:flex; gap:6px; align-items:center;">
        <button class="image-viewer-control-btn" onclick={zo}> {"Zoom out (-)"} </button>
        <button class="image-viewer-control-btn" onclick={rs}> {"Reset"} </button>
        <button class="image-viewer-control-btn" onclick={zi}> {"Zoom in (+)"} </button>
    </div>}
}
