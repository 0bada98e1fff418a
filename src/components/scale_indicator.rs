use crate::util::format_percent;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ScaleIndicatorProps {
    pub scale: f64,
}

#[function_component(ScaleIndicator)]
pub fn scale_indicator(props: &ScaleIndicatorProps) -> Html {
    html! {<div class="image-viewer-scale" style="position:absolute; top:16px; left:50%; transform:translateX(-50%); background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:6px; padding:4px 10px; font-size:14px; font-weight:600; color:#e6edf3;">
        { format_percent(props.scale) }
    </div>}
}
