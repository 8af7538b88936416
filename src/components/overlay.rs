use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct OverlayProps {
    pub on_close: Callback<()>,
}

#[function_component(Overlay)]
pub fn overlay(props: &OverlayProps) -> Html {
    let on_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="overlay" onclick={on_click}></div>
    }
}
