use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    pub dark: bool,
    pub on_toggle: Callback<()>,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };
    let (icon, title) = if props.dark {
        ("fas fa-sun", "Switch to light mode")
    } else {
        ("fas fa-moon", "Switch to dark mode")
    };
    html! {
        <button class="theme-toggle" type="button" {onclick} title={title}>
            <i class={icon}></i>
        </button>
    }
}
