use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub title: &'static str,
    pub description: &'static str,
    /// Font Awesome classes, e.g. `fas fa-users`.
    pub icon: &'static str,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    html! {
        <div class="feature-card">
            <div class="feature-card-circle"></div>
            <div class="icon-container">
                <i class={format!("icon {}", props.icon)}></i>
            </div>
            <div class="feature-card-content">
                <h3>{props.title}</h3>
                <p>{props.description}</p>
            </div>
        </div>
    }
}
