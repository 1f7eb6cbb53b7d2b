use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StepIndicatorProps {
    pub current_step: usize,
    pub total_steps: usize,
    pub progress: u32,
}

#[function_component(StepIndicator)]
pub fn step_indicator(props: &StepIndicatorProps) -> Html {
    html! {
        <div class="step-indicator">
            <div class="step-indicator-labels">
                <span>{ format!("Étape {} sur {}", props.current_step + 1, props.total_steps) }</span>
                <span>{ format!("{}% complété", props.progress) }</span>
            </div>
            <div class="progress-track">
                <div class="progress-fill" style={format!("width: {}%;", props.progress)}></div>
            </div>
            <div class="step-dots">
                { for (0..props.total_steps).map(|index| {
                    let class = if index < props.current_step {
                        "step-dot completed"
                    } else if index == props.current_step {
                        "step-dot current"
                    } else {
                        "step-dot"
                    };
                    html! { <span {class}>{ index + 1 }</span> }
                }) }
            </div>
        </div>
    }
}
