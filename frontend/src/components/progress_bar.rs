use yew::prelude::*;

use crate::survey::progress::{filled_fields, progress, TOTAL_FIELDS};
use crate::survey::SubmissionRecord;

#[derive(Properties, PartialEq)]
pub struct ProgressBarProps {
    pub record: SubmissionRecord,
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    let percent = progress(&props.record);
    let filled = filled_fields(&props.record);
    html! {
        <div class="survey-progress" aria-label="Survey progress">
            <div class="survey-progress-track">
                <div class="survey-progress-fill" style={format!("width: {}%;", percent)}></div>
            </div>
            <span class="survey-progress-label">
                {format!("{}% complete ({} of {} answered)", percent, filled, TOTAL_FIELDS)}
            </span>
        </div>
    }
}
