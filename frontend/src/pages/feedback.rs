use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::progress_bar::ProgressBar;
use crate::survey::{
    Delivery, FieldEdit, Importance, SubmissionOutcome, SubmissionRecord, SubmissionWorkflow,
    SubmitError, TextField,
};
use crate::utils::api::EmailJs;
use crate::utils::storage::BrowserStorage;

const DIAL_CODES: [(&str, &str); 8] = [
    ("+91", "India (+91)"),
    ("+1", "United States / Canada (+1)"),
    ("+44", "United Kingdom (+44)"),
    ("+49", "Germany (+49)"),
    ("+61", "Australia (+61)"),
    ("+65", "Singapore (+65)"),
    ("+971", "United Arab Emirates (+971)"),
    ("+81", "Japan (+81)"),
];

/// `(value, label, selected)` for the dial-code select. The blank entry comes
/// first so an untouched record shows no country.
fn dial_code_options(selected: &str) -> Vec<(&'static str, &'static str, bool)> {
    std::iter::once(("", "Select code"))
        .chain(DIAL_CODES)
        .map(|(code, label)| (code, label, code == selected))
        .collect()
}

pub enum FormAction {
    Edit(FieldEdit),
    Reset,
}

/// Reducer wrapper so every edit applies to the latest record, not the one
/// captured by the last render.
#[derive(Default, PartialEq)]
pub struct SurveyForm {
    pub record: SubmissionRecord,
}

impl Reducible for SurveyForm {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut record = self.record.clone();
        match action {
            FormAction::Edit(edit) => {
                if !record.apply(edit) {
                    return self;
                }
            }
            FormAction::Reset => record.reset(),
        }
        Rc::new(SurveyForm { record })
    }
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[function_component(FeedbackForm)]
pub fn feedback_form() -> Html {
    let form = use_reducer(SurveyForm::default);
    let outcome = use_state(SubmissionOutcome::default);
    let workflow = use_mut_ref(|| SubmissionWorkflow::new(BrowserStorage));

    // Every input funnels through here so a stale error is cleared on edit.
    let on_edit = {
        let form = form.clone();
        let outcome = outcome.clone();
        let workflow = workflow.clone();
        Callback::from(move |edit: FieldEdit| {
            form.dispatch(FormAction::Edit(edit));
            let mut workflow = workflow.borrow_mut();
            workflow.field_edited();
            outcome.set(workflow.outcome().clone());
        })
    };

    let onsubmit = {
        let form = form.clone();
        let outcome = outcome.clone();
        let workflow = workflow.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let begun = workflow.borrow_mut().begin(&form.record);
            let snapshot = match begun {
                Ok(snapshot) => snapshot,
                Err(SubmitError::InFlight) => return,
                Err(_) => {
                    outcome.set(workflow.borrow().outcome().clone());
                    return;
                }
            };
            outcome.set(SubmissionOutcome::Submitting);
            let form = form.clone();
            let outcome = outcome.clone();
            let workflow = workflow.clone();
            spawn_local(async move {
                let delivery = EmailJs::default();
                let result = delivery.deliver(&snapshot).await;
                let now = {
                    let mut workflow = workflow.borrow_mut();
                    workflow.complete(&snapshot, result);
                    workflow.outcome().clone()
                };
                match &now {
                    SubmissionOutcome::Success => form.dispatch(FormAction::Reset),
                    SubmissionOutcome::Failed(e) => alert(&e.to_string()),
                    _ => {}
                }
                outcome.set(now);
            });
        })
    };

    let text_input = |field: TextField| {
        let on_edit = on_edit.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_edit.emit(FieldEdit::Text(field, input.value()));
        })
    };
    let text_area = |field: TextField| {
        let on_edit = on_edit.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            on_edit.emit(FieldEdit::Text(field, area.value()));
        })
    };

    let on_dial_code = {
        let on_edit = on_edit.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_edit.emit(FieldEdit::Text(TextField::DialCode, select.value()));
        })
    };
    let on_phone_no = {
        let on_edit = on_edit.clone();
        let current = form.record.phone_no().to_string();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            if SubmissionRecord::is_valid_phone_no(&value) {
                on_edit.emit(FieldEdit::PhoneNo(value));
            } else {
                // Refused keystrokes never reach state, so undo them in the DOM too.
                input.set_value(&current);
            }
        })
    };
    let on_importance = {
        let on_edit = on_edit.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(importance) = Importance::parse(&input.value()) {
                on_edit.emit(FieldEdit::Importance(importance));
            }
        })
    };
    let on_satisfaction = {
        let on_edit = on_edit.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(value) = input.value().parse::<i32>() {
                on_edit.emit(FieldEdit::Satisfaction(value));
            }
        })
    };
    let on_subscribe = {
        let on_edit = on_edit.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_edit.emit(FieldEdit::Subscribe(input.checked()));
        })
    };

    let record = &form.record;
    let submitting = outcome.is_submitting();
    let email_error = outcome.error().filter(|e| e.is_email_error());
    let banner_error = outcome.error().filter(|e| !e.is_email_error());

    let form_css = r#"
        .feedback-page {
            min-height: 100vh;
            display: flex;
            align-items: center;
            justify-content: center;
            padding: 2rem 1rem;
        }
        .feedback-card {
            width: 100%;
            max-width: 860px;
            padding: 2rem;
            border-radius: 16px;
            background: var(--card-bg);
            backdrop-filter: blur(10px);
            border: 1px solid rgba(255, 255, 255, 0.3);
            transition: all 0.3s ease-in-out;
        }
        .feedback-card:hover {
            box-shadow: 0 8px 32px rgba(0, 0, 0, 0.1);
        }
        .feedback-card h1 {
            text-align: center;
            margin-bottom: 1rem;
            background: linear-gradient(45deg, var(--primary), var(--secondary));
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
        }
        .feedback-form {
            display: grid;
            gap: 1.5rem;
        }
        .form-field label {
            display: block;
            margin-bottom: 0.4rem;
            font-size: 0.95rem;
            color: var(--text-secondary);
        }
        .form-field input[type="text"],
        .form-field input[type="email"],
        .form-field input[type="tel"],
        .form-field select,
        .form-field textarea {
            width: 100%;
            box-sizing: border-box;
            padding: 0.8rem;
            border-radius: 4px;
            border: 1px solid var(--border);
            background: var(--input-bg);
            color: var(--text);
            font: inherit;
            transition: border-color 0.3s ease-in-out;
        }
        .form-field input:focus,
        .form-field select:focus,
        .form-field textarea:focus {
            outline: none;
            border: 2px solid var(--primary);
        }
        .form-field.has-error input {
            border-color: var(--error);
        }
        .field-error {
            color: var(--error);
            font-size: 0.85rem;
            margin-top: 0.3rem;
        }
        .phone-row {
            display: grid;
            grid-template-columns: minmax(140px, 1fr) 3fr;
            gap: 1rem;
        }
        .radio-row {
            display: flex;
            gap: 1.5rem;
        }
        .survey-progress-track {
            height: 8px;
            border-radius: 4px;
            background: var(--border);
            overflow: hidden;
        }
        .survey-progress-fill {
            height: 100%;
            background: linear-gradient(45deg, var(--primary), var(--secondary));
            transition: width 0.3s ease-in-out;
        }
        .survey-progress-label {
            font-size: 0.85rem;
            color: var(--text-secondary);
        }
        .submit-button {
            padding: 0.9rem;
            border: none;
            border-radius: 4px;
            font-size: 1rem;
            color: #fff;
            cursor: pointer;
            background: linear-gradient(45deg, var(--primary), var(--secondary));
            transition: all 0.3s ease-in-out;
        }
        .submit-button:hover:not(:disabled) {
            transform: translateY(-2px);
            box-shadow: 0 6px 12px rgba(0, 0, 0, 0.15);
        }
        .submit-button:disabled {
            opacity: 0.6;
            cursor: progress;
        }
        .form-banner {
            padding: 0.8rem 1rem;
            border-radius: 4px;
            background: rgba(211, 47, 47, 0.1);
            color: var(--error);
        }
        .form-success {
            display: flex;
            justify-content: center;
            align-items: center;
            gap: 0.5rem;
            color: var(--success);
            font-size: 1.2rem;
        }
        @media (max-width: 600px) {
            .feedback-card { padding: 1.25rem; }
            .phone-row { grid-template-columns: 1fr; }
        }
    "#;

    html! {
        <div class="feedback-page">
            <style>{form_css}</style>
            <div class="feedback-card">
                <h1>{"Share Your Feedback"}</h1>
                <ProgressBar record={record.clone()} />
                <form class="feedback-form" {onsubmit}>
                    <div class="form-field">
                        <label for="name">{TextField::Name.label()}</label>
                        <input id="name" type="text" required=true
                            placeholder={TextField::Name.placeholder()}
                            value={record.name.clone()}
                            oninput={text_input(TextField::Name)} />
                    </div>
                    <div class={classes!("form-field", email_error.map(|_| "has-error"))}>
                        <label for="email">{TextField::Email.label()}</label>
                        <input id="email" type="email" required=true
                            placeholder={TextField::Email.placeholder()}
                            value={record.email.clone()}
                            oninput={text_input(TextField::Email)} />
                        if let Some(e) = email_error {
                            <div class="field-error">{e.to_string()}</div>
                        }
                    </div>
                    <div class="phone-row">
                        <div class="form-field">
                            <label for="phone">{TextField::DialCode.label()}</label>
                            <select id="phone" onchange={on_dial_code}>
                                { for dial_code_options(&record.phone).into_iter().map(|(code, label, selected)| html! {
                                    <option value={code} {selected}>{label}</option>
                                })}
                            </select>
                        </div>
                        <div class="form-field">
                            <label for="phone-no">{"Phone No"}</label>
                            <input id="phone-no" type="tel" inputmode="numeric" maxlength="10"
                                value={record.phone_no().to_string()}
                                oninput={on_phone_no} />
                        </div>
                    </div>
                    <div class="form-field">
                        <label for="feedback">{TextField::Feedback.label()}</label>
                        <textarea id="feedback" rows="4" required=true
                            placeholder={TextField::Feedback.placeholder()}
                            value={record.feedback.clone()}
                            oninput={text_area(TextField::Feedback)} />
                    </div>
                    { for TextField::QUESTIONS.iter().take(2).map(|field| html! {
                        <div class="form-field">
                            <label>{field.label()}</label>
                            <textarea rows="3"
                                placeholder={field.placeholder()}
                                value={record.text(*field).to_string()}
                                oninput={text_area(*field)} />
                        </div>
                    })}
                    <div class="form-field">
                        <label>{"How important is the ability to connect with people from around the world to you?"}</label>
                        <div class="radio-row">
                            { for Importance::ALL.iter().map(|importance| html! {
                                <label>
                                    <input type="radio" name="importance"
                                        value={importance.as_str()}
                                        checked={record.importance == *importance}
                                        onchange={on_importance.clone()} />
                                    {importance.as_str()}
                                </label>
                            })}
                        </div>
                    </div>
                    { for TextField::QUESTIONS.iter().skip(2).map(|field| html! {
                        <div class="form-field">
                            <label>{field.label()}</label>
                            <textarea rows="3"
                                value={record.text(*field).to_string()}
                                oninput={text_area(*field)} />
                        </div>
                    })}
                    <div class="form-field">
                        <label for="satisfaction">
                            {format!("How satisfied are you with current social media platforms? ({})", record.satisfaction())}
                        </label>
                        <input id="satisfaction" type="range" min="10" max="100" step="10"
                            value={record.satisfaction().to_string()}
                            oninput={on_satisfaction} />
                    </div>
                    <div class="form-field">
                        <label>
                            <input type="checkbox" checked={record.subscribe} onchange={on_subscribe} />
                            {" Subscribe to our email newsletter for updates"}
                        </label>
                    </div>
                    if let Some(e) = banner_error {
                        <div class="form-banner">{e.to_string()}</div>
                    }
                    <button class="submit-button" type="submit" disabled={submitting}>
                        if submitting {
                            {"Submitting..."}
                        } else {
                            <i class="fas fa-paper-plane"></i>{" Submit Feedback"}
                        }
                    </button>
                    if *outcome == SubmissionOutcome::Success {
                        <div class="form-success">
                            <i class="fas fa-circle-check"></i>
                            <span>{"Thank you for your feedback!"}</span>
                        </div>
                    }
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(form: Rc<SurveyForm>, action: FormAction) -> Rc<SurveyForm> {
        form.reduce(action)
    }

    #[test]
    fn rapid_phone_edits_keep_digits_only() {
        let mut form = Rc::new(SurveyForm::default());
        for typed in ["1", "12", "12a", "123", "1234567890", "12345678901", "123456789"] {
            form = reduce(form, FormAction::Edit(FieldEdit::PhoneNo(typed.to_string())));
            assert!(SubmissionRecord::is_valid_phone_no(form.record.phone_no()));
        }
        assert_eq!(form.record.phone_no(), "123456789");
    }

    #[test]
    fn refused_edit_returns_same_state() {
        let form = Rc::new(SurveyForm::default());
        let next = reduce(form.clone(), FormAction::Edit(FieldEdit::PhoneNo("x".into())));
        assert!(Rc::ptr_eq(&form, &next));
    }

    fn shown_dial_code(record: &SubmissionRecord) -> Option<&'static str> {
        dial_code_options(&record.phone)
            .into_iter()
            .find(|(_, _, selected)| *selected)
            .map(|(code, _, _)| code)
    }

    #[test]
    fn dial_code_select_shows_what_the_record_holds() {
        let mut form = Rc::new(SurveyForm::default());
        assert_eq!(shown_dial_code(&form.record), Some(form.record.phone.as_str()));
        assert_eq!(shown_dial_code(&form.record), Some(""));

        form = reduce(form, FormAction::Edit(FieldEdit::Text(TextField::DialCode, "+91".into())));
        assert_eq!(form.record.phone, "+91");
        assert_eq!(shown_dial_code(&form.record), Some("+91"));

        form = reduce(form, FormAction::Reset);
        assert_eq!(shown_dial_code(&form.record), Some(""));
    }

    #[test]
    fn exactly_one_dial_code_is_selected() {
        for code in ["", "+44", "+971"] {
            let selected = dial_code_options(code).into_iter().filter(|(_, _, s)| *s).count();
            assert_eq!(selected, 1, "code {:?}", code);
        }
    }

    #[test]
    fn reset_restores_defaults() {
        let mut form = Rc::new(SurveyForm::default());
        form = reduce(form, FormAction::Edit(FieldEdit::Text(TextField::Name, "Ada".into())));
        form = reduce(form, FormAction::Edit(FieldEdit::Subscribe(true)));
        form = reduce(form, FormAction::Reset);
        assert_eq!(form.record, SubmissionRecord::default());
    }
}
