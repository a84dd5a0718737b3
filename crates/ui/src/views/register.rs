use dioxus::prelude::*;
use dioxus_router::use_navigator;
use services::RegisterError;

use crate::context::AppContext;
use crate::routes::Route;
use crate::session_state::SessionState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Submitting,
}

fn register_error_message(err: &RegisterError) -> String {
    match err {
        RegisterError::Invalid(_) => "Please fill in all fields".to_string(),
        RegisterError::Request(request) => request
            .server_message()
            .map_or_else(|| GENERIC_FAILURE.to_string(), str::to_string),
        _ => GENERIC_FAILURE.to_string(),
    }
}

const GENERIC_FAILURE: &str = "Registration failed. Please try again.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegisterIntent {
    SetName(String),
    SetEmail(String),
    Submit,
}

#[derive(Clone, Copy)]
pub struct RegisterFormState {
    pub name: Signal<String>,
    pub email: Signal<String>,
    pub form_state: Signal<FormState>,
    pub error: Signal<Option<String>>,
}

pub fn use_register_form() -> RegisterFormState {
    RegisterFormState {
        name: use_signal(String::new),
        email: use_signal(String::new),
        form_state: use_signal(|| FormState::Idle),
        error: use_signal(|| None::<String>),
    }
}

/// On success the session is refreshed and the student lands on the home page.
pub fn use_register_dispatcher(state: &RegisterFormState) -> Callback<RegisterIntent> {
    let ctx = use_context::<AppContext>();
    let session_state = use_context::<SessionState>();
    let navigator = use_navigator();
    let RegisterFormState {
        mut name,
        mut email,
        mut form_state,
        mut error,
    } = *state;

    use_callback(move |intent: RegisterIntent| match intent {
        RegisterIntent::SetName(value) => name.set(value),
        RegisterIntent::SetEmail(value) => email.set(value),
        RegisterIntent::Submit => {
            if *form_state.peek() == FormState::Submitting {
                return;
            }
            let ctx = ctx.clone();
            let registration = ctx.registration();
            let (name, email) = (name.peek().clone(), email.peek().clone());
            spawn(async move {
                error.set(None);
                form_state.set(FormState::Submitting);
                match registration.register(&name, &email).await {
                    Ok(_) => {
                        session_state.refresh(&ctx);
                        let _ = navigator.push(Route::Home {});
                    }
                    Err(err) => {
                        form_state.set(FormState::Idle);
                        error.set(Some(register_error_message(&err)));
                    }
                }
            });
        }
    })
}

#[component]
pub fn RegisterView() -> Element {
    let state = use_register_form();
    let dispatch = use_register_dispatcher(&state);
    render_register_form(&state, dispatch)
}

pub fn render_register_form(
    state: &RegisterFormState,
    dispatch: Callback<RegisterIntent>,
) -> Element {
    let name = (state.name)();
    let email = (state.email)();
    let error = (state.error)();
    let submitting = (state.form_state)() == FormState::Submitting;

    rsx! {
        div { class: "page register",
            h2 { "Student Registration" }
            if let Some(message) = error {
                div { class: "error", "{message}" }
            }
            form {
                class: "form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    dispatch.call(RegisterIntent::Submit);
                },
                div { class: "form-group",
                    label { r#for: "name", "Name" }
                    input {
                        id: "name",
                        r#type: "text",
                        value: "{name}",
                        oninput: move |evt| dispatch.call(RegisterIntent::SetName(evt.value())),
                    }
                }
                div { class: "form-group",
                    label { r#for: "email", "Email" }
                    input {
                        id: "email",
                        r#type: "email",
                        value: "{email}",
                        oninput: move |evt| dispatch.call(RegisterIntent::SetEmail(evt.value())),
                    }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: submitting,
                    if submitting { "Registering..." } else { "Register" }
                }
            }
        }
    }
}
