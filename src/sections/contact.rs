use yew::prelude::*;
use web_sys::{Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use wasm_bindgen::JsCast;
use gloo_console::log;

/// Minimum trimmed message length accepted by the form.
pub const MIN_MESSAGE_CHARS: usize = 10;

const ERROR_COLOR: &str = "#ef4444";
const SUCCESS_COLOR: &str = "#16a34a";

pub const SERVICE_OPTIONS: [&str; 4] = ["Web Development", "Design", "Marketing", "Something else"];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactInput {
    pub name: String,
    pub email: String,
    pub service: String,
    pub message: String,
}

/// Per-field validation outcome; `None` means the field passed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContactErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub service: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl ContactErrors {
    pub fn is_clean(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.service.is_none()
            && self.message.is_none()
    }
}

/// Simple shape check, not RFC parsing: no whitespace, exactly one `@`, and
/// the part after it contains a dot with characters on both sides.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) || value.matches('@').count() != 1 {
        return false;
    }
    let (local, domain) = match value.split_once('@') {
        Some(parts) => parts,
        None => return false,
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

pub fn validate(input: &ContactInput) -> ContactErrors {
    let mut errors = ContactErrors::default();

    if input.name.trim().is_empty() {
        errors.name = Some("Name is required.");
    }

    let email = input.email.trim();
    if email.is_empty() {
        errors.email = Some("Email is required.");
    } else if !is_valid_email(email) {
        errors.email = Some("Please enter a valid email.");
    }

    if input.service.trim().is_empty() {
        errors.service = Some("Please select a service.");
    }

    if input.message.trim().chars().count() < MIN_MESSAGE_CHARS {
        errors.message = Some("Please provide a bit more detail (at least 10 characters).");
    }

    errors
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum FormStatus {
    Failure,
    Success,
}

impl FormStatus {
    fn message(self) -> &'static str {
        match self {
            FormStatus::Failure => "Please fix the highlighted fields.",
            FormStatus::Success => "Thank you! Your message has been recorded (demo only).",
        }
    }

    fn color(self) -> &'static str {
        match self {
            FormStatus::Failure => ERROR_COLOR,
            FormStatus::Success => SUCCESS_COLOR,
        }
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let service = use_state(String::new);
    let message = use_state(String::new);
    let errors = use_state(ContactErrors::default);
    let status = use_state(|| None::<FormStatus>);

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let service = service.clone();
        let message = message.clone();
        let errors = errors.clone();
        let status = status.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let input = ContactInput {
                name: (*name).clone(),
                email: (*email).clone(),
                service: (*service).clone(),
                message: (*message).clone(),
            };
            let result = validate(&input);
            if result.is_clean() {
                // Demo form: nothing is sent anywhere.
                log!("contact form accepted (demo only)");
                errors.set(ContactErrors::default());
                status.set(Some(FormStatus::Success));
                name.set(String::new());
                email.set(String::new());
                service.set(String::new());
                message.set(String::new());
                if let Some(form) = e
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::HtmlFormElement>().ok())
                {
                    // Clears the uncontrolled select as well.
                    form.reset();
                }
            } else {
                errors.set(result);
                status.set(Some(FormStatus::Failure));
            }
        })
    };

    let field_class = |error: Option<&'static str>| {
        if error.is_some() {
            "form-group error"
        } else {
            "form-group"
        }
    };

    html! {
        <section id="contact" class="contact-section">
            <h2>{"Start a Project"}</h2>
            <form class="contact-form" onsubmit={onsubmit} novalidate=true>
                <div class={field_class(errors.name)}>
                    <label for="name">{"Name"}</label>
                    <input
                        id="name"
                        name="name"
                        type="text"
                        placeholder="Your name"
                        value={(*name).clone()}
                        onchange={let name = name.clone(); move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            name.set(input.value());
                        }}
                    />
                    <span class="error-message">{ errors.name.unwrap_or("") }</span>
                </div>

                <div class={field_class(errors.email)}>
                    <label for="email">{"Email"}</label>
                    <input
                        id="email"
                        name="email"
                        type="email"
                        placeholder="you@company.com"
                        value={(*email).clone()}
                        onchange={let email = email.clone(); move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            email.set(input.value());
                        }}
                    />
                    <span class="error-message">{ errors.email.unwrap_or("") }</span>
                </div>

                <div class={field_class(errors.service)}>
                    <label for="service">{"Service"}</label>
                    <select
                        id="service"
                        name="service"
                        onchange={let service = service.clone(); move |e: Event| {
                            let select: HtmlSelectElement = e.target_unchecked_into();
                            service.set(select.value());
                        }}
                    >
                        <option value="" selected=true>{"Select a service…"}</option>
                        { for SERVICE_OPTIONS.iter().map(|option| html! {
                            <option value={*option}>{ *option }</option>
                        }) }
                    </select>
                    <span class="error-message">{ errors.service.unwrap_or("") }</span>
                </div>

                <div class={field_class(errors.message)}>
                    <label for="message">{"Message"}</label>
                    <textarea
                        id="message"
                        name="message"
                        rows="5"
                        placeholder="Tell us a little about the project"
                        value={(*message).clone()}
                        onchange={let message = message.clone(); move |e: Event| {
                            let area: HtmlTextAreaElement = e.target_unchecked_into();
                            message.set(area.value());
                        }}
                    />
                    <span class="error-message">{ errors.message.unwrap_or("") }</span>
                </div>

                <button type="submit" class="submit-btn">{"Send Message"}</button>

                {
                    if let Some(status) = *status {
                        html! {
                            <p class="form-status" style={format!("color: {};", status.color())}>
                                { status.message() }
                            </p>
                        }
                    } else {
                        html! {}
                    }
                }
            </form>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, email: &str, service: &str, message: &str) -> ContactInput {
        ContactInput {
            name: name.into(),
            email: email.into(),
            service: service.into(),
            message: message.into(),
        }
    }

    #[test]
    fn all_invalid_fields_each_get_an_error() {
        let errors = validate(&input("", "bad", "", "short"));
        assert_eq!(errors.name, Some("Name is required."));
        assert_eq!(errors.email, Some("Please enter a valid email."));
        assert_eq!(errors.service, Some("Please select a service."));
        assert_eq!(
            errors.message,
            Some("Please provide a bit more detail (at least 10 characters).")
        );
        assert!(!errors.is_clean());
    }

    #[test]
    fn valid_submission_is_clean() {
        let errors = validate(&input(
            "Jo",
            "jo@x.com",
            "Design",
            "This is a sufficiently long message.",
        ));
        assert!(errors.is_clean());
    }

    #[test]
    fn missing_email_reports_required_not_invalid() {
        let errors = validate(&input("Jo", "   ", "Design", "A long enough message."));
        assert_eq!(errors.email, Some("Email is required."));
    }

    #[test]
    fn whitespace_only_fields_fail_required_checks() {
        let errors = validate(&input("   ", "jo@x.com", "  ", "A long enough message."));
        assert_eq!(errors.name, Some("Name is required."));
        assert_eq!(errors.service, Some("Please select a service."));
    }

    #[test]
    fn message_length_boundary() {
        let base = input("Jo", "jo@x.com", "Design", "");
        let nine = ContactInput { message: "123456789".into(), ..base.clone() };
        let ten = ContactInput { message: "1234567890".into(), ..base.clone() };
        let padded = ContactInput { message: "   1234567890   ".into(), ..base };
        assert!(validate(&nine).message.is_some());
        assert!(validate(&ten).message.is_none());
        assert!(validate(&padded).message.is_none());
    }

    #[test]
    fn email_shape_checks() {
        for good in ["jo@x.com", "a.b@c.d.e", "name+tag@sub.example.org"] {
            assert!(is_valid_email(good), "{good} should pass");
        }
        for bad in [
            "bad",
            "no at.com",
            "two@@x.com",
            "a@b@c.com",
            "@x.com",
            "jo@",
            "jo@nodot",
            "jo@.com",
            "jo@com.",
            "jo @x.com",
        ] {
            assert!(!is_valid_email(bad), "{bad} should fail");
        }
    }
}
