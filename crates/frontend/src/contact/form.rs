use catalog::Debounce;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::validate::{
    validate, validate_email, validate_message, validate_name, validate_phone, ContactForm,
    FormErrors,
};

/// Simulated network delay standing in for a future submission endpoint.
const SUBMIT_DELAY_MS: u32 = 2_000;
const NOTIFICATION_MS: u32 = 5_000;

#[derive(Clone, PartialEq, Eq)]
struct Notification {
    message: String,
    success: bool,
}

fn input_class(has_error: bool) -> &'static str {
    if has_error {
        "w-full px-4 py-2 rounded-lg border border-red-500 bg-white dark:bg-gray-900 text-gray-900 dark:text-white outline-none"
    } else {
        "w-full px-4 py-2 rounded-lg border border-gray-300 dark:border-gray-600 bg-white dark:bg-gray-900 text-gray-900 dark:text-white focus:border-accent-500 outline-none"
    }
}

fn field_error(error: Option<&'static str>) -> impl IntoView {
    error.map(|message| view! { <p class="text-red-500 text-sm mt-1">{message}</p> })
}

/// Stands in for the real endpoint: waits, then succeeds 9 times out of 10.
async fn simulate_submission(form: &ContactForm) -> Result<(), ()> {
    TimeoutFuture::new(SUBMIT_DELAY_MS).await;
    log::debug!("contact form submitted by {}", form.name);
    if js_sys::Math::random() < 0.9 {
        Ok(())
    } else {
        Err(())
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let errors = RwSignal::new(FormErrors::default());
    let submitting = RwSignal::new(false);
    let notification = RwSignal::new(Option::<Notification>::None);

    // Each notification supersedes the previous one, so a clear timer armed
    // for an earlier message must not dismiss a later one.
    let dismiss = StoredValue::new(Debounce::new());
    let notify = move |message: &str, success: bool| {
        notification.set(Some(Notification {
            message: message.to_string(),
            success,
        }));
        let mut token = 0;
        dismiss.update_value(|d| token = d.arm());
        spawn_local(async move {
            TimeoutFuture::new(NOTIFICATION_MS).await;
            if dismiss.with_value(|d| d.is_current(token)) {
                notification.set(None);
            }
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = form.get_untracked();
        let current_errors = validate(&current);
        errors.set(current_errors.clone());
        if !current_errors.is_valid() || submitting.get_untracked() {
            return;
        }

        submitting.set(true);
        spawn_local(async move {
            match simulate_submission(&current).await {
                Ok(()) => {
                    notify("Thank you! Your message has been sent successfully.", true);
                    form.set(ContactForm::default());
                    errors.set(FormErrors::default());
                }
                Err(()) => {
                    notify(
                        "Sorry, there was an error sending your message. Please try again.",
                        false,
                    );
                }
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="container mx-auto px-4 sm:px-6 lg:px-8 py-12 max-w-2xl">
            <div class="text-center mb-10">
                <h1 class="text-4xl font-bold text-gray-900 dark:text-white mb-3">"Contact Us"</h1>
                <p class="text-gray-600 dark:text-gray-300">
                    "Tell us about your project and we will get back to you."
                </p>
            </div>

            {move || {
                notification
                    .get()
                    .map(|n| {
                        let class = if n.success {
                            "mb-6 px-4 py-3 rounded-lg bg-green-100 text-green-800"
                        } else {
                            "mb-6 px-4 py-3 rounded-lg bg-red-100 text-red-800"
                        };
                        view! { <div class=class role="status">{n.message}</div> }
                    })
            }}

            <form class="contact-form space-y-6" on:submit=on_submit novalidate=true>
                <div>
                    <label class="block mb-1 font-medium text-gray-700 dark:text-gray-300">"Name"</label>
                    <input
                        type="text"
                        class=move || input_class(errors.get().name.is_some())
                        prop:value=move || form.get().name
                        on:input=move |ev| {
                            form.update(|f| f.name = event_target_value(&ev));
                            errors.update(|e| e.name = None);
                        }
                        on:blur=move |_| {
                            errors.update(|e| e.name = validate_name(&form.get_untracked().name));
                        }
                    />
                    {move || field_error(errors.get().name)}
                </div>

                <div>
                    <label class="block mb-1 font-medium text-gray-700 dark:text-gray-300">"Email"</label>
                    <input
                        type="email"
                        class=move || input_class(errors.get().email.is_some())
                        prop:value=move || form.get().email
                        on:input=move |ev| {
                            form.update(|f| f.email = event_target_value(&ev));
                            errors.update(|e| e.email = None);
                        }
                        on:blur=move |_| {
                            errors.update(|e| e.email = validate_email(&form.get_untracked().email));
                        }
                    />
                    {move || field_error(errors.get().email)}
                </div>

                <div>
                    <label class="block mb-1 font-medium text-gray-700 dark:text-gray-300">
                        "Phone (optional)"
                    </label>
                    <input
                        type="tel"
                        class=move || input_class(errors.get().phone.is_some())
                        prop:value=move || form.get().phone
                        on:input=move |ev| {
                            form.update(|f| f.phone = event_target_value(&ev));
                            errors.update(|e| e.phone = None);
                        }
                        on:blur=move |_| {
                            errors.update(|e| e.phone = validate_phone(&form.get_untracked().phone));
                        }
                    />
                    {move || field_error(errors.get().phone)}
                </div>

                <div>
                    <label class="block mb-1 font-medium text-gray-700 dark:text-gray-300">"Message"</label>
                    <textarea
                        rows="5"
                        class=move || input_class(errors.get().message.is_some())
                        prop:value=move || form.get().message
                        on:input=move |ev| {
                            form.update(|f| f.message = event_target_value(&ev));
                            errors.update(|e| e.message = None);
                        }
                        on:blur=move |_| {
                            errors
                                .update(|e| {
                                    e.message = validate_message(&form.get_untracked().message)
                                });
                        }
                    ></textarea>
                    {move || field_error(errors.get().message)}
                </div>

                <button
                    type="submit"
                    class="w-full py-3 rounded-lg bg-accent-500 text-white font-medium hover:bg-accent-600 transition-colors disabled:opacity-60 disabled:cursor-not-allowed"
                    prop:disabled=move || submitting.get()
                >
                    {move || if submitting.get() { "Sending..." } else { "Send Message" }}
                </button>
            </form>
        </div>
    }
}
