//! お問い合わせフォーム（送信はシミュレーションのみ）

use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use gloo::timers::future::TimeoutFuture;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlButtonElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use crate::components::show_notification;
use crate::models::Severity;
use crate::utils::dom::{self, query, query_all_in, query_in, set_class, set_style};
use crate::utils::log_trace::{log_info_with_data, log_warn};
use crate::validation::{failing_fields, shows_valid_mark, validate_field, FieldRules};
use crate::PageContext;

const INVALID_FORM_MESSAGE: &str = "Please fix the errors in the form";
const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
const SENDING_HTML: &str = r#"<i class="fas fa-spinner fa-spin"></i> Sending..."#;

/// input / textarea を同じように扱うためのラッパー
#[derive(Clone)]
struct FormField {
    element: Element,
}

impl FormField {
    fn value(&self) -> String {
        if let Some(input) = self.element.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = self.element.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            String::new()
        }
    }

    fn rules(&self) -> FieldRules {
        FieldRules {
            required: self.element.has_attribute("required"),
            email: self
                .element
                .dyn_ref::<HtmlInputElement>()
                .map(|input| input.type_() == "email")
                .unwrap_or(false),
        }
    }

    fn name(&self) -> String {
        self.element.get_attribute("name").unwrap_or_else(|| self.element.id())
    }
}

fn show_field_error(field: &Element, message: &str) {
    set_class(field, "error", true);
    let Some(parent) = field.parent_element() else {
        return;
    };
    let existing = query_in(&parent, ".error-message");
    let error_el = existing.or_else(|| {
        let el = dom::document()?.create_element("div").ok()?;
        el.set_class_name("error-message");
        parent.append_child(&el).ok()?;
        Some(el)
    });
    if let Some(el) = error_el {
        el.set_text_content(Some(message));
    }
}

fn clear_field_error(field: &Element) {
    set_class(field, "error", false);
    if let Some(el) = field.parent_element().and_then(|p| query_in(&p, ".error-message")) {
        el.remove();
    }
}

/// 検証してエラー表示を更新する
fn check_field(field: &FormField) {
    let value = field.value();
    clear_field_error(&field.element);

    let outcome = validate_field(&value, field.rules());
    if let Err(err) = &outcome {
        show_field_error(&field.element, &err.to_string());
    }
    set_class(&field.element, "valid", shows_valid_mark(&value, &outcome));
}

fn set_button_busy(button: &Element, busy: bool, label_html: &str) {
    button.set_inner_html(label_html);
    if let Some(b) = button.dyn_ref::<HtmlButtonElement>() {
        b.set_disabled(busy);
    }
}

/// 送信完了の合図として各グループを少し持ち上げる
fn nudge_groups(form: &Element, nudge_ms: u32) {
    for group in query_all_in(form, ".form-group") {
        set_style(&group, "transform", "translateY(-5px)");
        Timeout::new(nudge_ms, move || set_style(&group, "transform", "translateY(0)")).forget();
    }
}

pub fn init_contact_form(ctx: PageContext) -> Option<()> {
    let form = query(".contact-form")?;
    let fields: Rc<Vec<FormField>> = Rc::new(
        query_all_in(&form, "input, textarea")
            .into_iter()
            .map(|element| FormField { element })
            .collect(),
    );

    for field in fields.iter() {
        let on_blur = field.clone();
        EventListener::new(&field.element, "blur", move |_| {
            check_field(&on_blur);
        })
        .forget();

        // 入力したらエラーはすぐ消す（再検証はしない）
        let on_input = field.element.clone();
        EventListener::new(&field.element, "input", move |_| clear_field_error(&on_input)).forget();
    }

    let (latency_ms, nudge_ms) = ctx.config.with_value(|c| (c.submit_latency_ms, c.form_nudge_ms));
    let form_el = form.clone();

    EventListener::new_with_options(
        &form,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            event.prevent_default();

            // 最初の失敗で止めず、全フィールドにエラーを表示する
            for field in fields.iter() {
                check_field(field);
            }
            let entries: Vec<(String, FieldRules)> =
                fields.iter().map(|field| (field.value(), field.rules())).collect();
            let failures = failing_fields(entries.iter().map(|(value, rules)| (value.as_str(), *rules)));
            if !failures.is_empty() {
                let names: Vec<String> = failures.iter().map(|(i, _)| fields[*i].name()).collect();
                log_warn("contact", &format!("validation failed: {}", names.join(", ")));
                show_notification(ctx, INVALID_FORM_MESSAGE, Severity::Error);
                return;
            }

            let names: Vec<String> = fields.iter().map(FormField::name).collect();
            log_info_with_data(
                "contact",
                "simulated submission",
                serde_json::json!({ "fields": names }),
            );

            let button = query_in(&form_el, r#"button[type="submit"]"#);
            let original_html = button.as_ref().map(|b| b.inner_html()).unwrap_or_default();
            if let Some(b) = &button {
                set_button_busy(b, true, SENDING_HTML);
            }

            let form_el = form_el.clone();
            let fields = fields.clone();
            spawn_local(async move {
                TimeoutFuture::new(latency_ms).await;

                show_notification(ctx, SUCCESS_MESSAGE, Severity::Success);
                if let Some(f) = form_el.dyn_ref::<HtmlFormElement>() {
                    f.reset();
                }
                // リセット後は空欄なので valid 表示も外す
                for field in fields.iter() {
                    set_class(&field.element, "valid", false);
                }
                if let Some(b) = &button {
                    set_button_busy(b, false, &original_html);
                }
                nudge_groups(&form_el, nudge_ms);
            });
        },
    )
    .forget();

    Some(())
}
