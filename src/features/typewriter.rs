//! ヒーロー見出しのタイプライター効果

use gloo::timers::callback::Timeout;
use web_sys::Element;

use crate::animation::Typewriter;
use crate::utils::dom::{self, observe_entering, query, query_in, set_style};
use crate::utils::log_trace::log_info;
use crate::utils::random_unit;
use crate::PageContext;

pub fn init_typewriter(ctx: PageContext) -> Option<()> {
    let title = query(".hero-title")?;
    let highlight = query_in(&title, ".highlight")?;
    let text = highlight.text_content().unwrap_or_default();

    // 強調部分を空の span に置き換える
    let typed = dom::document()?.create_element("span").ok()?;
    typed.set_class_name("highlight typed-text");
    highlight.replace_with_with_node_1(&typed).ok()?;

    let (pre_delay, min_delay, jitter, caret_ms) = ctx.config.with_value(|c| {
        (
            c.typewriter_pre_delay_ms,
            c.typewriter_min_delay_ms,
            c.typewriter_jitter_ms,
            c.typewriter_caret_ms,
        )
    });

    // 一度だけ開始する（取り出したら発火済み）
    let mut pending = Some(Typewriter::new(&text, min_delay, jitter));
    let target = typed.clone();
    observe_entering(&[typed], None, move |_, observer| {
        let Some(typewriter) = pending.take() else {
            return;
        };
        observer.disconnect();
        log_info("typewriter", "start");
        let el = target.clone();
        Timeout::new(pre_delay, move || type_next(el, typewriter, caret_ms)).forget();
    })?;

    Some(())
}

fn type_next(el: Element, mut typewriter: Typewriter, caret_ms: u32) {
    match typewriter.advance() {
        Some(text) => {
            el.set_text_content(Some(&text));
            let delay = typewriter.next_delay_ms(random_unit());
            Timeout::new(delay, move || type_next(el, typewriter, caret_ms)).forget();
        }
        None => {
            // 打ち終わったらカーソルを少しだけ表示
            set_style(&el, "border-right", "2px solid var(--accent)");
            Timeout::new(caret_ms, move || set_style(&el, "border-right", "none")).forget();
        }
    }
}
