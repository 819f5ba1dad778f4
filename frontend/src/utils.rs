use pulldown_cmark::{html, Options, Parser};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::window;
use yew::Callback;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Turn stored article or page content into HTML that is safe to inject.
///
/// Content starting with a tag is taken as HTML, anything else as Markdown.
/// Both paths go through ammonia, so scripts and event handlers are dropped.
pub fn render_content(content: &str) -> String {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let raw = if trimmed.starts_with('<') {
        trimmed.to_string()
    } else {
        markdown_to_html(trimmed)
    };
    ammonia::clean(&raw)
}

/// Convert Markdown content into HTML with common extensions enabled.
pub fn markdown_to_html(content: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_SMART_PUNCTUATION);

    let parser = Parser::new_ext(content, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// `2023-10-24` (or a full RFC 3339 stamp) as `October 24, 2023`. Anything
/// unparseable is returned unchanged.
pub fn format_long_date(date: &str) -> String {
    parse_ymd(date)
        .map(|(year, month, day)| format!("{} {day}, {year}", MONTHS[month - 1]))
        .unwrap_or_else(|| date.to_string())
}

/// `2023-10-24` as `10/24/2023`.
pub fn format_short_date(date: &str) -> String {
    parse_ymd(date)
        .map(|(year, month, day)| format!("{month}/{day}/{year}"))
        .unwrap_or_else(|| date.to_string())
}

/// `HH:MM` out of an ISO timestamp, if it carries one.
pub fn format_time(date: &str) -> Option<String> {
    let (_, time) = date.split_once('T')?;
    time.get(..5).map(|hm| hm.to_string())
}

fn parse_ymd(date: &str) -> Option<(u32, usize, u32)> {
    let head = date.get(..10)?;
    let mut parts = head.split('-');
    let year = parts.next()?.parse::<u32>().ok()?;
    let month = parts.next()?.parse::<usize>().ok()?;
    let day = parts.next()?.parse::<u32>().ok()?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    Some((year, month, day))
}

/// Split the logo text after its fifth character; the tail renders in the
/// accent color.
pub fn split_logo(text: &str) -> (&str, &str) {
    let cut = text.char_indices().nth(5).map(|(idx, _)| idx).unwrap_or(text.len());
    text.split_at(cut)
}

/// Thousands separators for view counters.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Today's date spelled out for the header bar.
pub fn today_label() -> String {
    let now = js_sys::Date::new_0();
    let options = js_sys::Object::new();
    for (key, value) in [
        ("weekday", "long"),
        ("year", "numeric"),
        ("month", "long"),
        ("day", "numeric"),
    ] {
        let _ = js_sys::Reflect::set(&options, &JsValue::from_str(key), &JsValue::from_str(value));
    }
    String::from(now.to_locale_date_string("en-US", &options))
}

pub fn current_href() -> String {
    window()
        .and_then(|win| win.location().href().ok())
        .unwrap_or_default()
}

/// Open a share dialog in a small popup window.
pub fn open_popup(url: &str) {
    if let Some(win) = window() {
        if let Err(err) = win.open_with_url_and_target_and_features(url, "_blank", "width=600,height=400") {
            web_sys::console::warn_1(&err);
        }
    }
}

/// Write `text` to the clipboard and report whether it worked.
pub fn copy_to_clipboard(text: String, on_done: Callback<bool>) {
    wasm_bindgen_futures::spawn_local(async move {
        let mut ok = false;
        if let Some(win) = window() {
            let navigator = win.navigator();
            if let Ok(clipboard) = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard")) {
                if !clipboard.is_undefined() && !clipboard.is_null() {
                    if let Ok(write_text) =
                        js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
                    {
                        if let Some(write_fn) = write_text.dyn_ref::<js_sys::Function>() {
                            if let Ok(promise_value) =
                                write_fn.call1(&clipboard, &JsValue::from_str(&text))
                            {
                                if let Ok(promise) = promise_value.dyn_into::<js_sys::Promise>() {
                                    ok = wasm_bindgen_futures::JsFuture::from(promise)
                                        .await
                                        .is_ok();
                                }
                            }
                        }
                    }
                }
            }
        }
        on_done.emit(ok);
    });
}

/// Native confirm dialog. A missing window counts as "no".
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_render_long_and_short() {
        assert_eq!(format_long_date("2023-10-24"), "October 24, 2023");
        assert_eq!(format_long_date("2024-01-05T08:00:00.000Z"), "January 5, 2024");
        assert_eq!(format_short_date("2023-10-24"), "10/24/2023");
        assert_eq!(format_long_date("soon"), "soon");
        assert_eq!(format_time("2023-10-25T10:30:00").as_deref(), Some("10:30"));
        assert_eq!(format_time("2023-10-25"), None);
    }

    #[test]
    fn logo_splits_after_five_chars() {
        assert_eq!(split_logo("OmegaNews"), ("Omega", "News"));
        assert_eq!(split_logo("Omé"), ("Omé", ""));
        assert_eq!(split_logo("ÆtherPost"), ("Æther", "Post"));
    }

    #[test]
    fn counts_get_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(41_000), "41,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn content_is_sanitized() {
        let html = render_content("<p onclick=\"x()\">Hi</p><script>alert(1)</script>");
        assert!(html.contains("<p>Hi</p>"));
        assert!(!html.contains("script"));
        assert!(!html.contains("onclick"));

        let md = render_content("### A New Perspective\n\nBody");
        assert!(md.contains("<h3>A New Perspective</h3>"));
    }
}
