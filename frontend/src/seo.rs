use web_sys::{window, Document, Element};

const SITE_SUFFIX: &str = "OmegaNews";

fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

fn upsert_meta(name: &str) -> Option<Element> {
    let doc = document()?;
    let selector = format!("meta[name=\"{name}\"]");
    if let Some(found) = doc.query_selector(&selector).ok().flatten() {
        return Some(found);
    }
    let head = doc.query_selector("head").ok().flatten()?;
    let created = doc.create_element("meta").ok()?;
    created.set_attribute("name", name).ok()?;
    head.append_child(&created).ok()?;
    Some(created)
}

fn normalize_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// `"About Us"` becomes `"About Us - OmegaNews"`; an empty title leaves the
/// bare site name.
pub fn compose_title(title: &str) -> String {
    let title = normalize_whitespace(title);
    if title.is_empty() {
        SITE_SUFFIX.to_string()
    } else {
        format!("{title} - {SITE_SUFFIX}")
    }
}

pub fn apply_page_meta(title: &str, description: Option<&str>) {
    if let Some(doc) = document() {
        doc.set_title(&compose_title(title));
    }
    let Some(description) = description.map(normalize_whitespace).filter(|d| !d.is_empty()) else {
        return;
    };
    if let Some(meta) = upsert_meta("description") {
        if let Err(err) = meta.set_attribute("content", &description) {
            web_sys::console::warn_1(&err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::compose_title;

    #[test]
    fn titles_carry_the_site_name() {
        assert_eq!(compose_title("About  Us"), "About Us - OmegaNews");
        assert_eq!(compose_title("  "), "OmegaNews");
    }
}
