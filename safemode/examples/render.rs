use safemode::{HtmlFilter, SafeModeFilter, Verdict};

// A raw HTML fragment as a Markdown parser would hand it to the renderer.
struct RawTag<'a> {
    name: &'a str,
    closing: bool,
    attrs: &'a [(&'a str, &'a str)],
}

// Text from the document never reaches the output unescaped, otherwise a
// quote in an allowed attribute value could open a new attribute.
fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

fn emit<F: HtmlFilter>(filter: &F, tag: &RawTag<'_>, out: &mut String) {
    if filter.filter_tag(tag.name.as_bytes()) == Verdict::Reject {
        // Suppressed tags are escaped so they show up as text.
        out.push_str("&lt;");
        if tag.closing {
            out.push('/');
        }
        push_escaped(out, tag.name);
        out.push_str("&gt;");
        return;
    }

    out.push('<');
    if tag.closing {
        out.push('/');
    }
    out.push_str(tag.name);
    for (name, value) in tag.attrs {
        let verdict =
            filter.filter_attribute(tag.name.as_bytes(), name.as_bytes(), value.as_bytes());
        if verdict.is_allowed() {
            out.push(' ');
            push_escaped(out, name);
            out.push_str("=\"");
            push_escaped(out, value);
            out.push('"');
        }
    }
    out.push('>');
}

fn render<F: HtmlFilter>(filter: &F, fragments: &[RawTag<'_>]) -> String {
    let mut out = String::new();
    for tag in fragments {
        emit(filter, tag, &mut out);
    }
    out
}

fn main() {
    let filter = SafeModeFilter::new();
    let fragments = [
        RawTag {
            name: "div",
            closing: false,
            attrs: &[("class", "note"), ("onclick", "steal()")],
        },
        RawTag {
            name: "a",
            closing: false,
            attrs: &[("href", "javascript:alert(1)"), ("title", "x")],
        },
        RawTag { name: "a", closing: true, attrs: &[] },
        RawTag {
            name: "img",
            closing: false,
            attrs: &[("src", "https://example.com/cat.png"), ("alt", "cat")],
        },
        RawTag {
            name: "span",
            closing: false,
            attrs: &[("title", "x\" onmouseover=\"alert(1)")],
        },
        RawTag { name: "span", closing: true, attrs: &[] },
        RawTag { name: "script", closing: false, attrs: &[] },
        RawTag { name: "script", closing: true, attrs: &[] },
        RawTag { name: "div", closing: true, attrs: &[] },
    ];

    println!("{}", render(&filter, &fragments));
}
