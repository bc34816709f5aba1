// Default allow-lists used in safe mode.
//
// All entries are lower case. Scheme entries carry their trailing colon so
// they compare directly against the output of `extract_scheme`.

// Formatting, structural and media elements that carry no script or
// embedding capability of their own.
pub const DEFAULT_TAGS: &[&str] = &[
    "a",
    "abbr",
    "acronym",
    "address",
    "article",
    "aside",
    "b",
    "bdi",
    "bdo",
    "big",
    "blockquote",
    "br",
    "caption",
    "center",
    "cite",
    "code",
    "col",
    "colgroup",
    "dd",
    "del",
    "details",
    "dfn",
    "div",
    "dl",
    "dt",
    "em",
    "figcaption",
    "figure",
    "font",
    "footer",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "header",
    "hr",
    "i",
    "img",
    "ins",
    "kbd",
    "li",
    "mark",
    "nav",
    "ol",
    "p",
    "picture",
    "pre",
    "q",
    "rp",
    "rt",
    "ruby",
    "s",
    "samp",
    "section",
    "small",
    "span",
    "strike",
    "strong",
    "sub",
    "summary",
    "sup",
    "table",
    "tbody",
    "td",
    "tfoot",
    "th",
    "thead",
    "time",
    "tr",
    "tt",
    "u",
    "ul",
    "var",
    "wbr",
];

// Attributes whose value is interpreted as a URI
pub const DEFAULT_URI_ATTRIBUTES: &[&str] = &[
    "href",
    "src",
    "cite",
    "action",
    "data",
    "longdesc",
    "usemap",
    "classid",
    "codebase",
    "profile",
    "formaction",
    "poster",
    "background",
    "lowsrc",
    "dynsrc",
    "manifest",
    "icon",
];

// Schemes a URI-bearing attribute may use
pub const DEFAULT_SCHEMES: &[&str] = &[
    "http:",
    "https:",
    "ftp:",
    "ftps:",
    "mailto:",
    "news:",
    "nntp:",
    "irc:",
    "ircs:",
    "xmpp:",
    "tel:",
    "sms:",
    "git:",
    "ssh:",
    "sftp:",
    "magnet:",
];
