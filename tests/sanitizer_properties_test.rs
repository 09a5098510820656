use svg_animator::core::sanitizer::{is_acceptable, sanitize, SVG_ROOT_MARKER};

const PROSE_BEFORE: [&str; 3] = [
    "",
    "Here is the animated SVG:\n",
    "Sure! I made the robot curious.\n\n",
];

const PROSE_AFTER: [&str; 3] = ["", "\nLet me know if you want changes.", "\n\n*Enjoy*"];

const FENCE_TAGS: [&str; 4] = ["", "svg", "xml", "SVG"];

const DOCUMENTS: [&str; 4] = [
    "<svg></svg>",
    "<svg viewBox=\"0 0 10 10\">\n  <circle id=\"eye\" r=\"2\"/>\n</svg>",
    "<svg><g transform=\"rotate(10 5 5)\"><animateTransform attributeName=\"transform\" type=\"rotate\" additive=\"sum\" from=\"0 5 5\" to=\"360 5 5\" dur=\"3s\"/></g></svg>",
    "<svg><style>.a{fill:red}</style><path class=\"a\" d=\"M0 0 L 1 1\"/></svg>",
];

#[test]
fn test_fenced_documents_are_extracted_exactly() {
    for before in PROSE_BEFORE {
        for after in PROSE_AFTER {
            for tag in FENCE_TAGS {
                for document in DOCUMENTS {
                    let raw = format!("{}```{}\n{}\n```{}", before, tag, document, after);
                    assert_eq!(sanitize(Some(&raw)), document, "raw: {:?}", raw);
                }
            }
        }
    }
}

#[test]
fn test_unfenced_documents_lose_no_content() {
    for document in DOCUMENTS {
        let raw = format!("\n\n  {}  \n", document);
        assert_eq!(sanitize(Some(&raw)), document);
    }
}

#[test]
fn test_unquoted_values_are_quoted() {
    let cases = [
        ("transform", "scale(1.5)"),
        ("repeatCount", "indefinite"),
        ("dur", "2s"),
        ("begin", "blink.end+0.5s"),
        ("xlink:href", "#eye"),
        ("fill-opacity", "0.4"),
        ("values", "0;1;0"),
    ];

    for (key, value) in cases {
        let raw = format!("<svg><animate {}={} id=\"a\"/></svg>", key, value);
        let cleaned = sanitize(Some(&raw));
        let expected = format!("{}=\"{}\"", key, value);
        assert!(cleaned.contains(&expected), "{:?} -> {:?}", raw, cleaned);
    }
}

#[test]
fn test_empty_attributes_are_removed_cleanly() {
    let keys = ["from", "to", "begin", "xlink:href", "stroke-dasharray"];

    for key in keys {
        for separator in [" ", "  ", "\n    ", "\t"] {
            let raw = format!(
                "<svg><animate attributeName=\"x\"{}{}=\"\" dur=\"1s\"/></svg>",
                separator, key
            );
            let cleaned = sanitize(Some(&raw));
            assert_eq!(cleaned, "<svg><animate attributeName=\"x\" dur=\"1s\"/></svg>");
            assert!(!cleaned.contains(&format!("{}=\"\"", key)));
            assert!(!cleaned.contains("  "));
        }
    }
}

#[test]
fn test_sanitize_is_idempotent() {
    let mut inputs: Vec<String> = DOCUMENTS.iter().map(|d| d.to_string()).collect();
    inputs.extend([
        "```svg\n<svg width=\"1\" transform=scale(2) from=\"\">content</svg>\n```".to_string(),
        "Sorry, I can't help with that.".to_string(),
        "<svg x=1 y='2' z=\"\" href=\"a?b=c&d=e\" w=a=b></svg>".to_string(),
        "\u{a0}\u{a0}<svg\u{a0}opacity=.5>\u{a0}</svg>".to_string(),
        "text with = signs = everywhere".to_string(),
        String::new(),
    ]);

    for raw in inputs {
        let once = sanitize(Some(&raw));
        assert_eq!(sanitize(Some(&once)), once, "raw: {:?}", raw);
    }
}

#[test]
fn test_output_never_contains_non_breaking_space() {
    let inputs = [
        "\u{a0}<svg>\u{a0}</svg>\u{a0}",
        "```svg\n<svg>\u{a0}<g\u{a0}id=x/></svg>\n```",
        "no svg\u{a0}here",
    ];
    for raw in inputs {
        assert!(!sanitize(Some(raw)).contains('\u{a0}'));
    }
}

#[test]
fn test_empty_input_is_rejected() {
    for raw in [None, Some("")] {
        let cleaned = sanitize(raw);
        assert!(cleaned.is_empty());
        assert!(!is_acceptable(&cleaned));
    }
}

#[test]
fn test_acceptance_requires_root_marker() {
    assert_eq!(SVG_ROOT_MARKER, "<svg");
    for accepted in DOCUMENTS {
        assert!(is_acceptable(&sanitize(Some(accepted))));
    }
    for rejected in ["<g></g>", "I cannot do that.", "```\n<svg>", "svg"] {
        assert!(!is_acceptable(&sanitize(Some(rejected))), "{:?}", rejected);
    }
}
