//! Component documentation registry.
//!
//! Each widget registers a [`ComponentDoc`]: a summary, a prop table, and a
//! copy-pasteable usage snippet. The showcase binary renders these next to a
//! live preview. Copying writes the snippet to the clipboard through OSC 52;
//! terminals that reject the sequence just ignore it, so the only failure we
//! can observe is the write itself.

use crate::ansi;
use crate::event::{LogLevel, emit_log};
use std::io::Write;

/// One documented prop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropDoc {
    /// Prop name.
    pub name: &'static str,
    /// Type as shown to the reader.
    pub type_name: &'static str,
    /// Default value, if any.
    pub default: Option<&'static str>,
    /// One-line description.
    pub description: &'static str,
}

/// Documentation for one component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComponentDoc {
    /// Component name as shown in navigation.
    pub name: &'static str,
    /// One-paragraph summary.
    pub summary: &'static str,
    /// Prop table.
    pub props: Vec<PropDoc>,
    /// Copy-pasteable usage snippet.
    pub source: &'static str,
}

impl ComponentDoc {
    /// Write the usage snippet to the clipboard via OSC 52. On write
    /// failure the error is logged and `false` returned so the caller can
    /// revert its "copied" indicator.
    pub fn copy_source<W: Write>(&self, out: &mut W) -> bool {
        let seq = ansi::osc52_copy(self.source);
        match out.write_all(seq.as_bytes()).and_then(|()| out.flush()) {
            Ok(()) => true,
            Err(e) => {
                emit_log(LogLevel::Warn, &format!("clipboard copy failed: {e}"));
                false
            }
        }
    }
}

const fn prop(
    name: &'static str,
    type_name: &'static str,
    default: Option<&'static str>,
    description: &'static str,
) -> PropDoc {
    PropDoc {
        name,
        type_name,
        default,
        description,
    }
}

/// All documented components, in navigation order.
#[must_use]
pub fn registry() -> Vec<ComponentDoc> {
    vec![
        ComponentDoc {
            name: "Carousel3D",
            summary: "Cylindrical media carousel with drag rotation, \
                      momentum, and idle auto-rotation.",
            props: vec![
                prop("items", "Vec<CarouselItem>", None, "Ordered media items."),
                prop("auto_rotate", "bool", Some("true"), "Spin while idle."),
                prop(
                    "rotate_speed",
                    "f32",
                    Some("-12.0"),
                    "Idle spin in degrees per second; sign is direction.",
                ),
                prop("radius", "f32", Some("240.0"), "Ring radius, clamped to 120..=400."),
                prop(
                    "explicit_delay_ms",
                    "Option<f32>",
                    Some("None"),
                    "Fixed per-item transition delay overriding the stagger.",
                ),
            ],
            source: "let items = vec![\n    CarouselItem::image(\"one.jpg\"),\n    CarouselItem::video(\"two.mp4\"),\n];\nlet carousel = Carousel3D::new(items, CarouselConfig::default());",
        },
        ComponentDoc {
            name: "DataTable",
            summary: "Filterable, sortable table with fixed-size pages.",
            props: vec![
                prop("columns", "Vec<Column>", None, "Column keys and labels."),
                prop("rows", "Vec<Vec<String>>", None, "Row data, one field per column."),
                prop("page_size", "usize", None, "Rows per page."),
            ],
            source: "let table = DataTable::new(\n    vec![Column::new(\"name\", \"Name\")],\n    rows,\n    10,\n);",
        },
        ComponentDoc {
            name: "MultiStepForm",
            summary: "Wizard-style form; values survive step navigation.",
            props: vec![
                prop("steps", "Vec<FormStep>", None, "Ordered steps with their fields."),
            ],
            source: "let form = MultiStepForm::new(vec![\n    FormStep::new(\"Account\", vec![FormField::new(\"email\", \"Email\")]),\n]);",
        },
        ComponentDoc {
            name: "Modal",
            summary: "Draggable dialog; Escape or a backdrop press dismisses.",
            props: vec![
                prop("title", "String", None, "Title bar text, also the drag handle."),
                prop("width", "u32", None, "Window width in cells."),
                prop("height", "u32", None, "Window height in cells."),
            ],
            source: "let mut modal = Modal::new(\"Settings\", body, 40, 12);\nmodal.open();",
        },
        ComponentDoc {
            name: "Dropdown",
            summary: "Expandable option list with keyboard and pointer selection.",
            props: vec![
                prop("label", "String", None, "Trigger text before a selection exists."),
                prop("options", "Vec<String>", None, "Selectable options."),
            ],
            source: "let dropdown = Dropdown::new(\"Pick one\", options);",
        },
        ComponentDoc {
            name: "Tabs",
            summary: "Tab strip showing a single active panel.",
            props: vec![
                prop("labels", "Vec<String>", None, "Tab labels."),
                prop("panels", "Vec<Vec<String>>", None, "Panel content per tab."),
            ],
            source: "let tabs = Tabs::new(labels, panels);",
        },
        ComponentDoc {
            name: "Button",
            summary: "Clickable button in five visual variants.",
            props: vec![
                prop("label", "String", None, "Button text."),
                prop(
                    "variant",
                    "ButtonVariant",
                    Some("Primary"),
                    "Primary, Secondary, Outline, Ghost, or Destructive.",
                ),
            ],
            source: "let button = Button::new(\"Save\", ButtonVariant::Primary);",
        },
        ComponentDoc {
            name: "Card",
            summary: "Bordered container with an optional title.",
            props: vec![
                prop("title", "Option<String>", Some("None"), "Heading above the body."),
                prop("body", "Vec<String>", None, "Body lines."),
            ],
            source: "let card = Card::titled(\"Billing\", body);",
        },
        ComponentDoc {
            name: "HeroText",
            summary: "Headline text animated per grapheme cluster.",
            props: vec![
                prop("text", "String", None, "The headline."),
                prop(
                    "effect",
                    "HeroEffect",
                    None,
                    "Reveal, Wave, or Sweep.",
                ),
            ],
            source: "let hero = HeroText::new(\"ChadCn UI\", HeroEffect::Wave);",
        },
    ]
}

/// Look up a component by name, case-insensitively.
#[must_use]
pub fn find(name: &str) -> Option<ComponentDoc> {
    registry()
        .into_iter()
        .find(|doc| doc.name.eq_ignore_ascii_case(name))
}
