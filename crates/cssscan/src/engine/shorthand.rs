//! Shorthand reconstruction.
//!
//! [`optimize`] turns an aggregated longhand list into the smallest block a
//! person would write by hand:
//!
//! ```css
//! margin-top: 4px; margin-right: 8px;      margin: 4px 8px;
//! margin-bottom: 4px; margin-left: 8px;  =>
//! opacity: 1;                              (elided, default)
//! ```
//!
//! ## Folding rules
//!
//! | Group | Folds when | Output |
//! |-------|-----------|--------|
//! | `margin`, `padding` | all four sides present | 1-4 values by the compaction law |
//! | `border-radius` | all four corners present, none elliptical | 1 or 4 values |
//! | `border` | every side has the same width/style/color, style is not `none`, `border-image-*` at defaults | `W S C` |
//! | `background` | image is `none`, every other sub-property at default | the color |
//!
//! The pass is linear: each longhand is visited once and a processed set
//! keeps grouped longhands from being emitted twice.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use phf::phf_map;

use crate::engine::defaults::{initial_value, is_default_value};
use crate::types::PropertyValue;

/// How a group's longhands combine into the shorthand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fold {
    FourSides,
    Corners,
    Border,
    Background,
}

/// A shorthand and the longhands it is rebuilt from.
#[derive(Debug)]
pub struct ShorthandGroup {
    pub name: &'static str,
    pub longhands: &'static [&'static str],
    pub fold: Fold,
}

const BORDER_WIDTHS: [&str; 4] = [
    "border-top-width",
    "border-right-width",
    "border-bottom-width",
    "border-left-width",
];
const BORDER_STYLES: [&str; 4] = [
    "border-top-style",
    "border-right-style",
    "border-bottom-style",
    "border-left-style",
];
const BORDER_COLORS: [&str; 4] = [
    "border-top-color",
    "border-right-color",
    "border-bottom-color",
    "border-left-color",
];
const BORDER_IMAGE: [&str; 5] = [
    "border-image-source",
    "border-image-slice",
    "border-image-width",
    "border-image-outset",
    "border-image-repeat",
];
const BACKGROUND_DEFAULTED: [&str; 8] = [
    "background-repeat",
    "background-attachment",
    "background-position",
    "background-position-x",
    "background-position-y",
    "background-size",
    "background-origin",
    "background-clip",
];

pub static SHORTHAND_GROUPS: phf::Map<&'static str, ShorthandGroup> = phf_map! {
    "margin" => ShorthandGroup {
        name: "margin",
        longhands: &["margin-top", "margin-right", "margin-bottom", "margin-left"],
        fold: Fold::FourSides,
    },
    "padding" => ShorthandGroup {
        name: "padding",
        longhands: &["padding-top", "padding-right", "padding-bottom", "padding-left"],
        fold: Fold::FourSides,
    },
    "border-radius" => ShorthandGroup {
        name: "border-radius",
        longhands: &[
            "border-top-left-radius",
            "border-top-right-radius",
            "border-bottom-right-radius",
            "border-bottom-left-radius",
        ],
        fold: Fold::Corners,
    },
    "border" => ShorthandGroup {
        name: "border",
        longhands: &[
            "border-top-width", "border-right-width", "border-bottom-width", "border-left-width",
            "border-top-style", "border-right-style", "border-bottom-style", "border-left-style",
            "border-top-color", "border-right-color", "border-bottom-color", "border-left-color",
            "border-image-source", "border-image-slice", "border-image-width",
            "border-image-outset", "border-image-repeat",
        ],
        fold: Fold::Border,
    },
    "background" => ShorthandGroup {
        name: "background",
        longhands: &[
            "background-color", "background-image", "background-repeat",
            "background-attachment", "background-position", "background-position-x",
            "background-position-y", "background-size", "background-origin", "background-clip",
        ],
        fold: Fold::Background,
    },
};

/// Shorthands that expand into longhands but are never rebuilt.
static PARTIAL_SHORTHANDS: phf::Map<&'static str, &'static [&'static str]> = phf_map! {
    "border-top" => &["border-top-width", "border-top-style", "border-top-color"],
    "border-right" => &["border-right-width", "border-right-style", "border-right-color"],
    "border-bottom" => &["border-bottom-width", "border-bottom-style", "border-bottom-color"],
    "border-left" => &["border-left-width", "border-left-style", "border-left-color"],
    "border-width" => &BORDER_WIDTHS,
    "border-style" => &BORDER_STYLES,
    "border-color" => &BORDER_COLORS,
    "border-image" => &BORDER_IMAGE,
    "outline" => &["outline-width", "outline-style", "outline-color"],
    "overflow" => &["overflow-x", "overflow-y"],
    "inset" => &["top", "right", "bottom", "left"],
    "gap" => &["row-gap", "column-gap"],
    "flex" => &["flex-grow", "flex-shrink", "flex-basis"],
    "text-decoration" => &[
        "text-decoration-line", "text-decoration-style", "text-decoration-color",
    ],
    "transition" => &[
        "transition-property", "transition-duration",
        "transition-timing-function", "transition-delay",
    ],
    "animation" => &[
        "animation-name", "animation-duration", "animation-timing-function",
        "animation-delay", "animation-iteration-count", "animation-direction",
        "animation-fill-mode",
    ],
};

static GROUP_OF_LONGHAND: Lazy<HashMap<&'static str, &'static ShorthandGroup>> = Lazy::new(|| {
    SHORTHAND_GROUPS
        .values()
        .flat_map(|group| group.longhands.iter().map(move |l| (*l, group)))
        .collect()
});

/// The group a longhand folds into, if any.
pub fn group_of(longhand: &str) -> Option<&'static ShorthandGroup> {
    GROUP_OF_LONGHAND.get(longhand).copied()
}

/// The longhands a declared shorthand stands for, mirroring how the CSS
/// object model enumerates a rule's declarations.
pub fn longhands_of(property: &str) -> Option<&'static [&'static str]> {
    SHORTHAND_GROUPS
        .get(property)
        .map(|group| group.longhands)
        .or_else(|| PARTIAL_SHORTHANDS.get(property).copied())
}

/// Combines top/right/bottom/left values by the CSS compaction law.
///
/// ```
/// use cssscan::combine_four;
///
/// assert_eq!(combine_four(["4px", "4px", "4px", "4px"]), "4px");
/// assert_eq!(combine_four(["4px", "8px", "4px", "8px"]), "4px 8px");
/// assert_eq!(combine_four(["4px", "8px", "6px", "8px"]), "4px 8px 6px");
/// assert_eq!(combine_four(["4px", "8px", "6px", "2px"]), "4px 8px 6px 2px");
/// ```
pub fn combine_four(values: [&str; 4]) -> String {
    let [top, right, bottom, left] = values;
    if top == right && right == bottom && bottom == left {
        top.to_string()
    } else if top == bottom && right == left {
        format!("{top} {right}")
    } else if right == left {
        format!("{top} {right} {bottom}")
    } else {
        format!("{top} {right} {bottom} {left}")
    }
}

enum Folded {
    Shorthand(PropertyValue),
    Elided,
    NotFoldable,
}

fn all_present<'a>(values: &HashMap<&str, &'a str>, names: &[&str]) -> Option<Vec<&'a str>> {
    names.iter().map(|name| values.get(name).copied()).collect()
}

fn emit_unless_default(name: &str, value: String) -> Folded {
    if is_default_value(name, &value) {
        Folded::Elided
    } else {
        Folded::Shorthand(PropertyValue::new(name, value))
    }
}

fn fold_four_sides(group: &ShorthandGroup, values: &HashMap<&str, &str>) -> Folded {
    match all_present(values, group.longhands) {
        Some(sides) => emit_unless_default(
            group.name,
            combine_four([sides[0], sides[1], sides[2], sides[3]]),
        ),
        None => Folded::NotFoldable,
    }
}

fn fold_corners(group: &ShorthandGroup, values: &HashMap<&str, &str>) -> Folded {
    let Some(corners) = all_present(values, group.longhands) else {
        return Folded::NotFoldable;
    };

    // Elliptical corners would need the `/` form.
    if corners
        .iter()
        .any(|c| c.contains('/') || c.split_whitespace().count() > 1)
    {
        return Folded::NotFoldable;
    }

    let combined = if corners.iter().all(|c| *c == corners[0]) {
        corners[0].to_string()
    } else {
        corners.join(" ")
    };
    emit_unless_default(group.name, combined)
}

fn fold_border(group: &ShorthandGroup, values: &HashMap<&str, &str>) -> Folded {
    let Some(styles) = all_present(values, &BORDER_STYLES) else {
        return Folded::NotFoldable;
    };

    if styles.iter().all(|s| *s == "none") {
        return Folded::Elided;
    }

    let (Some(widths), Some(colors)) = (
        all_present(values, &BORDER_WIDTHS),
        all_present(values, &BORDER_COLORS),
    ) else {
        return Folded::NotFoldable;
    };

    let uniform = |sides: &[&str]| sides.iter().all(|s| *s == sides[0]);
    if !uniform(&widths) || !uniform(&styles) || !uniform(&colors) {
        return Folded::NotFoldable;
    }

    let image_default = BORDER_IMAGE
        .iter()
        .all(|name| values.get(name).is_none_or(|v| is_default_value(name, v)));
    if !image_default {
        return Folded::NotFoldable;
    }

    emit_unless_default(
        group.name,
        format!("{} {} {}", widths[0], styles[0], colors[0]),
    )
}

fn fold_background(group: &ShorthandGroup, values: &HashMap<&str, &str>) -> Folded {
    if values.get("background-image").copied() != Some("none") {
        return Folded::NotFoldable;
    }

    let rest_default = BACKGROUND_DEFAULTED
        .iter()
        .all(|name| values.get(name).is_none_or(|v| is_default_value(name, v)));
    if !rest_default {
        return Folded::NotFoldable;
    }

    match values.get("background-color") {
        Some(color) if !is_default_value("background-color", color) => {
            Folded::Shorthand(PropertyValue::new(group.name, *color))
        }
        _ => Folded::Elided,
    }
}

fn fold_group(group: &ShorthandGroup, values: &HashMap<&str, &str>) -> Folded {
    match group.fold {
        Fold::FourSides => fold_four_sides(group, values),
        Fold::Corners => fold_corners(group, values),
        Fold::Border => fold_border(group, values),
        Fold::Background => fold_background(group, values),
    }
}

/// Elides defaults and folds longhand groups into shorthands.
///
/// Output keeps the first-occurrence order of each group's first longhand,
/// and `optimize(&optimize(x)) == optimize(x)`.
pub fn optimize(properties: &[PropertyValue]) -> Vec<PropertyValue> {
    let values: HashMap<&str, &str> = properties
        .iter()
        .map(|p| (p.prop.as_str(), p.value.as_str()))
        .collect();
    let mut processed: HashSet<&str> = HashSet::new();
    let mut attempted: HashSet<&'static str> = HashSet::new();
    let mut optimized = Vec::new();

    for property in properties {
        let prop = property.prop.as_str();
        if processed.contains(prop) {
            continue;
        }

        if let Some(group) = group_of(prop) {
            if attempted.insert(group.name) {
                match fold_group(group, &values) {
                    Folded::NotFoldable => {}
                    folded => {
                        processed.extend(group.longhands.iter().copied());
                        if let Folded::Shorthand(shorthand) = folded {
                            optimized.push(shorthand);
                        }
                        continue;
                    }
                }
            }
        }

        processed.insert(prop);
        if !is_default_value(prop, &property.value) {
            optimized.push(property.clone());
        }
    }

    optimized
}

const BORDER_STYLE_KEYWORDS: [&str; 10] = [
    "none", "hidden", "dotted", "dashed", "solid", "double", "groove", "ridge", "inset", "outset",
];

fn expand_sides(names: &[&str], value: &str) -> Vec<PropertyValue> {
    let parts: Vec<&str> = value.split_whitespace().collect();
    let (top, right, bottom, left) = match parts.as_slice() {
        [all] => (*all, *all, *all, *all),
        [v, h] => (*v, *h, *v, *h),
        [t, h, b] => (*t, *h, *b, *h),
        [t, r, b, l, ..] => (*t, *r, *b, *l),
        [] => return Vec::new(),
    };
    names
        .iter()
        .zip([top, right, bottom, left])
        .map(|(name, v)| PropertyValue::new(*name, v))
        .collect()
}

fn looks_like_width(token: &str) -> bool {
    token.starts_with(|c: char| c.is_ascii_digit() || c == '.')
        || matches!(token, "thin" | "medium" | "thick")
}

/// Splits `W S C` into its parts, filling omitted parts with initial values.
fn border_parts(value: &str) -> (String, String, String) {
    let mut width = "medium".to_string();
    let mut style = "none".to_string();
    let mut color = "currentcolor".to_string();
    for token in value.split_whitespace() {
        if BORDER_STYLE_KEYWORDS.contains(&token) {
            style = token.to_string();
        } else if looks_like_width(token) {
            width = token.to_string();
        } else {
            color = token.to_string();
        }
    }
    (width, style, color)
}

/// Expands a declared shorthand into longhand declarations.
///
/// Longhands and unknown properties come back unchanged. Used by hosts that
/// only have declared text to work from, such as the test fixture.
pub fn expand_shorthand(property: &str, value: &str) -> Vec<PropertyValue> {
    let value = value.trim();
    match property {
        "margin" | "padding" | "border-width" | "border-style" | "border-color" | "inset" => {
            let names = longhands_of(property).unwrap_or_default();
            expand_sides(&names[..4.min(names.len())], value)
        }
        "border-radius" if !value.contains('/') => {
            expand_sides(SHORTHAND_GROUPS["border-radius"].longhands, value)
        }
        "border" | "border-top" | "border-right" | "border-bottom" | "border-left" => {
            let (width, style, color) = border_parts(value);
            let sides = if property == "border" {
                vec!["top", "right", "bottom", "left"]
            } else {
                vec![property.trim_start_matches("border-")]
            };
            let mut expanded = Vec::new();
            for side in sides {
                expanded.push(PropertyValue::new(format!("border-{side}-width"), &width));
                expanded.push(PropertyValue::new(format!("border-{side}-style"), &style));
                expanded.push(PropertyValue::new(format!("border-{side}-color"), &color));
            }
            if property == "border" {
                expanded.extend(BORDER_IMAGE.iter().filter_map(|name| {
                    initial_value(name).map(|initial| PropertyValue::new(*name, initial))
                }));
            }
            expanded
        }
        "background" => {
            let mut expanded: Vec<PropertyValue> = SHORTHAND_GROUPS["background"]
                .longhands
                .iter()
                .filter_map(|name| {
                    initial_value(name).map(|initial| PropertyValue::new(*name, initial))
                })
                .collect();
            let slot = if value.starts_with("url(") || value.contains("gradient(") {
                "background-image"
            } else {
                "background-color"
            };
            if let Some(entry) = expanded.iter_mut().find(|p| p.prop == slot) {
                entry.value = value.to_string();
            }
            expanded
        }
        _ => vec![PropertyValue::new(property, value)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(pairs: &[(&str, &str)]) -> Vec<PropertyValue> {
        pairs.iter().map(|(p, v)| PropertyValue::new(*p, *v)).collect()
    }

    #[test]
    fn every_longhand_maps_to_its_group() {
        assert_eq!(group_of("margin-left").map(|g| g.name), Some("margin"));
        assert_eq!(group_of("border-image-slice").map(|g| g.name), Some("border"));
        assert_eq!(group_of("background-clip").map(|g| g.name), Some("background"));
        assert!(group_of("color").is_none());
        assert!(group_of("margin").is_none());
    }

    #[test]
    fn partial_groups_are_emitted_individually() {
        let input = props(&[
            ("margin-top", "4px"),
            ("margin-left", "0px"),
            ("color", "red"),
        ]);
        assert_eq!(
            optimize(&input),
            props(&[("margin-top", "4px"), ("color", "red")])
        );
    }

    #[test]
    fn all_zero_sides_disappear() {
        let input = props(&[
            ("padding-top", "0px"),
            ("padding-right", "0px"),
            ("padding-bottom", "0px"),
            ("padding-left", "0px"),
        ]);
        assert!(optimize(&input).is_empty());
    }

    #[test]
    fn elliptical_corners_stay_longhand() {
        let input = props(&[
            ("border-top-left-radius", "4px 8px"),
            ("border-top-right-radius", "4px"),
            ("border-bottom-right-radius", "4px"),
            ("border-bottom-left-radius", "4px"),
        ]);
        assert_eq!(optimize(&input), input);
    }

    #[test]
    fn expand_two_value_margin() {
        assert_eq!(
            expand_shorthand("margin", "0 10px"),
            props(&[
                ("margin-top", "0"),
                ("margin-right", "10px"),
                ("margin-bottom", "0"),
                ("margin-left", "10px"),
            ])
        );
    }

    #[test]
    fn expand_border_side() {
        assert_eq!(
            expand_shorthand("border-left", "2px dashed red"),
            props(&[
                ("border-left-width", "2px"),
                ("border-left-style", "dashed"),
                ("border-left-color", "red"),
            ])
        );
    }

    #[test]
    fn longhands_of_known_shorthands() {
        assert_eq!(longhands_of("padding").map(|l| l.len()), Some(4));
        assert_eq!(longhands_of("border").map(|l| l.len()), Some(17));
        assert_eq!(longhands_of("gap"), Some(&["row-gap", "column-gap"][..]));
        assert!(longhands_of("color").is_none());
    }
}
