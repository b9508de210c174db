//! Transition and animation extraction.
//!
//! Computed `transition-*` and `animation-*` values are comma-separated
//! per-layer lists. The layer count comes from `transition-property` /
//! `animation-name`; a sub-property list shorter than that reuses its first
//! entry for the missing layers.

use std::fmt::Write;

use crate::document::Document;
use crate::parser::split_top_level;
use crate::types::{
    AnimationRecord, KeyframeRecord, KeyframesRule, MotionReport, StylesheetIndex,
    TransitionRecord,
};

fn computed_layers<D: Document>(document: &D, node: &D::Node, property: &str) -> Vec<String> {
    document
        .computed_value(node, property)
        .map(|value| {
            split_top_level(&value, ',')
                .into_iter()
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn layer(list: &[String], index: usize) -> String {
    list.get(index).or(list.first()).cloned().unwrap_or_default()
}

fn is_zero_time(value: &str) -> bool {
    let value = value.trim();
    let number = value
        .strip_suffix("ms")
        .or_else(|| value.strip_suffix('s'))
        .unwrap_or(value);
    number.parse::<f64>().is_ok_and(|n| n == 0.0)
}

fn transitions<D: Document>(document: &D, node: &D::Node) -> Vec<TransitionRecord> {
    let properties = computed_layers(document, node, "transition-property");
    let durations = computed_layers(document, node, "transition-duration");
    let timing = computed_layers(document, node, "transition-timing-function");
    let delays = computed_layers(document, node, "transition-delay");

    // The initial `all 0s ease 0s` is not a transition anyone wrote.
    if durations.iter().all(|d| is_zero_time(d)) {
        return Vec::new();
    }

    properties
        .iter()
        .enumerate()
        .filter(|(_, property)| property.as_str() != "none")
        .map(|(i, property)| TransitionRecord {
            property: property.clone(),
            duration: layer(&durations, i),
            timing_function: layer(&timing, i),
            delay: layer(&delays, i),
        })
        .collect()
}

fn animations<D: Document>(document: &D, node: &D::Node) -> Vec<AnimationRecord> {
    let names = computed_layers(document, node, "animation-name");
    let durations = computed_layers(document, node, "animation-duration");
    let timing = computed_layers(document, node, "animation-timing-function");
    let delays = computed_layers(document, node, "animation-delay");
    let iterations = computed_layers(document, node, "animation-iteration-count");
    let directions = computed_layers(document, node, "animation-direction");
    let fill_modes = computed_layers(document, node, "animation-fill-mode");

    names
        .iter()
        .enumerate()
        .filter(|(_, name)| name.as_str() != "none")
        .map(|(i, name)| AnimationRecord {
            name: name.clone(),
            duration: layer(&durations, i),
            timing_function: layer(&timing, i),
            delay: layer(&delays, i),
            iteration_count: layer(&iterations, i),
            direction: layer(&directions, i),
            fill_mode: layer(&fill_modes, i),
        })
        .collect()
}

/// Serializes a `@keyframes` rule back to CSS text.
pub fn keyframes_css(keyframes: &KeyframesRule) -> String {
    let mut css = format!("@keyframes {} {{\n", keyframes.name);
    for frame in &keyframes.frames {
        let _ = write!(css, "  {} {{", frame.key_text);
        for (prop, value) in &frame.declarations {
            let _ = write!(css, " {prop}: {value};");
        }
        css.push_str(" }\n");
    }
    css.push('}');
    css
}

/// Extracts the transitions and animations running on `node`, with the
/// `@keyframes` bodies their names refer to.
pub fn extract<D: Document>(
    document: &D,
    node: &D::Node,
    index: &StylesheetIndex,
) -> MotionReport {
    let transitions = transitions(document, node);
    let animations = animations(document, node);

    let mut keyframes: Vec<KeyframeRecord> = Vec::new();
    for animation in &animations {
        if keyframes.iter().any(|k| k.name == animation.name) {
            continue;
        }
        match index.keyframes_named(&animation.name) {
            Some(rule) => keyframes.push(KeyframeRecord {
                name: rule.name.clone(),
                css_text: keyframes_css(rule),
            }),
            None => log::trace!("animation: no readable @keyframes {}", animation.name),
        }
    }

    MotionReport {
        transitions,
        animations,
        keyframes,
    }
}
