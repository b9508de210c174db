/// A property paired with its resolved value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyValue {
    pub prop: String,
    pub value: String,
}

impl PropertyValue {
    pub fn new(prop: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            prop: prop.into(),
            value: value.into(),
        }
    }
}

/// A custom property declared by a rule reaching the element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinedVariable {
    pub name: String,
    pub declared_value: String,
    pub resolved_value: String,
    /// Selector text of the declaring rule.
    pub source: String,
}

/// A `var()` reference found in one of the element's values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsedVariable {
    pub name: String,
    /// The property whose value contains the reference.
    pub used_in: String,
    pub fallback: Option<String>,
    pub resolved: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableReport {
    pub defined: Vec<DefinedVariable>,
    pub used: Vec<UsedVariable>,
}

impl VariableReport {
    pub fn is_empty(&self) -> bool {
        self.defined.is_empty() && self.used.is_empty()
    }
}

/// One layer of the element's computed `transition`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionRecord {
    pub property: String,
    pub duration: String,
    pub timing_function: String,
    pub delay: String,
}

/// One layer of the element's computed `animation`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationRecord {
    pub name: String,
    pub duration: String,
    pub timing_function: String,
    pub delay: String,
    pub iteration_count: String,
    pub direction: String,
    pub fill_mode: String,
}

/// A `@keyframes` rule serialized back to CSS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyframeRecord {
    pub name: String,
    pub css_text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MotionReport {
    pub transitions: Vec<TransitionRecord>,
    pub animations: Vec<AnimationRecord>,
    pub keyframes: Vec<KeyframeRecord>,
}

impl MotionReport {
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty() && self.animations.is_empty()
    }
}
