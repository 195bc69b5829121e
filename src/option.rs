//! Selectable option data model.
//!
//! Options come in two shapes: plain leaves and group headers that own one
//! level of child options. Nesting deeper than one level is not representable.

/// A single selectable value with its display metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectableValue<T> {
    /// Identity of the option, compared with `PartialEq`
    pub value: T,
    /// Display text (absent labels estimate as zero width)
    pub label: Option<String>,
    /// Secondary line shown under the label (non-virtualized menus only)
    pub description: Option<String>,
    /// Short glyph drawn before the label
    pub icon: Option<String>,
    /// Hover text for the option row
    pub title: Option<String>,
    /// Disabled options are drawn dimmed and cannot be picked
    pub is_disabled: bool,
}

impl<T> SelectableValue<T> {
    /// Creates a value with a label and no extra metadata.
    pub fn new(value: T, label: impl Into<String>) -> Self {
        Self {
            value,
            label: Some(label.into()),
            description: None,
            icon: None,
            title: None,
            is_disabled: false,
        }
    }

    /// Creates a value without a label.
    pub fn unlabeled(value: T) -> Self {
        Self {
            value,
            label: None,
            description: None,
            icon: None,
            title: None,
            is_disabled: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.is_disabled = disabled;
        self
    }

    /// Label text, or an empty string when absent.
    pub fn label_str(&self) -> &str {
        self.label.as_deref().unwrap_or("")
    }
}

/// A top-level menu option: either a plain leaf or a group header with children.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectOption<T> {
    Leaf(SelectableValue<T>),
    Group {
        header: SelectableValue<T>,
        children: Vec<SelectableValue<T>>,
    },
}

impl<T> SelectOption<T> {
    /// Creates a leaf option.
    pub fn leaf(value: T, label: impl Into<String>) -> Self {
        SelectOption::Leaf(SelectableValue::new(value, label))
    }

    /// Creates a group option.
    pub fn group(value: T, label: impl Into<String>, children: Vec<SelectableValue<T>>) -> Self {
        SelectOption::Group {
            header: SelectableValue::new(value, label),
            children,
        }
    }

    /// The option's own value (the header for groups).
    pub fn data(&self) -> &SelectableValue<T> {
        match self {
            SelectOption::Leaf(data) => data,
            SelectOption::Group { header, .. } => header,
        }
    }

    /// Child options; empty for leaves.
    pub fn children(&self) -> &[SelectableValue<T>] {
        match self {
            SelectOption::Leaf(_) => &[],
            SelectOption::Group { children, .. } => children,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, SelectOption::Group { .. })
    }

    /// Number of rows this option occupies once flattened.
    pub fn flattened_len(&self) -> usize {
        match self {
            SelectOption::Leaf(_) => 1,
            SelectOption::Group { children, .. } => 1 + children.len(),
        }
    }
}
