//! The closed set of recognized component variants.

use std::fmt;

/// A UI-component variant a design node can be classified as.
///
/// The string form doubles as the emitted tag name in component-library
/// output and as the name matched against component annotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComponentKind {
    PrimaryButton,
    DefaultButton,
    ActionButton,
    IconButton,
    Link,
    OverflowSet,
    SearchBox,
    TextField,
    Dropdown,
    SpinButton,
    CheckBox,
    ChoiceGroupOption,
    ChoiceGroup,
    Toggle,
    Facepile,
    Persona,
    CommandBar,
    PivotItem,
    Pivot,
    DatePicker,
    NormalPeoplePicker,
    TagPicker,
    DetailsList,
    GroupedList,
    Breadcrumb,
    Nav,
    MessageBar,
    TeachingBubble,
    ProgressIndicator,
    Spinner,
    ActivityItem,
    Label,
    Slider,
    Rating,
    Separator,
    Stack,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 36] = [
        ComponentKind::PrimaryButton,
        ComponentKind::DefaultButton,
        ComponentKind::ActionButton,
        ComponentKind::IconButton,
        ComponentKind::Link,
        ComponentKind::OverflowSet,
        ComponentKind::SearchBox,
        ComponentKind::TextField,
        ComponentKind::Dropdown,
        ComponentKind::SpinButton,
        ComponentKind::CheckBox,
        ComponentKind::ChoiceGroupOption,
        ComponentKind::ChoiceGroup,
        ComponentKind::Toggle,
        ComponentKind::Facepile,
        ComponentKind::Persona,
        ComponentKind::CommandBar,
        ComponentKind::PivotItem,
        ComponentKind::Pivot,
        ComponentKind::DatePicker,
        ComponentKind::NormalPeoplePicker,
        ComponentKind::TagPicker,
        ComponentKind::DetailsList,
        ComponentKind::GroupedList,
        ComponentKind::Breadcrumb,
        ComponentKind::Nav,
        ComponentKind::MessageBar,
        ComponentKind::TeachingBubble,
        ComponentKind::ProgressIndicator,
        ComponentKind::Spinner,
        ComponentKind::ActivityItem,
        ComponentKind::Label,
        ComponentKind::Slider,
        ComponentKind::Rating,
        ComponentKind::Separator,
        ComponentKind::Stack,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ComponentKind::PrimaryButton => "PrimaryButton",
            ComponentKind::DefaultButton => "DefaultButton",
            ComponentKind::ActionButton => "ActionButton",
            ComponentKind::IconButton => "IconButton",
            ComponentKind::Link => "Link",
            ComponentKind::OverflowSet => "OverflowSet",
            ComponentKind::SearchBox => "SearchBox",
            ComponentKind::TextField => "TextField",
            ComponentKind::Dropdown => "Dropdown",
            ComponentKind::SpinButton => "SpinButton",
            ComponentKind::CheckBox => "CheckBox",
            ComponentKind::ChoiceGroupOption => "ChoiceGroupOption",
            ComponentKind::ChoiceGroup => "ChoiceGroup",
            ComponentKind::Toggle => "Toggle",
            ComponentKind::Facepile => "Facepile",
            ComponentKind::Persona => "Persona",
            ComponentKind::CommandBar => "CommandBar",
            ComponentKind::PivotItem => "PivotItem",
            ComponentKind::Pivot => "Pivot",
            ComponentKind::DatePicker => "DatePicker",
            ComponentKind::NormalPeoplePicker => "NormalPeoplePicker",
            ComponentKind::TagPicker => "TagPicker",
            ComponentKind::DetailsList => "DetailsList",
            ComponentKind::GroupedList => "GroupedList",
            ComponentKind::Breadcrumb => "Breadcrumb",
            ComponentKind::Nav => "Nav",
            ComponentKind::MessageBar => "MessageBar",
            ComponentKind::TeachingBubble => "TeachingBubble",
            ComponentKind::ProgressIndicator => "ProgressIndicator",
            ComponentKind::Spinner => "Spinner",
            ComponentKind::ActivityItem => "ActivityItem",
            ComponentKind::Label => "Label",
            ComponentKind::Slider => "Slider",
            ComponentKind::Rating => "Rating",
            ComponentKind::Separator => "Separator",
            ComponentKind::Stack => "Stack",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
