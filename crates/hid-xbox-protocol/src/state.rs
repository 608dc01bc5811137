//! Canonical controller snapshot and per-field change events.
//!
//! [`StateChange`] is a tagged union over the fixed field set, so every
//! update is checked at compile time. The protocol's camelCase names (kept
//! verbatim, including `hambuger` for the menu button) are only used as
//! output labels via [`StateChange::key`] and serde.

use serde::{Deserialize, Serialize};

/// Number of fields in [`ControllerState`].
pub const FIELD_COUNT: usize = 21;

/// One field that changed, carrying its new value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum StateChange {
    LeftThumbHorizontal(f32),
    LeftThumbVertical(f32),
    RightThumbHorizontal(f32),
    RightThumbVertical(f32),
    LeftTrigger(f32),
    RightTrigger(f32),
    DUp(bool),
    DDown(bool),
    DLeft(bool),
    DRight(bool),
    A(bool),
    B(bool),
    X(bool),
    Y(bool),
    LeftBumper(bool),
    RightBumper(bool),
    Hambuger(bool),
    ThumbLeftPressed(bool),
    ThumbRightPressed(bool),
    Windows(bool),
    Xbox(bool),
}

impl StateChange {
    /// Protocol field name, as consumed by downstream message sinks.
    pub fn key(&self) -> &'static str {
        match self {
            Self::LeftThumbHorizontal(_) => "leftThumbHorizontal",
            Self::LeftThumbVertical(_) => "leftThumbVertical",
            Self::RightThumbHorizontal(_) => "rightThumbHorizontal",
            Self::RightThumbVertical(_) => "rightThumbVertical",
            Self::LeftTrigger(_) => "leftTrigger",
            Self::RightTrigger(_) => "rightTrigger",
            Self::DUp(_) => "dUp",
            Self::DDown(_) => "dDown",
            Self::DLeft(_) => "dLeft",
            Self::DRight(_) => "dRight",
            Self::A(_) => "a",
            Self::B(_) => "b",
            Self::X(_) => "x",
            Self::Y(_) => "y",
            Self::LeftBumper(_) => "leftBumper",
            Self::RightBumper(_) => "rightBumper",
            Self::Hambuger(_) => "hambuger",
            Self::ThumbLeftPressed(_) => "thumbLeftPressed",
            Self::ThumbRightPressed(_) => "thumbRightPressed",
            Self::Windows(_) => "windows",
            Self::Xbox(_) => "xbox",
        }
    }

    /// Analog value for axes and triggers, `None` for buttons.
    pub fn analog(&self) -> Option<f32> {
        match *self {
            Self::LeftThumbHorizontal(v)
            | Self::LeftThumbVertical(v)
            | Self::RightThumbHorizontal(v)
            | Self::RightThumbVertical(v)
            | Self::LeftTrigger(v)
            | Self::RightTrigger(v) => Some(v),
            _ => None,
        }
    }

    /// Pressed state for buttons and D-pad directions, `None` for analog fields.
    pub fn pressed(&self) -> Option<bool> {
        match *self {
            Self::DUp(p)
            | Self::DDown(p)
            | Self::DLeft(p)
            | Self::DRight(p)
            | Self::A(p)
            | Self::B(p)
            | Self::X(p)
            | Self::Y(p)
            | Self::LeftBumper(p)
            | Self::RightBumper(p)
            | Self::Hambuger(p)
            | Self::ThumbLeftPressed(p)
            | Self::ThumbRightPressed(p)
            | Self::Windows(p)
            | Self::Xbox(p) => Some(p),
            _ => None,
        }
    }
}

/// Full controller snapshot. All fields start at zero / released.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControllerState {
    /// −1.0 (left) … +1.0 (right).
    pub left_thumb_horizontal: f32,
    /// −1.0 … +1.0.
    pub left_thumb_vertical: f32,
    /// −1.0 (left) … +1.0 (right).
    pub right_thumb_horizontal: f32,
    /// −1.0 … +1.0.
    pub right_thumb_vertical: f32,
    /// 0.0 (released) … 1.0.
    pub left_trigger: f32,
    /// 0.0 (released) … 1.0.
    pub right_trigger: f32,
    pub d_up: bool,
    pub d_down: bool,
    pub d_left: bool,
    pub d_right: bool,
    pub a: bool,
    pub b: bool,
    pub x: bool,
    pub y: bool,
    pub left_bumper: bool,
    pub right_bumper: bool,
    /// Menu ("hamburger") button.
    pub hambuger: bool,
    pub thumb_left_pressed: bool,
    pub thumb_right_pressed: bool,
    /// View ("windows") button.
    pub windows: bool,
    pub xbox: bool,
}

impl ControllerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every field in emission order: axes, triggers, D-pad, then buttons.
    pub fn fields(&self) -> [StateChange; FIELD_COUNT] {
        [
            StateChange::LeftThumbHorizontal(self.left_thumb_horizontal),
            StateChange::LeftThumbVertical(self.left_thumb_vertical),
            StateChange::RightThumbHorizontal(self.right_thumb_horizontal),
            StateChange::RightThumbVertical(self.right_thumb_vertical),
            StateChange::LeftTrigger(self.left_trigger),
            StateChange::RightTrigger(self.right_trigger),
            StateChange::DUp(self.d_up),
            StateChange::DDown(self.d_down),
            StateChange::DLeft(self.d_left),
            StateChange::DRight(self.d_right),
            StateChange::A(self.a),
            StateChange::B(self.b),
            StateChange::X(self.x),
            StateChange::Y(self.y),
            StateChange::LeftBumper(self.left_bumper),
            StateChange::RightBumper(self.right_bumper),
            StateChange::Hambuger(self.hambuger),
            StateChange::ThumbLeftPressed(self.thumb_left_pressed),
            StateChange::ThumbRightPressed(self.thumb_right_pressed),
            StateChange::Windows(self.windows),
            StateChange::Xbox(self.xbox),
        ]
    }

    /// Store `change` if it differs from the current value. Returns whether it did.
    pub fn apply(&mut self, change: StateChange) -> bool {
        match change {
            StateChange::LeftThumbHorizontal(v) => replace_analog(&mut self.left_thumb_horizontal, v),
            StateChange::LeftThumbVertical(v) => replace_analog(&mut self.left_thumb_vertical, v),
            StateChange::RightThumbHorizontal(v) => {
                replace_analog(&mut self.right_thumb_horizontal, v)
            }
            StateChange::RightThumbVertical(v) => replace_analog(&mut self.right_thumb_vertical, v),
            StateChange::LeftTrigger(v) => replace_analog(&mut self.left_trigger, v),
            StateChange::RightTrigger(v) => replace_analog(&mut self.right_trigger, v),
            StateChange::DUp(p) => replace_pressed(&mut self.d_up, p),
            StateChange::DDown(p) => replace_pressed(&mut self.d_down, p),
            StateChange::DLeft(p) => replace_pressed(&mut self.d_left, p),
            StateChange::DRight(p) => replace_pressed(&mut self.d_right, p),
            StateChange::A(p) => replace_pressed(&mut self.a, p),
            StateChange::B(p) => replace_pressed(&mut self.b, p),
            StateChange::X(p) => replace_pressed(&mut self.x, p),
            StateChange::Y(p) => replace_pressed(&mut self.y, p),
            StateChange::LeftBumper(p) => replace_pressed(&mut self.left_bumper, p),
            StateChange::RightBumper(p) => replace_pressed(&mut self.right_bumper, p),
            StateChange::Hambuger(p) => replace_pressed(&mut self.hambuger, p),
            StateChange::ThumbLeftPressed(p) => replace_pressed(&mut self.thumb_left_pressed, p),
            StateChange::ThumbRightPressed(p) => replace_pressed(&mut self.thumb_right_pressed, p),
            StateChange::Windows(p) => replace_pressed(&mut self.windows, p),
            StateChange::Xbox(p) => replace_pressed(&mut self.xbox, p),
        }
    }

    /// Apply `candidates` in order and return the ones that changed something.
    pub fn merge<I>(&mut self, candidates: I) -> Vec<StateChange>
    where
        I: IntoIterator<Item = StateChange>,
    {
        candidates
            .into_iter()
            .filter(|change| self.apply(*change))
            .collect()
    }
}

// Decoded analog values are always finite, so bitwise equality is exact equality.
fn replace_analog(slot: &mut f32, value: f32) -> bool {
    if slot.to_bits() == value.to_bits() {
        return false;
    }
    *slot = value;
    true
}

fn replace_pressed(slot: &mut bool, value: bool) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}
