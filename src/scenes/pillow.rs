//! The pillow clicking scene.
//!
//! Pressing the pillow bumps a click counter, updates the counter label,
//! plays a sound and pulses the pillow. Pressing the top-left hotspot
//! toggles a side panel that slides in from the left.
//!
//! [`PillowState`] is replaced on every enter, so the counter starts at 0
//! and the panel starts closed each time the scene is shown.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info};
use raylib::prelude::{Color, Vector2};

use crate::components::clickable::Clickable;
use crate::components::dynamictext::DynamicText;
use crate::components::rectshape::RectShape;
use crate::components::scale::Scale;
use crate::components::scenescoped::SceneScoped;
use crate::components::screenposition::ScreenPosition;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::events::input::{ClickEvent, PointerDownEvent};
use crate::events::sceneeffect::SceneEffect;
use crate::resources::clearcolor::ClearColor;
use crate::resources::imagesizes::ImageSizes;
use crate::resources::screensize::ScreenSize;

pub const PILLOW_IMAGE: &str = "pillowImage";
pub const PANEL_IMAGE: &str = "menu";
pub const PILLOW_SOUND: &str = "pillowSound";
pub const PILLOW_SCALE: f32 = 0.3;
pub const PANEL_SCALE: f32 = 0.3;
/// Presses with both coordinates below this toggle the panel.
pub const HOTSPOT_SIZE: f32 = 100.0;
pub const PANEL_SLIDE_SECONDS: f32 = 0.3;
pub const PULSE_FACTOR: f32 = 1.2;
pub const PULSE_SECONDS: f32 = 0.1;
const PANEL_START_X: f32 = -500.0;

/// Wheat, `#f5deb3`.
pub fn background_color() -> Color {
    Color::new(0xf5, 0xde, 0xb3, 0xff)
}

/// Whether the side panel is (or is heading) out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

impl PanelState {
    pub fn toggled(self) -> Self {
        match self {
            PanelState::Closed => PanelState::Open,
            PanelState::Open => PanelState::Closed,
        }
    }
}

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PillowState {
    /// Pillow presses since the scene was entered.
    pub clicks: u32,
    pub panel: PanelState,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PillowAction {
    /// A press anywhere on screen.
    PointerDown(Vector2),
    /// A press that hit the pillow.
    PillowPressed,
}

pub fn in_hotspot(pos: Vector2) -> bool {
    pos.x < HOTSPOT_SIZE && pos.y < HOTSPOT_SIZE
}

pub fn reduce_pillow(mut state: PillowState, action: &PillowAction) -> (PillowState, Vec<SceneEffect>) {
    match action {
        PillowAction::PointerDown(pos) if in_hotspot(*pos) => {
            state.panel = state.panel.toggled();
            (state, vec![SceneEffect::SlidePanel(state.panel)])
        }
        PillowAction::PointerDown(_) => (state, Vec::new()),
        PillowAction::PillowPressed => {
            state.clicks += 1;
            (
                state,
                vec![
                    SceneEffect::SetCounterText(state.clicks.to_string()),
                    SceneEffect::ResetPillowScale,
                    SceneEffect::PlayFx {
                        id: PILLOW_SOUND.to_string(),
                    },
                    SceneEffect::PulsePillow,
                ],
            )
        }
    }
}

/// The pillow sprite and the scale it was spawned with.
#[derive(Component, Debug, Clone, Copy)]
pub struct Pillow {
    pub base_scale: Vector2,
}

/// The label showing the click counter.
#[derive(Component, Debug, Clone, Copy)]
pub struct CounterLabel;

/// The sliding side panel and its resting x positions.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct SidePanel {
    pub open_x: f32,
    pub closed_x: f32,
}

impl SidePanel {
    /// `width` is the unscaled panel image width.
    pub fn for_width(width: f32) -> Self {
        Self {
            open_x: width / 2.0 - 200.0,
            closed_x: -width / 2.0,
        }
    }

    pub fn target_x(&self, state: PanelState) -> f32 {
        match state {
            PanelState::Open => self.open_x,
            PanelState::Closed => self.closed_x,
        }
    }
}

pub fn enter_pillow(
    mut commands: Commands,
    screen: Res<ScreenSize>,
    sizes: Res<ImageSizes>,
    mut clear: ResMut<ClearColor>,
) {
    info!("Entering pillow scene");
    commands.insert_resource(PillowState::default());
    clear.0 = background_color();

    let center = screen.center();
    let base_scale = Vector2::new(PILLOW_SCALE, PILLOW_SCALE);
    commands.spawn((
        Sprite::new(PILLOW_IMAGE, sizes.size_of(PILLOW_IMAGE)),
        ScreenPosition { pos: center },
        Scale { scale: base_scale },
        Clickable,
        Pillow { base_scale },
        SceneScoped,
    ));
    commands.spawn((
        DynamicText::new("0", 24.0, Color::BLACK),
        ScreenPosition::new(screen.w as f32 - 100.0, 20.0),
        CounterLabel,
        SceneScoped,
    ));
    // Hotspot hint in the top-left corner.
    for i in 0..3 {
        commands.spawn((
            RectShape::new(30.0, 5.0, Color::BLACK),
            ScreenPosition::new(20.0, 30.0 + 10.0 * i as f32),
            SceneScoped,
        ));
    }
    let panel_size = sizes.size_of(PANEL_IMAGE);
    commands.spawn((
        Sprite::new(PANEL_IMAGE, panel_size),
        ScreenPosition::new(PANEL_START_X, center.y),
        Scale::uniform(PANEL_SCALE),
        ZIndex(1),
        SidePanel::for_width(panel_size.x),
        SceneScoped,
    ));

    commands.spawn((Observer::new(on_pillow_click), SceneScoped));
    commands.spawn((Observer::new(on_pillow_pointer_down), SceneScoped));
}

fn on_pillow_click(
    trigger: On<ClickEvent>,
    pillows: Query<(), With<Pillow>>,
    mut state: ResMut<PillowState>,
    mut effects: MessageWriter<SceneEffect>,
) {
    if !pillows.contains(trigger.event().entity) {
        return;
    }
    let (next, fx) = reduce_pillow(*state, &PillowAction::PillowPressed);
    debug!("Pillow pressed, clicks = {}", next.clicks);
    *state = next;
    effects.write_batch(fx);
}

fn on_pillow_pointer_down(
    trigger: On<PointerDownEvent>,
    mut state: ResMut<PillowState>,
    mut effects: MessageWriter<SceneEffect>,
) {
    let (next, fx) = reduce_pillow(*state, &PillowAction::PointerDown(trigger.event().pos));
    if next.panel != state.panel {
        debug!("Panel {:?} -> {:?}", state.panel, next.panel);
    }
    *state = next;
    effects.write_batch(fx);
}
