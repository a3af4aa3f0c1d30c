/// All game entity types — pure data, no logic.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProduceKind {
    Apple,
    Orange,
    Broccoli,
    Tomato,
}

impl ProduceKind {
    /// The closed set spawning picks from.
    pub const ALL: [ProduceKind; 4] = [
        ProduceKind::Apple,
        ProduceKind::Orange,
        ProduceKind::Broccoli,
        ProduceKind::Tomato,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ProduceKind::Apple => "apple",
            ProduceKind::Orange => "orange",
            ProduceKind::Broccoli => "broccoli",
            ProduceKind::Tomato => "tomato",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Freshness {
    Fresh,
    Spoiled,
}

/// Display hint only; never read by the simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Expression {
    #[default]
    Happy,
    Sad,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    NotStarted,
    Running,
    Paused,
    Ended,
}

// ── Basket ────────────────────────────────────────────────────────────────────

/// The player-controlled catcher.  Only `x` and `expression` change.
#[derive(Clone, Debug, PartialEq)]
pub struct Basket {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub expression: Expression,
}

// ── Falling produce ───────────────────────────────────────────────────────────

/// One piece of produce.  `x`, size, kind and freshness are fixed at spawn;
/// `y` only ever grows.
#[derive(Clone, Debug, PartialEq)]
pub struct FallingItem {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub kind: ProduceKind,
    pub freshness: Freshness,
}

impl FallingItem {
    pub fn is_fresh(&self) -> bool {
        self.freshness == Freshness::Fresh
    }
}

/// Emitted when an item lands inside the basket's catch zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatchEvent {
    pub kind: ProduceKind,
    pub freshness: Freshness,
}

impl From<&FallingItem> for CatchEvent {
    fn from(item: &FallingItem) -> Self {
        CatchEvent {
            kind: item.kind,
            freshness: item.freshness,
        }
    }
}
