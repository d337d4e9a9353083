use std::fmt;
use std::sync::Arc;

/// Non-owning reference to an externally managed scene.
///
/// The host owns scenes and resolves them by name. A `SceneRef` never keeps a
/// scene alive, so a state that outlives its scene resolves to nothing rather
/// than dangling.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SceneRef(Arc<str>);

impl SceneRef {
    /// Reference the scene registered under `name`.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    /// Name the host resolves this reference by.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SceneRef {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for SceneRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The foreground/background scene pairs a view cross-fades between.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SceneSet {
    /// First foreground scene.
    pub foreground0: Option<SceneRef>,
    /// Second foreground scene.
    pub foreground1: Option<SceneRef>,
    /// First background scene.
    pub background0: Option<SceneRef>,
    /// Second background scene.
    pub background1: Option<SceneRef>,
}

impl SceneSet {
    /// Scene set with a single foreground scene.
    #[must_use]
    pub fn foreground(scene: impl Into<SceneRef>) -> Self {
        Self {
            foreground0: Some(scene.into()),
            ..Self::default()
        }
    }

    /// Whether no scene is referenced at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Every referenced scene, foreground first.
    pub fn iter(&self) -> impl Iterator<Item = &SceneRef> {
        [
            &self.foreground0,
            &self.foreground1,
            &self.background0,
            &self.background1,
        ]
        .into_iter()
        .flatten()
    }
}
