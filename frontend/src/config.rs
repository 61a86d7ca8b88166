use std::rc::Rc;

use log::Level;
use serde::Deserialize;
use thiserror::Error;
use yew::prelude::*;

use crate::motion::{Parallax, RevealTransition};

const MOTION_JSON: &str = include_str!("../motion.json");

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid motion config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealPresets {
    pub hero_intro: RevealTransition,
    pub hero_chips: RevealTransition,
    pub expertise: RevealTransition,
    pub work: RevealTransition,
}

impl Default for RevealPresets {
    fn default() -> Self {
        Self {
            hero_intro: RevealTransition::HERO_INTRO,
            hero_chips: RevealTransition::HERO_CHIPS,
            expertise: RevealTransition::EXPERTISE_CARDS,
            work: RevealTransition::CASE_STUDIES,
        }
    }
}

/// Motion settings shared with every section through a context provider.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MotionConfig {
    /// `None` (an explicit `null`) keeps the hero static; a missing key
    /// uses the built-in hero mappings.
    #[serde(default = "default_parallax")]
    pub parallax: Option<Parallax>,
    #[serde(default)]
    pub reveal: RevealPresets,
}

fn default_parallax() -> Option<Parallax> {
    match Parallax::hero() {
        Ok(parallax) => Some(parallax),
        Err(e) => {
            log::error!("built-in hero parallax is invalid: {}", e);
            None
        }
    }
}

impl MotionConfig {
    pub fn parse(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Used when the bundled config is broken: everything still shows up,
    /// the hero just stops reacting to scroll.
    pub fn degraded() -> Self {
        Self {
            parallax: None,
            reveal: RevealPresets::default(),
        }
    }
}

/// Loads the bundled `motion.json`.
pub fn motion() -> MotionConfig {
    match MotionConfig::parse(MOTION_JSON) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}, falling back to static hero", e);
            MotionConfig::degraded()
        }
    }
}

/// Motion config from the nearest `ContextProvider`, or the bundled one.
#[hook]
pub fn use_motion_config() -> Rc<MotionConfig> {
    use_context::<Rc<MotionConfig>>().unwrap_or_else(|| Rc::new(motion()))
}
