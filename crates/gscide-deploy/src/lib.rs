#![warn(missing_docs)]
//! `gscide-deploy` - copies an edited script into a Plutonium installation's
//! folder structure.
//!
//! Each supported game stores loose scripts in a different layout under the
//! Plutonium storage root (`%LOCALAPPDATA%\Plutonium\storage` on a default
//! install): T5 keeps them under `raw/scripts`, the others under `scripts`,
//! each with `mp`/`zm` subfolders per game mode. [`Deployer`] resolves those
//! paths (honoring per-game overrides), creates them when missing, and writes
//! the script text verbatim with the `.gsc` extension enforced.
//!
//! Deployment is unrelated to lint correctness; hosts typically run a lint
//! pass as a courtesy around it. Process *enumeration* stays in the host —
//! this crate only publishes the executable names worth looking for.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The games a script can be deployed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetGame {
    /// Black Ops 2 (Plutonium T6).
    T6,
    /// Black Ops 1 (Plutonium T5).
    T5,
    /// World at War (Plutonium T4).
    T4,
    /// Modern Warfare 3 (Plutonium IW5).
    Iw5,
}

impl TargetGame {
    /// All supported games, in UI order.
    pub const ALL: [TargetGame; 4] = [Self::T6, Self::T5, Self::T4, Self::Iw5];

    /// The game's folder name under the storage root.
    pub fn folder(self) -> &'static str {
        match self {
            Self::T6 => "t6",
            Self::T5 => "t5",
            Self::T4 => "t4",
            Self::Iw5 => "iw5",
        }
    }

    /// T5 stores loose scripts under `raw/scripts`; the others use `scripts`
    /// directly.
    fn scripts_root(self) -> &'static [&'static str] {
        match self {
            Self::T5 => &["raw", "scripts"],
            _ => &["scripts"],
        }
    }

    /// Executable names that indicate this game is currently running.
    ///
    /// Process enumeration is a host concern; these are the names to match
    /// against the host's process list.
    pub fn process_names(self) -> &'static [&'static str] {
        match self {
            Self::T6 => &["plutonium-bootstrapper-win32.exe", "t6mp.exe", "t6zm.exe"],
            Self::T5 => &["plutonium-bootstrapper-win32.exe", "t5mp.exe", "t5zm.exe"],
            Self::T4 => &["plutonium-bootstrapper-win32.exe", "t4mp.exe", "t4zm.exe"],
            Self::Iw5 => &["plutonium-bootstrapper-win32.exe", "iw5mp.exe"],
        }
    }
}

/// Which mode's script folder to target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Multiplayer (`mp`).
    Multiplayer,
    /// Zombies (`zm`).
    Zombies,
    /// The shared parent folder, picked up by both modes.
    Both,
}

impl GameMode {
    fn subfolder(self) -> Option<&'static str> {
        match self {
            Self::Multiplayer => Some("mp"),
            Self::Zombies => Some("zm"),
            Self::Both => None,
        }
    }
}

/// How a script is delivered to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeployMethod {
    /// Write the script into the Plutonium scripts folder (the supported path).
    PlutoniumScripts,
    /// Inject into game memory directly. Refused for Plutonium.
    DirectMemory,
    /// Push over the network to a console. Not implemented.
    Network,
}

/// Deployment errors.
#[derive(Debug, Error)]
pub enum DeployError {
    /// No Plutonium storage root was found and no override applies.
    #[error("Plutonium not found; install Plutonium or set a custom script path")]
    NotInstalled,
    /// Direct memory injection is refused for Plutonium installs.
    #[error("direct memory injection is not supported for Plutonium; use the scripts method")]
    DirectMemoryUnsupported,
    /// Network deployment is not implemented.
    #[error("network deployment to consoles is not implemented")]
    NetworkUnsupported,
    /// Creating the script folder or writing the script failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Resolves script folders and writes scripts into them.
#[derive(Debug, Clone, Default)]
pub struct Deployer {
    root: Option<PathBuf>,
    custom_paths: HashMap<TargetGame, PathBuf>,
}

impl Deployer {
    /// Locate the Plutonium storage root from `%LOCALAPPDATA%`.
    ///
    /// The root is `None` when the environment variable is unset or the
    /// folder does not exist; deployment then requires per-game overrides.
    pub fn discover() -> Self {
        let root = std::env::var_os("LOCALAPPDATA")
            .map(|localappdata| PathBuf::from(localappdata).join("Plutonium").join("storage"))
            .filter(|path| path.is_dir());
        Self {
            root,
            custom_paths: HashMap::new(),
        }
    }

    /// Use an explicit storage root instead of discovery.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
            custom_paths: HashMap::new(),
        }
    }

    /// The storage root currently in use, if any.
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// Set or clear a per-game base-path override.
    ///
    /// An absolute override replaces the storage root for that game; a
    /// relative one is joined under it.
    pub fn set_custom_path(&mut self, game: TargetGame, path: Option<PathBuf>) {
        match path {
            Some(path) => self.custom_paths.insert(game, path),
            None => self.custom_paths.remove(&game),
        };
    }

    /// Install the overrides from a saved [`DeployProfile`].
    pub fn apply_profile(&mut self, profile: &DeployProfile) {
        self.custom_paths = profile.custom_paths.clone();
    }

    fn base_for(&self, game: TargetGame) -> Result<PathBuf, DeployError> {
        match self.custom_paths.get(&game) {
            Some(custom) if custom.is_absolute() => Ok(custom.clone()),
            Some(custom) => match &self.root {
                Some(root) => Ok(root.join(custom)),
                None => Ok(custom.clone()),
            },
            None => self.root.clone().ok_or(DeployError::NotInstalled),
        }
    }

    /// Resolve (and create) the scripts folder for a game and mode.
    pub fn script_dir(&self, game: TargetGame, mode: GameMode) -> Result<PathBuf, DeployError> {
        let mut dir = self.base_for(game)?.join(game.folder());
        for part in game.scripts_root() {
            dir.push(part);
        }
        if let Some(sub) = mode.subfolder() {
            dir.push(sub);
        }
        fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    /// Deploy a script: write `text` under the resolved scripts folder as
    /// `script_name` (the `.gsc` extension is appended when missing) and
    /// return the written path.
    ///
    /// `text` is written verbatim; the host applies its preferred line ending
    /// first (see `Document::text_for_save` in `gscide-core`).
    pub fn deploy(
        &self,
        text: &str,
        game: TargetGame,
        method: DeployMethod,
        mode: GameMode,
        script_name: &str,
    ) -> Result<PathBuf, DeployError> {
        match method {
            DeployMethod::PlutoniumScripts => {}
            DeployMethod::DirectMemory => return Err(DeployError::DirectMemoryUnsupported),
            DeployMethod::Network => return Err(DeployError::NetworkUnsupported),
        }

        let dir = self.script_dir(game, mode)?;
        let extension = format!(".{}", gscide_lang::SCRIPT_EXTENSION);
        let file_name = if script_name.ends_with(&extension) {
            script_name.to_string()
        } else {
            format!("{script_name}{extension}")
        };
        let path = dir.join(file_name);
        fs::write(&path, text)?;
        Ok(path)
    }
}

/// The persisted deployment settings of the IDE, serialized as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployProfile {
    /// The selected target game.
    pub game: TargetGame,
    /// The selected game mode.
    pub mode: GameMode,
    /// The selected deployment method.
    pub method: DeployMethod,
    /// Per-game base-path overrides.
    #[serde(default)]
    pub custom_paths: HashMap<TargetGame, PathBuf>,
    /// Whether as-you-type linting is enabled.
    #[serde(default = "default_live_lint")]
    pub live_lint: bool,
}

fn default_live_lint() -> bool {
    true
}

impl Default for DeployProfile {
    fn default() -> Self {
        Self {
            game: TargetGame::T6,
            mode: GameMode::Multiplayer,
            method: DeployMethod::PlutoniumScripts,
            custom_paths: HashMap::new(),
            live_lint: true,
        }
    }
}

impl DeployProfile {
    /// Serialize the profile for the host's settings store.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Restore a profile saved by [`DeployProfile::to_json`].
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
