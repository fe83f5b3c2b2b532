//! Project directory naming.

use std::path::{Component, Path, PathBuf};

use tracing::debug;
use uuid::Uuid;

use crate::error::FilesystemError;

/// Upper bound on generated-name attempts before giving up.
pub const MAX_NAME_ATTEMPTS: usize = 1000;

/// After this many collisions a short random suffix is appended.
const SUFFIX_AFTER_ATTEMPTS: usize = 50;

const ADJECTIVES: &[&str] = &[
    "amber", "brisk", "calm", "daring", "eager", "fuzzy", "gentle", "hidden", "icy", "jolly",
    "keen", "lucky", "mellow", "nimble", "odd", "proud", "quiet", "rapid", "shiny", "tidy",
    "upbeat", "vivid", "witty", "young", "zesty",
];

const NOUNS: &[&str] = &[
    "anchor", "badger", "comet", "delta", "ember", "falcon", "glacier", "harbor", "island",
    "jungle", "kestrel", "lantern", "meadow", "nebula", "orchid", "pebble", "quartz", "river",
    "summit", "thicket", "umbra", "valley", "willow", "yarrow", "zephyr",
];

/// Generate a random `<adjective>-<noun>` project name.
pub fn generate_project_name() -> String {
    let bytes = Uuid::new_v4().into_bytes();
    let adjective = ADJECTIVES[bytes[0] as usize % ADJECTIVES.len()];
    let noun = NOUNS[bytes[1] as usize % NOUNS.len()];
    format!("{}-{}", adjective, noun)
}

fn short_suffix() -> String {
    Uuid::new_v4().simple().to_string()[..6].to_string()
}

/// Check that a user-supplied name is exactly one normal path component.
pub fn validate_project_name(name: &str) -> Result<(), FilesystemError> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(part)), None) if part == name => Ok(()),
        _ => Err(FilesystemError::InvalidProjectName(name.to_string())),
    }
}

/// Find an unused directory under `base`, drawing candidate names from
/// `generate`.
pub fn unused_project_dir_with<F>(
    base: &Path,
    mut generate: F,
) -> Result<(String, PathBuf), FilesystemError>
where
    F: FnMut() -> String,
{
    for attempt in 0..MAX_NAME_ATTEMPTS {
        let mut name = generate();
        if attempt >= SUFFIX_AFTER_ATTEMPTS {
            name = format!("{}-{}", name, short_suffix());
        }

        let candidate = base.join(&name);
        if !candidate.exists() {
            return Ok((name, candidate));
        }
        debug!("Project name {} already taken", name);
    }

    Err(FilesystemError::NameExhausted {
        base: base.to_path_buf(),
        attempts: MAX_NAME_ATTEMPTS,
    })
}

/// Find an unused, randomly named directory under `base`.
pub fn unused_project_dir(base: &Path) -> Result<(String, PathBuf), FilesystemError> {
    unused_project_dir_with(base, generate_project_name)
}
